use crate::messagedata::qbft_v1;
use crate::payload::prepared_round_metadata::PreparedRoundMetadata;
use crate::payload::qbft_payload::QbftPayload;
use crate::types::ConsensusRoundIdentifier;
use alloy_rlp::{RlpDecodable, RlpEncodable};

/// Signed body of a RoundChange.
#[derive(Debug, Clone, PartialEq, Eq, RlpEncodable, RlpDecodable)]
#[rlp(trailing)]
pub struct RoundChangePayload {
    /// The round this message asks to move to.
    pub round_identifier: ConsensusRoundIdentifier,
    /// Present when the sender prepared a block in an earlier round.
    pub prepared_round_metadata: Option<PreparedRoundMetadata>,
}

impl RoundChangePayload {
    pub fn new(
        round_identifier: ConsensusRoundIdentifier,
        prepared_round_metadata: Option<PreparedRoundMetadata>,
    ) -> Self {
        Self { round_identifier, prepared_round_metadata }
    }
}

impl QbftPayload for RoundChangePayload {
    fn round_identifier(&self) -> &ConsensusRoundIdentifier {
        &self.round_identifier
    }

    fn message_type(&self) -> u8 {
        qbft_v1::ROUND_CHANGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::B256;
    use alloy_rlp::Decodable;

    #[test]
    fn metadata_is_optional_on_the_wire() {
        let without = RoundChangePayload::new(ConsensusRoundIdentifier::new(5, 1), None);
        let with = RoundChangePayload::new(
            ConsensusRoundIdentifier::new(5, 1),
            Some(PreparedRoundMetadata::new(0, B256::from([0xdd; 32]))),
        );

        for payload in [without, with] {
            let encoded = alloy_rlp::encode(&payload);
            let decoded = RoundChangePayload::decode(&mut encoded.as_slice()).unwrap();
            assert_eq!(decoded, payload);
        }
    }
}
