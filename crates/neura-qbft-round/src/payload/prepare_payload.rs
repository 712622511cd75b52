use crate::messagedata::qbft_v1;
use crate::payload::qbft_payload::QbftPayload;
use crate::types::ConsensusRoundIdentifier;
use alloy_primitives::B256 as Hash;
use alloy_rlp::{RlpDecodable, RlpEncodable};

/// Signed body of a Prepare vote.
#[derive(Debug, Clone, PartialEq, Eq, Hash, RlpEncodable, RlpDecodable)]
pub struct PreparePayload {
    pub round_identifier: ConsensusRoundIdentifier,
    /// Hash of the proposed block.
    pub digest: Hash,
}

impl PreparePayload {
    pub fn new(round_identifier: ConsensusRoundIdentifier, digest: Hash) -> Self {
        Self { round_identifier, digest }
    }
}

impl QbftPayload for PreparePayload {
    fn round_identifier(&self) -> &ConsensusRoundIdentifier {
        &self.round_identifier
    }

    fn message_type(&self) -> u8 {
        qbft_v1::PREPARE
    }
}
