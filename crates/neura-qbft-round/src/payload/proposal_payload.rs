use crate::messagedata::qbft_v1;
use crate::payload::qbft_payload::QbftPayload;
use crate::types::{ConsensusRoundIdentifier, QbftBlock};
use alloy_rlp::{RlpDecodable, RlpEncodable};

/// Signed body of a Proposal: the round and the full block offered for it.
#[derive(Debug, Clone, PartialEq, Eq, RlpEncodable, RlpDecodable)]
pub struct ProposalPayload {
    pub round_identifier: ConsensusRoundIdentifier,
    pub proposed_block: QbftBlock,
}

impl ProposalPayload {
    pub fn new(round_identifier: ConsensusRoundIdentifier, proposed_block: QbftBlock) -> Self {
        Self { round_identifier, proposed_block }
    }
}

impl QbftPayload for ProposalPayload {
    fn round_identifier(&self) -> &ConsensusRoundIdentifier {
        &self.round_identifier
    }

    fn message_type(&self) -> u8 {
        qbft_v1::PROPOSAL
    }
}
