use crate::messagedata::qbft_v1;
use crate::payload::qbft_payload::QbftPayload;
use crate::types::{ConsensusRoundIdentifier, RlpSignature};
use alloy_primitives::B256 as Hash;
use alloy_rlp::{RlpDecodable, RlpEncodable};

/// Signed body of a Commit vote.
#[derive(Debug, Clone, PartialEq, Eq, Hash, RlpEncodable, RlpDecodable)]
pub struct CommitPayload {
    pub round_identifier: ConsensusRoundIdentifier,
    /// Hash of the block being committed.
    pub digest: Hash,
    /// The author's signature over `digest`; a quorum of these seals the block.
    pub commit_seal: RlpSignature,
}

impl CommitPayload {
    pub fn new(round_identifier: ConsensusRoundIdentifier, digest: Hash, commit_seal: RlpSignature) -> Self {
        Self { round_identifier, digest, commit_seal }
    }
}

impl QbftPayload for CommitPayload {
    fn round_identifier(&self) -> &ConsensusRoundIdentifier {
        &self.round_identifier
    }

    fn message_type(&self) -> u8 {
        qbft_v1::COMMIT
    }
}
