use crate::payload::{PreparePayload, PreparedRoundMetadata};
use crate::types::{ConsensusRoundIdentifier, QbftBlock, SignedData};

/// Proof that a block gathered a quorum of Prepare votes in a round.
///
/// Built fresh from a [`RoundState`](crate::statemachine::RoundState) on every
/// request, so holding one never aliases the live vote maps. The prepares are
/// in the order their authors were first accepted, one per author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedCertificate {
    round_identifier: ConsensusRoundIdentifier,
    block: QbftBlock,
    prepares: Vec<SignedData<PreparePayload>>,
}

impl PreparedCertificate {
    pub fn new(
        round_identifier: ConsensusRoundIdentifier,
        block: QbftBlock,
        prepares: Vec<SignedData<PreparePayload>>,
    ) -> Self {
        Self { round_identifier, block, prepares }
    }

    pub fn round_identifier(&self) -> &ConsensusRoundIdentifier {
        &self.round_identifier
    }

    /// The round number in which the block was prepared.
    pub fn round(&self) -> u32 {
        self.round_identifier.round_number
    }

    pub fn block(&self) -> &QbftBlock {
        &self.block
    }

    pub fn prepares(&self) -> &[SignedData<PreparePayload>] {
        &self.prepares
    }

    /// The metadata a RoundChange payload carries to reference this certificate.
    pub fn prepared_round_metadata(&self) -> PreparedRoundMetadata {
        PreparedRoundMetadata::new(self.round(), self.block.hash())
    }
}
