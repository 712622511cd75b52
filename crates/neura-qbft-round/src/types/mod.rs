// crates/neura-qbft-round/src/types/mod.rs

pub mod bft_helpers;
pub mod block;
pub mod consensus_round_identifier;
pub mod rlp_signature;
pub mod signed_data;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Node signing key. Validators sign every payload and commit seal with it.
pub type NodeKey = k256::ecdsa::SigningKey;

// Re-export
pub use block::{QbftBlock, QbftBlockHeader, Transaction};
pub use consensus_round_identifier::ConsensusRoundIdentifier;
pub use rlp_signature::RlpSignature;
pub use signed_data::{address_of, recover_address, sign_prehash, SignedData};

/// How the per-round vote threshold is derived from the validator count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum QuorumRule {
    /// `ceil(2n / 3)`.
    #[default]
    TwoThirdsCeil,
    /// `2f + 1` where `f = (n - 1) / 3`.
    TwoFPlusOne,
}

/// Configuration shared by the components that build round states.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QbftConfig {
    /// Rule used to turn a validator count into a round's required message count.
    pub quorum_rule: QuorumRule,
}

impl QbftConfig {
    pub fn new(quorum_rule: QuorumRule) -> Self {
        Self { quorum_rule }
    }

    /// Number of distinct votes a round needs for each of the Prepare and Commit phases.
    pub fn required_message_count(&self, validator_count: usize) -> usize {
        match self.quorum_rule {
            QuorumRule::TwoThirdsCeil => bft_helpers::calculate_required_validator_quorum(validator_count),
            QuorumRule::TwoFPlusOne => bft_helpers::two_f_plus_one(validator_count),
        }
    }
}
