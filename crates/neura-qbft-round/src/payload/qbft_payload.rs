use crate::types::ConsensusRoundIdentifier;
use alloy_rlp::{Decodable, Encodable};

/// Trait for QBFT message payloads, the part of a message its author signs.
pub trait QbftPayload: Encodable + Decodable + Clone + std::fmt::Debug + Send + Sync {
    /// Returns the consensus round identifier (height and round) this payload pertains to.
    fn round_identifier(&self) -> &ConsensusRoundIdentifier;

    /// Returns the QBFT message type code, see [`crate::messagedata::qbft_v1`].
    fn message_type(&self) -> u8;
}
