use alloy_primitives::B256 as Hash;
use alloy_rlp::{RlpDecodable, RlpEncodable};

/// Identifies the round and block a validator last prepared. Carried in a
/// RoundChange payload; the matching prepares travel in the RoundChange wrapper.
#[derive(Debug, Clone, PartialEq, Eq, RlpEncodable, RlpDecodable)]
pub struct PreparedRoundMetadata {
    pub prepared_round: u32,
    pub prepared_block_hash: Hash,
}

impl PreparedRoundMetadata {
    pub fn new(prepared_round: u32, prepared_block_hash: Hash) -> Self {
        Self { prepared_round, prepared_block_hash }
    }
}
