use alloy_primitives::{keccak256, Address, Bytes, B256 as Hash};
use alloy_rlp::{RlpDecodable, RlpEncodable};

/// Opaque transaction bytes. Block execution lives outside the round engine.
#[derive(Debug, Clone, PartialEq, Eq, RlpEncodable, RlpDecodable)]
pub struct Transaction {
    pub rlp: Bytes,
}

/// The parts of a block header the round engine and its validators look at.
/// The block hash is keccak256 over the RLP encoding of this struct.
#[derive(Debug, Clone, PartialEq, Eq, RlpEncodable, RlpDecodable)]
pub struct QbftBlockHeader {
    pub parent_hash: Hash,
    pub beneficiary: Address,
    pub number: u64,
    pub timestamp: u64,
    pub gas_limit: u64,
    pub extra_data: Bytes,
}

impl QbftBlockHeader {
    pub fn new(
        parent_hash: Hash,
        beneficiary: Address,
        number: u64,
        timestamp: u64,
        gas_limit: u64,
        extra_data: Bytes,
    ) -> Self {
        Self { parent_hash, beneficiary, number, timestamp, gas_limit, extra_data }
    }

    pub fn hash(&self) -> Hash {
        keccak256(alloy_rlp::encode(self))
    }
}

/// A block proposed for a consensus round.
#[derive(Debug, Clone, PartialEq, Eq, RlpEncodable, RlpDecodable)]
pub struct QbftBlock {
    pub header: QbftBlockHeader,
    pub transactions: Vec<Transaction>,
}

impl QbftBlock {
    pub fn new(header: QbftBlockHeader, transactions: Vec<Transaction>) -> Self {
        Self { header, transactions }
    }

    pub fn hash(&self) -> Hash {
        self.header.hash()
    }

    pub fn number(&self) -> u64 {
        self.header.number
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
