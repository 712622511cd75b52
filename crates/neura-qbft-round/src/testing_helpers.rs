// Fixtures shared by unit tests and, with the `test-utils` feature, by downstream crates.

use crate::payload::MessageFactory;
use crate::types::{address_of, ConsensusRoundIdentifier, NodeKey, QbftBlock, QbftBlockHeader, Transaction};
use alloy_primitives::{Address, Bytes, B256};
use std::sync::Arc;

/// A signing key derived from `seed`. Seeds `0` and `1` give the same key.
pub fn deterministic_node_key(seed: u8) -> NodeKey {
    let mut bytes = [0u8; 32];
    bytes[31] = seed.max(1);
    bytes[0] = 0x01;
    NodeKey::from_bytes(&bytes.into()).expect("seed produces a valid scalar")
}

pub fn address_from_key(key: &NodeKey) -> Address {
    address_of(key.verifying_key())
}

/// Message factory for the validator identified by `seed`.
pub fn message_factory(seed: u8) -> MessageFactory {
    MessageFactory::new(Arc::new(deterministic_node_key(seed)))
}

pub fn test_header(number: u64, timestamp: u64) -> QbftBlockHeader {
    QbftBlockHeader::new(
        B256::from([0x11; 32]),
        Address::from([0x42; 20]),
        number,
        timestamp,
        30_000_000,
        Bytes::from_static(&[0u8; 32]),
    )
}

/// A block for the height of `round`. Different `timestamp`s give different hashes.
pub fn test_block(round: &ConsensusRoundIdentifier, timestamp: u64) -> QbftBlock {
    QbftBlock::new(
        test_header(round.sequence_number, timestamp),
        vec![Transaction { rlp: Bytes::from_static(&[0xc0]) }],
    )
}
