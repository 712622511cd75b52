use crate::messagewrappers::bft_message::BftMessage;
use crate::payload::CommitPayload;
use crate::types::SignedData;
use alloy_primitives::{Signature, B256 as Hash};
use std::ops::Deref;

/// Represents a QBFT Commit message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Commit {
    inner: BftMessage<CommitPayload>,
}

impl Deref for Commit {
    type Target = BftMessage<CommitPayload>;
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Commit {
    pub fn new(signed_payload: SignedData<CommitPayload>) -> Self {
        Self { inner: BftMessage::new(signed_payload) }
    }

    pub fn digest(&self) -> Hash {
        self.payload().digest
    }

    pub fn commit_seal(&self) -> Signature {
        self.payload().commit_seal.0
    }
}
