use crate::messagewrappers::bft_message::BftMessage;
use crate::payload::PreparePayload;
use crate::types::SignedData;
use alloy_primitives::B256 as Hash;
use std::ops::Deref;

/// Represents a QBFT Prepare message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prepare {
    inner: BftMessage<PreparePayload>,
}

impl Deref for Prepare {
    type Target = BftMessage<PreparePayload>;
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Prepare {
    pub fn new(signed_payload: SignedData<PreparePayload>) -> Self {
        Self { inner: BftMessage::new(signed_payload) }
    }

    /// Hash of the block this Prepare votes for.
    pub fn digest(&self) -> Hash {
        self.payload().digest
    }
}
