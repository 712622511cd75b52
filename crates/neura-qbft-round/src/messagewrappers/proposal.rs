use crate::messagewrappers::bft_message::BftMessage;
use crate::payload::{PreparePayload, ProposalPayload, RoundChangePayload};
use crate::types::{QbftBlock, SignedData};
use std::ops::Deref;

/// A proposed block for a round, with the round-change and prepare
/// certificates justifying it. Both certificate lists are empty in round 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    inner: BftMessage<ProposalPayload>,
    round_changes: Vec<SignedData<RoundChangePayload>>,
    prepares: Vec<SignedData<PreparePayload>>,
}

impl Deref for Proposal {
    type Target = BftMessage<ProposalPayload>;
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Proposal {
    pub fn new(
        signed_payload: SignedData<ProposalPayload>,
        round_changes: Vec<SignedData<RoundChangePayload>>,
        prepares: Vec<SignedData<PreparePayload>>,
    ) -> Self {
        Self { inner: BftMessage::new(signed_payload), round_changes, prepares }
    }

    pub fn round_changes(&self) -> &[SignedData<RoundChangePayload>] {
        &self.round_changes
    }

    pub fn prepares(&self) -> &[SignedData<PreparePayload>] {
        &self.prepares
    }

    pub fn block(&self) -> &QbftBlock {
        &self.payload().proposed_block
    }
}
