use crate::messagewrappers::bft_message::BftMessage;
use crate::payload::{PreparePayload, PreparedRoundMetadata, RoundChangePayload};
use crate::types::{QbftBlock, SignedData};
use std::ops::Deref;

/// A request to move to a new round, optionally carrying the block and
/// prepares that the sender prepared earlier.
///
/// Consistency between the metadata, the block and the prepares is the
/// concern of whoever validates round changes; construction does not check it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundChange {
    inner: BftMessage<RoundChangePayload>,
    prepared_block: Option<QbftBlock>,
    prepares: Vec<SignedData<PreparePayload>>,
}

impl Deref for RoundChange {
    type Target = BftMessage<RoundChangePayload>;
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl RoundChange {
    pub fn new(
        signed_payload: SignedData<RoundChangePayload>,
        prepared_block: Option<QbftBlock>,
        prepares: Vec<SignedData<PreparePayload>>,
    ) -> Self {
        Self { inner: BftMessage::new(signed_payload), prepared_block, prepares }
    }

    pub fn prepared_round_metadata(&self) -> Option<&PreparedRoundMetadata> {
        self.payload().prepared_round_metadata.as_ref()
    }

    pub fn prepared_block(&self) -> Option<&QbftBlock> {
        self.prepared_block.as_ref()
    }

    pub fn prepares(&self) -> &[SignedData<PreparePayload>] {
        &self.prepares
    }

    pub fn prepared_round(&self) -> Option<u32> {
        self.prepared_round_metadata().map(|metadata| metadata.prepared_round)
    }
}
