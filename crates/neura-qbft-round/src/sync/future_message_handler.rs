use crate::messagedata::qbft_v1;
use crate::sync::{Message, SynchronizerUpdater};
use std::sync::Arc;

/// Receives consensus messages addressed to a height above the local chain head.
pub trait FutureMessageHandler: Send + Sync {
    fn handle_future_message(&self, future_sequence: u64, message: &Message);
}

/// Treats a future message as evidence about its sender's chain: a peer voting
/// on height `n` must already hold block `n - 1`.
pub struct FutureMessageSynchronizerHandler {
    synchronizer_updater: Arc<dyn SynchronizerUpdater>,
}

impl FutureMessageSynchronizerHandler {
    pub fn new(synchronizer_updater: Arc<dyn SynchronizerUpdater>) -> Self {
        Self { synchronizer_updater }
    }
}

impl FutureMessageHandler for FutureMessageSynchronizerHandler {
    fn handle_future_message(&self, future_sequence: u64, message: &Message) {
        let known_block_number = future_sequence.saturating_sub(1);
        log::debug!(
            "Future {} for height {future_sequence}; peer {:?} holds at least block {known_block_number}",
            qbft_v1::message_name(message.data().code),
            message.connection().peer_id()
        );
        self.synchronizer_updater.update_peer_chain_state(known_block_number, message.connection());
    }
}
