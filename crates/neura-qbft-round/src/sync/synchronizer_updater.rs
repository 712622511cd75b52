use crate::sync::PeerConnection;
use std::sync::Arc;

/// Chain-sync hook for raising a peer's estimated chain height.
pub trait SynchronizerUpdater: Send + Sync {
    /// Records that `peer` is known to have imported `known_block_number`.
    fn update_peer_chain_state(&self, known_block_number: u64, peer: &Arc<dyn PeerConnection>);
}
