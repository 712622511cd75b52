use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use alloy_primitives::B512;

use crate::sync::{PeerConnection, SynchronizerUpdater};

// --- MockPeerConnection ---
#[derive(Debug, Clone)]
pub struct MockPeerConnection {
    peer_id: B512,
    remote_address: Option<SocketAddr>,
}

impl MockPeerConnection {
    pub fn new(peer_id: B512) -> Self {
        Self { peer_id, remote_address: None }
    }
}

impl PeerConnection for MockPeerConnection {
    fn peer_id(&self) -> B512 {
        self.peer_id
    }

    fn remote_address(&self) -> Option<SocketAddr> {
        self.remote_address
    }
}

// --- MockSynchronizerUpdater ---
#[derive(Default, Clone)]
pub struct MockSynchronizerUpdater {
    updates: Arc<Mutex<Vec<(u64, Arc<dyn PeerConnection>)>>>,
}

impl MockSynchronizerUpdater {
    pub fn new() -> Self {
        Default::default()
    }

    /// Every `(known_block_number, peer)` pair received, in call order.
    pub fn updates(&self) -> Vec<(u64, Arc<dyn PeerConnection>)> {
        self.updates.lock().unwrap().clone()
    }
}

impl SynchronizerUpdater for MockSynchronizerUpdater {
    fn update_peer_chain_state(&self, known_block_number: u64, peer: &Arc<dyn PeerConnection>) {
        log::debug!("MockSynchronizerUpdater: peer {:?} at block {known_block_number}", peer.peer_id());
        self.updates.lock().unwrap().push((known_block_number, Arc::clone(peer)));
    }
}
