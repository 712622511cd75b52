use alloy_primitives::{Bytes, B512};
use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;

/// A connection to a remote peer, owned by the networking layer.
pub trait PeerConnection: Send + Sync {
    /// The peer's node id (its uncompressed public key without the tag byte).
    fn peer_id(&self) -> B512;

    fn remote_address(&self) -> Option<SocketAddr>;
}

impl fmt::Debug for dyn PeerConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PeerConnection")
            .field("peer_id", &self.peer_id())
            .field("remote_address", &self.remote_address())
            .finish()
    }
}

/// Raw message body as received from the wire: a code from
/// [`qbft_v1`](crate::messagedata::qbft_v1) and the still-encoded payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageData {
    pub code: u8,
    pub data: Bytes,
}

impl MessageData {
    pub fn new(code: u8, data: Bytes) -> Self {
        Self { code, data }
    }
}

/// A message together with the connection it arrived on.
#[derive(Debug, Clone)]
pub struct Message {
    data: MessageData,
    connection: Arc<dyn PeerConnection>,
}

impl Message {
    pub fn new(data: MessageData, connection: Arc<dyn PeerConnection>) -> Self {
        Self { data, connection }
    }

    pub fn data(&self) -> &MessageData {
        &self.data
    }

    pub fn connection(&self) -> &Arc<dyn PeerConnection> {
        &self.connection
    }
}
