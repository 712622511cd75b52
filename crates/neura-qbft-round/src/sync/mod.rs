pub mod future_message_handler;
pub mod peer_connection;
pub mod synchronizer_updater;

pub use future_message_handler::{FutureMessageHandler, FutureMessageSynchronizerHandler};
pub use peer_connection::{Message, MessageData, PeerConnection};
pub use synchronizer_updater::SynchronizerUpdater;
