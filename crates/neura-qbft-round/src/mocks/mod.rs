pub mod mock_message_validator;
pub mod mock_sync;
pub mod mock_validator_set;

pub use mock_message_validator::{MockMessageValidator, ValidationCall};
pub use mock_sync::{MockPeerConnection, MockSynchronizerUpdater};
pub use mock_validator_set::MockValidatorSet;
