// crates/neura-qbft-round/src/validation/mod.rs

pub mod message_validator;
pub mod signed_message_validator;

// Re-export
pub use message_validator::MessageValidator;
pub use signed_message_validator::{SignedMessageValidator, ValidatorSetView};
