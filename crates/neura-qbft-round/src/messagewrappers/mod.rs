// crates/neura-qbft-round/src/messagewrappers/mod.rs

pub mod bft_message;
pub mod commit;
pub mod prepare;
pub mod proposal;
pub mod round_change;

// Re-export
pub use bft_message::BftMessage;
pub use commit::Commit;
pub use prepare::Prepare;
pub use proposal::Proposal;
pub use round_change::RoundChange;
