// crates/neura-qbft-round/src/payload/mod.rs

pub mod commit_payload;
pub mod message_factory;
pub mod prepare_payload;
pub mod prepared_round_metadata;
pub mod proposal_payload;
pub mod qbft_payload;
pub mod round_change_payload;

pub use commit_payload::CommitPayload;
pub use message_factory::MessageFactory;
pub use prepare_payload::PreparePayload;
pub use prepared_round_metadata::PreparedRoundMetadata;
pub use proposal_payload::ProposalPayload;
pub use qbft_payload::QbftPayload;
pub use round_change_payload::RoundChangePayload;
