//! Per-round vote tracking for QBFT consensus.
//!
//! A [`RoundState`] collects the Proposal, Prepare and Commit votes of one
//! (height, round) pair and reports when the round is prepared or committed.
//! The [`sync`] module turns messages for future heights into peer height
//! estimates for chain sync.

pub mod error;
pub mod messagedata;
pub mod messagewrappers;
pub mod payload;
pub mod statemachine;
pub mod sync;
pub mod types;
pub mod validation;

#[cfg(any(test, feature = "test-utils"))]
pub mod mocks;
#[cfg(any(test, feature = "test-utils"))]
pub mod testing_helpers;

pub use error::QbftError;
pub use messagewrappers::{Commit, Prepare, Proposal, RoundChange};
pub use payload::MessageFactory;
pub use statemachine::{PreparedCertificate, RoundState};
pub use sync::{FutureMessageHandler, FutureMessageSynchronizerHandler, SynchronizerUpdater};
pub use types::{ConsensusRoundIdentifier, NodeKey, QbftBlock, QbftConfig, QuorumRule, SignedData};
pub use validation::{MessageValidator, SignedMessageValidator, ValidatorSetView};
