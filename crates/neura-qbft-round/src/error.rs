use thiserror::Error;

/// Errors raised while building, signing or inspecting QBFT messages.
///
/// Vote ingestion never surfaces these: a message whose author cannot be
/// recovered is discarded by the round state like any other rejected vote.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QbftError {
    #[error("RLP error: {0}")]
    RlpError(#[from] alloy_rlp::Error),
    #[error("Signing error: {0}")]
    SigningError(String),
    #[error("Recovery error: {0}")]
    RecoveryError(String),
}
