use crate::error::QbftError;
use crate::payload::QbftPayload;
use crate::types::{ConsensusRoundIdentifier, SignedData};
use alloy_primitives::Address;

/// Generic BFT message wrapper around a signed payload of type `P`.
///
/// The author is not stored: it is recovered from the signature on demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BftMessage<P> {
    signed_payload: SignedData<P>,
}

impl<P: QbftPayload> BftMessage<P> {
    pub fn new(signed_payload: SignedData<P>) -> Self {
        Self { signed_payload }
    }

    pub fn author(&self) -> Result<Address, QbftError> {
        self.signed_payload.recover_author()
    }

    pub fn payload(&self) -> &P {
        self.signed_payload.payload()
    }

    pub fn signed_payload(&self) -> &SignedData<P> {
        &self.signed_payload
    }

    pub fn round_identifier(&self) -> &ConsensusRoundIdentifier {
        self.payload().round_identifier()
    }

    pub fn message_type(&self) -> u8 {
        self.payload().message_type()
    }
}
