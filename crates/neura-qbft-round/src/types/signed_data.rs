use alloy_primitives::{keccak256, Address, Signature, B256 as Hash, U256};
use alloy_rlp::{Decodable, Encodable, Header};
use k256::ecdsa::{RecoveryId, Signature as K256Signature, VerifyingKey};

use crate::error::QbftError;
use crate::types::{NodeKey, RlpSignature};

/// A payload together with its author's recoverable signature over
/// `keccak256(rlp(payload))`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignedData<T> {
    payload: T,
    signature: RlpSignature,
}

impl<T: Encodable> SignedData<T> {
    pub fn new(payload: T, signature: RlpSignature) -> Self {
        Self { payload, signature }
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn signature(&self) -> &RlpSignature {
        &self.signature
    }

    pub fn payload_hash(&self) -> Hash {
        keccak256(alloy_rlp::encode(&self.payload))
    }

    pub fn sign(payload: T, node_key: &NodeKey) -> Result<Self, QbftError> {
        let payload_hash = keccak256(alloy_rlp::encode(&payload));
        let signature = sign_prehash(node_key, payload_hash)?;
        Ok(Self { payload, signature: RlpSignature(signature) })
    }

    pub fn recover_author(&self) -> Result<Address, QbftError> {
        recover_address(&self.signature.0, self.payload_hash())
    }
}

/// Signs a 32-byte prehash with the node key, producing a recoverable signature.
pub fn sign_prehash(node_key: &NodeKey, prehash: Hash) -> Result<Signature, QbftError> {
    let (sig, recovery_id) = node_key
        .sign_prehash_recoverable(prehash.as_slice())
        .map_err(|e| QbftError::SigningError(e.to_string()))?;
    let r = U256::from_be_slice(&sig.r().to_bytes());
    let s = U256::from_be_slice(&sig.s().to_bytes());
    Ok(Signature::new(r, s, recovery_id.is_y_odd()))
}

/// Recovers the address that produced `signature` over `prehash`.
pub fn recover_address(signature: &Signature, prehash: Hash) -> Result<Address, QbftError> {
    let r: [u8; 32] = signature.r().to_be_bytes();
    let s: [u8; 32] = signature.s().to_be_bytes();
    let sig = K256Signature::from_scalars(r, s)
        .map_err(|e| QbftError::RecoveryError(format!("malformed signature scalars: {e}")))?;
    let recovery_id = RecoveryId::new(signature.v(), false);

    let verifying_key = VerifyingKey::recover_from_prehash(prehash.as_slice(), &sig, recovery_id)
        .map_err(|e| QbftError::RecoveryError(format!("public key recovery failed: {e}")))?;
    Ok(address_of(&verifying_key))
}

/// Ethereum-style address of a secp256k1 public key.
pub fn address_of(verifying_key: &VerifyingKey) -> Address {
    let encoded_point = verifying_key.to_encoded_point(false);
    // Skip the 0x04 uncompressed-point tag.
    let hashed = keccak256(&encoded_point.as_bytes()[1..]);
    Address::from_slice(&hashed[12..])
}

impl<T: Encodable> Encodable for SignedData<T> {
    fn encode(&self, out: &mut dyn alloy_rlp::BufMut) {
        let payload_length = self.payload.length() + self.signature.length();
        Header { list: true, payload_length }.encode(out);
        self.payload.encode(out);
        self.signature.encode(out);
    }

    fn length(&self) -> usize {
        let payload_length = self.payload.length() + self.signature.length();
        Header { list: true, payload_length }.length() + payload_length
    }
}

impl<T: Decodable> Decodable for SignedData<T> {
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        let header = Header::decode(buf)?;
        if !header.list {
            return Err(alloy_rlp::Error::Custom("SignedData RLP must be a list"));
        }
        let remaining_before = buf.len();
        let payload = T::decode(buf)?;
        let signature = RlpSignature::decode(buf)?;

        if remaining_before - buf.len() != header.payload_length {
            return Err(alloy_rlp::Error::UnexpectedLength);
        }
        Ok(Self { payload, signature })
    }
}
