use alloy_primitives::{Signature, U256};
use alloy_rlp::{BufMut, Decodable, Encodable, Error as RlpError, Header};
use std::hash::{Hash, Hasher};

/// A recoverable secp256k1 signature with an RLP encoding of `[v, r, s]`,
/// where `v` is the y-parity as a single `0`/`1` byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RlpSignature(pub Signature);

impl RlpSignature {
    pub fn new(signature: Signature) -> Self {
        Self(signature)
    }

    pub fn into_inner(self) -> Signature {
        self.0
    }

    fn parity_byte(&self) -> u8 {
        u8::from(self.0.v())
    }

    fn rlp_payload_length(&self) -> usize {
        self.parity_byte().length() + self.0.r().length() + self.0.s().length()
    }
}

impl std::ops::Deref for RlpSignature {
    type Target = Signature;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Hash for RlpSignature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.as_bytes().hash(state);
    }
}

impl Encodable for RlpSignature {
    fn encode(&self, out: &mut dyn BufMut) {
        Header { list: true, payload_length: self.rlp_payload_length() }.encode(out);
        self.parity_byte().encode(out);
        self.0.r().encode(out);
        self.0.s().encode(out);
    }

    fn length(&self) -> usize {
        let payload_length = self.rlp_payload_length();
        Header { list: true, payload_length }.length() + payload_length
    }
}

impl Decodable for RlpSignature {
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        let header = Header::decode(buf)?;
        if !header.list {
            return Err(RlpError::Custom("RlpSignature RLP must be a list"));
        }
        let remaining_before = buf.len();

        let parity = match u8::decode(buf)? {
            0 => false,
            1 => true,
            _ => return Err(RlpError::Custom("Invalid parity byte for RlpSignature")),
        };
        let r = U256::decode(buf)?;
        let s = U256::decode(buf)?;

        if remaining_before - buf.len() != header.payload_length {
            return Err(RlpError::UnexpectedLength);
        }
        Ok(Self(Signature::new(r, s, parity)))
    }
}

impl From<Signature> for RlpSignature {
    fn from(sig: Signature) -> Self {
        Self(sig)
    }
}

impl From<RlpSignature> for Signature {
    fn from(rlp_sig: RlpSignature) -> Self {
        rlp_sig.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_rejects_parity_other_than_zero_or_one() {
        let mut bad = Vec::new();
        let payload_length = 2u8.length() + U256::from(1).length() + U256::from(1).length();
        Header { list: true, payload_length }.encode(&mut bad);
        2u8.encode(&mut bad);
        U256::from(1).encode(&mut bad);
        U256::from(1).encode(&mut bad);

        assert!(RlpSignature::decode(&mut bad.as_slice()).is_err());
    }

    #[test]
    fn decoded_signature_keeps_scalars_and_parity() {
        let sig = RlpSignature(Signature::new(U256::from(10), U256::from(20), true));
        let encoded = alloy_rlp::encode(sig);
        let decoded = RlpSignature::decode(&mut encoded.as_slice()).expect("signature decodes");

        assert_eq!(decoded.r(), U256::from(10));
        assert_eq!(decoded.s(), U256::from(20));
        assert!(decoded.v());
    }
}
