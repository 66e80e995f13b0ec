//! Signature type, tagged hashing, and challenge derivation.

use secp256k1::{BaseField, ScalarField};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::constants::{CHALLENGE_TAG, MSG_SIZE, SIG_SIZE};
use crate::errors::SchnorrError;

/// A BIP340 signature consisting of a field element and a scalar.
///
/// The signature is a pair `(r, s)` where:
/// - `r` is the x-coordinate of the nonce point R = k*G (the commitment)
/// - `s` is the response scalar s = k + e * d
///
/// # Structure
///
/// The signature satisfies the verification equation: `s*G - e*P` is a
/// point with even y whose x-coordinate equals `r`, where
/// `e = H(r || P.x || msg)` is the challenge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// The x-coordinate of the nonce point R = k*G
    pub r: BaseField,
    /// The response scalar s = k + e * d
    pub s: ScalarField,
}

impl Signature {
    /// Serialize as 64 bytes: r(32) || s(32), big-endian.
    pub fn to_bytes(&self) -> [u8; SIG_SIZE] {
        let mut ret = [0u8; SIG_SIZE];
        let (r_bytes, s_bytes) = ret.split_at_mut(SIG_SIZE / 2);
        r_bytes.copy_from_slice(&self.r.to_bytes());
        s_bytes.copy_from_slice(&self.s.to_bytes());
        ret
    }

    /// Decode a 64-byte signature.
    ///
    /// Fails with [`SchnorrError::InvalidRange`] when r >= p or s >= n,
    /// before any curve arithmetic takes place.
    pub fn from_bytes(bytes: &[u8; SIG_SIZE]) -> Result<Self, SchnorrError> {
        let mut r_bytes = [0u8; 32];
        let mut s_bytes = [0u8; 32];
        r_bytes.copy_from_slice(&bytes[..32]);
        s_bytes.copy_from_slice(&bytes[32..]);

        let r = BaseField::from_bytes(&r_bytes).ok_or(SchnorrError::InvalidRange)?;
        let s = ScalarField::from_bytes(&s_bytes).ok_or(SchnorrError::InvalidRange)?;

        Ok(Signature { r, s })
    }
}

/// Midstate for the BIP340 tagged hash: SHA-256 with `H(tag) || H(tag)`
/// already absorbed, ready for the message-specific data.
pub fn tagged_hash(tag: &[u8]) -> Sha256 {
    let tag_hash = Sha256::digest(tag);
    let mut digest = Sha256::new();
    digest.update(tag_hash);
    digest.update(tag_hash);
    digest
}

/// Computes the BIP340 challenge scalar.
///
/// The challenge is `int(taggedHash("BIP0340/challenge", r || pk_x || msg))
/// mod n`, where `r` is the signature's commitment x-coordinate and `pk_x`
/// the x-only public key. Exposed so that callers operating on typed field
/// and scalar values (rather than byte encodings) can recompute `e` and feed
/// it to [`VerifyingKey::verify_components`](crate::VerifyingKey::verify_components).
pub fn challenge(r: &BaseField, pk_x: &BaseField, msg: &[u8; MSG_SIZE]) -> ScalarField {
    let digest = tagged_hash(CHALLENGE_TAG)
        .chain_update(r.to_bytes())
        .chain_update(pk_x.to_bytes())
        .chain_update(msg)
        .finalize();

    ScalarField::reduce_bytes(&digest.into())
}
