//! Signing and verifying keys for the BIP340 signature scheme.

use rand::Rng;
use secp256k1::{
    double_scalar_mul_basepoint_affine, mul_generator_affine, Affine, BaseField, RandomField,
    ScalarField,
};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use sha2::Digest;

use crate::constants::{AUX_TAG, MSG_SIZE, NONCE_TAG, PK_SIZE, SIG_SIZE, SK_SIZE};
use crate::errors::SchnorrError;
use crate::signatures::{challenge, tagged_hash, Signature};

/// A secret signing key for creating BIP340 signatures.
///
/// The signing key is a nonzero scalar in [1, n-1]. The stored scalar is
/// normalized at construction: if d*G has an odd y-coordinate, n - d is kept
/// instead, so the associated public point always has even y and signing
/// never needs to branch on parity again.
///
/// # Example
///
/// ```
/// use bip340::SigningKey;
///
/// let mut rng = rand::rng();
/// let signing_key = SigningKey::random(&mut rng);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SigningKey {
    scalar: ScalarField,
    verifying_key: VerifyingKey,
}

/// A public verifying key for verifying BIP340 signatures.
///
/// The verifying key is the even-y curve point named by a 32-byte x-only
/// encoding, derived from the signing key as d*G.
///
/// # Example
///
/// ```
/// use bip340::SigningKey;
///
/// let mut rng = rand::rng();
/// let signing_key = SigningKey::random(&mut rng);
/// let verifying_key = signing_key.verifying_key();
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VerifyingKey {
    point: Affine,
}

impl SigningKey {
    /// Generates a random signing key using the provided random number
    /// generator, uniformly from [1, n-1].
    ///
    /// # Arguments
    ///
    /// * `rng` - A cryptographically secure random number generator
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let scalar = loop {
            let candidate = ScalarField::random(rng);
            if !candidate.is_zero() {
                break candidate;
            }
        };
        Self::from_nonzero_scalar(scalar)
    }

    /// Parse a signing key from its big-endian 32-byte encoding.
    ///
    /// Fails with [`SchnorrError::InvalidRange`] when the value is zero or
    /// not below the group order.
    pub fn from_bytes(bytes: &[u8; SK_SIZE]) -> Result<Self, SchnorrError> {
        let scalar = ScalarField::from_bytes(bytes).ok_or(SchnorrError::InvalidRange)?;
        if scalar.is_zero() {
            return Err(SchnorrError::InvalidRange);
        }
        Ok(Self::from_nonzero_scalar(scalar))
    }

    /// Serialize the (normalized) secret scalar as big-endian bytes.
    pub fn to_bytes(&self) -> [u8; SK_SIZE] {
        self.scalar.to_bytes()
    }

    /// The public verifying key that corresponds to this signing key.
    pub fn verifying_key(&self) -> VerifyingKey {
        self.verifying_key
    }

    /// Normalize the secret so the public point has even y. The input must
    /// be nonzero.
    fn from_nonzero_scalar(d0: ScalarField) -> Self {
        let point = mul_generator_affine(&d0);
        let (scalar, point) = if point.has_even_y() {
            (d0, point)
        } else {
            (-d0, point.negate())
        };

        SigningKey {
            scalar,
            verifying_key: VerifyingKey { point },
        }
    }

    /// Signs a 32-byte message with the given auxiliary randomness.
    ///
    /// Follows the BIP340 signing algorithm:
    /// 1. Mask the secret with the tagged aux-randomness hash: `t = d XOR H_aux(a)`
    /// 2. Derive the nonce `k = H_nonce(t || P.x || m) mod n`
    /// 3. Compute `R = k*G` and negate `k` if R has odd y
    /// 4. Compute the challenge `e = H_challenge(R.x || P.x || m) mod n`
    /// 5. Return `(R.x, k + e*d)`
    ///
    /// # Arguments
    ///
    /// * `msg` - The 32-byte message (already hashed by the caller)
    /// * `aux_rand` - 32 bytes of auxiliary randomness; fresh randomness
    ///   strengthens the scheme against fault and side-channel attacks, but
    ///   any fixed value still yields a secure deterministic signature
    ///
    /// # Returns
    ///
    /// The signature, or [`SchnorrError::SigningFailure`] in the vanishingly
    /// unlikely case that the derived nonce is zero. That failure is fatal
    /// for this (message, aux) pair; whether to retry with different
    /// randomness is the caller's decision.
    ///
    /// # Example
    ///
    /// ```
    /// use bip340::SigningKey;
    ///
    /// let mut rng = rand::rng();
    /// let signing_key = SigningKey::random(&mut rng);
    /// let message = [0x24u8; 32];
    /// let aux_rand: [u8; 32] = rand::random();
    /// let signature = signing_key.sign(&message, &aux_rand).expect("signing failed");
    /// ```
    pub fn sign(
        &self,
        msg: &[u8; MSG_SIZE],
        aux_rand: &[u8; 32],
    ) -> Result<Signature, SchnorrError> {
        let pk_x = self.verifying_key.point.x;

        // t = d XOR H_aux(aux_rand)
        let mut t = tagged_hash(AUX_TAG).chain_update(aux_rand).finalize();
        for (masked, secret) in t.iter_mut().zip(self.scalar.to_bytes().iter()) {
            *masked ^= secret;
        }

        let rand = tagged_hash(NONCE_TAG)
            .chain_update(t)
            .chain_update(pk_x.to_bytes())
            .chain_update(msg)
            .finalize();

        let k0 = ScalarField::reduce_bytes(&rand.into());
        if k0.is_zero() {
            return Err(SchnorrError::SigningFailure);
        }

        let big_r = mul_generator_affine(&k0);
        let k = if big_r.has_even_y() { k0 } else { -k0 };

        let e = challenge(&big_r.x, &pk_x, msg);
        let s = k + e * self.scalar;

        Ok(Signature { r: big_r.x, s })
    }
}

impl VerifyingKey {
    /// Parse a verifying key from its big-endian x-only encoding.
    ///
    /// Fails with [`SchnorrError::InvalidPublicKey`] when the x value is not
    /// below the field modulus or no curve point has that x-coordinate.
    pub fn from_bytes(bytes: &[u8; PK_SIZE]) -> Result<Self, SchnorrError> {
        let x = BaseField::from_bytes(bytes).ok_or(SchnorrError::InvalidPublicKey)?;
        let point = Affine::lift_x(&x).ok_or(SchnorrError::InvalidPublicKey)?;
        Ok(VerifyingKey { point })
    }

    /// Serialize as the 32-byte x-only encoding.
    pub fn to_bytes(&self) -> [u8; PK_SIZE] {
        self.point.x.to_bytes()
    }

    /// The even-y curve point this key names.
    pub fn as_affine(&self) -> &Affine {
        &self.point
    }

    /// Verifies a signature on a 32-byte message.
    ///
    /// Recomputes the challenge `e = H(r || P.x || m) mod n` and checks the
    /// verification equation via [`Self::verify_components`]. Returns `true`
    /// only for a valid signature; adversarial inputs yield `false`, never a
    /// panic.
    ///
    /// # Example
    ///
    /// ```
    /// use bip340::SigningKey;
    ///
    /// let mut rng = rand::rng();
    /// let signing_key = SigningKey::random(&mut rng);
    /// let verifying_key = signing_key.verifying_key();
    /// let message = [0x24u8; 32];
    /// let aux_rand: [u8; 32] = rand::random();
    ///
    /// let signature = signing_key.sign(&message, &aux_rand).expect("signing failed");
    /// assert!(verifying_key.verify(&message, &signature));
    /// ```
    pub fn verify(&self, msg: &[u8; MSG_SIZE], sig: &Signature) -> bool {
        let e = challenge(&sig.r, &self.point.x, msg);
        self.verify_components(&sig.r, &sig.s, &e).unwrap_or(false)
    }

    /// The verification equation over already-validated components:
    /// `R = s*G + (-e)*P` must be a non-identity point with even y whose
    /// x-coordinate equals `r`.
    ///
    /// This is the predicate a caller holding canonical field and scalar
    /// values (rather than byte encodings) evaluates; `r`, `s`, and `e` are
    /// canonical by construction of their types, so no further range checks
    /// are needed here.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` when the equation holds
    /// - `Ok(false)` when R has odd y or its x-coordinate differs from `r`
    /// - `Err(SchnorrError::PointAtInfinity)` when R is the identity
    pub fn verify_components(
        &self,
        r: &BaseField,
        s: &ScalarField,
        e: &ScalarField,
    ) -> Result<bool, SchnorrError> {
        let big_r = double_scalar_mul_basepoint_affine(s, &-*e, &self.point);

        if big_r.is_infinity() {
            return Err(SchnorrError::PointAtInfinity);
        }

        Ok(big_r.has_even_y() && big_r.x == *r)
    }
}

impl From<&SigningKey> for VerifyingKey {
    /// Converts a reference to a signing key into a verifying key.
    ///
    /// This is equivalent to calling `signing_key.verifying_key()`.
    fn from(sk: &SigningKey) -> Self {
        sk.verifying_key()
    }
}

/// Byte-level BIP340 verification.
///
/// Decodes the x-only public key and the 64-byte signature, then runs the
/// verification equation. Every decode failure (x or r not below the field
/// modulus, s not below the group order, no curve point at x) yields
/// `false`; malformed input never raises.
pub fn verify_raw(
    public_key: &[u8; PK_SIZE],
    msg: &[u8; MSG_SIZE],
    signature: &[u8; SIG_SIZE],
) -> bool {
    match (
        VerifyingKey::from_bytes(public_key),
        Signature::from_bytes(signature),
    ) {
        (Ok(vk), Ok(sig)) => vk.verify(msg, &sig),
        _ => false,
    }
}

impl Serialize for SigningKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.scalar.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SigningKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let scalar = ScalarField::deserialize(deserializer)?;
        if scalar.is_zero() {
            return Err(de::Error::custom("signing key must be nonzero"));
        }
        Ok(SigningKey::from_nonzero_scalar(scalar))
    }
}

impl Serialize for VerifyingKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.point.x.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for VerifyingKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let x = BaseField::deserialize(deserializer)?;
        let point =
            Affine::lift_x(&x).ok_or_else(|| de::Error::custom("x is not on the curve"))?;
        Ok(VerifyingKey { point })
    }
}
