//! Constants used in the BIP340 signature scheme implementation.

/// Size of a serialized secret signing key in bytes.
///
/// A signing key is a scalar in [1, n-1], requiring 32 bytes when
/// serialized big-endian.
pub const SK_SIZE: usize = 32;

/// Size of a serialized public verifying key in bytes.
///
/// A verifying key is x-only: the 32-byte big-endian x-coordinate of the
/// even-y curve point.
pub const PK_SIZE: usize = 32;

/// Size of a message in bytes.
///
/// BIP340 signs a 32-byte value; hashing the actual payload down to it is
/// the caller's responsibility.
pub const MSG_SIZE: usize = 32;

/// Size of a serialized signature in bytes.
///
/// A signature consists of:
/// - The x-coordinate r of the nonce point (32 bytes)
/// - The response scalar s (32 bytes)
/// Total: 64 bytes
pub const SIG_SIZE: usize = 64;

/// Tag for the auxiliary-randomness hash.
pub(crate) const AUX_TAG: &[u8] = b"BIP0340/aux";

/// Tag for the nonce-derivation hash.
pub(crate) const NONCE_TAG: &[u8] = b"BIP0340/nonce";

/// Tag for the challenge hash.
pub(crate) const CHALLENGE_TAG: &[u8] = b"BIP0340/challenge";
