//! BIP340 Schnorr signatures over the secp256k1 elliptic curve.
//!
//! This library implements the single-signature BIP340 scheme using:
//! - The secp256k1 curve with x-only, even-y public keys
//! - SHA-256 tagged hashes for auxiliary randomness, nonce derivation, and
//!   the challenge
//! - 32-byte messages (the caller hashes its payload down to 32 bytes)
//!
//! # Overview
//!
//! BIP340 is fully specified so that no two implementations disagree on the
//! validity of a signature. Signing is deterministic given the message and
//! the auxiliary randomness; the published test vectors pin every byte of
//! the outputs. Signatures are 64 bytes (`r || s`), public keys 32 bytes.
//!
//! # Example
//!
//! ```
//! use bip340::SigningKey;
//!
//! // Generate a random signing key
//! let mut rng = rand::rng();
//! let signing_key = SigningKey::random(&mut rng);
//!
//! // Derive the corresponding verifying key
//! let verifying_key = signing_key.verifying_key();
//!
//! // Sign a 32-byte message with fresh auxiliary randomness
//! let message = [0x24u8; 32];
//! let aux_rand: [u8; 32] = rand::random();
//! let signature = signing_key.sign(&message, &aux_rand).expect("signing failed");
//!
//! // Verify the signature
//! assert!(verifying_key.verify(&message, &signature));
//! ```
//!
//! # Security Considerations
//!
//! - Always use a cryptographically secure random number generator (CSRNG)
//!   for key generation and auxiliary randomness
//! - Protect the signing key from unauthorized access
//! - Verification accepts or rejects; it never panics on adversarial bytes

mod constants;
mod errors;
mod keys;
mod signatures;


pub use constants::{MSG_SIZE, PK_SIZE, SIG_SIZE, SK_SIZE};
pub use errors::SchnorrError;
pub use keys::{verify_raw, SigningKey, VerifyingKey};
pub use signatures::{challenge, tagged_hash, Signature};
