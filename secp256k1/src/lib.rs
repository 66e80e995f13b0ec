//! secp256k1 group arithmetic for BIP340 Schnorr signatures.
//!
//! This crate provides the base and scalar fields of secp256k1, affine curve
//! points with x-only lifting, and the scalar-multiplication helpers used by
//! signing and verification. Field and group elements are immutable value
//! types held in canonical (fully reduced) form; every fallible constructor
//! validates its input, so a held value is canonical by construction.

mod affine;
mod basefield;
mod group;
mod limbs;
mod mul;
mod random;
mod scalarfield;

pub use affine::Affine;
pub use basefield::BaseField;
pub use group::{Group, ScalarBits};
pub use mul::{double_scalar_mul_basepoint_affine, mul_generator_affine};
pub use random::RandomField;
pub use scalarfield::ScalarField;
