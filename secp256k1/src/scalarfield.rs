//! Scalar field of secp256k1: arithmetic mod the group order
//! n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141.
//!
//! Same canonical `[u64; 4]` representation as the base field; the extra
//! `reduce_bytes` entry point folds 256-bit hash outputs into the field the
//! way nonce and challenge derivation require.

use core::fmt::{self, Debug, Display, Formatter};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_bigint::BigUint;
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::group::ScalarBits;
use crate::limbs;

/// Scalar field element, a canonical integer in [0, n)
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct ScalarField {
    /// Canonical value as little-endian u64 limbs
    limbs: [u64; 4],
}

// Group order: n
const MODULUS: [u64; 4] = [
    0xBFD25E8CD0364141,
    0xBAAEDCE6AF48A03B,
    0xFFFFFFFFFFFFFFFE,
    0xFFFFFFFFFFFFFFFF,
];

// Folding constant for fast reduction: c = 2^256 - n (129 bits)
const C: [u64; 3] = [0x402DA1732FC9BEBF, 0x4551231950B75FC4, 0x0000000000000001];

impl ScalarField {
    /// Zero element
    pub const ZERO: Self = ScalarField {
        limbs: [0, 0, 0, 0],
    };

    /// One element
    pub const ONE: Self = ScalarField {
        limbs: [1, 0, 0, 0],
    };

    /// Create a scalar from a u64 value; always canonical.
    #[inline]
    pub const fn from_canonical_u64(val: u64) -> Self {
        ScalarField {
            limbs: [val, 0, 0, 0],
        }
    }

    /// Decode a big-endian 32-byte value, rejecting anything >= n.
    pub fn from_bytes(bytes: &[u8; 32]) -> Option<Self> {
        let limbs = limbs::from_be_bytes(bytes);
        limbs::is_canonical(limbs, MODULUS).then_some(ScalarField { limbs })
    }

    /// Interpret a big-endian 32-byte value mod n. Since 2^256 < 2n, a
    /// single conditional subtraction fully reduces.
    pub fn reduce_bytes(bytes: &[u8; 32]) -> Self {
        ScalarField {
            limbs: limbs::reduce_once(limbs::from_be_bytes(bytes), MODULUS),
        }
    }

    /// Big-endian 32-byte encoding.
    #[inline]
    pub fn to_bytes(&self) -> [u8; 32] {
        limbs::to_be_bytes(self.limbs)
    }

    /// Check if this scalar is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs == [0, 0, 0, 0]
    }

    /// Compute the multiplicative inverse using Fermat's little theorem:
    /// a^{-1} = a^{n-2}. Returns zero for a zero input.
    pub fn inverse(&self) -> Self {
        let exp = limbs::sub_mod(MODULUS, [2, 0, 0, 0], MODULUS);
        ScalarField {
            limbs: limbs::pow_vartime(self.limbs, exp, MODULUS, &C),
        }
    }

    /// Inverse that fails on the additive identity.
    pub fn try_inverse(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(self.inverse())
        }
    }

    /// The group order as a big integer.
    pub fn order() -> BigUint {
        let mut bytes = Vec::with_capacity(32);
        for &limb in &MODULUS {
            bytes.extend_from_slice(&limb.to_le_bytes());
        }
        BigUint::from_bytes_le(&bytes)
    }
}

impl ScalarBits for ScalarField {
    #[inline]
    fn to_u64_limbs(&self) -> [u64; 4] {
        self.limbs
    }
}

// Arithmetic operations
impl Add for ScalarField {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        ScalarField {
            limbs: limbs::add_mod(self.limbs, rhs.limbs, MODULUS),
        }
    }
}

impl AddAssign for ScalarField {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for ScalarField {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        ScalarField {
            limbs: limbs::sub_mod(self.limbs, rhs.limbs, MODULUS),
        }
    }
}

impl SubAssign for ScalarField {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for ScalarField {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        ScalarField {
            limbs: limbs::neg_mod(self.limbs, MODULUS),
        }
    }
}

impl Mul for ScalarField {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        ScalarField {
            limbs: limbs::mul_mod(self.limbs, rhs.limbs, MODULUS, &C),
        }
    }
}

impl MulAssign for ScalarField {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Div for ScalarField {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl DivAssign for ScalarField {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

// Display and Debug
impl Display for ScalarField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{:016x}{:016x}{:016x}{:016x}",
            self.limbs[3], self.limbs[2], self.limbs[1], self.limbs[0]
        )
    }
}

impl Debug for ScalarField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ScalarField({})", self)
    }
}

impl Distribution<ScalarField> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ScalarField {
        loop {
            let bytes: [u8; 32] = rng.random();
            if let Some(scalar) = ScalarField::from_bytes(&bytes) {
                return scalar;
            }
        }
    }
}

impl Serialize for ScalarField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.limbs.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ScalarField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let limbs = <[u64; 4]>::deserialize(deserializer)?;
        if !limbs::is_canonical(limbs, MODULUS) {
            return Err(de::Error::custom("scalar exceeds the group order"));
        }
        Ok(ScalarField { limbs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RandomField;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn to_biguint(a: &ScalarField) -> BigUint {
        BigUint::from_bytes_be(&a.to_bytes())
    }

    #[test]
    fn test_zero_one() {
        assert_eq!(ScalarField::ZERO + ScalarField::ZERO, ScalarField::ZERO);
        assert_eq!(ScalarField::ONE * ScalarField::ONE, ScalarField::ONE);
        assert_eq!(ScalarField::ZERO * ScalarField::ONE, ScalarField::ZERO);
    }

    #[test]
    fn test_mul_matches_biguint() {
        let mut rng = StdRng::seed_from_u64(12);
        let order = ScalarField::order();

        for _ in 0..50 {
            let a = ScalarField::random(&mut rng);
            let b = ScalarField::random(&mut rng);
            let expected = (to_biguint(&a) * to_biguint(&b)) % &order;
            assert_eq!(to_biguint(&(a * b)), expected);
        }
    }

    #[test]
    fn test_negation() {
        let a = ScalarField::from_canonical_u64(5);
        assert_eq!(a + (-a), ScalarField::ZERO);
        assert_eq!(-ScalarField::ZERO, ScalarField::ZERO);
    }

    #[test]
    fn test_inverse() {
        let a = ScalarField::from_canonical_u64(5);
        assert_eq!(a * a.inverse(), ScalarField::ONE);
        assert!(ScalarField::ZERO.try_inverse().is_none());
    }

    #[test]
    fn test_reduce_bytes() {
        // n reduces to 0, n + 5 reduces to 5
        let n_bytes = limbs::to_be_bytes(MODULUS);
        assert_eq!(ScalarField::reduce_bytes(&n_bytes), ScalarField::ZERO);

        let n_plus_five = limbs::to_be_bytes({
            let (l0, carry) = MODULUS[0].overflowing_add(5);
            [
                l0,
                MODULUS[1] + carry as u64,
                MODULUS[2],
                MODULUS[3],
            ]
        });
        assert_eq!(
            ScalarField::reduce_bytes(&n_plus_five),
            ScalarField::from_canonical_u64(5)
        );

        // values below n pass through unchanged
        let small = ScalarField::from_canonical_u64(77);
        assert_eq!(ScalarField::reduce_bytes(&small.to_bytes()), small);
    }

    #[test]
    fn test_from_bytes_rejects_order_and_above() {
        let n_bytes = limbs::to_be_bytes(MODULUS);
        assert!(ScalarField::from_bytes(&n_bytes).is_none());
        assert!(ScalarField::from_bytes(&[0xFF; 32]).is_none());

        let n_minus_one = limbs::to_be_bytes(limbs::sub_mod(MODULUS, [1, 0, 0, 0], MODULUS));
        assert!(ScalarField::from_bytes(&n_minus_one).is_some());
    }

    #[test]
    fn test_bytes_round_trip() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..10 {
            let a = ScalarField::random(&mut rng);
            assert_eq!(ScalarField::from_bytes(&a.to_bytes()), Some(a));
        }
    }
}
