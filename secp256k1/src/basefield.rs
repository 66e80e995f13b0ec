//! Base field of secp256k1: arithmetic mod p = 2^256 - 2^32 - 977.
//!
//! Elements are held in canonical form (strictly below p) as four
//! little-endian u64 limbs; every constructor validates its input against
//! the modulus, so a `BaseField` value is canonical by construction.

use core::fmt::{self, Debug, Display, Formatter};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_bigint::BigUint;
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::limbs;

/// Base field element, a canonical integer in [0, p)
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct BaseField {
    /// Canonical value as little-endian u64 limbs
    limbs: [u64; 4],
}

// Field modulus: p = 2^256 - 2^32 - 977
const MODULUS: [u64; 4] = [
    0xFFFFFFFEFFFFFC2F,
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFFFFFFFFFF,
];

// Folding constant for fast reduction: c = 2^256 - p = 2^32 + 977
const C: [u64; 1] = [0x1000003D1];

// (p + 1) / 4; p = 3 (mod 4), so a^((p+1)/4) is a square root of a when one exists
const SQRT_EXP: [u64; 4] = [
    0xFFFFFFFFBFFFFF0C,
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFFFFFFFFFF,
    0x3FFFFFFFFFFFFFFF,
];

impl BaseField {
    /// Zero element
    pub const ZERO: Self = BaseField {
        limbs: [0, 0, 0, 0],
    };

    /// One element
    pub const ONE: Self = BaseField {
        limbs: [1, 0, 0, 0],
    };

    /// Create a field element from a u64 value; always canonical.
    #[inline]
    pub const fn from_canonical_u64(val: u64) -> Self {
        BaseField {
            limbs: [val, 0, 0, 0],
        }
    }

    /// Wrap raw little-endian limbs. The caller must supply a canonical value.
    #[inline]
    pub(crate) const fn from_limbs(limbs: [u64; 4]) -> Self {
        BaseField { limbs }
    }

    /// Decode a big-endian 32-byte value, rejecting anything >= p.
    pub fn from_bytes(bytes: &[u8; 32]) -> Option<Self> {
        let limbs = limbs::from_be_bytes(bytes);
        limbs::is_canonical(limbs, MODULUS).then_some(BaseField { limbs })
    }

    /// Big-endian 32-byte encoding.
    #[inline]
    pub fn to_bytes(&self) -> [u8; 32] {
        limbs::to_be_bytes(self.limbs)
    }

    /// Check if this field element is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs == [0, 0, 0, 0]
    }

    /// Whether the canonical value is even. BIP340 normalizes curve points
    /// by the parity of their y-coordinate.
    #[inline]
    pub fn is_even(&self) -> bool {
        self.limbs[0] & 1 == 0
    }

    /// Compute the multiplicative inverse using Fermat's little theorem:
    /// a^{-1} = a^{p-2}. Returns zero for a zero input.
    pub fn inverse(&self) -> Self {
        let exp = limbs::sub_mod(MODULUS, [2, 0, 0, 0], MODULUS);
        BaseField {
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

    /// Square root, if one exists. Since p = 3 (mod 4) the candidate root is
    /// a^((p+1)/4); squaring it back decides whether a is a residue.
    pub fn sqrt(&self) -> Option<Self> {
        let candidate = BaseField {
            limbs: limbs::pow_vartime(self.limbs, SQRT_EXP, MODULUS, &C),
        };
        (candidate * candidate == *self).then_some(candidate)
    }

    /// The field modulus as a big integer.
    pub fn order() -> BigUint {
        let mut bytes = Vec::with_capacity(32);
        for &limb in &MODULUS {
            bytes.extend_from_slice(&limb.to_le_bytes());
        }
        BigUint::from_bytes_le(&bytes)
    }
}

// Arithmetic operations
impl Add for BaseField {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        BaseField {
            limbs: limbs::add_mod(self.limbs, rhs.limbs, MODULUS),
        }
    }
}

impl AddAssign for BaseField {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for BaseField {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        BaseField {
            limbs: limbs::sub_mod(self.limbs, rhs.limbs, MODULUS),
        }
    }
}

impl SubAssign for BaseField {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for BaseField {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        BaseField {
            limbs: limbs::neg_mod(self.limbs, MODULUS),
        }
    }
}

impl Mul for BaseField {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        BaseField {
            limbs: limbs::mul_mod(self.limbs, rhs.limbs, MODULUS, &C),
        }
    }
}

impl MulAssign for BaseField {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Div for BaseField {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl DivAssign for BaseField {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

// Display and Debug
impl Display for BaseField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{:016x}{:016x}{:016x}{:016x}",
            self.limbs[3], self.limbs[2], self.limbs[1], self.limbs[0]
        )
    }
}

impl Debug for BaseField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "BaseField({})", self)
    }
}

impl Distribution<BaseField> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> BaseField {
        loop {
            let bytes: [u8; 32] = rng.random();
            if let Some(element) = BaseField::from_bytes(&bytes) {
                return element;
            }
        }
    }
}

impl Serialize for BaseField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.limbs.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BaseField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let limbs = <[u64; 4]>::deserialize(deserializer)?;
        if !limbs::is_canonical(limbs, MODULUS) {
            return Err(de::Error::custom("base field element exceeds the modulus"));
        }
        Ok(BaseField { limbs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RandomField;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn to_biguint(a: &BaseField) -> BigUint {
        BigUint::from_bytes_be(&a.to_bytes())
    }

    #[test]
    fn test_zero_one() {
        assert_eq!(BaseField::ZERO + BaseField::ZERO, BaseField::ZERO);
        assert_eq!(BaseField::ONE * BaseField::ONE, BaseField::ONE);
        assert_eq!(BaseField::ZERO * BaseField::ONE, BaseField::ZERO);
        assert_eq!(BaseField::ONE + BaseField::ZERO, BaseField::ONE);
    }

    #[test]
    fn test_addition_wraps() {
        // (p - 1) + 2 = 1
        let p_minus_one = -BaseField::ONE;
        let two = BaseField::from_canonical_u64(2);
        assert_eq!(p_minus_one + two, BaseField::ONE);
    }

    #[test]
    fn test_subtraction_wraps() {
        // 3 - 5 = p - 2
        let a = BaseField::from_canonical_u64(3);
        let b = BaseField::from_canonical_u64(5);
        assert_eq!(a - b, -BaseField::from_canonical_u64(2));
    }

    #[test]
    fn test_negation() {
        let a = BaseField::from_canonical_u64(5);
        assert_eq!(a + (-a), BaseField::ZERO);
        assert_eq!(-BaseField::ZERO, BaseField::ZERO);
    }

    #[test]
    fn test_mul_matches_biguint() {
        let mut rng = StdRng::seed_from_u64(7);
        let order = BaseField::order();

        for _ in 0..50 {
            let a = BaseField::random(&mut rng);
            let b = BaseField::random(&mut rng);
            let expected = (to_biguint(&a) * to_biguint(&b)) % &order;
            assert_eq!(to_biguint(&(a * b)), expected);
        }
    }

    #[test]
    fn test_add_sub_match_biguint() {
        let mut rng = StdRng::seed_from_u64(8);
        let order = BaseField::order();

        for _ in 0..50 {
            let a = BaseField::random(&mut rng);
            let b = BaseField::random(&mut rng);
            let sum = (to_biguint(&a) + to_biguint(&b)) % &order;
            let diff = (to_biguint(&a) + &order - to_biguint(&b)) % &order;
            assert_eq!(to_biguint(&(a + b)), sum);
            assert_eq!(to_biguint(&(a - b)), diff);
        }
    }

    #[test]
    fn test_inverse() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..10 {
            let a = BaseField::random(&mut rng);
            if a.is_zero() {
                continue;
            }
            assert_eq!(a * a.inverse(), BaseField::ONE);
        }
        assert!(BaseField::ZERO.try_inverse().is_none());
        assert!(BaseField::ONE.try_inverse().is_some());
    }

    #[test]
    fn test_sqrt_of_square() {
        let mut rng = StdRng::seed_from_u64(10);
        for _ in 0..10 {
            let a = BaseField::random(&mut rng);
            let square = a * a;
            let root = square.sqrt().expect("square must have a root");
            assert!(root == a || root == -a);
        }
    }

    #[test]
    fn test_sqrt_rejects_non_residue() {
        // p = 3 (mod 4), so -1 is a non-residue and -a^2 never has a root
        let a = BaseField::from_canonical_u64(12345);
        assert!((-(a * a)).sqrt().is_none());
    }

    #[test]
    fn test_bytes_round_trip() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..10 {
            let a = BaseField::random(&mut rng);
            assert_eq!(BaseField::from_bytes(&a.to_bytes()), Some(a));
        }
    }

    #[test]
    fn test_from_bytes_rejects_modulus_and_above() {
        let p_bytes = limbs::to_be_bytes(MODULUS);
        assert!(BaseField::from_bytes(&p_bytes).is_none());
        assert!(BaseField::from_bytes(&[0xFF; 32]).is_none());

        // p - 1 is the largest canonical value
        let p_minus_one = limbs::to_be_bytes(limbs::sub_mod(MODULUS, [1, 0, 0, 0], MODULUS));
        assert!(BaseField::from_bytes(&p_minus_one).is_some());
    }

    #[test]
    fn test_parity() {
        assert!(BaseField::ZERO.is_even());
        assert!(!BaseField::ONE.is_even());
        assert!(BaseField::from_canonical_u64(42).is_even());
    }
}
