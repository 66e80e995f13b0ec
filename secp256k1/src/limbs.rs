//! Fixed-width 256-bit arithmetic shared by the base and scalar fields.
//!
//! Values are four little-endian u64 limbs. Both secp256k1 moduli have the
//! shape m = 2^256 - c with c < 2^129, so 512-bit products are reduced by
//! folding the high half back in as `hi * c` instead of Montgomery form.

pub(crate) type Limbs = [u64; 4];

/// Addition with carry propagation.
#[inline]
pub(crate) const fn carrying_add(a: u64, b: u64, carry: bool) -> (u64, bool) {
    let (sum, overflow1) = a.overflowing_add(b);
    let (sum, overflow2) = sum.overflowing_add(carry as u64);
    (sum, overflow1 || overflow2)
}

/// Subtraction with borrow propagation.
#[inline]
pub(crate) const fn borrowing_sub(a: u64, b: u64, borrow: bool) -> (u64, bool) {
    let (diff, overflow1) = a.overflowing_sub(b);
    let (diff, overflow2) = diff.overflowing_sub(borrow as u64);
    (diff, overflow1 || overflow2)
}

/// Whether `a` is a canonical residue, i.e. `a < m`.
#[inline]
pub(crate) const fn is_canonical(a: Limbs, m: Limbs) -> bool {
    let (_, borrow) = a[0].overflowing_sub(m[0]);
    let (_, borrow) = borrowing_sub(a[1], m[1], borrow);
    let (_, borrow) = borrowing_sub(a[2], m[2], borrow);
    let (_, borrow) = borrowing_sub(a[3], m[3], borrow);
    borrow
}

/// Add two canonical values mod m.
#[inline]
pub(crate) const fn add_mod(a: Limbs, b: Limbs, m: Limbs) -> Limbs {
    let (r0, carry) = a[0].overflowing_add(b[0]);
    let (r1, carry) = carrying_add(a[1], b[1], carry);
    let (r2, carry) = carrying_add(a[2], b[2], carry);
    let (r3, carry) = carrying_add(a[3], b[3], carry);

    // Subtract the modulus if we overflowed or the sum is >= m
    let (s0, borrow) = r0.overflowing_sub(m[0]);
    let (s1, borrow) = borrowing_sub(r1, m[1], borrow);
    let (s2, borrow) = borrowing_sub(r2, m[2], borrow);
    let (s3, borrow) = borrowing_sub(r3, m[3], borrow);

    if carry || !borrow {
        [s0, s1, s2, s3]
    } else {
        [r0, r1, r2, r3]
    }
}

/// Subtract two canonical values mod m.
#[inline]
pub(crate) const fn sub_mod(a: Limbs, b: Limbs, m: Limbs) -> Limbs {
    let (r0, borrow) = a[0].overflowing_sub(b[0]);
    let (r1, borrow) = borrowing_sub(a[1], b[1], borrow);
    let (r2, borrow) = borrowing_sub(a[2], b[2], borrow);
    let (r3, borrow) = borrowing_sub(a[3], b[3], borrow);

    // Add the modulus back if we underflowed
    if borrow {
        let (r0, carry) = r0.overflowing_add(m[0]);
        let (r1, carry) = carrying_add(r1, m[1], carry);
        let (r2, carry) = carrying_add(r2, m[2], carry);
        let (r3, _) = carrying_add(r3, m[3], carry);
        [r0, r1, r2, r3]
    } else {
        [r0, r1, r2, r3]
    }
}

/// Negate a canonical value mod m.
#[inline]
pub(crate) const fn neg_mod(a: Limbs, m: Limbs) -> Limbs {
    if a[0] == 0 && a[1] == 0 && a[2] == 0 && a[3] == 0 {
        return [0, 0, 0, 0];
    }
    sub_mod(m, a, m)
}

/// Conditionally subtract m once; the input must be below 2m.
#[inline]
pub(crate) const fn reduce_once(a: Limbs, m: Limbs) -> Limbs {
    let (r0, borrow) = a[0].overflowing_sub(m[0]);
    let (r1, borrow) = borrowing_sub(a[1], m[1], borrow);
    let (r2, borrow) = borrowing_sub(a[2], m[2], borrow);
    let (r3, borrow) = borrowing_sub(a[3], m[3], borrow);

    if borrow {
        a
    } else {
        [r0, r1, r2, r3]
    }
}

/// Schoolbook 4x4 multiply into a 512-bit product.
pub(crate) fn mul_wide(a: Limbs, b: Limbs) -> [u64; 8] {
    let mut t = [0u64; 8];

    for i in 0..4 {
        let mut carry = 0u128;
        for j in 0..4 {
            let product = (a[i] as u128) * (b[j] as u128) + (t[i + j] as u128) + carry;
            t[i + j] = product as u64;
            carry = product >> 64;
        }
        t[i + 4] = carry as u64;
    }

    t
}

/// Multiply a 256-bit value by c. With c < 2^129 the product fits in seven
/// limbs, so the trailing carry chain never runs off the end.
fn mul_by_c(a: Limbs, c: &[u64]) -> [u64; 7] {
    let mut out = [0u64; 7];

    for (i, &ci) in c.iter().enumerate() {
        let mut carry = 0u128;
        for j in 0..4 {
            let product = (a[j] as u128) * (ci as u128) + (out[i + j] as u128) + carry;
            out[i + j] = product as u64;
            carry = product >> 64;
        }

        let mut k = i + 4;
        while carry != 0 {
            let sum = (out[k] as u128) + carry;
            out[k] = sum as u64;
            carry = sum >> 64;
            k += 1;
        }
    }

    out
}

/// Reduce a 512-bit product mod m = 2^256 - c.
///
/// 2^256 = c (mod m), so the high half folds back in as `hi * c`. Each round
/// shrinks the excess by at least 127 bits; the loop settles after a few.
pub(crate) fn reduce_wide(t: [u64; 8], m: Limbs, c: &[u64]) -> Limbs {
    let mut lo = [t[0], t[1], t[2], t[3]];
    let mut hi = [t[4], t[5], t[6], t[7]];

    while hi != [0, 0, 0, 0] {
        let folded = mul_by_c(hi, c);

        let (r0, carry) = lo[0].overflowing_add(folded[0]);
        let (r1, carry) = carrying_add(lo[1], folded[1], carry);
        let (r2, carry) = carrying_add(lo[2], folded[2], carry);
        let (r3, carry) = carrying_add(lo[3], folded[3], carry);
        let (h0, carry) = carrying_add(folded[4], 0, carry);
        let (h1, carry) = carrying_add(folded[5], 0, carry);
        let (h2, _) = carrying_add(folded[6], 0, carry);

        lo = [r0, r1, r2, r3];
        hi = [h0, h1, h2, 0];
    }

    reduce_once(lo, m)
}

/// Modular multiplication of canonical values.
#[inline]
pub(crate) fn mul_mod(a: Limbs, b: Limbs, m: Limbs, c: &[u64]) -> Limbs {
    reduce_wide(mul_wide(a, b), m, c)
}

/// Variable-time exponentiation, processing exponent bits from least to most
/// significant. Returns zero for a zero base.
pub(crate) fn pow_vartime(base: Limbs, exp: Limbs, m: Limbs, c: &[u64]) -> Limbs {
    if base == [0, 0, 0, 0] {
        return [0, 0, 0, 0];
    }

    let mut result = [1, 0, 0, 0];
    let mut acc = base;

    for &limb in exp.iter() {
        let mut remaining = limb;
        for _ in 0..64 {
            if remaining & 1 == 1 {
                result = mul_mod(result, acc, m, c);
            }
            acc = mul_mod(acc, acc, m, c);
            remaining >>= 1;
        }
    }

    result
}

/// Big-endian 32-byte decoding.
pub(crate) fn from_be_bytes(bytes: &[u8; 32]) -> Limbs {
    let mut limbs = [0u64; 4];
    for (i, chunk) in bytes.chunks_exact(8).enumerate() {
        limbs[3 - i] = u64::from_be_bytes(chunk.try_into().unwrap());
    }
    limbs
}

/// Big-endian 32-byte encoding.
pub(crate) fn to_be_bytes(limbs: Limbs) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    for (i, chunk) in bytes.chunks_exact_mut(8).enumerate() {
        chunk.copy_from_slice(&limbs[3 - i].to_be_bytes());
    }
    bytes
}
