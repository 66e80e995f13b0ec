//! Error types for the BIP340 signature scheme.

/// Errors that can occur during signing and verification operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SchnorrError {
    /// A scalar or field element was outside its canonical range.
    ///
    /// This error occurs when:
    /// - A signature's r component is >= p, or its s component is >= n
    /// - A secret key is zero or >= n
    InvalidRange,

    /// A public key does not name a curve point.
    ///
    /// This error occurs when the 32-byte x-coordinate is >= p, or when no
    /// point on the curve has that x-coordinate.
    InvalidPublicKey,

    /// The recomputed commitment R resolved to the point at infinity during
    /// verification.
    PointAtInfinity,

    /// The nonce derived during signing was zero.
    ///
    /// In practice this is vanishingly unlikely; the caller must not retry
    /// with the same message and auxiliary randomness.
    SigningFailure,
}
