use core::{fmt, ops};

use crate::{
    BARE_NAN, CANONICAL_NAN, EXPONENT_MASK, Error, MANTISSA_MASK, Result,
    SIGN_BIT,
};

/// A WebAssembly `f64` value, held as its IEEE‑754 binary64 bit pattern.
///
/// Every `u64` is a valid `F64`. The native `f64` view is only formed
/// transiently inside an operation and always converted back by bit
/// reinterpretation, so NaN payloads are never altered in transit.
///
/// There is no `PartialEq`: numeric equality is [`F64::eq`], and bit
/// identity is `a.to_bits() == b.to_bits()`.
#[derive(Clone, Copy)]
pub struct F64(u64);

#[allow(clippy::should_implement_trait)]
impl F64 {
    pub const ZERO: Self = Self(0);
    pub const NEG_ZERO: Self = Self(SIGN_BIT);
    pub const ONE: Self = Self(0x3FF0_0000_0000_0000);
    pub const INFINITY: Self = Self(BARE_NAN);
    pub const NEG_INFINITY: Self = Self(BARE_NAN | SIGN_BIT);
    /// The canonical non-deterministic NaN.
    pub const NAN: Self = Self(CANONICAL_NAN);

    // ───────────────────────────── Conversions ──────────────────────────────

    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    pub const fn to_bits(self) -> u64 {
        self.0
    }

    /// Reinterprets the bits of a native `f64`. Never a numeric cast.
    pub fn from_float(value: f64) -> Self {
        Self(value.to_bits())
    }

    pub fn to_float(self) -> f64 {
        f64::from_bits(self.0)
    }

    pub const fn from_be_bytes(bytes: [u8; 8]) -> Self {
        Self(u64::from_be_bytes(bytes))
    }

    pub const fn to_be_bytes(self) -> [u8; 8] {
        self.0.to_be_bytes()
    }

    pub const fn from_le_bytes(bytes: [u8; 8]) -> Self {
        Self(u64::from_le_bytes(bytes))
    }

    pub const fn to_le_bytes(self) -> [u8; 8] {
        self.0.to_le_bytes()
    }

    /// Construct from a big‑endian byte slice of exactly 8 bytes.
    pub fn try_from_be_slice(bytes: impl AsRef<[u8]>) -> Result<Self> {
        let b = bytes.as_ref();
        let array: [u8; 8] =
            b.try_into().map_err(|_| Error::InvalidLength(b.len()))?;
        Ok(Self::from_be_bytes(array))
    }

    // ──────────────────────────── Classification ────────────────────────────

    pub const fn is_nan(self) -> bool {
        self.0 & EXPONENT_MASK == EXPONENT_MASK && self.0 & MANTISSA_MASK != 0
    }

    pub const fn is_infinite(self) -> bool {
        self.0 & !SIGN_BIT == BARE_NAN
    }

    pub const fn is_finite(self) -> bool {
        self.0 & EXPONENT_MASK != EXPONENT_MASK
    }

    pub const fn is_zero(self) -> bool {
        self.0 & !SIGN_BIT == 0
    }

    pub const fn is_sign_negative(self) -> bool {
        self.0 & SIGN_BIT != 0
    }

    /// True for the canonical NaN with either sign.
    pub const fn is_canonical_nan(self) -> bool {
        self.0 & !SIGN_BIT == CANONICAL_NAN
    }

    /// The 52 mantissa bits of a NaN, or `None` for any other value.
    pub const fn nan_payload(self) -> Option<u64> {
        if self.is_nan() {
            Some(self.0 & MANTISSA_MASK)
        } else {
            None
        }
    }

    // ───────────────────────────── Bitwise ops ──────────────────────────────

    pub const fn abs(self) -> Self {
        Self(self.0 & !SIGN_BIT)
    }

    pub const fn neg(self) -> Self {
        Self(self.0 ^ SIGN_BIT)
    }

    /// Magnitude of `self`, sign of `sign`.
    pub const fn copysign(self, sign: Self) -> Self {
        Self((self.0 & !SIGN_BIT) | (sign.0 & SIGN_BIT))
    }

    // ────────────────────────────── Comparison ──────────────────────────────

    pub fn eq(self, rhs: Self) -> bool {
        self.to_float() == rhs.to_float()
    }

    pub fn ne(self, rhs: Self) -> bool {
        self.to_float() != rhs.to_float()
    }

    pub fn lt(self, rhs: Self) -> bool {
        self.to_float() < rhs.to_float()
    }

    pub fn gt(self, rhs: Self) -> bool {
        self.to_float() > rhs.to_float()
    }

    pub fn le(self, rhs: Self) -> bool {
        self.to_float() <= rhs.to_float()
    }

    pub fn ge(self, rhs: Self) -> bool {
        self.to_float() >= rhs.to_float()
    }
}

impl Default for F64 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Debug for F64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F64({:#018x})", self.0)
    }
}

// ──────────────────────── Native conversions ────────────────────────────────

impl From<f64> for F64 {
    fn from(value: f64) -> Self {
        Self::from_float(value)
    }
}

impl From<F64> for f64 {
    fn from(value: F64) -> Self {
        value.to_float()
    }
}

impl From<u64> for F64 {
    fn from(bits: u64) -> Self {
        Self::from_bits(bits)
    }
}

impl From<F64> for u64 {
    fn from(value: F64) -> Self {
        value.to_bits()
    }
}

// ───────────────────────────── Operators ────────────────────────────────────

impl ops::Neg for F64 {
    type Output = F64;
    fn neg(self) -> F64 {
        F64::neg(self)
    }
}

impl ops::Add for F64 {
    type Output = F64;
    fn add(self, rhs: F64) -> F64 {
        F64::add(self, rhs)
    }
}

impl ops::Sub for F64 {
    type Output = F64;
    fn sub(self, rhs: F64) -> F64 {
        F64::sub(self, rhs)
    }
}

impl ops::Mul for F64 {
    type Output = F64;
    fn mul(self, rhs: F64) -> F64 {
        F64::mul(self, rhs)
    }
}

impl ops::Div for F64 {
    type Output = F64;
    fn div(self, rhs: F64) -> F64 {
        F64::div(self, rhs)
    }
}
