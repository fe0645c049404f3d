//! Named bit patterns of the IEEE‑754 binary64 layout.

/// The sign bit (bit 63).
pub const SIGN_BIT: u64 = 1 << 63;

/// The 11 exponent bits (bits 52..=62).
pub const EXPONENT_MASK: u64 = 0x7FF0_0000_0000_0000;

/// The 52 mantissa (fraction) bits.
pub const MANTISSA_MASK: u64 = 0x000F_FFFF_FFFF_FFFF;

/// All exponent bits set, sign and mantissa clear.
///
/// This is the base of every NaN: `BARE_NAN | payload` builds one and
/// `abs(nan) ^ BARE_NAN` recovers the payload. On its own it is `+inf`.
pub const BARE_NAN: u64 = EXPONENT_MASK;

/// The NaN substituted for every arithmetic result whose payload the host
/// semantics leave unspecified.
pub const CANONICAL_NAN: u64 = BARE_NAN | (1 << 51);

/// Number of explicitly stored significand bits.
pub(crate) const MANTISSA_BITS: u32 = 52;

/// Exponent bias of binary64.
pub(crate) const EXPONENT_BIAS: i64 = 1023;
