//! Exact hexadecimal floating-point literals (`0x1.8p+1`).
//!
//! Parsing accumulates up to 60 significant bits, folds anything beyond
//! into a sticky bit, and rounds once to binary64 with ties to even,
//! including gradual underflow into the subnormal range. Formatting is
//! exact by construction: every mantissa bit is printed.

use crate::{
    Error, F64, MANTISSA_MASK, Result,
    bits::{EXPONENT_BIAS, MANTISSA_BITS},
};

/// Decimal exponents beyond this magnitude already over- or underflow, so
/// larger ones are clamped while reading.
const EXPONENT_CLAMP: i64 = 1 << 32;

/// True if `s` matches `digit ('_'? digit)*` in `radix`.
pub(crate) fn is_digit_run(s: &str, radix: u32) -> bool {
    let mut after_digit = false;
    for c in s.chars() {
        if c == '_' {
            if !after_digit {
                return false;
            }
            after_digit = false;
        } else if c.is_digit(radix) {
            after_digit = true;
        } else {
            return false;
        }
    }
    after_digit
}

/// Digit values of `s` if it matches `digit ('_'? digit)*` in `radix`.
pub(crate) fn digit_run(
    s: &str,
    radix: u32,
) -> Option<impl Iterator<Item = u32> + '_> {
    is_digit_run(s, radix)
        .then(|| s.chars().filter_map(move |c| c.to_digit(radix)))
}

/// A `hexnum` read as an unsigned 64-bit integer.
pub(crate) fn parse_hex_u64(s: &str) -> Option<u64> {
    digit_run(s, 16)?
        .try_fold(0u64, |acc, d| {
            acc.checked_mul(16)?.checked_add(u64::from(d))
        })
}

/// An optionally signed decimal exponent, clamped to `±EXPONENT_CLAMP`.
pub(crate) fn parse_exponent(s: &str) -> Option<i64> {
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let magnitude = digit_run(digits, 10)?.fold(0i64, |acc, d| {
        (acc * 10 + i64::from(d)).min(EXPONENT_CLAMP)
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Parses the part of a hex float literal after `0x`. `literal` is the
/// full text, used for error reporting.
pub(crate) fn parse_hex_float(body: &str, literal: &str) -> Result<F64> {
    let malformed = || Error::MalformedLiteral(literal.to_string());

    let (mantissa, exponent) = match body.find(['p', 'P']) {
        Some(i) => {
            let exponent = parse_exponent(&body[i + 1..]);
            (&body[..i], exponent.ok_or_else(malformed)?)
        }
        None => (body, 0),
    };
    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (mantissa, ""),
    };
    let int_digits = digit_run(int_part, 16).ok_or_else(malformed)?;
    let frac_digits = if frac_part.is_empty() {
        None
    } else {
        Some(digit_run(frac_part, 16).ok_or_else(malformed)?)
    };

    let mut significand = 0u64;
    let mut shift = 0i64;
    let mut sticky = false;
    for d in int_digits {
        if significand >> 60 == 0 {
            significand = (significand << 4) | u64::from(d);
        } else {
            shift += 4;
            sticky |= d != 0;
        }
    }
    for d in frac_digits.into_iter().flatten() {
        if significand >> 60 == 0 {
            significand = (significand << 4) | u64::from(d);
            shift -= 4;
        } else {
            sticky |= d != 0;
        }
    }

    assemble(significand, shift.saturating_add(exponent), sticky)
        .map(F64::from_bits)
        .ok_or_else(|| Error::OutOfRange(literal.to_string()))
}

/// Rounds `significand * 2^exponent` (plus a sticky tail below it) to the
/// nearest binary64 bit pattern. `None` if the result overflows.
fn assemble(significand: u64, exponent: i64, sticky: bool) -> Option<u64> {
    if significand == 0 {
        return Some(0);
    }
    let lz = significand.leading_zeros();
    let normalized = significand << lz;
    // Unbiased exponent of the leading one bit.
    let lead = exponent.saturating_sub(i64::from(lz)).saturating_add(63);
    if lead > EXPONENT_BIAS {
        return None;
    }

    let min_normal = 1 - EXPONENT_BIAS;
    let denormal_shift = min_normal.saturating_sub(lead).max(0) as u64;
    let shift = u64::from(63 - MANTISSA_BITS) + denormal_shift;
    let kept = round_shift(normalized, shift, sticky);

    if denormal_shift > 0 {
        // A carry into bit 52 lands exactly on the smallest normal.
        return Some(kept);
    }
    let (kept, lead) = if kept >> (MANTISSA_BITS + 1) != 0 {
        (kept >> 1, lead + 1)
    } else {
        (kept, lead)
    };
    if lead > EXPONENT_BIAS {
        return None;
    }
    let biased = (lead + EXPONENT_BIAS) as u64;
    Some((biased << MANTISSA_BITS) | (kept & MANTISSA_MASK))
}

/// `value >> shift`, rounded to nearest with ties to even.
fn round_shift(value: u64, shift: u64, sticky: bool) -> u64 {
    if shift == 0 {
        return value;
    }
    if shift > 64 {
        return 0;
    }
    let (kept, rest) = if shift == 64 {
        (0, value)
    } else {
        (value >> shift, value & ((1 << shift) - 1))
    };
    let half = 1u64 << (shift - 1);
    let round_up = rest > half || (rest == half && (sticky || kept & 1 == 1));
    kept + u64::from(round_up)
}

/// Exact hex rendering of a finite, non-negative magnitude.
pub(crate) fn format_hex_magnitude(magnitude: F64) -> String {
    let bits = magnitude.to_bits();
    let biased = (bits >> MANTISSA_BITS) as i64;
    let fraction = bits & MANTISSA_MASK;
    if biased == 0 && fraction == 0 {
        return "0x0p+0".to_string();
    }

    let (fraction, exponent) = if biased == 0 {
        // Subnormal: shift the leading one up into the implicit position.
        let shift = fraction.leading_zeros() - (63 - MANTISSA_BITS);
        let exponent = 1 - EXPONENT_BIAS - i64::from(shift);
        ((fraction << shift) & MANTISSA_MASK, exponent)
    } else {
        (fraction, biased - EXPONENT_BIAS)
    };

    let mut out = String::from("0x1");
    if fraction != 0 {
        let digits = format!("{:013x}", fraction);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out.push_str(&format!("p{:+}", exponent));
    out
}
