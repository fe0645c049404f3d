use core::{fmt, str::FromStr};

use crate::{
    BARE_NAN, EXPONENT_MASK, Error, F64, Result, SIGN_BIT,
    hexfloat::{self, is_digit_run},
};

impl F64 {
    /// Parses an `f64` literal of the WebAssembly text format.
    ///
    /// Accepts an optional `+`/`-` followed by a decimal literal
    /// (`1_000.5e-3`), a hex float (`0x1.8p+1`), `inf`, `nan`, or a NaN
    /// with an explicit payload (`nan(0x8_0000)`). Finite literals are
    /// rounded to nearest, ties to even; a literal that rounds to infinity
    /// is rejected.
    pub fn parse(text: &str) -> Result<Self> {
        parse_literal(text).inspect_err(|err| {
            tracing::debug!(
                literal = text,
                error = %err,
                "rejected f64 literal"
            );
        })
    }

    /// Renders the value so that [`F64::parse`] returns the same bits.
    ///
    /// Finite values use the shortest decimal digit string that round-trips,
    /// NaNs print their payload as `nan(0x…)`.
    pub fn format(self) -> String {
        render(self, format_decimal_magnitude)
    }

    /// Like [`F64::format`], but finite values are written as exact hex
    /// floats (`0x1.8p+1`).
    pub fn format_hex(self) -> String {
        render(self, hexfloat::format_hex_magnitude)
    }
}

fn parse_literal(text: &str) -> Result<F64> {
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let payload = unsigned
        .strip_prefix("nan(0x")
        .and_then(|rest| rest.strip_suffix(')'));
    let magnitude = match payload {
        Some(payload) => nan_with_payload(payload)?,
        None => parse_magnitude(unsigned, text)?,
    };
    Ok(if negative { magnitude.neg() } else { magnitude })
}

fn nan_with_payload(digits: &str) -> Result<F64> {
    let payload = hexfloat::parse_hex_u64(digits)
        .ok_or_else(|| Error::MalformedPayload(digits.to_string()))?;
    if payload == 0 {
        return Err(Error::ZeroPayload);
    }
    if payload & EXPONENT_MASK != 0 {
        return Err(Error::PayloadOverlapsExponent);
    }
    if payload & SIGN_BIT != 0 {
        return Err(Error::PayloadOverlapsSign);
    }
    Ok(F64::from_bits(BARE_NAN | payload))
}

fn parse_magnitude(unsigned: &str, literal: &str) -> Result<F64> {
    match unsigned {
        "" => Err(Error::Empty),
        "inf" => Ok(F64::INFINITY),
        "nan" => Ok(F64::NAN),
        _ => match unsigned.strip_prefix("0x") {
            Some(body) => hexfloat::parse_hex_float(body, literal),
            None => parse_decimal(unsigned, literal),
        },
    }
}

/// `num ('.' num?)? ([eE] [+-]? num)?`
fn parse_decimal(unsigned: &str, literal: &str) -> Result<F64> {
    let malformed = || Error::MalformedLiteral(literal.to_string());

    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(i) => (&unsigned[..i], Some(&unsigned[i + 1..])),
        None => (unsigned, None),
    };
    let (int_part, frac_part) =
        mantissa.split_once('.').unwrap_or((mantissa, ""));
    let well_formed = is_digit_run(int_part, 10)
        && (frac_part.is_empty() || is_digit_run(frac_part, 10))
        && exponent.is_none_or(|e| hexfloat::parse_exponent(e).is_some());
    if !well_formed {
        return Err(malformed());
    }

    // The grammar is checked above; what remains is plain digits, which
    // core converts with correct rounding.
    let value: f64 =
        unsigned.replace('_', "").parse().map_err(|_| malformed())?;
    if value.is_infinite() {
        return Err(Error::OutOfRange(literal.to_string()));
    }
    Ok(F64::from_float(value))
}

fn render(value: F64, finite: fn(F64) -> String) -> String {
    let mut out = String::new();
    if value.is_sign_negative() {
        out.push('-');
    }
    let magnitude = value.abs();
    if magnitude.is_nan() {
        let payload = magnitude.to_bits() ^ BARE_NAN;
        out.push_str(&format!("nan(0x{:x})", payload));
    } else if magnitude.is_infinite() {
        out.push_str("inf");
    } else {
        out.push_str(&finite(magnitude));
    }
    out
}

/// Shortest round-trip digits; positional for decimal exponents in
/// `-7..21`, scientific outside it.
fn format_decimal_magnitude(magnitude: F64) -> String {
    let x = magnitude.to_float();
    let scientific = format!("{x:e}");
    let exponent = scientific
        .rsplit_once('e')
        .and_then(|(_, e)| e.parse::<i32>().ok())
        .unwrap_or(0);
    if (-7..21).contains(&exponent) {
        format!("{x}")
    } else {
        scientific
    }
}

impl FromStr for F64 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for F64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl fmt::LowerHex for F64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_hex())
    }
}
