#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[cfg(feature = "cbor")]
    #[error("CBOR error ({0})")]
    Cbor(#[from] dcbor::Error),

    #[error("empty f64 literal")]
    Empty,

    #[error("malformed f64 literal: {0:?}")]
    MalformedLiteral(String),

    #[error("malformed NaN payload: {0:?}")]
    MalformedPayload(String),

    #[error("NaN payload must be non-zero")]
    ZeroPayload,

    #[error("NaN payload overlaps the exponent bits")]
    PayloadOverlapsExponent,

    #[error("NaN payload overlaps the sign bit")]
    PayloadOverlapsSign,

    #[error("f64 literal out of range: {0:?}")]
    OutOfRange(String),

    #[error("invalid f64 length: expected 8 bytes, got {0} bytes")]
    InvalidLength(usize),

    #[error("not a NaN bit pattern")]
    NotANan,
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for String {
    fn from(err: Error) -> Self { err.to_string() }
}

#[cfg(feature = "cbor")]
impl From<Error> for dcbor::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Cbor(err) => err,
            _ => dcbor::Error::msg(err),
        }
    }
}
