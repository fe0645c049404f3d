//! Bit‑exact WebAssembly `f64` values.
//!
//! [`F64`] stores an IEEE‑754 binary64 value as its raw bit pattern so that
//! NaN payloads survive every conversion unchanged. Arithmetic runs on the
//! native FPU, but any NaN it produces is replaced by the single
//! [`CANONICAL_NAN`], so the hardware's payload propagation never leaks into
//! results.
//!
//! The text codec reads and writes the WebAssembly literal grammar,
//! including NaNs with an explicit payload such as `-nan(0x1)`. Every bit
//! pattern formats to a string that parses back to the same bits.
//!
//! With the default `cbor` feature, values also convert to and from dCBOR.
//! NaNs keep their exact bits as CBOR tag 102 byte strings; every other
//! value keeps its numeric value, but dCBOR's numeric reduction stores
//! `-0.0` as the integer `0`, so the sign of zero is not preserved.

mod bits;
pub use bits::*;
mod value;
pub use value::*;
mod arith;
mod hexfloat;
mod text;
#[cfg(feature = "cbor")]
mod cbor;
#[cfg(feature = "cbor")]
pub use cbor::*;
mod error;
pub use error::*;
