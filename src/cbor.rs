//! dCBOR transport of [`F64`].
//!
//! dCBOR collapses every NaN to a single canonical encoding, so NaNs are
//! carried instead as CBOR tag 102 wrapping the 8 big‑endian bytes of the
//! exact bit pattern (the nan-bstr encoding). All other values use dCBOR's
//! ordinary numeric encoding, whose numeric reduction stores integral
//! values as integers. `-0.0` therefore decodes as `+0.0`.

use dcbor::prelude::*;

use crate::{Error, F64};

/// An `F64` NaN tagged with CBOR tag 102 ("nan-bstr").
///
/// Validity (8 bytes, NaN bit pattern) is enforced at construction and when
/// decoding from CBOR.
#[derive(Debug, Clone, Copy)]
pub struct TaggedNan(F64);

impl TaggedNan {
    pub fn new(value: F64) -> crate::Result<Self> {
        if !value.is_nan() {
            return Err(Error::NotANan);
        }
        Ok(Self(value))
    }

    /// Construct from a big‑endian byte slice, which must be 8 bytes long.
    pub fn from_be_bytes(bytes: impl AsRef<[u8]>) -> crate::Result<Self> {
        Self::new(F64::try_from_be_slice(bytes)?)
    }

    pub fn value(&self) -> F64 {
        self.0
    }
}

impl From<TaggedNan> for F64 {
    fn from(nan: TaggedNan) -> Self {
        nan.0
    }
}

impl CBORTagged for TaggedNan {
    fn cbor_tags() -> Vec<Tag> {
        tags_for_values(&[bc_tags::TAG_NAN_BSTR])
    }
}

impl CBORTaggedEncodable for TaggedNan {
    fn untagged_cbor(&self) -> CBOR {
        let bytes = self.0.to_be_bytes();
        CBOR::from(ByteString::from(&bytes[..]))
    }
}

impl CBORTaggedDecodable for TaggedNan {
    fn from_untagged_cbor(cbor: CBOR) -> dcbor::Result<Self> {
        let bs: ByteString =
            cbor.try_into().map_err(|_| dcbor::Error::WrongType)?;
        Ok(TaggedNan::from_be_bytes(bs.data())?)
    }
}

impl From<TaggedNan> for CBOR {
    fn from(value: TaggedNan) -> Self {
        value.tagged_cbor()
    }
}

impl TryFrom<CBOR> for TaggedNan {
    type Error = dcbor::Error;
    fn try_from(cbor: CBOR) -> dcbor::Result<Self> {
        Self::from_tagged_cbor(cbor)
    }
}

// ─────────────────────────────── F64 ────────────────────────────────────────

impl From<F64> for CBOR {
    fn from(value: F64) -> Self {
        if value.is_nan() {
            TaggedNan(value).tagged_cbor()
        } else {
            CBOR::from(value.to_float())
        }
    }
}

impl TryFrom<CBOR> for F64 {
    type Error = dcbor::Error;
    fn try_from(cbor: CBOR) -> dcbor::Result<Self> {
        if let Ok((tag, item)) = cbor.clone().try_into_tagged_value() {
            if tag.value() != bc_tags::TAG_NAN_BSTR {
                return Err(dcbor::Error::WrongType);
            }
            return Ok(TaggedNan::from_untagged_cbor(item)?.into());
        }
        let value: f64 = cbor.try_into()?;
        Ok(F64::from_float(value))
    }
}
