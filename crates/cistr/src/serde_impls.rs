//! Serde support, enabled by the `serde` feature.
//!
//! A buffer serializes as a byte string and deserializes from byte strings,
//! text strings, or sequences of bytes, so arbitrary content (including
//! interior NULs) round-trips through self-describing formats.

use alloc::vec::Vec;
use core::{fmt, marker::PhantomData};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
};

use crate::{collate::Collate, string::StrBuf};

impl<C: Collate> Serialize for StrBuf<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(self.as_bytes())
    }
}

struct BytesVisitor<C>(PhantomData<C>);

impl<'de, C: Collate> Visitor<'de> for BytesVisitor<C> {
    type Value = StrBuf<C>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a byte string")
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        Ok(StrBuf::from_bytes(v))
    }

    fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<Self::Value, E> {
        Ok(StrBuf::from(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(StrBuf::from(v))
    }

    // Formats without a native byte-string type (JSON among them) hand the
    // content over as a sequence of integers.
    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut buf = StrBuf::new();
        if let Some(hint) = seq.size_hint() {
            buf.reserve(hint);
        }
        while let Some(byte) = seq.next_element::<u8>()? {
            buf.push(byte);
        }
        Ok(buf)
    }
}

impl<'de, C: Collate> Deserialize<'de> for StrBuf<C> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_bytes(BytesVisitor(PhantomData))
    }
}
