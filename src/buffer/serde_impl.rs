//! Serde support, enabled with the `serde` feature.
//!
//! Buffers serialize as byte strings. Deserializing always creates a new
//! lineage; a released handle serializes as an empty byte string.

use super::{CowBuffer, View};
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

impl Serialize for View<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(self.as_bytes())
    }
}

impl Serialize for CowBuffer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.view().serialize(serializer)
    }
}

struct BufferVisitor;

impl<'de> Visitor<'de> for BufferVisitor {
    type Value = CowBuffer;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a byte string or a sequence of bytes")
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<CowBuffer, E> {
        Ok(CowBuffer::from(v))
    }

    fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<CowBuffer, E> {
        Ok(CowBuffer::new(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<CowBuffer, E> {
        Ok(CowBuffer::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<CowBuffer, E> {
        Ok(CowBuffer::from(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<CowBuffer, A::Error> {
        let mut data = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(4096));
        while let Some(byte) = seq.next_element::<u8>()? {
            data.push(byte);
        }
        Ok(CowBuffer::new(data))
    }
}

impl<'de> Deserialize<'de> for CowBuffer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_byte_buf(BufferVisitor)
    }
}
