//! Serde support
//!
//! [`Snowflake`] serializes as its decimal string by default, which survives
//! JSON consumers that parse numbers as 64-bit floats. Deserialization accepts
//! either a decimal string or an unsigned integer. Use [`as_native`] with
//! `#[serde(with = "...")]` to write the raw integer instead.

use std::fmt;

use ::serde::de::{self, Visitor};
use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::snowflake::Snowflake;

impl Serialize for Snowflake {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_any(SnowflakeVisitor)
    }
}

struct SnowflakeVisitor;

impl Visitor<'_> for SnowflakeVisitor {
    type Value = Snowflake;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal snowflake string or an unsigned integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Snowflake, E> {
        Snowflake::parse_decimal(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Snowflake, E> {
        Ok(Snowflake::from_raw(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Snowflake, E> {
        u64::try_from(v)
            .map(Snowflake::from_raw)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }
}

pub mod as_native {
    use super::{Deserialize, Deserializer, Serialize, Serializer, Snowflake};

    /// Serialize a snowflake as its raw `u64`.
    pub fn serialize<S: Serializer>(id: &Snowflake, s: S) -> Result<S::Ok, S::Error> {
        id.to_raw().serialize(s)
    }

    /// Deserialize a snowflake from its raw `u64`.
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Snowflake, D::Error> {
        u64::deserialize(d).map(Snowflake::from_raw)
    }
}
