//! Native value types and their property kinds
//!
//! [`Persisted`] maps a Rust type onto the [`PropertyType`] a property of that
//! type is stored as. Most kinds use an existing type (`bool`, `i64`, `String`,
//! `chrono::DateTime<Utc>`, `uuid::Uuid`); the kinds without an obvious Rust
//! counterpart get a newtype here.

use crate::property::PropertyType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A Rust type that can be stored in a property
pub trait Persisted {
    /// Kind of property values of this type are stored in
    const PROPERTY_TYPE: PropertyType;

    /// Whether the property may hold no value
    const OPTIONAL: bool = false;
}

macro_rules! impl_persisted {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Persisted for $ty {
                const PROPERTY_TYPE: PropertyType = PropertyType::$kind;
            }
        )*
    };
}

impl_persisted! {
    bool => Bool,
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    f32 => Float,
    f64 => Double,
    String => String,
    Data => Data,
    DateTime<Utc> => Date,
    Decimal128 => Decimal128,
    ObjectId => ObjectId,
    Uuid => Uuid,
}

impl<T: Persisted> Persisted for Option<T> {
    const PROPERTY_TYPE: PropertyType = T::PROPERTY_TYPE;
    const OPTIONAL: bool = true;
}

/// Binary blob
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Data(Vec<u8>);

impl Data {
    /// Wrap raw bytes
    pub fn new(bytes: Vec<u8>) -> Self {
        Data(bytes)
    }

    /// Borrow the bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Take the bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for Data {
    fn from(bytes: Vec<u8>) -> Self {
        Data(bytes)
    }
}

/// 128-bit IEEE 754-2008 decimal, kept as its raw bit pattern
///
/// Arithmetic belongs to the storage engine; this type only carries values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Decimal128(u128);

impl Decimal128 {
    /// Create from the raw bit pattern
    pub const fn from_bits(bits: u128) -> Self {
        Decimal128(bits)
    }

    /// Raw bit pattern
    pub const fn to_bits(self) -> u128 {
        self.0
    }
}

/// Opaque 16-byte object identifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObjectId([u8; 16]);

impl ObjectId {
    /// Create from raw bytes
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        ObjectId(bytes)
    }

    /// Raw bytes
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Parse the 32-character lowercase or uppercase hex form
    pub fn parse_hex(s: &str) -> Option<Self> {
        if s.len() != 32 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let mut bytes = [0u8; 16];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16).ok()?;
        }
        Some(ObjectId(bytes))
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
