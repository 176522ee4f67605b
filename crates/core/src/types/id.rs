//! Opaque identifiers for directory entries.
//!
//! The booking backend hands out ids as JSON numbers, while the form reads
//! them back from select values as text. The `define_id!` macro creates
//! wrappers that accept either on the way in and always carry text, so an
//! id travels from the backend to a select option and into a booking
//! payload without being reinterpreted.

use serde::{Deserialize, Deserializer};

/// Macro to define an opaque ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize` as a plain string (`#[serde(transparent)]`)
/// - `Deserialize` from a JSON string or integer
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `Default`
/// - Conversion methods: `new()`, `as_str()`, `is_empty()`
/// - `From<String>`, `From<&str>` and `From<i64>` implementations
///
/// # Example
///
/// ```rust
/// # use barber_booking_core::define_id;
/// define_id!(ChairId);
/// define_id!(ShopId);
///
/// let chair = ChairId::from(7);
/// let shop = ShopId::new("7");
/// assert_eq!(chair.as_str(), shop.as_str());
///
/// // These are different types, so this won't compile:
/// // let _: ChairId = shop;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default, ::serde::Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from its textual form.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the textual form of the ID.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether this is the unset (empty) ID.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id.to_string())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                $crate::types::id::deserialize_opaque_id(deserializer).map(Self)
            }
        }
    };
}

define_id!(BarberId);
define_id!(ServiceId);

/// Raw id as the backend may encode it.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Integer(i64),
}

/// Decode an id sent either as a JSON string or a JSON integer.
///
/// Used by the `define_id!` expansion; not meant to be called directly.
///
/// # Errors
///
/// Returns the deserializer's error if the value is neither a string nor an
/// integer.
#[doc(hidden)]
pub fn deserialize_opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Integer(number) => number.to_string(),
    })
}
