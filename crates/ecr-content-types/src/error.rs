//! # Error Types
//!
//! The schema crate defines no operations capable of failing beyond
//! parsing a wire value back into one of the closed field enumerations.
//! Decoding errors for whole content instances belong to the external
//! serialization layer, not to this crate.

use thiserror::Error;

/// Error type for the content-type schema.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A wire value did not match any variant of the named enumeration.
    #[error("unknown {enumeration} value: {value:?}")]
    UnknownVariant {
        /// The enumeration that rejected the value.
        enumeration: &'static str,
        /// The rejected wire value.
        value: String,
    },
}
