//! Type integration with external types
//!
//! Implementation [`Encode`][e] for external types.
//!
//! Available for:
//!
//! - [`serde`]'s [`Serialize`][ss] via [`Json`], requires `json` feature
//! - [`time`][::time]'s [`PrimitiveDateTime`][tp], [`UtcDateTime`][tu], [`Date`][td], requires `time` feature
//!
//! All of them are transmitted in text format.
//!
//! [e]: crate::Encode
//! [ss]: serde::Serialize
//! [tp]: ::time::PrimitiveDateTime
//! [tu]: ::time::UtcDateTime
//! [td]: ::time::Date

#[cfg(feature = "json")]
mod json;
#[cfg(feature = "json")]
pub use json::Json;

#[cfg(feature = "time")]
mod time;
