//! Parameter encoding.
//!
//! - [`Encode`], a value that can be bound to sql parameter
//! - [`Param`], the encoded parameter descriptor
//! - [`ToParam`], conversion of user type into an encodable value
//!
//! Encoding rule is resolved at compile time from the type of bound value.
//! A type without rule fails to compile.
//!
//! | Type                                   | Format   | Encoding                         |
//! |----------------------------------------|----------|----------------------------------|
//! | [`Null`]                               | `Text`   | NULL                             |
//! | `bool`                                 | `Text`   | `TRUE` or `FALSE`                |
//! | `&CStr`, `CString`                     | `Text`   | as is                            |
//! | `&str`, `String`                       | `Text`   | as is                            |
//! | `char`                                 | `Text`   | utf8                             |
//! | `i8`, `u8`, `u16`, `u32`, `u64`        | `Text`   | decimal                          |
//! | `i128`, `u128`, `isize`, `usize`       | `Text`   | decimal                          |
//! | `i16`, `i32`, `i64`                    | `Binary` | big endian                       |
//! | `f32`, `f64`                           | `Binary` | bit pattern as `i32` or `i64`    |
//! | [`Extended`]                           | `Text`   | shortest round trip decimal      |
//! | `&[u8]`, `Vec<u8>`                     | `Text`   | bytea hex                        |
//! | `Option<T>`                            | `T`      | NULL when [`None`]               |
//! | `(T1, T2, ..)`                         | each `T` | flattened into multiple columns  |
//!
//! Unsigned integer is transmitted as text since postgres have no unsigned
//! type to receive the binary representation.
use crate::{error::Result, postgres::PgFormat};

mod primitive;
mod option;
mod tuple;
mod convert;

pub use primitive::{Binary, Extended, NULL, Null, Text};
pub use option::Optional;
pub use tuple::Tuple;
pub use convert::ToParam;

/// Value that can be encoded to be bound to sql parameter.
///
/// Implemented for owned value, and for reference where the encoder can
/// borrow or copy from it.
///
/// Type without encoding rule is rejected at compile time:
///
/// ```compile_fail
/// struct Point(i32, i32);
///
/// let _ = pgparam::encode(Point(1, 2));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be bound as postgres parameter",
    label = "no encoding rule for `{Self}`",
    note = "implement `ToParam` to convert it into a supported type"
)]
pub trait Encode {
    /// The encoded parameter.
    type Param: Param;

    /// Construct the parameter encoder.
    ///
    /// Fails only when value cannot be rendered, e.g. text with interior nul.
    fn encode(self) -> Result<Self::Param>;
}

/// Encoded parameter descriptor.
///
/// A parameter occupy [`COLUMNS`][Param::COLUMNS] consecutive positional
/// argument slot. Each slot is described by its data, length, and format.
///
/// # Panics
///
/// Every accessor panics when `index` is not less than [`COLUMNS`][Param::COLUMNS].
pub trait Param {
    /// Number of argument slot this parameter occupy.
    const COLUMNS: usize;

    /// Returns the column bytes, or [`None`] for NULL.
    ///
    /// Text column bytes is nul terminated, the nul included in the slice.
    /// Binary column bytes is exactly [`length`][Param::length] long.
    fn data(&self, index: usize) -> Option<&[u8]>;

    /// Returns the column byte length.
    ///
    /// Binary column returns its type width. Text column returns `0`,
    /// which means the length is measured at use from the nul terminator.
    fn length(index: usize) -> i32;

    /// Returns the column [`PgFormat`].
    ///
    /// Format is statically known, NULL column report the same format as
    /// the non NULL value of the same type.
    fn format(index: usize) -> PgFormat;
}

/// Encode value into its parameter descriptor.
///
/// Shorthand for [`Encode::encode`].
pub fn encode<E: Encode>(value: E) -> Result<E::Param> {
    value.encode()
}

#[track_caller]
pub(crate) fn assert_column<P: Param>(index: usize) {
    assert!(
        index < P::COLUMNS,
        "column index out of bounds: the len is {} but the index is {index}",
        P::COLUMNS,
    );
}
