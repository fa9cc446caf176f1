//! Text rendering for values transmitted in text format.
use std::fmt::Write;

use crate::{error::Result, value::ValueRef};

/// Render integer as decimal text.
pub(crate) fn integer<I: itoa::Integer>(value: I) -> ValueRef<'static> {
    let mut b = itoa::Buffer::new();
    ValueRef::copy_text(b.format(value))
}

/// Render float as the shortest decimal text that parse back to the same value.
///
/// Non finite value are rendered as `NAN`, `INF` and `-INF` literal.
pub(crate) fn float(value: f64) -> Result<ValueRef<'static>> {
    if value.is_nan() {
        return Ok(ValueRef::from_static(b"NAN\0"));
    }
    if value.is_infinite() {
        return Ok(match value.is_sign_negative() {
            true => ValueRef::from_static(b"-INF\0"),
            false => ValueRef::from_static(b"INF\0"),
        });
    }

    // `Debug` switch to exponent notation for very large or small magnitude
    let mut buf = String::with_capacity(24);
    write!(buf, "{value:?}")?;
    Ok(ValueRef::copy_text(&buf))
}
