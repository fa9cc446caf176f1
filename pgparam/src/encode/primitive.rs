use std::ffi::{CStr, CString};

use super::{Encode, Param, assert_column};
use crate::{
    byteorder::{self, BigEndian},
    error::{EncodeError, Result},
    postgres::PgFormat,
    text,
    value::ValueRef,
};

/// SQL `NULL` parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Null;

/// SQL `NULL` parameter.
pub const NULL: Null = Null;

impl Param for Null {
    const COLUMNS: usize = 1;

    fn data(&self, index: usize) -> Option<&[u8]> {
        assert_column::<Self>(index);
        None
    }

    fn length(index: usize) -> i32 {
        assert_column::<Self>(index);
        0
    }

    fn format(index: usize) -> PgFormat {
        assert_column::<Self>(index);
        PgFormat::Text
    }
}

/// Single text column.
///
/// Bytes is either borrowed from the bound value or owned by the encoder.
#[derive(Debug)]
pub struct Text<'a> {
    value: ValueRef<'a>,
}

impl<'a> Text<'a> {
    pub(crate) fn new(value: ValueRef<'a>) -> Self {
        Self { value }
    }

    /// Borrow a C string without copying.
    pub fn borrowed(cstr: &'a CStr) -> Self {
        Self::new(ValueRef::borrowed(cstr))
    }

    /// Returns the text bytes, nul included.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        self.value.as_slice()
    }
}

impl Text<'static> {
    /// Copy text into an owned buffer.
    ///
    /// Returns [`EncodeError::InteriorNul`] if `text` contains nul.
    pub fn copy_from_str(text: &str) -> Result<Self> {
        Ok(Self::new(ValueRef::owned(CString::new(text)?)))
    }
}

impl Param for Text<'_> {
    const COLUMNS: usize = 1;

    fn data(&self, index: usize) -> Option<&[u8]> {
        assert_column::<Self>(index);
        Some(self.value.as_slice())
    }

    fn length(index: usize) -> i32 {
        assert_column::<Self>(index);
        0
    }

    fn format(index: usize) -> PgFormat {
        assert_column::<Self>(index);
        PgFormat::Text
    }
}

/// Single binary column of `N` bytes in network byte order.
#[derive(Debug, Clone, Copy)]
pub struct Binary<const N: usize> {
    bytes: [u8;N],
}

impl<const N: usize> Binary<N> {
    /// Write integer in network byte order.
    pub fn new<T: BigEndian<N>>(value: T) -> Self {
        Self { bytes: value.to_network() }
    }

    /// Returns the big endian bytes.
    pub const fn as_bytes(&self) -> &[u8;N] {
        &self.bytes
    }
}

impl<const N: usize> Param for Binary<N> {
    const COLUMNS: usize = 1;

    fn data(&self, index: usize) -> Option<&[u8]> {
        assert_column::<Self>(index);
        Some(&self.bytes)
    }

    fn length(index: usize) -> i32 {
        assert_column::<Self>(index);
        N as i32
    }

    fn format(index: usize) -> PgFormat {
        assert_column::<Self>(index);
        PgFormat::Binary
    }
}

/// Floating point transmitted as decimal text.
///
/// Use this for `numeric` column or when the value must survive as
/// human readable text. `NaN` and infinity are sent as `NAN`, `INF` and `-INF`.
///
/// Plain `f64` is transmitted in binary as `float8`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Extended(pub f64);

impl From<f64> for Extended {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<f32> for Extended {
    fn from(value: f32) -> Self {
        Self(value.into())
    }
}

// ===== Encode =====

macro_rules! encode {
    (@once $ty:ty => $param:ty, $pat:pat => $body:expr) => {
        impl Encode for $ty {
            type Param = $param;

            fn encode(self) -> Result<Self::Param> {
                let $pat = self;
                $body
            }
        }
    };
    (<$lf:lifetime>$ty:ty => $param:ty, $pat:pat => $body:expr) => {
        impl<$lf> Encode for $ty {
            type Param = $param;

            fn encode(self) -> Result<Self::Param> {
                let $pat = self;
                $body
            }
        }
    };
    (@ref $ty:ty => $param:ty, $v:ident => $body:expr) => {
        impl Encode for &$ty {
            type Param = $param;

            fn encode(self) -> Result<Self::Param> {
                let $v: &$ty = self;
                $body
            }
        }

        impl Encode for &&$ty {
            type Param = $param;

            fn encode(self) -> Result<Self::Param> {
                let $v: &$ty = *self;
                $body
            }
        }
    };
    ($ty:ty => $param:ty, $pat:pat => $body:expr) => {
        impl Encode for $ty {
            type Param = $param;

            fn encode(self) -> Result<Self::Param> {
                let $pat = self;
                $body
            }
        }

        impl Encode for &$ty {
            type Param = $param;

            fn encode(self) -> Result<Self::Param> {
                let &$pat = self;
                $body
            }
        }

        impl Encode for &&$ty {
            type Param = $param;

            fn encode(self) -> Result<Self::Param> {
                let &&$pat = self;
                $body
            }
        }
    };
}

macro_rules! decimal {
    ($($ty:ty),*) => {
        $(encode!($ty => Text<'static>, v => Ok(Text::new(text::integer(v))));)*
    };
}

macro_rules! binary {
    ($($ty:ty, $n:literal);*) => {
        $(encode!($ty => Binary<$n>, v => Ok(Binary::new(v)));)*
    };
}

encode!(Null => Null, v => Ok(v));

encode!(bool => Text<'static>, v => Ok(Text::new(match v {
    true => ValueRef::from_static(b"TRUE\0"),
    false => ValueRef::from_static(b"FALSE\0"),
})));

encode!(char => Text<'static>, v => {
    if v == '\0' {
        return Err(EncodeError::InteriorNul(0));
    }
    let mut buf = [0u8;4];
    Ok(Text::new(ValueRef::copy_text(v.encode_utf8(&mut buf))))
});

// 8 bit integer and unsigned integer goes through text
decimal!(i8, u8, u16, u32, u64, i128, u128, isize, usize);

binary!(i16, 2; i32, 4; i64, 8);

encode!(f32 => Binary<4>, v => Ok(Binary::new(byteorder::f32_bits(v))));
encode!(f64 => Binary<8>, v => Ok(Binary::new(byteorder::f64_bits(v))));

encode!(Extended => Text<'static>, Extended(v) => text::float(v).map(Text::new));

encode!(<'a>&'a CStr => Text<'a>, v => Ok(Text::borrowed(v)));
encode!(<'a>&'a CString => Text<'a>, v => Ok(Text::borrowed(v)));
encode!(@once CString => Text<'static>, v => Ok(Text::new(ValueRef::owned(v))));

// reference element of a borrowed tuple or option
impl<'b> Encode for &&'b CStr {
    type Param = Text<'b>;

    fn encode(self) -> Result<Self::Param> {
        Ok(Text::borrowed(*self))
    }
}

impl<'b> Encode for &&'b CString {
    type Param = Text<'b>;

    fn encode(self) -> Result<Self::Param> {
        Ok(Text::borrowed(*self))
    }
}

encode!(@ref str => Text<'static>, v => Text::copy_from_str(v));
encode!(@ref String => Text<'static>, v => Text::copy_from_str(v));
encode!(@once String => Text<'static>, v => Ok(Text::new(ValueRef::owned(CString::new(v)?))));

encode!(@ref [u8] => Text<'static>, v => Ok(bytea(v)));
encode!(@ref Vec<u8> => Text<'static>, v => Ok(bytea(v)));
encode!(@once Vec<u8> => Text<'static>, v => Ok(bytea(&v)));

/// `bytea` hex format, `\x` followed by two hex digit per byte.
fn bytea(bytes: &[u8]) -> Text<'static> {
    const PREFIX: &[u8] = b"\\x";

    let len = PREFIX.len() + bytes.len() * 2;
    let mut buf = Vec::with_capacity(len + 1);
    buf.extend_from_slice(PREFIX);
    buf.resize(len, 0);
    hex::encode_to_slice(bytes, &mut buf[PREFIX.len()..])
        .expect("buffer is sized for hex output");
    buf.push(b'\0');
    Text::new(ValueRef::Bytes(buf.into()))
}
