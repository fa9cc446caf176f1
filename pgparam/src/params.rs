//! Parameter array assembly.
//!
//! Flatten encoded [`Param`] into what the extended query protocol consume:
//!
//! - [`ParamArrays`], three parallel arrays for `PQexecParams` style call
//! - [`write_bind_params`], parameter section of the `Bind` frontend message
use bytes::BufMut;
use std::{
    ffi::{c_char, c_int},
    marker::PhantomData,
    ptr,
};

use crate::{
    common::{span, verbose},
    encode::Param,
    ext::UsizeExt,
    postgres::PgFormat,
};

/// Values, lengths, and formats array of encoded parameters.
///
/// Pointers borrow from the encoded parameter, which must outlive the arrays.
#[derive(Debug)]
pub struct ParamArrays<'p> {
    values: Vec<*const c_char>,
    lengths: Vec<c_int>,
    formats: Vec<c_int>,
    _p: PhantomData<&'p ()>,
}

impl<'p> ParamArrays<'p> {
    /// Collect every column of `param`.
    pub fn new<P: Param>(param: &'p P) -> Self {
        span!("param_arrays", columns = P::COLUMNS);

        let mut values = Vec::with_capacity(P::COLUMNS);
        let mut lengths = Vec::with_capacity(P::COLUMNS);
        let mut formats = Vec::with_capacity(P::COLUMNS);

        for i in 0..P::COLUMNS {
            let data = param.data(i);
            verbose!(column = i, null = data.is_none(), format = ?P::format(i));
            values.push(data.map_or(ptr::null(), |e| e.as_ptr().cast()));
            lengths.push(P::length(i));
            formats.push(P::format(i).format_code().into());
        }

        Self { values, lengths, formats, _p: PhantomData }
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there is no parameter.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Pointer to each value, null pointer for NULL.
    ///
    /// Text value is nul terminated.
    pub fn values(&self) -> &[*const c_char] {
        &self.values
    }

    /// Length of each value, `0` for text value.
    pub fn lengths(&self) -> &[c_int] {
        &self.lengths
    }

    /// Format code of each value.
    pub fn formats(&self) -> &[c_int] {
        &self.formats
    }
}

/// Returns the value bytes as sent in `Bind` message, or [`None`] for NULL.
///
/// Text value is measured at use, up to the nul terminator.
fn bind_value<P: Param>(param: &P, index: usize) -> Option<&[u8]> {
    let data = param.data(index)?;
    Some(match P::format(index) {
        PgFormat::Text => {
            let end = data.iter().position(|e| matches!(e, b'\0')).unwrap_or(data.len());
            &data[..end]
        },
        PgFormat::Binary => &data[..P::length(index) as usize],
    })
}

/// Size of the parameter section written by [`write_bind_params`].
pub fn bind_params_size<P: Param>(param: &P) -> usize {
    // formats len + format codes + values len
    let mut size = 2 + 2 * P::COLUMNS + 2;
    for i in 0..P::COLUMNS {
        size += 4 + bind_value(param, i).map_or(0, <[u8]>::len);
    }
    size
}

/// Write parameter formats and values of `Bind` message.
///
/// <https://www.postgresql.org/docs/current/protocol-message-formats.html#PROTOCOL-MESSAGE-FORMATS-BIND>
///
/// # Panics
///
/// Panics if the number of columns or a value length overflow the protocol integer.
pub fn write_bind_params<P: Param>(param: &P, mut buf: impl BufMut) {
    span!("bind_params", columns = P::COLUMNS);

    let len = P::COLUMNS.to_u16();

    buf.put_u16(len);
    for i in 0..P::COLUMNS {
        buf.put_u16(P::format(i).format_code());
    }

    buf.put_u16(len);
    for i in 0..P::COLUMNS {
        match bind_value(param, i) {
            Some(value) => {
                verbose!(column = i, len = value.len());
                buf.put_i32(value.len().to_i32());
                buf.put_slice(value);
            },
            None => {
                verbose!(column = i, "NULL");
                // -1 indicates a NULL parameter value
                buf.put_i32(-1);
            },
        }
    }
}

#[cfg(test)]
mod test {
    use bytes::{Buf, BytesMut};
    use std::ffi::CStr;

    use super::*;
    use crate::encode::{NULL, encode};

    #[test]
    fn arrays() {
        let param = encode((42i32, "Foo", None::<i64>, true)).unwrap();
        let arrays = ParamArrays::new(&param);

        assert_eq!(arrays.len(), 4);
        assert_eq!(arrays.lengths(), &[4, 0, 8, 0]);
        assert_eq!(arrays.formats(), &[1, 0, 1, 0]);

        let values = arrays.values();
        let int = unsafe { std::slice::from_raw_parts(values[0].cast::<u8>(), 4) };
        assert_eq!(int, &42i32.to_be_bytes());
        let text = unsafe { CStr::from_ptr(values[1]) };
        assert_eq!(text.to_bytes(), b"Foo");
        assert!(values[2].is_null());
        let boolean = unsafe { CStr::from_ptr(values[3]) };
        assert_eq!(boolean.to_bytes(), b"TRUE");
    }

    #[test]
    fn empty_arrays() {
        let param = encode(()).unwrap();
        let arrays = ParamArrays::new(&param);
        assert!(arrays.is_empty());
        assert!(arrays.values().is_empty());
    }

    #[test]
    fn bind_section() {
        let param = encode((7i16, "ab", NULL)).unwrap();
        let mut buf = BytesMut::new();
        write_bind_params(&param, &mut buf);

        assert_eq!(buf.len(), bind_params_size(&param));

        let mut buf = buf.freeze();
        assert_eq!(buf.get_u16(), 3);
        assert_eq!(buf.get_u16(), 1);
        assert_eq!(buf.get_u16(), 0);
        assert_eq!(buf.get_u16(), 0);

        assert_eq!(buf.get_u16(), 3);
        assert_eq!(buf.get_i32(), 2);
        assert_eq!(buf.get_i16(), 7);
        assert_eq!(buf.get_i32(), 2);
        assert_eq!(&buf.split_to(2)[..], b"ab");
        assert_eq!(buf.get_i32(), -1);
        assert!(buf.is_empty());
    }
}
