use super::{Encode, Param, assert_column};
use crate::{error::Result, postgres::PgFormat};

/// Parameter that can be NULL.
///
/// The wrapped parameter must occupy exactly one column. Length and format is
/// always forwarded from the wrapped parameter, so NULL does not change the
/// format negotiated for the column.
///
/// Wrapping a multi column parameter fails to compile:
///
/// ```compile_fail
/// let _ = pgparam::encode(Some((1i32, 2i32)));
/// ```
#[derive(Debug)]
pub struct Optional<P> {
    inner: Option<P>,
}

impl<P: Param> Optional<P> {
    const SINGLE_COLUMN: () = assert!(P::COLUMNS == 1, "optional parameter must occupy exactly one column");

    fn new(inner: Option<P>) -> Self {
        let () = Self::SINGLE_COLUMN;
        Self { inner }
    }

    /// Returns `true` if parameter is NULL.
    pub const fn is_null(&self) -> bool {
        self.inner.is_none()
    }
}

impl<P: Param> Param for Optional<P> {
    const COLUMNS: usize = 1;

    fn data(&self, index: usize) -> Option<&[u8]> {
        assert_column::<Self>(index);
        self.inner.as_ref().and_then(|e| e.data(index))
    }

    fn length(index: usize) -> i32 {
        assert_column::<Self>(index);
        P::length(index)
    }

    fn format(index: usize) -> PgFormat {
        assert_column::<Self>(index);
        P::format(index)
    }
}

impl<T: Encode> Encode for Option<T> {
    type Param = Optional<T::Param>;

    fn encode(self) -> Result<Self::Param> {
        Ok(Optional::new(self.map(T::encode).transpose()?))
    }
}

impl<'a, T> Encode for &'a Option<T>
where
    &'a T: Encode,
{
    type Param = Optional<<&'a T as Encode>::Param>;

    fn encode(self) -> Result<Self::Param> {
        Ok(Optional::new(self.as_ref().map(|e| e.encode()).transpose()?))
    }
}

#[cfg(test)]
mod test {
    use std::ffi::{CStr, CString};

    use super::*;
    use crate::encode::{Binary, Extended, Text, encode};

    fn assert_null<P: Param>(param: &Optional<P>) {
        assert!(param.is_null());
        assert_eq!(param.data(0), None);
        assert_eq!(Optional::<P>::format(0), P::format(0));
        assert_eq!(Optional::<P>::length(0), P::length(0));
    }

    #[test]
    fn absent_keeps_format() {
        assert_null(&encode(None::<i16>).unwrap());
        assert_null(&encode(None::<i32>).unwrap());
        assert_null(&encode(None::<i64>).unwrap());
        assert_null(&encode(None::<f32>).unwrap());
        assert_null(&encode(None::<f64>).unwrap());
        assert_null(&encode(None::<bool>).unwrap());
        assert_null(&encode(None::<u64>).unwrap());
        assert_null(&encode(None::<String>).unwrap());
        assert_null(&encode(None::<Extended>).unwrap());
        assert_null(&encode(&None::<i8>).unwrap());
        assert_null(&encode(None::<char>).unwrap());
        assert_null(&encode(None::<u8>).unwrap());
        assert_null(&encode(None::<u16>).unwrap());
        assert_null(&encode(None::<u32>).unwrap());
        assert_null(&encode(None::<i128>).unwrap());
        assert_null(&encode(None::<usize>).unwrap());
        assert_null(&encode(None::<&CStr>).unwrap());
        assert_null(&encode(None::<CString>).unwrap());
        assert_null(&encode(None::<Vec<u8>>).unwrap());
        assert_null(&encode(None::<&str>).unwrap());

        assert_eq!(Optional::<Binary<8>>::format(0), PgFormat::Binary);
        assert_eq!(Optional::<Binary<8>>::length(0), 8);
        assert_eq!(Optional::<Text>::format(0), PgFormat::Text);
    }

    #[test]
    fn present_is_transparent() {
        let direct = encode(-7i64).unwrap();
        let wrapped = encode(Some(-7i64)).unwrap();
        assert!(!wrapped.is_null());
        assert_eq!(wrapped.data(0), direct.data(0));

        let value = Some(String::from("Foo"));
        let direct = encode(value.as_ref().unwrap()).unwrap();
        let wrapped = encode(&value).unwrap();
        assert_eq!(wrapped.data(0), direct.data(0));
        assert_eq!(wrapped.data(0), Some(&b"Foo\0"[..]));
    }

    #[test]
    fn borrowed_reference() {
        let x = 5i32;
        let value = Some(&x);
        let p = encode(&value).unwrap();
        assert_eq!(p.data(0), Some(&[0, 0, 0, 5][..]));

        let name = String::from("Foo");
        let p = encode(&Some(&name)).unwrap();
        assert_eq!(p.data(0), Some(&b"Foo\0"[..]));
        assert_null(&encode(&None::<&String>).unwrap());
    }

    #[test]
    fn nested() {
        let p = encode(Some(None::<i32>)).unwrap();
        assert_eq!(p.data(0), None);
        assert_eq!(Optional::<Optional<Binary<4>>>::format(0), PgFormat::Binary);

        let p = encode(Some(Some(1i32))).unwrap();
        assert_eq!(p.data(0), Some(&[0, 0, 0, 1][..]));
    }

    #[test]
    fn error_propagates() {
        assert!(encode(Some("a\0")).is_err());
        assert!(encode(None::<&str>).is_ok());
    }
}
