use std::ffi::{CStr, CString};

use bytes::Bytes;

/// Longest rendering kept inline, nul included.
///
/// Fits any 64 bit integer in decimal.
const INLINE_LEN: usize = 23;

/// Nul terminated bytes backing a text column.
pub(crate) enum ValueRef<'a> {
    Slice(&'a [u8]),
    Inline {
        offset: usize,
        value: [u8;INLINE_LEN],
    },
    Bytes(Bytes),
}

impl<'a> ValueRef<'a> {
    /// Borrow caller owned C string.
    pub fn borrowed(cstr: &'a CStr) -> Self {
        ValueRef::Slice(cstr.to_bytes_with_nul())
    }

    /// Take ownership of C string buffer without copying.
    pub fn owned(cstring: CString) -> ValueRef<'static> {
        ValueRef::Bytes(Bytes::from(cstring.into_bytes_with_nul()))
    }

    /// Static nul terminated bytes.
    pub const fn from_static(bytes: &'static [u8]) -> ValueRef<'static> {
        ValueRef::Slice(bytes)
    }

    /// Copy `text` and append nul.
    ///
    /// Caller must ensure `text` contains no nul.
    pub fn copy_text(text: &str) -> ValueRef<'static> {
        let len = text.len();
        if len >= INLINE_LEN {
            let mut buf = Vec::with_capacity(len + 1);
            buf.extend_from_slice(text.as_bytes());
            buf.push(b'\0');
            return ValueRef::Bytes(buf.into());
        }
        let mut value = [0u8;INLINE_LEN];
        let offset = INLINE_LEN - 1 - len;
        value[offset..INLINE_LEN - 1].copy_from_slice(text.as_bytes());
        ValueRef::Inline { offset, value }
    }

    /// Returns the bytes, nul included.
    pub fn as_slice(&self) -> &[u8] {
        match self {
            ValueRef::Slice(items) => items,
            ValueRef::Inline { offset, value } => &value[*offset..],
            ValueRef::Bytes(bytes) => bytes,
        }
    }
}

impl std::fmt::Debug for ValueRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use crate::ext::FmtExt;
        self.as_slice().lossy().fmt(f)
    }
}

#[cfg(test)]
mod test {
    use super::{INLINE_LEN, ValueRef};

    #[test]
    fn copy_text_inline() {
        let value = ValueRef::copy_text("-9223372036854775808");
        assert!(matches!(value, ValueRef::Inline { .. }));
        assert_eq!(value.as_slice(), b"-9223372036854775808\0");
    }

    #[test]
    fn copy_text_spill() {
        let text = "x".repeat(INLINE_LEN);
        let value = ValueRef::copy_text(&text);
        assert!(matches!(value, ValueRef::Bytes(_)));
        assert_eq!(value.as_slice().len(), INLINE_LEN + 1);
        assert_eq!(value.as_slice().last(), Some(&0));
    }

    #[test]
    fn copy_empty_text() {
        assert_eq!(ValueRef::copy_text("").as_slice(), b"\0");
    }
}
