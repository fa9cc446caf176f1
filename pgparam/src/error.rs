//! `pgparam` error types.
use std::{ffi::NulError, fmt};

/// A specialized [`Result`] type for parameter encoding.
pub type Result<T, E = EncodeError> = std::result::Result<T, E>;

/// An error when constructing a parameter encoder.
///
/// Only value dependent failure is reported here. Unsupported types are
/// rejected at compile time.
pub enum EncodeError {
    /// Text formatter failed to render the value.
    Format(fmt::Error),
    /// Text value contains a nul byte at the given position.
    ///
    /// Text parameters are transmitted nul terminated, an interior nul would
    /// silently truncate the value.
    InteriorNul(usize),
    /// Failed to serialize using `serde_json`.
    #[cfg(feature = "json")]
    Json(serde_json::Error),
    /// Failed to format date time using `time`.
    #[cfg(feature = "time")]
    Time(time::error::Format),
}

macro_rules! from {
    (<$ty:ty>$pat:pat => $body:expr) => {
        impl From<$ty> for EncodeError {
            fn from($pat: $ty) -> Self {
                $body
            }
        }
    };
}

from!(<fmt::Error>e => Self::Format(e));
from!(<NulError>e => Self::InteriorNul(e.nul_position()));
#[cfg(feature = "json")]
from!(<serde_json::Error>e => Self::Json(e));
#[cfg(feature = "time")]
from!(<time::error::Format>e => Self::Time(e));

impl std::error::Error for EncodeError { }

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("failed to encode parameter, ")?;
        match self {
            Self::Format(e) => write!(f, "{e}"),
            Self::InteriorNul(at) => write!(f, "text contains nul byte at {at}"),
            #[cfg(feature = "json")]
            Self::Json(e) => write!(f, "{e}"),
            #[cfg(feature = "time")]
            Self::Time(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Debug for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}
