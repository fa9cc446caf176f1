//! Postgres Bound Parameter Encoding
//!
//! Convert rust value into the values, lengths, and formats array that the
//! extended query protocol requires for bound parameters.
//!
//! # Examples
//!
//! Single parameter:
//!
//! ```
//! use pgparam::{Param, PgFormat, encode};
//!
//! # fn app() -> pgparam::Result<()> {
//! let param = encode(420i32)?;
//!
//! assert_eq!(param.data(0), Some(&[0, 0, 1, 164][..]));
//! assert_eq!(<pgparam::Binary<4>>::length(0), 4);
//! assert_eq!(<pgparam::Binary<4>>::format(0), PgFormat::Binary);
//! # Ok(())
//! # }
//! # app().unwrap();
//! ```
//!
//! Multiple parameters, flattened from a tuple:
//!
//! ```
//! use pgparam::{ParamArrays, encode};
//!
//! # fn app() -> pgparam::Result<()> {
//! let name = String::from("Foo");
//! let params = encode((1i64, &name, None::<i32>))?;
//! let arrays = ParamArrays::new(&params);
//!
//! assert_eq!(arrays.len(), 3);
//! assert_eq!(arrays.lengths(), &[8, 0, 4]);
//! assert_eq!(arrays.formats(), &[1, 0, 1]);
//! assert!(arrays.values()[2].is_null());
//! # Ok(())
//! # }
//! # app().unwrap();
//! ```
//!
//! User type, with [`ToParam`]:
//!
//! ```
//! # #[cfg(feature = "macros")]
//! # {
//! use pgparam::{Param, ToParam, encode};
//!
//! #[derive(ToParam)]
//! struct UserId(i32);
//!
//! let param = encode(&UserId(7)).unwrap();
//! assert_eq!(param.data(0), encode(7i32).unwrap().data(0));
//! # }
//! ```

mod common;
mod ext;
mod value;

// Protocol
pub mod postgres;

// Encoding
pub mod byteorder;
mod text;
pub mod encode;
pub mod params;

// External
pub mod types;

mod error;


pub use encode::{Encode, Param, ToParam, encode};
pub use encode::{Binary, Extended, NULL, Null, Optional, Text, Tuple};
pub use params::{ParamArrays, write_bind_params};
pub use postgres::PgFormat;
pub use error::{EncodeError, Result};

#[cfg(feature = "json")]
pub use types::Json;

#[cfg(feature = "macros")]
pub use pgparam_macros::ToParam;
