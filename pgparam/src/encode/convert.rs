use super::Encode;
use crate::error::Result;

/// Type that can be bound by converting into another encodable type.
///
/// Implementing [`ToParam`] is all that is required for a type to be used
/// as parameter, no registration needed. The conversion target can itself
/// be a [`ToParam`] type, as long as the chain ends in a built in encoding.
///
/// For single field struct, this trait can be derived.
///
/// # Examples
///
/// ```
/// use pgparam::{Param, ToParam, encode};
///
/// struct Meters(i32);
///
/// impl ToParam for Meters {
///     type Target = i32;
///
///     fn to_param(&self) -> i32 {
///         self.0
///     }
/// }
///
/// let param = encode(&Meters(420)).unwrap();
/// assert_eq!(param.data(0), Some(&420i32.to_be_bytes()[..]));
/// ```
pub trait ToParam {
    /// The type this value is encoded as.
    type Target: Encode;

    /// Convert into the encodable type.
    fn to_param(&self) -> Self::Target;
}

impl<T: ToParam + ?Sized> ToParam for &T {
    type Target = T::Target;

    fn to_param(&self) -> Self::Target {
        T::to_param(self)
    }
}

impl<T: ToParam> Encode for T {
    type Param = <T::Target as Encode>::Param;

    fn encode(self) -> Result<Self::Param> {
        self.to_param().encode()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::encode::{Param, encode};

    struct Meters(i32);

    impl ToParam for Meters {
        type Target = i32;

        fn to_param(&self) -> i32 {
            self.0
        }
    }

    /// Conversion chain, `Height -> Meters -> i32`.
    struct Height(Meters);

    impl ToParam for Height {
        type Target = Meters;

        fn to_param(&self) -> Meters {
            Meters(self.0.0)
        }
    }

    enum Level {
        Low,
        High,
    }

    impl ToParam for Level {
        type Target = &'static str;

        fn to_param(&self) -> &'static str {
            match self {
                Level::Low => "low",
                Level::High => "high",
            }
        }
    }

    #[test]
    fn same_as_converted() {
        let direct = encode(420i32).unwrap();
        assert_eq!(encode(Meters(420)).unwrap().data(0), direct.data(0));
        assert_eq!(encode(&Meters(420)).unwrap().data(0), direct.data(0));
        assert_eq!(encode(&&Meters(420)).unwrap().data(0), direct.data(0));
    }

    #[test]
    fn chained() {
        let p = encode(Height(Meters(-1))).unwrap();
        assert_eq!(p.data(0), Some(&[0xff; 4][..]));
    }

    #[test]
    fn inside_combinator() {
        let p = encode((Level::High, Some(Meters(1)), None::<Level>)).unwrap();
        assert_eq!(p.data(0), Some(&b"high\0"[..]));
        assert_eq!(p.data(1), Some(&[0, 0, 0, 1][..]));
        assert_eq!(p.data(2), None);
        assert_eq!(encode(Level::Low).unwrap().data(0), Some(&b"low\0"[..]));
    }
}
