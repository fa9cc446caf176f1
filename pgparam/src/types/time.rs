use time::{
    Date, PrimitiveDateTime, UtcDateTime,
    format_description::{BorrowedFormatItem as I, Component as C, modifier},
};

use crate::{Encode, encode::Text, error::Result};

macro_rules! encode {
    ($ty:ty, $desc:ident) => {
        impl Encode for $ty {
            type Param = Text<'static>;

            fn encode(self) -> Result<Self::Param> {
                Text::copy_from_str(&self.format(&$desc)?)
            }
        }

        impl Encode for &$ty {
            type Param = Text<'static>;

            fn encode(self) -> Result<Self::Param> {
                Text::copy_from_str(&self.format(&$desc)?)
            }
        }

        impl Encode for &&$ty {
            type Param = Text<'static>;

            fn encode(self) -> Result<Self::Param> {
                Text::copy_from_str(&self.format(&$desc)?)
            }
        }
    };
}

encode!(Date, DATE);
encode!(PrimitiveDateTime, TIMESTAMP);
encode!(UtcDateTime, TIMESTAMPTZ);

const DATE: &[I<'_>] = &[
    I::Component(C::Year(modifier::Year::default())),
    I::Literal(b"-"),
    I::Component(C::Month(modifier::Month::default())),
    I::Literal(b"-"),
    I::Component(C::Day(modifier::Day::default())),
];

const TIMESTAMP: &[I<'_>] = &[
    I::Compound(DATE),
    I::Literal(b" "),
    I::Component(C::Hour(modifier::Hour::default())),
    I::Literal(b":"),
    I::Component(C::Minute(modifier::Minute::default())),
    I::Literal(b":"),
    I::Component(C::Second(modifier::Second::default())),
    I::Literal(b"."),
    I::Component(C::Subsecond(modifier::Subsecond::default())),
];

const TIMESTAMPTZ: &[I<'_>] = &[
    I::Compound(TIMESTAMP),
    I::Literal(b"+00"),
];
