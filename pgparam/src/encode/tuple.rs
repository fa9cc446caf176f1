use super::{Encode, Param, assert_column};
use crate::{error::Result, postgres::PgFormat};

/// Multiple parameter flattened into consecutive columns.
///
/// Column index is translated into `(child, inner)` index through a table
/// of child start offset computed at compile time.
#[derive(Debug)]
pub struct Tuple<T>(T);

impl<T> Tuple<T> {
    /// Returns the child parameters.
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// Start offset of each child, from child column counts.
const fn offsets<const N: usize>(widths: [usize;N]) -> [usize;N] {
    let mut offsets = [0;N];
    let mut i = 1;
    while i < N {
        offsets[i] = offsets[i - 1] + widths[i - 1];
        i += 1;
    }
    offsets
}

/// Find `(child, inner)` that contains flattened `index`.
///
/// Zero width child never contains any index.
const fn locate(widths: &[usize], offsets: &[usize], index: usize) -> (usize, usize) {
    let mut i = 0;
    while i < widths.len() {
        if index < offsets[i] + widths[i] {
            return (i, index - offsets[i]);
        }
        i += 1;
    }
    panic!("column index out of bounds")
}

impl Param for Tuple<()> {
    const COLUMNS: usize = 0;

    fn data(&self, index: usize) -> Option<&[u8]> {
        assert_column::<Self>(index);
        unreachable!()
    }

    fn length(index: usize) -> i32 {
        assert_column::<Self>(index);
        unreachable!()
    }

    fn format(index: usize) -> PgFormat {
        assert_column::<Self>(index);
        unreachable!()
    }
}

impl Encode for () {
    type Param = Tuple<()>;

    fn encode(self) -> Result<Self::Param> {
        Ok(Tuple(()))
    }
}

impl Encode for &() {
    type Param = Tuple<()>;

    fn encode(self) -> Result<Self::Param> {
        Ok(Tuple(()))
    }
}

macro_rules! tuple {
    ($n:literal; $($t:ident $p:ident $i:tt),*) => {
        impl<$($p: Param),*> Tuple<($($p,)*)> {
            const WIDTHS: [usize;$n] = [$($p::COLUMNS),*];
            const OFFSETS: [usize;$n] = offsets(Self::WIDTHS);

            /// Translate flattened column `index` into `(child, inner)` index.
            ///
            /// # Panics
            ///
            /// Panics if `index` is out of bounds.
            pub const fn locate(index: usize) -> (usize, usize) {
                locate(&Self::WIDTHS, &Self::OFFSETS, index)
            }
        }

        impl<$($p: Param),*> Param for Tuple<($($p,)*)> {
            const COLUMNS: usize = 0 $(+ $p::COLUMNS)*;

            fn data(&self, index: usize) -> Option<&[u8]> {
                assert_column::<Self>(index);
                match Self::locate(index) {
                    $(($i, inner) => self.0.$i.data(inner),)*
                    _ => unreachable!(),
                }
            }

            fn length(index: usize) -> i32 {
                assert_column::<Self>(index);
                match Self::locate(index) {
                    $(($i, inner) => $p::length(inner),)*
                    _ => unreachable!(),
                }
            }

            fn format(index: usize) -> PgFormat {
                assert_column::<Self>(index);
                match Self::locate(index) {
                    $(($i, inner) => $p::format(inner),)*
                    _ => unreachable!(),
                }
            }
        }

        impl<$($t: Encode),*> Encode for ($($t,)*) {
            type Param = Tuple<($($t::Param,)*)>;

            fn encode(self) -> Result<Self::Param> {
                Ok(Tuple(($(self.$i.encode()?,)*)))
            }
        }

        impl<'a, $($t),*> Encode for &'a ($($t,)*)
        where
            $(&'a $t: Encode),*
        {
            type Param = Tuple<($(<&'a $t as Encode>::Param,)*)>;

            fn encode(self) -> Result<Self::Param> {
                Ok(Tuple(($((&self.$i).encode()?,)*)))
            }
        }
    };
}

tuple!(1; T0 P0 0);
tuple!(2; T0 P0 0, T1 P1 1);
tuple!(3; T0 P0 0, T1 P1 1, T2 P2 2);
tuple!(4; T0 P0 0, T1 P1 1, T2 P2 2, T3 P3 3);
tuple!(5; T0 P0 0, T1 P1 1, T2 P2 2, T3 P3 3, T4 P4 4);
tuple!(6; T0 P0 0, T1 P1 1, T2 P2 2, T3 P3 3, T4 P4 4, T5 P5 5);
tuple!(7; T0 P0 0, T1 P1 1, T2 P2 2, T3 P3 3, T4 P4 4, T5 P5 5, T6 P6 6);
tuple!(8; T0 P0 0, T1 P1 1, T2 P2 2, T3 P3 3, T4 P4 4, T5 P5 5, T6 P6 6, T7 P7 7);
tuple!(9; T0 P0 0, T1 P1 1, T2 P2 2, T3 P3 3, T4 P4 4, T5 P5 5, T6 P6 6, T7 P7 7, T8 P8 8);
tuple!(10; T0 P0 0, T1 P1 1, T2 P2 2, T3 P3 3, T4 P4 4, T5 P5 5, T6 P6 6, T7 P7 7, T8 P8 8, T9 P9 9);
tuple!(11; T0 P0 0, T1 P1 1, T2 P2 2, T3 P3 3, T4 P4 4, T5 P5 5, T6 P6 6, T7 P7 7, T8 P8 8, T9 P9 9, T10 P10 10);
tuple!(12; T0 P0 0, T1 P1 1, T2 P2 2, T3 P3 3, T4 P4 4, T5 P5 5, T6 P6 6, T7 P7 7, T8 P8 8, T9 P9 9, T10 P10 10, T11 P11 11);
