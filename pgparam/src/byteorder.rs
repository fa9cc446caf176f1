//! Host to network byte order normalization.
//!
//! Postgres binary format transmit fixed width integer most significant byte first.

/// Fixed width integer that can be written in network byte order.
///
/// `N` is the wire width in bytes.
pub trait BigEndian<const N: usize>: Copy {
    /// Reorder bytes to big endian.
    fn to_network(self) -> [u8;N];
}

macro_rules! big_endian {
    ($ty:ty, $n:literal) => {
        const _: () = assert!(size_of::<$ty>() == $n, "unexpected integer width");

        impl BigEndian<$n> for $ty {
            #[inline]
            fn to_network(self) -> [u8;$n] {
                self.to_be_bytes()
            }
        }
    };
}

big_endian!(i16, 2);
big_endian!(i32, 4);
big_endian!(i64, 8);

const _: () = assert!(size_of::<f32>() == size_of::<i32>());
const _: () = assert!(size_of::<f64>() == size_of::<i64>());

/// Reinterpret `f32` bits as `i32`.
#[inline]
pub fn f32_bits(value: f32) -> i32 {
    i32::from_ne_bytes(value.to_ne_bytes())
}

/// Reinterpret `f64` bits as `i64`.
#[inline]
pub fn f64_bits(value: f64) -> i64 {
    i64::from_ne_bytes(value.to_ne_bytes())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn network_order() {
        assert_eq!(0x0102i16.to_network(), [1, 2]);
        assert_eq!(0x01020304i32.to_network(), [1, 2, 3, 4]);
        assert_eq!(0x0102030405060708i64.to_network(), [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!((-1i32).to_network(), [0xff; 4]);
        assert_eq!(i16::MIN.to_network(), [0x80, 0]);
    }

    #[test]
    fn float_bits() {
        assert_eq!(f32_bits(0.0), 0);
        assert_eq!(f32_bits(-0.0), i32::MIN);
        assert_eq!(f32_bits(1.0), 0x3f80_0000);
        assert_eq!(f64_bits(-0.0), i64::MIN);
        assert_eq!(f64_bits(1.0), 0x3ff0_0000_0000_0000);
    }
}
