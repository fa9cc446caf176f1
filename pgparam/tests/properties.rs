use pgparam::{Binary, Extended, Param, PgFormat, encode};
use proptest::prelude::*;

fn text<P: Param>(param: &P) -> String {
    let bytes = param.data(0).expect("not null");
    let (nul, bytes) = bytes.split_last().expect("nul terminated");
    assert_eq!(*nul, 0);
    String::from_utf8(bytes.to_vec()).expect("utf8")
}

#[test]
fn signed_boundary() {
    for v in [i16::MIN, i16::MAX, 0, -1] {
        let p = encode(v).unwrap();
        assert_eq!(i16::from_be_bytes(*p.as_bytes()), v);
    }
    for v in [i32::MIN, i32::MAX, 0, -1] {
        let p = encode(v).unwrap();
        assert_eq!(i32::from_be_bytes(*p.as_bytes()), v);
    }
    for v in [i64::MIN, i64::MAX, 0, -1] {
        let p = encode(v).unwrap();
        assert_eq!(i64::from_be_bytes(*p.as_bytes()), v);
    }
}

#[test]
fn signed_zero_is_distinct() {
    let pos = encode(0.0f32).unwrap();
    let neg = encode(-0.0f32).unwrap();
    assert_ne!(pos.as_bytes(), neg.as_bytes());
    assert_eq!(f32::from_bits(u32::from_be_bytes(*neg.as_bytes())).to_bits(), (-0.0f32).to_bits());

    let pos = encode(0.0f64).unwrap();
    let neg = encode(-0.0f64).unwrap();
    assert_ne!(pos.as_bytes(), neg.as_bytes());
}

proptest! {
    #[test]
    fn i16_round_trip(v: i16) {
        let p = encode(v).unwrap();
        prop_assert_eq!(i16::from_be_bytes(*p.as_bytes()), v);
        prop_assert_eq!(Binary::<2>::length(0), 2);
    }

    #[test]
    fn i32_round_trip(v: i32) {
        let p = encode(&v).unwrap();
        prop_assert_eq!(i32::from_be_bytes(*p.as_bytes()), v);
    }

    #[test]
    fn i64_round_trip(v: i64) {
        let p = encode(v).unwrap();
        prop_assert_eq!(i64::from_be_bytes(*p.as_bytes()), v);
    }

    #[test]
    fn f32_bit_pattern(v: f32) {
        let p = encode(v).unwrap();
        let bits = i32::from_be_bytes(*p.as_bytes());
        prop_assert_eq!(f32::from_bits(bits as u32).to_bits(), v.to_bits());
        prop_assert_eq!(Binary::<4>::format(0), PgFormat::Binary);
    }

    #[test]
    fn f64_bit_pattern(v: f64) {
        let p = encode(v).unwrap();
        let bits = i64::from_be_bytes(*p.as_bytes());
        prop_assert_eq!(f64::from_bits(bits as u64).to_bits(), v.to_bits());
    }

    #[test]
    fn extended_parse_back(v in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
        let rendered = text(&encode(Extended(v)).unwrap());
        let parsed: f64 = rendered.parse().unwrap();
        prop_assert_eq!(parsed.to_bits(), v.to_bits());
    }

    #[test]
    fn unsigned_decimal(v: u64) {
        let rendered = text(&encode(v).unwrap());
        prop_assert_eq!(rendered.parse::<u64>().unwrap(), v);
    }

    #[test]
    fn optional_present_is_direct(v: i32) {
        let direct = encode(v).unwrap();
        let wrapped = encode(Some(v)).unwrap();
        prop_assert_eq!(wrapped.data(0), direct.data(0));
    }

    #[test]
    fn text_without_nul(s in "[^\\x00]*") {
        let rendered = text(&encode(s.as_str()).unwrap());
        prop_assert_eq!(rendered, s);
    }
}
