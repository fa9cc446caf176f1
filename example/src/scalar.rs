use pgparam::{Extended, NULL, Param, ParamArrays, Result, encode};

pub fn main() -> Result<()> {
    // Binary

    let id = encode(420i32)?;
    assert_eq!(id.data(0), Some(&420i32.to_be_bytes()[..]));

    let ratio = encode(0.5f64)?;
    assert_eq!(ratio.data(0), Some(&0.5f64.to_bits().to_be_bytes()[..]));

    // Text

    let flag = encode(true)?;
    assert_eq!(flag.data(0), Some(&b"TRUE\0"[..]));

    let count = encode(u32::MAX)?;
    assert_eq!(count.data(0), Some(&b"4294967295\0"[..]));

    let amount = encode(Extended(f64::INFINITY))?;
    assert_eq!(amount.data(0), Some(&b"INF\0"[..]));

    let name = String::from("Deez");
    let name = encode(&name)?;
    tracing::info!(?name, "encoded");

    // Null

    let null = encode(NULL)?;
    let arrays = ParamArrays::new(&null);
    assert!(arrays.values()[0].is_null());

    // Error

    let err = encode("nul\0byte").unwrap_err();
    tracing::info!("{err}");

    Ok(())
}
