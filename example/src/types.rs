use pgparam::{Json, Param, Result, encode};
use serde::Serialize;
use time::{Date, Month, PrimitiveDateTime, Time};

#[derive(Serialize)]
struct Profile {
    bio: &'static str,
    tags: Vec<&'static str>,
}

pub fn main() -> Result<()> {
    let profile = Json(Profile { bio: "Foo", tags: vec!["bar", "baz"] });
    let profile = encode(&profile)?;
    assert_eq!(profile.data(0), Some(&b"{\"bio\":\"Foo\",\"tags\":[\"bar\",\"baz\"]}\0"[..]));

    let date = Date::from_calendar_date(2025, Month::May, 1).expect("valid date");
    let created = encode(PrimitiveDateTime::new(date, Time::MIDNIGHT))?;
    tracing::info!(?created, "encoded");

    Ok(())
}
