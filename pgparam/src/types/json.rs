use serde::Serialize;

use crate::{
    Encode,
    encode::Text,
    error::Result,
};

/// Encode value as postgres `json` or `jsonb` text.
///
/// # Errors
///
/// Returns [`EncodeError::Json`][crate::EncodeError::Json] if [`Serialize`]
/// implementation decide to fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Json<T>(pub T);

fn to_text<T: Serialize + ?Sized>(value: &T) -> Result<Text<'static>> {
    let json = serde_json::to_string(value)?;
    // serializer escapes control character, a raw nul is never produced
    Text::copy_from_str(&json)
}

impl<T: Serialize> Encode for Json<T> {
    type Param = Text<'static>;

    fn encode(self) -> Result<Self::Param> {
        to_text(&self.0)
    }
}

impl<T: Serialize> Encode for &Json<T> {
    type Param = Text<'static>;

    fn encode(self) -> Result<Self::Param> {
        to_text(&self.0)
    }
}

impl<T: Serialize> Serialize for Json<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}
