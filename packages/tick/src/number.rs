// Indexer number decoding
//
// The indexer returns big integers as decimal strings and small ones as
// JSON numbers, sometimes for the same field.

use std::fmt::Display;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString<T> {
    Number(T),
    String(String),
}

impl<T> NumberOrString<T>
where
    T: FromStr,
    T::Err: Display,
{
    pub fn into_value(self) -> Result<T, String> {
        match self {
            NumberOrString::Number(value) => Ok(value),
            NumberOrString::String(text) => text
                .trim()
                .parse()
                .map_err(|err| format!("invalid number {:?}: {}", text, err)),
        }
    }
}

/// `deserialize_with` helper accepting either a JSON number or a decimal string
pub fn number_or_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    NumberOrString::<T>::deserialize(deserializer)?
        .into_value()
        .map_err(de::Error::custom)
}
