use chrono::NaiveDate;
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Render a single query parameter value as the string the api expects. Sequences are joined
/// with `,` as the api wants multi-value parameters comma separated instead of repeated.
pub(crate) fn to_query_value<T: serde::Serialize>(value: &T) -> String {
    match serde_json::to_value(value).unwrap_or(Value::Null) {
        Value::Bool(bool) => bool.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(string) => string,
        Value::Array(values) => values
            .into_iter()
            .map(|value| match value {
                Value::Number(number) => number.to_string(),
                Value::String(string) => string,
                other => other.to_string(),
            })
            .collect::<Vec<String>>()
            .join(","),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Air dates are delivered as `yyyy-mm-dd` strings but may also be `null`, empty or plain
/// garbage (`0000-00-00` shows up for some unaired records). Everything which is not a valid
/// date maps to [`None`].
pub(crate) fn deserialize_maybe_empty_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(value.and_then(|raw| NaiveDate::parse_from_str(&raw, "%Y-%m-%d").ok()))
}

/// Some response values are `null` even though they shouldn't be. This is a fix to these
/// events, replacing `null` with the [`Default`] implementation of the corresponding type.
pub(crate) fn deserialize_maybe_null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + serde::de::DeserializeOwned,
{
    let value: Option<T> = Deserialize::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Numbers which the api delivers as strings (`"100"`), as numbers or as `null`, depending on
/// the endpoint's mood.
pub(crate) fn deserialize_number_from_string<'de, D>(
    deserializer: D,
) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => Ok(number.as_u64().map(|n| n as u32)),
        Some(Value::String(string)) => {
            if string.is_empty() {
                Ok(None)
            } else {
                string
                    .parse::<u32>()
                    .map(Some)
                    .map_err(|_| D::Error::custom(format!("not a number: '{string}'")))
            }
        }
        Some(other) => Err(D::Error::custom(format!("not a number: '{other}'"))),
    }
}
