//! Lenient field decoders.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts a string or a number and keeps it as text.
///
/// Grades and ids come back as either `"11"` or `11` depending on the record.
/// Anything else (null, bool, object) decodes as `None`.
pub(crate) fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Same as [`opt_text`] for identifiers; anything unusable becomes `""`.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_text(deserializer)?.unwrap_or_default())
}
