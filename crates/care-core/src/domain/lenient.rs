//! Tolerant field decoders for hand-edited plant data.
//!
//! A wrongly typed optional field decodes as "absent" instead of failing the
//! whole dataset.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub(crate) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

pub(crate) fn required_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text(deserializer)?.unwrap_or_default())
}

/// Anything that is not a positive number decodes as 0 ("never scheduled").
/// Fractions are truncated.
pub(crate) fn frequency<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let freq = match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 1.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    Ok(freq.and_then(|f| u32::try_from(f).ok()).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "frequency")]
        freq: u32,
        #[serde(default, deserialize_with = "text")]
        note: Option<String>,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_frequency_shapes() {
        assert_eq!(probe(r#"{"freq": 7}"#).freq, 7);
        assert_eq!(probe(r#"{"freq": "3"}"#).freq, 3);
        assert_eq!(probe(r#"{"freq": 4.0}"#).freq, 4);
        assert_eq!(probe(r#"{"freq": -2}"#).freq, 0);
        assert_eq!(probe(r#"{"freq": null}"#).freq, 0);
        assert_eq!(probe(r#"{}"#).freq, 0);
    }

    #[test]
    fn test_text_shapes() {
        assert_eq!(probe(r#"{"note": "hi"}"#).note.as_deref(), Some("hi"));
        assert_eq!(probe(r#"{"note": [1]}"#).note, None);
        assert_eq!(probe(r#"{}"#).note, None);
    }
}
