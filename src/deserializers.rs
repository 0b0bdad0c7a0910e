use chrono::{DateTime, FixedOffset};
use de::Visitor;
use log::warn;
use serde::de;
use serde::{Deserialize, Deserializer};

/// Helpdesk exports are loose about scalar types: ticket numbers arrive as
/// integers or strings and empty custom fields as `null`. All of them land
/// in a `String`, with `null` becoming empty.
///
/// Multi-select fields send a list; its entries are joined with `", "`.
/// Objects carry nothing printable and become empty.
pub fn string_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(AnyScalarVisitor)
}

/// An RFC 3339 timestamp, or `None` when the value is missing, `null` or
/// in some other format ("Unknown", "03/01/2024").
pub fn datetime_or_none<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = string_from_any(deserializer)?;
    if value.trim().is_empty() {
        return Ok(None);
    }
    match DateTime::parse_from_rfc3339(value.trim()) {
        Ok(timestamp) => Ok(Some(timestamp)),
        Err(err) => {
            warn!("Ignoring timestamp '{}': {}", value, err);
            Ok(None)
        }
    }
}

struct Lenient(String);

impl<'de> Deserialize<'de> for Lenient {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        string_from_any(deserializer).map(Lenient)
    }
}

struct AnyScalarVisitor;

impl<'de> Visitor<'de> for AnyScalarVisitor {
    type Value = String;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a string, number, boolean, list or null")
    }

    fn visit_str<E>(self, value: &str) -> Result<String, E>
    where
        E: de::Error,
    {
        Ok(value.to_string())
    }

    fn visit_string<E>(self, value: String) -> Result<String, E>
    where
        E: de::Error,
    {
        Ok(value)
    }

    fn visit_i64<E>(self, value: i64) -> Result<String, E>
    where
        E: de::Error,
    {
        Ok(value.to_string())
    }

    fn visit_u64<E>(self, value: u64) -> Result<String, E>
    where
        E: de::Error,
    {
        Ok(value.to_string())
    }

    fn visit_f64<E>(self, value: f64) -> Result<String, E>
    where
        E: de::Error,
    {
        Ok(value.to_string())
    }

    fn visit_bool<E>(self, value: bool) -> Result<String, E>
    where
        E: de::Error,
    {
        Ok(value.to_string())
    }

    fn visit_unit<E>(self) -> Result<String, E>
    where
        E: de::Error,
    {
        Ok(String::new())
    }

    fn visit_none<E>(self) -> Result<String, E>
    where
        E: de::Error,
    {
        Ok(String::new())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(AnyScalarVisitor)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<String, A::Error>
    where
        A: de::SeqAccess<'de>,
    {
        let mut values = Vec::new();
        while let Some(Lenient(value)) = seq.next_element()? {
            if !value.is_empty() {
                values.push(value);
            }
        }
        Ok(values.join(", "))
    }

    fn visit_map<A>(self, mut map: A) -> Result<String, A::Error>
    where
        A: de::MapAccess<'de>,
    {
        while map
            .next_entry::<de::IgnoredAny, de::IgnoredAny>()?
            .is_some()
        {}
        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Field {
        #[serde(default, deserialize_with = "string_from_any")]
        value: String,
        #[serde(default, deserialize_with = "datetime_or_none")]
        at: Option<DateTime<FixedOffset>>,
    }

    fn field(json: &str) -> Field {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn scalars() {
        assert_eq!("abc", field(r#"{"value": "abc"}"#).value);
        assert_eq!("42", field(r#"{"value": 42}"#).value);
        assert_eq!("-3", field(r#"{"value": -3}"#).value);
        assert_eq!("true", field(r#"{"value": true}"#).value);
        assert_eq!("", field(r#"{"value": null}"#).value);
    }

    #[test]
    fn lists_are_joined() {
        assert_eq!(
            "Laptop, Monitor",
            field(r#"{"value": ["Laptop", "Monitor"]}"#).value
        );
        assert_eq!("1, x", field(r#"{"value": [1, null, "x", []]}"#).value);
        assert_eq!("", field(r#"{"value": []}"#).value);
    }

    #[test]
    fn objects_are_empty() {
        assert_eq!("", field(r#"{"value": {"id": 7, "tags": ["a"]}}"#).value);
    }

    #[test]
    fn timestamps() {
        let parsed = field(r#"{"at": "2024-03-01T10:22:11.000-07:00"}"#).at;
        assert_eq!(
            Some(DateTime::parse_from_rfc3339("2024-03-01T10:22:11-07:00").unwrap()),
            parsed
        );
        assert_eq!(None, field(r#"{"at": "Unknown"}"#).at);
        assert_eq!(None, field(r#"{"at": "03/01/2024"}"#).at);
        assert_eq!(None, field(r#"{"at": null}"#).at);
        assert_eq!(None, field(r#"{}"#).at);
    }
}
