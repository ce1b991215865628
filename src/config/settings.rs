//! Typed plugin settings.
//!
//! The plugin receives its settings as an untyped payload and decodes them
//! once, when it is constructed. None of the fields affect the analysis yet.

use crate::errors::Result;
use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub one: String,
    #[serde(default)]
    pub two: Vec<Element>,
    #[serde(default)]
    pub three: Element,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Element {
    #[serde(default)]
    pub name: String,
}

impl Settings {
    /// Decode an untyped settings payload. `null` yields the defaults;
    /// unknown keys and mistyped values are rejected.
    pub fn decode(payload: Value) -> Result<Self> {
        let unexpected = match payload {
            Value::Null => return Ok(Self::default()),
            Value::Object(table) => return Ok(serde_json::from_value(Value::Object(table))?),
            Value::Bool(b) => Unexpected::Bool(b),
            Value::Number(_) => Unexpected::Other("number"),
            Value::String(_) => Unexpected::Other("string"),
            Value::Array(_) => Unexpected::Seq,
        };
        Err(serde_json::Error::invalid_type(unexpected, &"a settings table").into())
    }

    /// Convert a TOML `[settings]` table into the untyped payload form
    pub fn payload_from_toml(table: &toml::Table) -> Result<Value> {
        Ok(serde_json::to_value(table)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_all_fields() {
        let settings = Settings::decode(json!({
            "one": "Foo",
            "two": [{ "name": "bar" }],
            "three": { "name": "bar" },
        }))
        .unwrap();

        assert_eq!(settings.one, "Foo");
        assert_eq!(settings.two, vec![Element { name: "bar".into() }]);
        assert_eq!(settings.three.name, "bar");
    }

    #[test]
    fn test_decode_null_and_empty_give_defaults() {
        assert_eq!(Settings::decode(json!(null)).unwrap(), Settings::default());
        assert_eq!(Settings::decode(json!({})).unwrap(), Settings::default());
    }

    #[test]
    fn test_decode_rejects_unknown_keys() {
        let err = Settings::decode(json!({ "four": 4 })).unwrap_err();
        assert!(err.to_string().contains("four"));
    }

    #[test]
    fn test_decode_rejects_wrong_types() {
        assert!(Settings::decode(json!({ "one": 1 })).is_err());
        assert!(Settings::decode(json!({ "two": { "name": "x" } })).is_err());
        assert!(Settings::decode(json!(["one"])).is_err());
    }

    #[test]
    fn test_decode_rejects_non_table_payloads() {
        let positional = json!(["Foo", [{ "name": "a" }], { "name": "b" }]);
        let err = Settings::decode(positional).unwrap_err();
        assert!(matches!(err, crate::Error::Settings(_)));
        assert!(err.to_string().contains("a settings table"));

        assert!(Settings::decode(json!("Foo")).is_err());
        assert!(Settings::decode(json!(7)).is_err());
        assert!(Settings::decode(json!(true)).is_err());
    }

    #[test]
    fn test_payload_from_toml_table() {
        let table: toml::Table = toml::from_str(
            r#"
            one = "x"
            three = { name = "y" }
            "#,
        )
        .unwrap();

        let payload = Settings::payload_from_toml(&table).unwrap();
        let settings = Settings::decode(payload).unwrap();
        assert_eq!(settings.one, "x");
        assert_eq!(settings.three.name, "y");
    }
}
