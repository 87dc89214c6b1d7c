use serde::{Deserialize, Serialize};

/// Default value of a field, tagged by kind.
///
/// ```json
/// { "kind": "string", "value": "guest" }
/// { "kind": "generated", "name": "now" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DefaultValue {
    String {
        value: String,
    },
    Number {
        value: serde_json::Number,
    },
    Boolean {
        value: bool,
    },
    /// Member of an enum, e.g. `USER`.
    Enum {
        value: String,
    },
    /// Function-style value computed by the database or client, e.g. `now()`.
    Generated {
        name: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        args: Vec<serde_json::Value>,
    },
    /// Any kind this crate does not know about.
    #[serde(other)]
    Unsupported,
}

impl DefaultValue {
    pub fn string(value: impl Into<String>) -> Self {
        DefaultValue::String {
            value: value.into(),
        }
    }

    pub fn enum_member(value: impl Into<String>) -> Self {
        DefaultValue::Enum {
            value: value.into(),
        }
    }

    pub fn generated(name: impl Into<String>) -> Self {
        DefaultValue::Generated {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Returns true for `autoincrement()`.
    pub fn is_autoincrement(&self) -> bool {
        matches!(self, DefaultValue::Generated { name, .. } if name == "autoincrement")
    }

    /// Returns true for function-style defaults.
    pub fn is_generated(&self) -> bool {
        matches!(self, DefaultValue::Generated { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r#"{"kind":"string","value":"USER"}"#, DefaultValue::string("USER"))]
    #[case(r#"{"kind":"enum","value":"ADMIN"}"#, DefaultValue::enum_member("ADMIN"))]
    #[case(r#"{"kind":"boolean","value":false}"#, DefaultValue::Boolean { value: false })]
    #[case(r#"{"kind":"generated","name":"now"}"#, DefaultValue::generated("now"))]
    #[case(r#"{"kind":"sequence","value":1}"#, DefaultValue::Unsupported)]
    fn test_deserialize(#[case] json: &str, #[case] expected: DefaultValue) {
        let parsed: DefaultValue = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn number_keeps_literal_form() {
        let parsed: DefaultValue = serde_json::from_str(r#"{"kind":"number","value":2.5}"#).unwrap();
        match parsed {
            DefaultValue::Number { value } => assert_eq!(value.to_string(), "2.5"),
            other => panic!("unexpected default: {other:?}"),
        }
    }

    #[test]
    fn generated_args_are_kept() {
        let parsed: DefaultValue =
            serde_json::from_str(r#"{"kind":"generated","name":"dbgenerated","args":["gen_random_uuid()"]}"#)
                .unwrap();
        assert_eq!(
            parsed,
            DefaultValue::Generated {
                name: "dbgenerated".into(),
                args: vec![serde_json::Value::String("gen_random_uuid()".into())],
            }
        );
    }

    #[test]
    fn test_is_autoincrement() {
        assert!(DefaultValue::generated("autoincrement").is_autoincrement());
        assert!(!DefaultValue::generated("now").is_autoincrement());
        assert!(!DefaultValue::string("autoincrement").is_autoincrement());
    }
}
