use indexmap::IndexMap;

/// A GraphQL input value, as used for parameter and input field default values
/// and for argument inputs handed to
/// [`Field::coerce_arguments()`](crate::types::Field::coerce_arguments).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Value {
    Bool(bool),
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Null,
    Object(IndexMap<String, Value>),
    String(String),
}
impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    /// Converts a JSON value (e.g. a `"default"` entry from a definition
    /// document) into a [`Value`].
    ///
    /// JSON has no notion of enum values, so enum defaults arrive as
    /// [`Value::String`]s. Schema validation accepts a string wherever an enum
    /// value is expected as long as it names a value of that enum.
    pub fn from_json(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(value) => Value::Bool(*value),
            serde_json::Value::Number(num) => {
                if let Some(int) = num.as_i64() {
                    Value::Int(int)
                } else {
                    num.as_f64().map(Value::Float).unwrap_or(Value::Null)
                }
            },
            serde_json::Value::String(value) => Value::String(value.clone()),
            serde_json::Value::Array(values) =>
                Value::List(values.iter().map(Value::from_json).collect()),
            serde_json::Value::Object(entries) =>
                Value::Object(entries.iter().map(|(key, value)|
                    (key.clone(), Value::from_json(value))
                ).collect()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Renders this value as a GraphQL literal.
    pub fn to_graphql_string(&self) -> String {
        match self {
            Self::Bool(value) => value.to_string(),
            Self::Enum(value) => value.clone(),
            Self::Float(value) => format!("{value:?}"),
            Self::Int(value) => value.to_string(),
            Self::List(values) => format!(
                "[{}]",
                values.iter()
                    .map(|value| value.to_graphql_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            Self::Null => "null".to_string(),
            Self::Object(entries) => format!(
                "{{{}}}",
                entries.iter()
                    .map(|(key, value)| format!("{key}: {}", value.to_graphql_string()))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            Self::String(value) => quote_graphql_string(value),
        }
    }
}
impl std::convert::From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
impl std::convert::From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}
impl std::convert::From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
impl std::convert::From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl std::convert::From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl std::convert::From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_graphql_string())
    }
}

pub(crate) fn quote_graphql_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            ch if ch.is_control() => quoted.push_str(&format!("\\u{:04X}", ch as u32)),
            ch => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}
