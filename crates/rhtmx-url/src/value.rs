//! Parameter values and their text form
//!
//! Values are plain `serde_json::Value`s so callers can hand over anything
//! serializable. `Value::Null` marks a parameter as explicitly removed.
use serde_json::{Map, Value};

/// Ordered name → value map used for defaults and named parameters.
///
/// Insertion order is preserved (`preserve_order`), which is the order
/// query parameters are emitted in.
pub type Params = Map<String, Value>;

/// Renders a value the way it appears inside a URL (before escaping)
///
/// # Examples
///
/// ```
/// use rhtmx_url::value::render_value;
/// use serde_json::json;
///
/// assert_eq!(render_value(&json!("a b")), "a b");
/// assert_eq!(render_value(&json!(42)), "42");
/// assert_eq!(render_value(&json!(true)), "true");
/// assert_eq!(render_value(&json!([1, "x"])), "1,x");
/// assert_eq!(render_value(&json!({"a": 1})), r#"{"a":1}"#);
/// ```
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(render_value)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// True when a value should be treated as "not provided"
pub(crate) fn is_absent(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}
