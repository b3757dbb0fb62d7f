// File: src/query.rs
// Purpose: Pluggable query-string encoders

use serde_json::Value;

use crate::value::{render_value, Params};

/// Turns leftover parameters into a query string (without the leading `?`)
///
/// Implementations must be pure and return an empty string for an empty
/// map; the caller decides whether to emit `?` from that.
///
/// Any `Fn(&Params) -> String` is an encoder:
///
/// ```
/// use rhtmx_url::{Params, UrlGen};
/// use serde_json::json;
///
/// let urls = UrlGen::new(|params: &Params| {
///     params.keys().cloned().collect::<Vec<_>>().join("+")
/// });
/// let search = urls.generate("/search", Params::new()).unwrap();
/// assert_eq!(search.call(&[json!({"a": 1, "b": 2})]).unwrap(), "/search?a+b");
/// ```
pub trait QueryEncoder: Send + Sync {
    fn encode(&self, params: &Params) -> String;
}

impl<F> QueryEncoder for F
where
    F: Fn(&Params) -> String + Send + Sync,
{
    fn encode(&self, params: &Params) -> String {
        self(params)
    }
}

/// Flat `key=value&...` encoder, the default
///
/// Keys and rendered values are percent-encoded as URI components. Nested
/// values are flattened to text (`[1,2]` → `1,2`).
///
/// Only the RFC 3986 unreserved characters (`A-Z a-z 0-9 - _ . ~`) are left
/// as-is. Unlike JavaScript's `encodeURIComponent`, `!'()*` are escaped too,
/// so `it's(1)!` encodes as `it%27s%281%29%21`.
///
/// # Examples
///
/// ```
/// use rhtmx_url::query::{QueryEncoder, SimpleEncoder};
/// use serde_json::json;
///
/// let params = json!({"q": "a b", "page": 2}).as_object().cloned().unwrap();
/// assert_eq!(SimpleEncoder.encode(&params), "q=a%20b&page=2");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleEncoder;

impl QueryEncoder for SimpleEncoder {
    fn encode(&self, params: &Params) -> String {
        params
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(&render_value(value))
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Bracket-style encoder for nested objects and arrays
///
/// Objects become `a[b]=1`, arrays become `a[]=1&a[]=2`, and the two nest
/// (`a[b][]=1`). Names and values are percent-encoded, brackets are kept
/// literal. Nulls nested inside a structure render as an empty value.
///
/// # Examples
///
/// ```
/// use rhtmx_url::query::{NestedEncoder, QueryEncoder};
/// use serde_json::json;
///
/// let params = json!({"a": 1, "b": {"c": 2, "d": [3, 4]}}).as_object().cloned().unwrap();
/// assert_eq!(NestedEncoder.encode(&params), "a=1&b[c]=2&b[d][]=3&b[d][]=4");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NestedEncoder;

impl QueryEncoder for NestedEncoder {
    fn encode(&self, params: &Params) -> String {
        let mut pairs = Vec::new();
        for (key, value) in params {
            push_nested(&mut pairs, urlencoding::encode(key).into_owned(), value);
        }
        pairs.join("&")
    }
}

fn push_nested(pairs: &mut Vec<String>, prefix: String, value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let name = format!("{}[{}]", prefix, urlencoding::encode(key));
                push_nested(pairs, name, child);
            }
        }
        Value::Array(items) => {
            for item in items {
                push_nested(pairs, format!("{}[]", prefix), item);
            }
        }
        Value::Null => pairs.push(format!("{}=", prefix)),
        scalar => pairs.push(format!(
            "{}={}",
            prefix,
            urlencoding::encode(&render_value(scalar))
        )),
    }
}
