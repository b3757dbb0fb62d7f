//! URL assembly
//!
//! Binds a parsed [`Template`] to defaults, positional arguments and named
//! parameters, then renders host/protocol prefix, escaped path, query
//! string and fragment. Either the full URL comes back or an error that
//! lists every offending name or value; partial URLs are never returned.
//!
//! Path values escape everything outside the unreserved set, including
//! `!'()*`. The anchor is appended as given.

use serde_json::Value;

use crate::error::{Result, UrlError};
use crate::query::QueryEncoder;
use crate::resolve::{ParamSources, ANCHOR_PARAM, HOST_PARAM, PROTOCOL_PARAM};
use crate::segment::{Segment, Template};
use crate::value::{render_value, Params};

/// Generates a URL from a template and its three parameter sources
///
/// # Examples
///
/// ```
/// use rhtmx_url::{assemble, Params, SimpleEncoder, Template};
/// use serde_json::json;
///
/// let template = Template::parse("/users/:user_id/posts/:id").unwrap();
/// let named = json!({"id": 2, "page": 3}).as_object().cloned().unwrap();
///
/// let url = assemble(&template, &Params::new(), &[json!(1)], &named, &SimpleEncoder).unwrap();
/// assert_eq!(url, "/users/1/posts/2?page=3");
/// ```
pub fn assemble(
    template: &Template,
    defaults: &Params,
    positional: &[Value],
    named: &Params,
    encoder: &dyn QueryEncoder,
) -> Result<String> {
    let mut sources = ParamSources::new(defaults, positional, named);
    let mut missing = Vec::new();
    let mut path = Vec::with_capacity(template.segments().len());

    for segment in template.segments() {
        match segment {
            Segment::Literal(text) => path.push(text.clone()),
            Segment::Placeholder(name) => match sources.resolve(name) {
                Some(value) => path.push(urlencoding::encode(&render_value(&value)).into_owned()),
                None => {
                    let marked = format!(":{}", name);
                    if !missing.contains(&marked) {
                        missing.push(marked);
                    }
                }
            },
        }
    }

    let protocol = special_text(sources.resolve_special(PROTOCOL_PARAM));
    let host = special_text(sources.resolve_special(HOST_PARAM));
    let anchor = special_text(sources.resolve_special(ANCHOR_PARAM));

    if !missing.is_empty() {
        return Err(binding_error(UrlError::MissingParams {
            template: template.as_str().to_string(),
            names: missing,
        }));
    }

    let extra: Vec<String> = sources.remaining_positional().map(render_value).collect();
    if !extra.is_empty() {
        return Err(binding_error(UrlError::ExtraParams {
            template: template.as_str().to_string(),
            values: extra,
        }));
    }

    if protocol.is_some() && host.is_none() {
        return Err(binding_error(UrlError::ProtocolWithoutHost {
            template: template.as_str().to_string(),
        }));
    }

    let query = encoder.encode(&sources.leftovers());

    let mut url = String::new();
    if let Some(protocol) = &protocol {
        url.push_str(protocol);
        url.push(':');
    }
    match &host {
        Some(host) => {
            url.push_str("//");
            url.push_str(host);
            url.push('/');
        }
        None => url.push('/'),
    }
    url.push_str(&path.join("/"));
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }
    if let Some(anchor) = &anchor {
        url.push('#');
        url.push_str(anchor);
    }

    tracing::trace!(template = %template, url = %url, "generated url");
    Ok(url)
}

/// Special parameters render as text; `""`, `0` and `false` count as unset
fn special_text(value: Option<Value>) -> Option<String> {
    value
        .filter(|v| !is_falsy(v))
        .map(|v| render_value(&v))
        .filter(|s| !s.is_empty())
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn binding_error(err: UrlError) -> UrlError {
    tracing::debug!(error = %err, "url binding failed");
    err
}
