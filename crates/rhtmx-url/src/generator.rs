//! Route generators
//!
//! A [`RouteGenerator`] owns a compiled template, its route-level defaults
//! and the query encoder, and is called as many times as needed. Nothing in
//! it changes after construction, so it can be cloned or shared across
//! threads freely.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::assemble::assemble;
use crate::error::{Result, UrlError};
use crate::query::QueryEncoder;
use crate::segment::Template;
use crate::value::Params;

/// URL helper for a single template
///
/// # Examples
///
/// ```
/// use rhtmx_url::generate;
/// use serde_json::json;
///
/// let user_post_url = generate("/users/:user_id/posts/:id", json!({})).unwrap();
///
/// assert_eq!(user_post_url.call(&[json!(1), json!(2)]).unwrap(), "/users/1/posts/2");
/// assert_eq!(user_post_url.call(&[json!(1), json!({"id": 2})]).unwrap(), "/users/1/posts/2");
/// assert_eq!(
///     user_post_url.call(&[json!(1), json!(2), json!({"extra_param": 3})]).unwrap(),
///     "/users/1/posts/2?extra_param=3"
/// );
/// assert!(user_post_url.call(&[]).is_err());
/// ```
#[derive(Clone)]
pub struct RouteGenerator {
    template: Template,
    defaults: Params,
    encoder: Arc<dyn QueryEncoder>,
}

impl RouteGenerator {
    /// Compiles a template with route-level defaults
    ///
    /// Fails immediately with [`UrlError::EmptyTemplate`] for an empty template.
    pub fn new(
        template: impl Into<String>,
        defaults: Params,
        encoder: Arc<dyn QueryEncoder>,
    ) -> Result<Self> {
        let template = Template::parse(template)?;
        tracing::debug!(
            template = %template,
            placeholders = template.placeholder_count(),
            defaults = defaults.len(),
            "compiled url generator"
        );

        Ok(Self {
            template,
            defaults,
            encoder,
        })
    }

    /// Like [`RouteGenerator::new`], but takes defaults as any JSON value
    ///
    /// Objects are used as-is and `null` means "no defaults"; anything else
    /// fails with [`UrlError::InvalidDefaults`].
    pub fn from_value(
        template: impl Into<String>,
        defaults: Value,
        encoder: Arc<dyn QueryEncoder>,
    ) -> Result<Self> {
        Self::new(template, params_from_value(defaults)?, encoder)
    }

    /// Generates a URL from a mixed argument list
    ///
    /// The trailing run of JSON objects in `args` are named-parameter maps,
    /// merged left to right (later keys win). Everything before that run is
    /// positional, bound to placeholders in template order. An object that
    /// is followed by a non-object is therefore positional.
    pub fn call(&self, args: &[Value]) -> Result<String> {
        let (positional, named) = split_args(args);
        self.call_with(positional, &named)
    }

    /// Generates a URL from explicitly separated positional and named arguments
    pub fn call_with(&self, positional: &[Value], named: &Params) -> Result<String> {
        assemble(
            &self.template,
            &self.defaults,
            positional,
            named,
            self.encoder.as_ref(),
        )
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn defaults(&self) -> &Params {
        &self.defaults
    }
}

impl fmt::Debug for RouteGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteGenerator")
            .field("template", &self.template.as_str())
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

/// Converts a JSON value into a defaults map
pub(crate) fn params_from_value(value: Value) -> Result<Params> {
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Params::new()),
        other => Err(UrlError::InvalidDefaults {
            found: kind_of(&other).to_string(),
        }),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Splits call arguments into positional values and merged named parameters
pub fn split_args(args: &[Value]) -> (&[Value], Params) {
    let split = args
        .iter()
        .rposition(|arg| !arg.is_object())
        .map_or(0, |last_positional| last_positional + 1);

    let (positional, trailing) = args.split_at(split);
    let mut named = Params::new();
    for map in trailing.iter().filter_map(Value::as_object) {
        for (key, value) in map {
            named.insert(key.clone(), value.clone());
        }
    }

    (positional, named)
}
