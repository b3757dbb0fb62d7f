//! Default scopes
//!
//! Lets a group of route generators share a base set of defaults (most
//! often `_host`). Route-level defaults always win over the scope's.

use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;
use crate::generator::{params_from_value, RouteGenerator};
use crate::query::QueryEncoder;
use crate::value::Params;

/// Generator factory handed to a [`with_defaults`](crate::UrlGen::with_defaults) callback
pub struct DefaultScope<'a> {
    global: &'a Params,
    encoder: &'a Arc<dyn QueryEncoder>,
}

impl<'a> DefaultScope<'a> {
    pub(crate) fn new(global: &'a Params, encoder: &'a Arc<dyn QueryEncoder>) -> Self {
        Self { global, encoder }
    }

    /// Builds a generator whose defaults are `local` plus every scope default
    /// whose key `local` does not already have (a local `null` included)
    pub fn generate(&self, template: impl Into<String>, local: Params) -> Result<RouteGenerator> {
        RouteGenerator::new(template, merge_defaults(self.global, local), Arc::clone(self.encoder))
    }

    /// [`DefaultScope::generate`] with defaults given as a JSON value
    pub fn generate_value(&self, template: impl Into<String>, local: Value) -> Result<RouteGenerator> {
        self.generate(template, params_from_value(local)?)
    }

    /// The scope's own defaults
    pub fn globals(&self) -> &Params {
        self.global
    }
}

/// Fills in `global` entries missing from `local`
pub fn merge_defaults(global: &Params, mut local: Params) -> Params {
    for (key, value) in global {
        if !local.contains_key(key) {
            local.insert(key.clone(), value.clone());
        }
    }
    local
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SimpleEncoder;
    use serde_json::json;

    fn params(value: Value) -> Params {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_merge_keeps_local() {
        let merged = merge_defaults(
            &params(json!({"_host": "a.com", "lang": "en"})),
            params(json!({"_host": "b.com"})),
        );
        assert_eq!(merged["_host"], json!("b.com"));
        assert_eq!(merged["lang"], json!("en"));
    }

    #[test]
    fn test_local_null_blocks_global() {
        let merged = merge_defaults(&params(json!({"_host": "a.com"})), params(json!({"_host": null})));
        assert_eq!(merged["_host"], Value::Null);
    }

    #[test]
    fn test_scope_generate() {
        let global = params(json!({"_host": "api.example.com"}));
        let encoder: Arc<dyn QueryEncoder> = Arc::new(SimpleEncoder);
        let scope = DefaultScope::new(&global, &encoder);

        let user_url = scope.generate("/users/:id", Params::new()).unwrap();
        assert_eq!(user_url.call(&[json!(1)]).unwrap(), "//api.example.com/users/1");
        assert_eq!(scope.globals().len(), 1);
    }
}
