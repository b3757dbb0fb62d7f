//! # RHTMX URL
//!
//! URL helpers generated from path templates with named placeholders:
//! - Literal and placeholder segments (`/users/:user_id/posts/:id`)
//! - Positional arguments, named parameters and pre-applied defaults
//! - Leftover parameters rendered as a query string (pluggable encoder)
//! - Special parameters `_host`, `_protocol` and `_anchor`
//! - Default scopes shared by a group of helpers
//! - Named route tables loaded from `urls.toml`
//!
//! ## Parameter Precedence
//!
//! For every placeholder, lowest to highest:
//! 1. Route default (or scope default)
//! 2. Next positional argument, consumed left to right in template order
//! 3. Named parameter
//!
//! A `null` at any level removes the value. A placeholder that ends up
//! without a value is an error, as is a positional argument nobody
//! claimed. Errors list every offending name or value at once.
//!
//! ## Example
//!
//! ```
//! use rhtmx_url::generate;
//! use serde_json::json;
//!
//! let user_post_url = generate("/users/:user_id/posts/:id", json!({})).unwrap();
//!
//! assert_eq!(user_post_url.call(&[json!(1), json!(2)]).unwrap(), "/users/1/posts/2");
//! assert_eq!(
//!     user_post_url.call(&[json!({"user_id": 1, "id": 2, "_host": "api.example.com"})]).unwrap(),
//!     "//api.example.com/users/1/posts/2"
//! );
//! assert_eq!(
//!     user_post_url.call(&[json!("a/b"), json!(2), json!({"_anchor": "comments"})]).unwrap(),
//!     "/users/a%2Fb/posts/2#comments"
//! );
//! ```

use std::sync::Arc;

use serde_json::Value;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod assemble;
pub mod config;
pub mod error;
pub mod generator;
pub mod query;
pub mod resolve;
pub mod scope;
pub mod segment;
pub mod table;
pub mod value;

pub use assemble::assemble;
pub use config::{RouteConfig, UrlConfig};
pub use error::{Result, UrlError};
pub use generator::{split_args, RouteGenerator};
pub use query::{NestedEncoder, QueryEncoder, SimpleEncoder};
pub use resolve::{is_special_param, ANCHOR_PARAM, HOST_PARAM, PROTOCOL_PARAM, SPECIAL_PARAMS};
pub use scope::{merge_defaults, DefaultScope};
pub use segment::{classify_segment, Segment, Template};
pub use table::RouteTable;
pub use value::{render_value, Params};

// ============================================================================
// Entry Surface
// ============================================================================

/// URL helper factory bound to one query encoder
///
/// # Examples
///
/// ```
/// use rhtmx_url::{NestedEncoder, Params, UrlGen};
/// use serde_json::json;
///
/// let urls = UrlGen::new(NestedEncoder);
/// let home_url = urls.generate("/", Params::new()).unwrap();
///
/// assert_eq!(
///     home_url.call(&[json!({"a": 1, "b": {"c": 2, "d": 3}})]).unwrap(),
///     "/?a=1&b[c]=2&b[d]=3"
/// );
/// ```
#[derive(Clone)]
pub struct UrlGen {
    encoder: Arc<dyn QueryEncoder>,
}

impl UrlGen {
    pub fn new(encoder: impl QueryEncoder + 'static) -> Self {
        Self {
            encoder: Arc::new(encoder),
        }
    }

    /// Shares an encoder that is already behind an `Arc`
    pub fn with_encoder(encoder: Arc<dyn QueryEncoder>) -> Self {
        Self { encoder }
    }

    /// Compiles a URL helper for `template` with route-level defaults
    pub fn generate(&self, template: impl Into<String>, defaults: Params) -> Result<RouteGenerator> {
        RouteGenerator::new(template, defaults, Arc::clone(&self.encoder))
    }

    /// [`UrlGen::generate`] with defaults given as a JSON value (object or null)
    pub fn generate_value(&self, template: impl Into<String>, defaults: Value) -> Result<RouteGenerator> {
        RouteGenerator::from_value(template, defaults, Arc::clone(&self.encoder))
    }

    /// Runs `f` with a generator factory that applies `global` defaults
    ///
    /// ```
    /// use rhtmx_url::{Params, UrlGen};
    /// use serde_json::json;
    ///
    /// let urls = UrlGen::default();
    /// let global = json!({"_host": "api.example.com"}).as_object().cloned().unwrap();
    ///
    /// let user_url = urls
    ///     .with_defaults(&global, |scope| scope.generate("/users/:id", Params::new()))
    ///     .unwrap();
    ///
    /// assert_eq!(user_url.call(&[json!(1)]).unwrap(), "//api.example.com/users/1");
    /// assert_eq!(user_url.call(&[json!(1), json!({"_host": null})]).unwrap(), "/users/1");
    /// ```
    pub fn with_defaults<R>(&self, global: &Params, f: impl FnOnce(&DefaultScope<'_>) -> R) -> R {
        f(&DefaultScope::new(global, &self.encoder))
    }

    /// [`UrlGen::with_defaults`] with global defaults given as a JSON value
    pub fn with_defaults_value<R>(
        &self,
        global: Value,
        f: impl FnOnce(&DefaultScope<'_>) -> R,
    ) -> Result<R> {
        let global = generator::params_from_value(global)?;
        Ok(self.with_defaults(&global, f))
    }

    pub fn encoder(&self) -> &Arc<dyn QueryEncoder> {
        &self.encoder
    }
}

impl Default for UrlGen {
    fn default() -> Self {
        Self::new(SimpleEncoder)
    }
}

impl std::fmt::Debug for UrlGen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UrlGen").finish_non_exhaustive()
    }
}

/// Compiles a URL helper using the default (flat) query encoder
///
/// `defaults` must be a JSON object or `null`.
pub fn generate(template: impl Into<String>, defaults: Value) -> Result<RouteGenerator> {
    UrlGen::default().generate_value(template, defaults)
}

/// Runs `f` inside a default scope using the default (flat) query encoder
///
/// `global` must be a JSON object or `null`.
///
/// ```
/// use rhtmx_url::with_defaults;
/// use serde_json::json;
///
/// let x_url = with_defaults(json!({"_host": "a.com"}), |scope| {
///     scope.generate_value("/x", json!({"_host": "b.com"}))
/// })
/// .unwrap()
/// .unwrap();
///
/// assert_eq!(x_url.call(&[]).unwrap(), "//b.com/x");
/// ```
pub fn with_defaults<R>(global: Value, f: impl FnOnce(&DefaultScope<'_>) -> R) -> Result<R> {
    UrlGen::default().with_defaults_value(global, f)
}
