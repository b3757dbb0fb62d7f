//! Named route table
//!
//! Keeps generators by name so call sites can ask for `url_for("user", ..)`
//! instead of holding on to each generator.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::{Result, UrlError};
use crate::generator::RouteGenerator;
use crate::value::Params;

#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, RouteGenerator>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a generator, returning the one it replaced
    pub fn insert(&mut self, name: impl Into<String>, generator: RouteGenerator) -> Option<RouteGenerator> {
        self.routes.insert(name.into(), generator)
    }

    pub fn get(&self, name: &str) -> Option<&RouteGenerator> {
        self.routes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Route names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.routes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Generates a URL for a named route, see [`RouteGenerator::call`]
    pub fn url_for(&self, name: &str, args: &[Value]) -> Result<String> {
        self.lookup(name)?.call(args)
    }

    /// Generates a URL for a named route, see [`RouteGenerator::call_with`]
    pub fn url_for_with(&self, name: &str, positional: &[Value], named: &Params) -> Result<String> {
        self.lookup(name)?.call_with(positional, named)
    }

    fn lookup(&self, name: &str) -> Result<&RouteGenerator> {
        self.routes.get(name).ok_or_else(|| UrlError::UnknownRoute {
            name: name.to_string(),
        })
    }
}
