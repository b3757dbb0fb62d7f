// File: src/config.rs
// Purpose: Route table configuration parsing from urls.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::table::RouteTable;
use crate::value::Params;
use crate::UrlGen;

/// URL helper configuration
///
/// ```toml
/// [defaults]
/// _host = "api.example.com"
///
/// [routes.user_post]
/// template = "/users/:user_id/posts/:id"
///
/// [routes.category]
/// template = "/categories/:name"
/// defaults = { name = "all" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UrlConfig {
    /// Defaults shared by every route (route-level defaults win)
    #[serde(default)]
    pub defaults: Params,

    #[serde(default)]
    pub routes: BTreeMap<String, RouteConfig>,
}

/// A single named route
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteConfig {
    pub template: String,

    #[serde(default)]
    pub defaults: Params,
}

impl UrlConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means no routes configured
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read url config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse url config file: {:?}", path))
    }

    /// Load configuration from default path (./urls.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("urls.toml")
    }

    /// Parse configuration from TOML text; blank text gives the default
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: UrlConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Builds every configured route inside one default scope
    pub fn build(&self, urls: &UrlGen) -> crate::Result<RouteTable> {
        let table = urls.with_defaults(&self.defaults, |scope| {
            let mut table = RouteTable::new();
            for (name, route) in &self.routes {
                let generator = scope.generate(route.template.as_str(), route.defaults.clone())?;
                table.insert(name.as_str(), generator);
            }
            Ok::<_, crate::UrlError>(table)
        })?;

        tracing::info!(routes = table.len(), "built url route table");
        Ok(table)
    }
}
