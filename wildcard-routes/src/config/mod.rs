//! Route manifest configuration
//!
//! Resource routes can be declared in a TOML manifest instead of code.
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `ROUTES_` prefix)
//! 2. The manifest file (`./routes.toml` by default)
//! 3. Hardcoded defaults (fallback)
//!
//! # Example Manifest
//!
//! ```toml
//! # routes.toml
//! [[resources]]
//! name = "users"
//! controller = "UserController"
//!
//! [[resources]]
//! name = "users.posts"
//! controller = "PostController"
//! alias = { users = "author" }
//! except = ["create", "edit"]
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use wildcard_routes::config::RoutesConfig;
//! use wildcard_routes::prelude::*;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = RoutesConfig::load_from("./routes.toml")?;
//!
//! let mut registrar = ResourceRegistrar::new(RouteTable::new());
//! let registered = config.apply(&mut registrar)?;
//! # Ok(())
//! # }
//! ```

use crate::action::ActionResolver;
use crate::error::RouteError;
use crate::options::RouteOptions;
use crate::registrar::ResourceRegistrar;
use crate::router::Router;
use crate::wildcard::WildcardNamer;
use anyhow::Context;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default manifest location
pub const DEFAULT_MANIFEST: &str = "./routes.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "ROUTES_";

/// One resource declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDefinition {
    /// Resource chain (`users.posts`)
    pub name: String,

    /// Controller identifier
    pub controller: String,

    /// Registration options (`alias`, `only`, `except`, ...)
    #[serde(flatten)]
    pub options: RouteOptions,
}

impl ResourceDefinition {
    /// Declare `name` routed to `controller` with default options
    pub fn new(name: impl Into<String>, controller: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            controller: controller.into(),
            options: RouteOptions::default(),
        }
    }

    /// Replace the registration options
    #[must_use]
    pub fn with_options(mut self, options: RouteOptions) -> Self {
        self.options = options;
        self
    }
}

/// Complete route manifest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutesConfig {
    /// Resources in registration order
    #[serde(default)]
    pub resources: Vec<ResourceDefinition>,
}

impl RoutesConfig {
    /// Load `./routes.toml` if present, then environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - The manifest contains invalid TOML syntax
    /// - A resource entry lacks `name` or `controller`, or names an unknown action
    pub fn load() -> anyhow::Result<Self> {
        let mut figment = Self::defaults()?;

        let local_manifest = PathBuf::from(DEFAULT_MANIFEST);
        if local_manifest.exists() {
            figment = figment.merge(Toml::file(&local_manifest));
        }

        let config = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true))
            .extract()
            .context("Failed to load route manifest")?;
        Ok(config)
    }

    /// Load a specific manifest file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file at `path` does not exist
    /// - The manifest contains invalid TOML syntax
    /// - A resource entry lacks `name` or `controller`, or names an unknown action
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            anyhow::bail!("Route manifest not found: {}", path.display());
        }

        let config = Self::defaults()?
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true))
            .extract()
            .with_context(|| format!("Failed to load route manifest: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "Loaded route manifest");
        Ok(config)
    }

    /// Parse a manifest from a TOML string
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid manifest.
    pub fn from_toml(manifest: &str) -> anyhow::Result<Self> {
        let config = Self::defaults()?
            .merge(Toml::string(manifest))
            .extract()
            .context("Failed to parse route manifest")?;
        Ok(config)
    }

    /// Register every resource, in manifest order
    ///
    /// Returns the number of resources registered.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error from the resolver or router.
    pub fn apply<R, A, N>(&self, registrar: &mut ResourceRegistrar<R, A, N>) -> Result<usize, RouteError>
    where
        R: Router,
        A: ActionResolver,
        N: WildcardNamer,
    {
        for resource in &self.resources {
            registrar.register(resource.name.as_str(), &resource.controller, &resource.options)?;
        }
        Ok(self.resources.len())
    }

    fn defaults() -> anyhow::Result<Figment> {
        Ok(Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?)))
    }
}
