//! Route listing command
//!
//! Loads a route manifest, registers every resource into an in-memory route
//! table and prints the result.
//!
//! # Example
//!
//! ```bash
//! wildcard-routes list --config routes.toml
//! wildcard-routes list --json
//! ```

use super::format_routes;
use anyhow::{Context, Result};
use console::style;
use std::path::PathBuf;
use wildcard_routes::config::RoutesConfig;
use wildcard_routes::prelude::*;

/// List the routes a manifest produces
pub struct ListCommand {
    config: Option<PathBuf>,
    json: bool,
}

impl ListCommand {
    /// Create a new command instance
    ///
    /// # Arguments
    ///
    /// * `config` - Manifest path (defaults to `./routes.toml` plus environment)
    /// * `json` - Print JSON instead of a table
    #[must_use]
    pub const fn new(config: Option<PathBuf>, json: bool) -> Self {
        Self { config, json }
    }

    /// Build the route table described by the manifest
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be loaded or a resource
    /// fails to register.
    pub fn route_table(&self) -> Result<RouteTable> {
        let config = match &self.config {
            Some(path) => RoutesConfig::load_from(path)?,
            None => RoutesConfig::load()?,
        };

        let mut registrar = ResourceRegistrar::new(RouteTable::new());
        let resources = config
            .apply(&mut registrar)
            .context("Failed to register resource routes")?;
        tracing::debug!(resources, "Applied route manifest");

        Ok(registrar.into_router())
    }

    /// Render the listing as it will be printed
    ///
    /// # Errors
    ///
    /// See [`ListCommand::route_table`].
    pub fn render(&self) -> Result<String> {
        let table = self.route_table()?;
        if self.json {
            let mut json = serde_json::to_string_pretty(table.routes())
                .context("Failed to serialize route table")?;
            json.push('\n');
            Ok(json)
        } else {
            Ok(format_routes(table.routes()))
        }
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// See [`ListCommand::route_table`].
    pub fn execute(&self) -> Result<()> {
        let output = self.render()?;
        print!("{output}");

        if !self.json {
            let count = output.lines().count().saturating_sub(1);
            eprintln!(
                "\n{} {} routes",
                style("Listed").green().bold(),
                style(count).cyan().bold()
            );
        }

        Ok(())
    }
}
