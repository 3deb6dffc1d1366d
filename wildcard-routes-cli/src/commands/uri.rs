//! URI preview command
//!
//! Shows the collection and item URIs of a resource chain, and the route
//! each action would get, without a manifest.
//!
//! # Example
//!
//! ```bash
//! wildcard-routes uri users.posts --alias users=author
//! ```

use super::format_routes;
use anyhow::{Context, Result};
use console::style;
use wildcard_routes::prelude::*;

/// Parse a `SEGMENT=IDENT` alias argument
///
/// # Errors
///
/// Returns a message if the argument has no `=` or either side is empty.
pub fn parse_alias(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((segment, identifier)) if !segment.is_empty() && !identifier.is_empty() => {
            Ok((segment.to_string(), identifier.to_string()))
        }
        _ => Err(format!("expected SEGMENT=IDENT, got '{arg}'")),
    }
}

/// Preview the URIs of a resource chain
pub struct UriCommand {
    name: String,
    aliases: AliasMap,
}

impl UriCommand {
    /// Create a new command instance
    ///
    /// # Arguments
    ///
    /// * `name` - Resource chain (`users.posts`)
    /// * `aliases` - `(segment, identifier)` pairs
    pub fn new(name: String, aliases: Vec<(String, String)>) -> Self {
        Self {
            name,
            aliases: aliases.into_iter().collect(),
        }
    }

    /// Collection and item URIs, with a leading slash
    #[must_use]
    pub fn uris(&self) -> (String, String) {
        let synthesizer: UriSynthesizer = UriSynthesizer::default();
        let overrides = WildcardOverrides::from_aliases(&self.aliases, synthesizer.namer());
        let resource = ResourceName::new(self.name.as_str());

        (
            format!("/{}", synthesizer.collection_uri(&resource, &overrides)),
            format!("/{}", synthesizer.item_uri(&resource, &overrides)),
        )
    }

    /// Route table for every action of the resource
    ///
    /// # Errors
    ///
    /// Returns an error if registration fails.
    pub fn render(&self) -> Result<String> {
        let mut registrar = ResourceRegistrar::new(RouteTable::new());
        registrar
            .register(
                self.name.as_str(),
                "Controller",
                &RouteOptions::new().alias(self.aliases.clone()),
            )
            .with_context(|| format!("Failed to register resource: {}", self.name))?;

        Ok(format_routes(registrar.router().routes()))
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// See [`UriCommand::render`].
    pub fn execute(&self) -> Result<()> {
        let (collection, item) = self.uris();

        println!("{} {}", style("Collection:").cyan().bold(), style(collection).green());
        println!("{} {}", style("Item:").cyan().bold(), style(item).green());
        println!();
        print!("{}", self.render()?);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_alias() {
        assert_eq!(
            parse_alias("users=author"),
            Ok(("users".to_string(), "author".to_string()))
        );
        assert!(parse_alias("users").is_err());
        assert!(parse_alias("=author").is_err());
        assert!(parse_alias("users=").is_err());
    }

    #[test]
    fn test_uris() {
        let command = UriCommand::new(
            "users.posts".to_string(),
            vec![("users".to_string(), "author".to_string())],
        );
        assert_eq!(
            command.uris(),
            ("/users/{author}/posts".to_string(), "/users/{author}/posts/{post}".to_string())
        );
    }
}
