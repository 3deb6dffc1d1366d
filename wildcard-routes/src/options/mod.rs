//! Resource registration options
//!
//! Only `alias` is interpreted by the URI synthesis. `only` and `except`
//! select which actions get registered, `names` and `middleware` are consumed
//! by the [`DefaultActionResolver`], and every other key lands in
//! [`RouteOptions::extra`] for custom resolvers.
//!
//! # Example Manifest Entry
//!
//! ```toml
//! [[resources]]
//! name = "users.posts"
//! controller = "PostController"
//! alias = { users = "author" }
//! except = ["create", "edit"]
//! middleware = ["auth"]
//! ```
//!
//! [`DefaultActionResolver`]: crate::action::DefaultActionResolver

use crate::action::ResourceAction;
use crate::uri::AliasMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Options for a single resource registration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteOptions {
    /// Wildcard aliases keyed by segment name
    ///
    /// A value that is not a table of strings is treated as absent.
    #[serde(
        deserialize_with = "lenient_alias",
        skip_serializing_if = "Option::is_none"
    )]
    pub alias: Option<AliasMap>,

    /// Register only these actions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only: Option<Vec<ResourceAction>>,

    /// Skip these actions
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub except: Vec<ResourceAction>,

    /// Route name overrides keyed by action name
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub names: BTreeMap<String, String>,

    /// Middleware attached to every route of the resource
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub middleware: Vec<String>,

    /// Options this crate does not interpret
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl RouteOptions {
    /// Options with every default
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the wildcard aliases
    #[must_use]
    pub fn alias(mut self, aliases: AliasMap) -> Self {
        self.alias = Some(aliases);
        self
    }

    /// Restrict registration to `actions`
    #[must_use]
    pub fn only(mut self, actions: impl IntoIterator<Item = ResourceAction>) -> Self {
        self.only = Some(actions.into_iter().collect());
        self
    }

    /// Skip `actions`
    #[must_use]
    pub fn except(mut self, actions: impl IntoIterator<Item = ResourceAction>) -> Self {
        self.except = actions.into_iter().collect();
        self
    }

    /// Override the route name of `action`
    #[must_use]
    pub fn name(mut self, action: ResourceAction, name: impl Into<String>) -> Self {
        self.names.insert(action.as_str().to_string(), name.into());
        self
    }

    /// Attach middleware to every route of the resource
    #[must_use]
    pub fn middleware(mut self, middleware: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.middleware = middleware.into_iter().map(Into::into).collect();
        self
    }

    /// Pass an uninterpreted option through to the resolver
    #[must_use]
    pub fn extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Aliases to apply, if any
    ///
    /// An empty alias map counts as no alias map.
    #[must_use]
    pub fn aliases(&self) -> Option<&AliasMap> {
        self.alias.as_ref().filter(|aliases| !aliases.is_empty())
    }

    /// Actions to register, in registration order
    #[must_use]
    pub fn selected_actions(&self) -> Vec<ResourceAction> {
        ResourceAction::ALL
            .into_iter()
            .filter(|action| self.only.as_ref().is_none_or(|only| only.contains(action)))
            .filter(|action| !self.except.contains(action))
            .collect()
    }
}

fn lenient_alias<'de, D>(deserializer: D) -> Result<Option<AliasMap>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AliasInput {
        Map(AliasMap),
        Other(serde::de::IgnoredAny),
    }

    Ok(match AliasInput::deserialize(deserializer)? {
        AliasInput::Map(aliases) if !aliases.is_empty() => Some(aliases),
        AliasInput::Map(_) => None,
        AliasInput::Other(_) => {
            tracing::debug!("Ignoring alias option that is not a table of strings");
            None
        }
    })
}
