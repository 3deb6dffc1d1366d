//! URI synthesis for resource chains
//!
//! A resource chain such as `users.posts` nests one resource inside another.
//! The synthesizer turns it into the path templates shared by the seven
//! resource actions:
//!
//! - collection URI: `users/{user}/posts` (index, create, store)
//! - item URI: `users/{user}/posts/{post}` (show, edit, update, destroy)
//!
//! Placeholders use the `{name}` syntax understood by axum 0.8.
//!
//! # Example
//!
//! ```rust
//! use wildcard_routes::uri::{AliasMap, ResourceName, UriSynthesizer, WildcardOverrides};
//! use wildcard_routes::wildcard::SingularWildcard;
//!
//! let synthesizer: UriSynthesizer = UriSynthesizer::default();
//! let aliases: AliasMap = [("users", "author")].into_iter().collect();
//! let overrides = WildcardOverrides::from_aliases(&aliases, &SingularWildcard);
//!
//! let resource = ResourceName::new("users.posts");
//! assert_eq!(synthesizer.collection_uri(&resource, &overrides), "users/{author}/posts");
//! assert_eq!(synthesizer.item_uri(&resource, &overrides), "users/{author}/posts/{post}");
//! ```

use crate::wildcard::{SingularWildcard, WildcardNamer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Separator between the segments of a resource chain
pub const SEGMENT_SEPARATOR: char = '.';

/// Dot-delimited resource chain (`users.posts`)
///
/// Empty pieces are dropped, so `users..posts` and `users.posts.` both
/// describe the `[users, posts]` chain. The name is kept as written for
/// route naming.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceName {
    name: String,
    segments: Vec<String>,
}

impl ResourceName {
    /// Split a resource chain into its segments
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let segments = name
            .split(SEGMENT_SEPARATOR)
            .filter(|segment| !segment.is_empty())
            .map(str::to_owned)
            .collect();

        Self { name, segments }
    }

    /// The chain as written by the caller
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Segments in nesting order, outermost first
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The resource itself (innermost segment)
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Whether the resource is nested inside a parent resource
    #[must_use]
    pub fn is_nested(&self) -> bool {
        self.segments.len() > 1
    }
}

impl From<&str> for ResourceName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ResourceName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Caller-supplied wildcard aliases, keyed by segment name
///
/// `{ users = "author" }` renames the parameter of the `users` segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasMap(BTreeMap<String, String>);

impl AliasMap {
    /// Create an empty alias map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Alias the wildcard of `segment` to `identifier`
    #[must_use]
    pub fn with(mut self, segment: impl Into<String>, identifier: impl Into<String>) -> Self {
        self.0.insert(segment.into(), identifier.into());
        self
    }

    /// Whether no alias is defined
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(segment, identifier)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for AliasMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Aliases keyed by computed wildcard identifier
///
/// This is the form the synthesizer consults. Keys that match no wildcard
/// of the chain being built are simply never looked up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WildcardOverrides(BTreeMap<String, String>);

impl WildcardOverrides {
    /// No overrides: every segment uses its default wildcard
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Re-key segment aliases by the wildcard `namer` computes for them
    pub fn from_aliases<N: WildcardNamer + ?Sized>(aliases: &AliasMap, namer: &N) -> Self {
        Self(
            aliases
                .iter()
                .map(|(segment, identifier)| {
                    let wildcard = namer.wildcard(segment);
                    tracing::trace!(segment, %wildcard, identifier, "Normalized wildcard alias");
                    (wildcard, identifier.to_owned())
                })
                .collect(),
        )
    }

    /// The identifier to emit for `wildcard`
    #[must_use]
    pub fn resolve<'a>(&'a self, wildcard: &'a str) -> &'a str {
        self.0.get(wildcard).map_or(wildcard, String::as_str)
    }

    /// Whether no override is defined
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for WildcardOverrides
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Builds path templates for resource chains
///
/// Holds the [`WildcardNamer`] used for every segment. All methods are pure:
/// identical inputs always produce identical strings.
#[derive(Debug, Clone, Default)]
pub struct UriSynthesizer<N = SingularWildcard> {
    namer: N,
}

impl<N: WildcardNamer> UriSynthesizer<N> {
    /// Create a synthesizer using `namer` for default wildcards
    pub const fn new(namer: N) -> Self {
        Self { namer }
    }

    /// The namer in use
    pub const fn namer(&self) -> &N {
        &self.namer
    }

    /// Resolved placeholder identifier for `segment`
    pub fn placeholder(&self, segment: &str, overrides: &WildcardOverrides) -> String {
        let wildcard = self.namer.wildcard(segment);
        overrides.resolve(&wildcard).to_owned()
    }

    /// `segment/{id}` for every segment, joined with `/`
    pub fn nested_uri<S: AsRef<str>>(&self, segments: &[S], overrides: &WildcardOverrides) -> String {
        segments
            .iter()
            .map(|segment| {
                let segment = segment.as_ref();
                format!("{segment}/{{{}}}", self.placeholder(segment, overrides))
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// URI shared by index, create and store
    ///
    /// A resource without parents never carries a placeholder. A nested
    /// resource gets the full nested URI minus its own trailing placeholder.
    pub fn collection_uri(&self, resource: &ResourceName, overrides: &WildcardOverrides) -> String {
        let Some((last, parents)) = resource.segments().split_last() else {
            return String::new();
        };

        if parents.is_empty() {
            return last.clone();
        }

        // Only the trailing placeholder belongs to the resource itself
        let mut uri = self.nested_uri(resource.segments(), overrides);
        let own = format!("/{{{}}}", self.placeholder(last, overrides));
        if uri.ends_with(&own) {
            uri.truncate(uri.len() - own.len());
        }
        uri
    }

    /// URI shared by show, edit, update and destroy
    pub fn item_uri(&self, resource: &ResourceName, overrides: &WildcardOverrides) -> String {
        let collection = self.collection_uri(resource, overrides);
        match resource.last() {
            Some(last) => format!("{collection}/{{{}}}", self.placeholder(last, overrides)),
            None => collection,
        }
    }
}
