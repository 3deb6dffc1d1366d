//! Wildcard naming for resource segments
//!
//! Every segment of a resource chain gets a path parameter ("wildcard") whose
//! name is derived from the segment alone. `users.posts` becomes
//! `users/{user}/posts/{post}`.

use inflector::Inflector;

/// Derives the default path parameter name for a resource segment
///
/// Implementations must be pure: the same segment always yields the same
/// identifier. Any `Fn(&str) -> String` is a namer, which keeps swapping the
/// convention a one-liner:
///
/// ```rust
/// use wildcard_routes::wildcard::WildcardNamer;
///
/// let namer = |segment: &str| format!("{segment}_id");
/// assert_eq!(namer.wildcard("posts"), "posts_id");
/// ```
pub trait WildcardNamer {
    /// Compute the wildcard identifier for `segment`
    fn wildcard(&self, segment: &str) -> String;
}

impl<F> WildcardNamer for F
where
    F: Fn(&str) -> String,
{
    fn wildcard(&self, segment: &str) -> String {
        self(segment)
    }
}

/// Singular, lower-case, underscore-separated wildcards
///
/// # Examples
///
/// ```rust
/// use wildcard_routes::wildcard::{SingularWildcard, WildcardNamer};
///
/// assert_eq!(SingularWildcard.wildcard("posts"), "post");
/// assert_eq!(SingularWildcard.wildcard("categories"), "category");
/// assert_eq!(SingularWildcard.wildcard("blog-posts"), "blog_post");
/// ```
///
/// # Note
///
/// The inflector library has known limitations with some irregular singulars.
/// Use an alias or a custom namer for those segments. `data` singularizes to
/// `daum`, so alias it to the identifier you want:
///
/// ```rust
/// use wildcard_routes::prelude::*;
///
/// let synthesizer: UriSynthesizer = UriSynthesizer::default();
/// let overrides = WildcardOverrides::from_aliases(
///     &AliasMap::new().with("data", "datum"),
///     synthesizer.namer(),
/// );
/// assert_eq!(synthesizer.item_uri(&"data".into(), &overrides), "data/{datum}");
/// ```
///
/// A segment that singularizes to nothing (`s`) keeps its lower-cased form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SingularWildcard;

impl WildcardNamer for SingularWildcard {
    fn wildcard(&self, segment: &str) -> String {
        let lowered = segment.to_lowercase();
        let singular = lowered.to_singular();
        let wildcard = if singular.is_empty() { lowered } else { singular };
        wildcard.replace('-', "_")
    }
}
