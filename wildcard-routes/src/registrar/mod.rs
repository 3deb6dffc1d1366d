//! Resource route registration
//!
//! [`ResourceRegistrar`] is the entry point: it normalizes the `alias`
//! option, synthesizes the collection and item URIs once, then registers
//! every selected action with the router in table order.
//!
//! # Example
//!
//! ```rust
//! use wildcard_routes::prelude::*;
//!
//! # fn main() -> Result<(), RouteError> {
//! let mut registrar = ResourceRegistrar::new(RouteTable::new());
//! registrar.register(
//!     "users.posts",
//!     "PostController",
//!     &RouteOptions::new().alias(AliasMap::new().with("users", "author")),
//! )?;
//!
//! let table = registrar.into_router();
//! assert_eq!(table.by_name("users.posts.show").unwrap().uri, "users/{author}/posts/{post}");
//! # Ok(())
//! # }
//! ```

use crate::action::{ActionResolver, DefaultActionResolver, ResourceAction};
use crate::error::RouteError;
use crate::options::RouteOptions;
use crate::router::Router;
use crate::uri::{ResourceName, UriSynthesizer, WildcardOverrides};
use crate::wildcard::{SingularWildcard, WildcardNamer};
use tracing::{debug, info};

/// Registers the seven resource actions on a [`Router`]
///
/// Collaborators are swapped by construction, not by subclassing:
///
/// ```rust
/// use wildcard_routes::prelude::*;
///
/// let registrar = ResourceRegistrar::new(RouteTable::new())
///     .with_namer(|segment: &str| format!("{segment}_id"));
/// let uri = registrar.synthesizer().item_uri(&"posts".into(), &WildcardOverrides::none());
/// assert_eq!(uri, "posts/{posts_id}");
/// ```
#[derive(Debug)]
pub struct ResourceRegistrar<R, A = DefaultActionResolver, N = SingularWildcard> {
    router: R,
    resolver: A,
    synthesizer: UriSynthesizer<N>,
}

impl<R: Router> ResourceRegistrar<R> {
    /// Registrar with the default resolver and singular wildcards
    pub fn new(router: R) -> Self {
        Self {
            router,
            resolver: DefaultActionResolver,
            synthesizer: UriSynthesizer::default(),
        }
    }
}

impl<R, A, N> ResourceRegistrar<R, A, N>
where
    R: Router,
    A: ActionResolver,
    N: WildcardNamer,
{
    /// Resolve controller actions with `resolver`
    pub fn with_resolver<B: ActionResolver>(self, resolver: B) -> ResourceRegistrar<R, B, N> {
        ResourceRegistrar {
            router: self.router,
            resolver,
            synthesizer: self.synthesizer,
        }
    }

    /// Derive default wildcards with `namer`
    pub fn with_namer<M: WildcardNamer>(self, namer: M) -> ResourceRegistrar<R, A, M> {
        ResourceRegistrar {
            router: self.router,
            resolver: self.resolver,
            synthesizer: UriSynthesizer::new(namer),
        }
    }

    /// The URI synthesizer in use
    pub const fn synthesizer(&self) -> &UriSynthesizer<N> {
        &self.synthesizer
    }

    /// The router registrations go to
    pub const fn router(&self) -> &R {
        &self.router
    }

    /// Hand the router back to the host
    pub fn into_router(self) -> R {
        self.router
    }

    /// Alias overrides for `options`, keyed by computed wildcard
    pub fn overrides(&self, options: &RouteOptions) -> WildcardOverrides {
        options.aliases().map_or_else(WildcardOverrides::none, |aliases| {
            WildcardOverrides::from_aliases(aliases, self.synthesizer.namer())
        })
    }

    /// Route a resource chain to a controller
    ///
    /// Registers index, create, store, show, edit, update and destroy, in
    /// that order, minus whatever `only`/`except` excludes.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::EmptyResource`] for a chain without segments
    /// (`""`, `"."`), before anything reaches the router. Otherwise returns
    /// the first error reported by the resolver or the router, unchanged.
    /// Routes registered before the failure stay registered.
    pub fn register(
        &mut self,
        name: impl Into<ResourceName>,
        controller: &str,
        options: &RouteOptions,
    ) -> Result<(), RouteError> {
        let resource = name.into();
        if resource.segments().is_empty() {
            return Err(RouteError::EmptyResource(resource.as_str().to_string()));
        }
        let overrides = self.overrides(options);

        let collection = self.synthesizer.collection_uri(&resource, &overrides);
        let item = self.synthesizer.item_uri(&resource, &overrides);

        let actions = options.selected_actions();
        for &action in &actions {
            self.add_action(&resource, controller, action, options, &collection, &item)?;
        }

        info!(
            resource = %resource,
            controller,
            routes = actions.len(),
            "Registered resource routes"
        );
        Ok(())
    }

    fn add_action(
        &mut self,
        resource: &ResourceName,
        controller: &str,
        action: ResourceAction,
        options: &RouteOptions,
        collection: &str,
        item: &str,
    ) -> Result<R::Route, RouteError> {
        let uri = action.uri(collection, item);
        let descriptor = self
            .resolver
            .resolve(resource, controller, action, options)?;

        debug!(%action, %uri, name = %descriptor.name, "Adding resource route");

        match action {
            ResourceAction::Index
            | ResourceAction::Create
            | ResourceAction::Show
            | ResourceAction::Edit => self.router.get(&uri, descriptor),
            ResourceAction::Store => self.router.post(&uri, descriptor),
            ResourceAction::Update => self.router.match_methods(&action.methods(), &uri, descriptor),
            ResourceAction::Destroy => self.router.delete(&uri, descriptor),
        }
    }
}
