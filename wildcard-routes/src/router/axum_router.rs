//! Mounting resource routes on axum
//!
//! Handlers are bound per controller action reference (`PostController@show`,
//! the `uses` of an [`ActionDescriptor`]). When the registrar adds a route the
//! bound handler is mounted under the synthesized template, which axum 0.8
//! reads with the same `{param}` syntax.
//!
//! # Example
//!
//! ```rust
//! use axum::extract::Path;
//! use std::collections::HashMap;
//! use wildcard_routes::prelude::*;
//!
//! # fn main() -> Result<(), RouteError> {
//! let router: AxumRouter = AxumRouter::new()
//!     .handler("PostController@index", || async { "all posts" })
//!     .handler("PostController@show", |Path(params): Path<HashMap<String, String>>| async move {
//!         format!("post {} by {}", params["post"], params["author"])
//!     });
//!
//! let mut registrar = ResourceRegistrar::new(router);
//! registrar.register(
//!     "users.posts",
//!     "PostController",
//!     &RouteOptions::new()
//!         .alias(AliasMap::new().with("users", "author"))
//!         .only([ResourceAction::Index, ResourceAction::Show]),
//! )?;
//!
//! let app = registrar.into_router().into_inner();
//! # let _ = app;
//! # Ok(())
//! # }
//! ```

use super::Router;
use crate::action::ActionDescriptor;
use crate::error::RouteError;
use axum::handler::Handler;
use axum::routing::{MethodFilter, MethodRouter};
use http::Method;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

type MountFn<S> = Arc<dyn Fn(MethodFilter) -> MethodRouter<S> + Send + Sync>;

/// Route mounted on the axum router
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedRoute {
    /// Path as given to axum (leading slash)
    pub path: String,
    /// Methods the route answers to
    pub methods: Vec<Method>,
    /// Controller action reference
    pub uses: String,
}

/// [`Router`] backed by an [`axum::Router`]
pub struct AxumRouter<S = ()> {
    router: axum::Router<S>,
    handlers: HashMap<String, MountFn<S>>,
    mounted: HashSet<(Method, String)>,
}

impl<S> AxumRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Create a router without handlers
    #[must_use]
    pub fn new() -> Self {
        Self::from_router(axum::Router::new())
    }

    /// Mount resource routes onto an existing axum router
    #[must_use]
    pub fn from_router(router: axum::Router<S>) -> Self {
        Self {
            router,
            handlers: HashMap::new(),
            mounted: HashSet::new(),
        }
    }

    /// Bind `handler` to the controller action reference `uses`
    #[must_use]
    pub fn handler<H, T>(mut self, uses: impl Into<String>, handler: H) -> Self
    where
        H: Handler<T, S> + Sync,
        T: 'static,
    {
        let mount: MountFn<S> =
            Arc::new(move |filter| axum::routing::on(filter, handler.clone()));
        self.handlers.insert(uses.into(), mount);
        self
    }

    /// Whether a handler is bound to `uses`
    #[must_use]
    pub fn has_handler(&self, uses: &str) -> bool {
        self.handlers.contains_key(uses)
    }

    /// The axum router with every mounted route
    #[must_use]
    pub fn into_inner(self) -> axum::Router<S> {
        self.router
    }
}

impl<S> Default for AxumRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for AxumRouter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut handlers: Vec<_> = self.handlers.keys().collect();
        handlers.sort();
        f.debug_struct("AxumRouter")
            .field("handlers", &handlers)
            .field("mounted", &self.mounted.len())
            .finish_non_exhaustive()
    }
}

fn method_filter(methods: &[Method]) -> Result<MethodFilter, RouteError> {
    let mut filters = methods.iter().map(|method| {
        MethodFilter::try_from(method.clone())
            .map_err(|_| RouteError::UnsupportedMethod(method.clone()))
    });

    let first = filters
        .next()
        .ok_or_else(|| RouteError::UnsupportedMethod(Method::default()))??;
    filters.try_fold(first, |acc, filter| Ok(acc.or(filter?)))
}

impl<S> Router for AxumRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    type Route = MountedRoute;

    fn add_route(
        &mut self,
        methods: &[Method],
        uri: &str,
        action: ActionDescriptor,
    ) -> Result<MountedRoute, RouteError> {
        let mount = self
            .handlers
            .get(&action.uses)
            .ok_or_else(|| RouteError::UnresolvedAction(action.uses.clone()))?;

        let path = format!("/{}", uri.trim_start_matches('/'));

        // axum panics on a parameter without a name
        if path.contains("{}") {
            return Err(RouteError::InvalidTemplate(uri.to_string()));
        }

        // axum panics on overlapping method routes for one path
        if let Some(method) = methods
            .iter()
            .find(|method| self.mounted.contains(&((*method).clone(), path.clone())))
        {
            return Err(RouteError::DuplicateRoute {
                method: method.clone(),
                uri: uri.to_string(),
            });
        }

        let method_router = mount(method_filter(methods)?);
        self.router = std::mem::take(&mut self.router).route(&path, method_router);
        for method in methods {
            self.mounted.insert((method.clone(), path.clone()));
        }

        tracing::debug!(%path, uses = %action.uses, "Mounted axum route");

        Ok(MountedRoute {
            path,
            methods: methods.to_vec(),
            uses: action.uses,
        })
    }
}
