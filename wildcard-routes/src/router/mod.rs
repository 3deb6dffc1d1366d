//! Router capabilities consumed by the registrar
//!
//! The registrar never dispatches requests. It only needs a way to add one
//! route at a time, which is what [`Router`] describes. Two implementations
//! ship with the crate:
//!
//! - [`RouteTable`]: records registrations in memory, for inspection and
//!   route listings
//! - [`AxumRouter`]: mounts registrations onto an [`axum::Router`]

mod axum_router;
mod table;

pub use axum_router::{AxumRouter, MountedRoute};
pub use table::{RegisteredRoute, RouteTable};

use crate::action::ActionDescriptor;
use crate::error::RouteError;
use http::Method;

/// Route registration capabilities
///
/// Only [`Router::add_route`] is required; the verb shortcuts delegate to it.
/// URIs are templates without a leading slash (`users/{user}/posts`).
pub trait Router {
    /// Handle returned for every registered route
    type Route;

    /// Register `action` for `methods` on `uri`
    ///
    /// # Errors
    ///
    /// Implementation defined, e.g. a duplicate route or an action the
    /// router cannot dispatch to.
    fn add_route(
        &mut self,
        methods: &[Method],
        uri: &str,
        action: ActionDescriptor,
    ) -> Result<Self::Route, RouteError>;

    /// Register a `GET` route
    ///
    /// # Errors
    ///
    /// See [`Router::add_route`].
    fn get(&mut self, uri: &str, action: ActionDescriptor) -> Result<Self::Route, RouteError> {
        self.add_route(&[Method::GET], uri, action)
    }

    /// Register a `POST` route
    ///
    /// # Errors
    ///
    /// See [`Router::add_route`].
    fn post(&mut self, uri: &str, action: ActionDescriptor) -> Result<Self::Route, RouteError> {
        self.add_route(&[Method::POST], uri, action)
    }

    /// Register a route answering to several methods
    ///
    /// # Errors
    ///
    /// See [`Router::add_route`].
    fn match_methods(
        &mut self,
        methods: &[Method],
        uri: &str,
        action: ActionDescriptor,
    ) -> Result<Self::Route, RouteError> {
        self.add_route(methods, uri, action)
    }

    /// Register a `DELETE` route
    ///
    /// # Errors
    ///
    /// See [`Router::add_route`].
    fn delete(&mut self, uri: &str, action: ActionDescriptor) -> Result<Self::Route, RouteError> {
        self.add_route(&[Method::DELETE], uri, action)
    }
}

impl<R: Router + ?Sized> Router for &mut R {
    type Route = R::Route;

    fn add_route(
        &mut self,
        methods: &[Method],
        uri: &str,
        action: ActionDescriptor,
    ) -> Result<Self::Route, RouteError> {
        (**self).add_route(methods, uri, action)
    }
}
