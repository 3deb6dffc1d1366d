//! Error types and error handling
//!
//! Apart from rejecting an empty resource chain, the registrar never produces
//! these itself. They originate in a [`Router`] or [`ActionResolver`]
//! implementation and travel back to the caller of
//! [`ResourceRegistrar::register`] unchanged.
//!
//! [`Router`]: crate::router::Router
//! [`ActionResolver`]: crate::action::ActionResolver
//! [`ResourceRegistrar::register`]: crate::registrar::ResourceRegistrar::register

use http::Method;
use thiserror::Error;

/// Route registration error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The same method and URI were registered twice
    #[error("Duplicate route: {method} /{uri}")]
    DuplicateRoute {
        /// Offending method
        method: Method,
        /// Offending URI template
        uri: String,
    },

    /// No handler is bound for a controller action
    #[error("Unresolved action: {0}")]
    UnresolvedAction(String),

    /// The router cannot dispatch on this method
    #[error("Unsupported method: {0}")]
    UnsupportedMethod(Method),

    /// The resource chain has no segments (`""`, `"."`)
    #[error("Empty resource name: '{0}'")]
    EmptyResource(String),

    /// The URI template cannot be mounted (empty `{}` placeholder)
    #[error("Invalid route template: /{0}")]
    InvalidTemplate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_route_message() {
        let err = RouteError::DuplicateRoute {
            method: Method::GET,
            uri: "posts/{post}".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate route: GET /posts/{post}");
    }

    #[test]
    fn test_unresolved_action_message() {
        let err = RouteError::UnresolvedAction("PostController@show".to_string());
        assert_eq!(err.to_string(), "Unresolved action: PostController@show");
    }

    #[test]
    fn test_invalid_template_message() {
        let err = RouteError::InvalidTemplate("s/{}".to_string());
        assert_eq!(err.to_string(), "Invalid route template: /s/{}");
    }
}
