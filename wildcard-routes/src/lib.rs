//! wildcard-routes: resourceful route registration with aliasable wildcards
//!
//! A resource chain such as `users.posts` expands into the seven conventional
//! routes (index, create, store, show, edit, update, destroy). Every segment
//! of the chain gets a path parameter derived from its name, and any of those
//! parameters can be renamed through the `alias` option so nested resources
//! avoid parameter-name collisions:
//!
//! ```text
//! GET        users/{author}/posts               users.posts.index
//! GET        users/{author}/posts/create        users.posts.create
//! POST       users/{author}/posts               users.posts.store
//! GET        users/{author}/posts/{post}        users.posts.show
//! GET        users/{author}/posts/{post}/edit   users.posts.edit
//! PUT|PATCH  users/{author}/posts/{post}        users.posts.update
//! DELETE     users/{author}/posts/{post}        users.posts.destroy
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use wildcard_routes::prelude::*;
//!
//! # fn main() -> Result<(), RouteError> {
//! let mut registrar = ResourceRegistrar::new(RouteTable::new());
//!
//! registrar.register("users", "UserController", &RouteOptions::new())?;
//! registrar.register(
//!     "users.posts",
//!     "PostController",
//!     &RouteOptions::new().alias(AliasMap::new().with("users", "author")),
//! )?;
//!
//! for route in registrar.router().routes() {
//!     println!("{:<10} {:<35} {}", route.method_list(), route.uri, route.action.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - [`wildcard`]: default parameter names (`posts` → `post`)
//! - [`uri`]: collection and item URI synthesis
//! - [`registrar`]: the entry point, registering actions in a fixed order
//! - [`router`]: the router capabilities consumed, with in-memory and axum
//!   implementations
//! - [`config`]: TOML route manifests

pub mod action;
pub mod config;
pub mod error;
pub mod observability;
pub mod options;
pub mod registrar;
pub mod router;
pub mod uri;
pub mod wildcard;

pub mod prelude {
    //! Convenience re-exports for common types and traits
    //!
    //! # Examples
    //!
    //! ```rust
    //! use wildcard_routes::prelude::*;
    //! ```

    // Registration entry point and options
    pub use crate::options::RouteOptions;
    pub use crate::registrar::ResourceRegistrar;

    // Actions and their resolution
    pub use crate::action::{ActionDescriptor, ActionResolver, DefaultActionResolver, ResourceAction};

    // URI synthesis
    pub use crate::uri::{AliasMap, ResourceName, UriSynthesizer, WildcardOverrides};
    pub use crate::wildcard::{SingularWildcard, WildcardNamer};

    // Routers
    pub use crate::router::{AxumRouter, MountedRoute, RegisteredRoute, RouteTable, Router};

    // Manifests
    pub use crate::config::{ResourceDefinition, RoutesConfig};

    // Error types
    pub use crate::error::RouteError;
}
