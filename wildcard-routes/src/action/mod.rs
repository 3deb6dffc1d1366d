//! The seven resource actions and their resolution to controller actions
//!
//! | action  | verb(s)    | path                       |
//! |---------|------------|----------------------------|
//! | index   | GET        | collection URI             |
//! | create  | GET        | collection URI + `/create` |
//! | store   | POST       | collection URI             |
//! | show    | GET        | item URI                   |
//! | edit    | GET        | item URI + `/edit`         |
//! | update  | PUT, PATCH | item URI                   |
//! | destroy | DELETE     | item URI                   |
//!
//! Registration follows this order so that `edit` is matched before the
//! broader item patterns under first-match routers.

use crate::error::RouteError;
use crate::options::RouteOptions;
use crate::uri::ResourceName;
use http::Method;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A conventional resource action
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ResourceAction {
    /// List the collection
    Index,
    /// Form for a new item
    Create,
    /// Persist a new item
    Store,
    /// Display one item
    Show,
    /// Form for an existing item
    Edit,
    /// Persist changes to an item
    Update,
    /// Remove an item
    Destroy,
}

impl ResourceAction {
    /// Every action, in registration order
    pub const ALL: [Self; 7] = [
        Self::Index,
        Self::Create,
        Self::Store,
        Self::Show,
        Self::Edit,
        Self::Update,
        Self::Destroy,
    ];

    /// Lower-case action name, also used as the controller method name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Create => "create",
            Self::Store => "store",
            Self::Show => "show",
            Self::Edit => "edit",
            Self::Update => "update",
            Self::Destroy => "destroy",
        }
    }

    /// HTTP methods the action answers to
    #[must_use]
    pub fn methods(self) -> Vec<Method> {
        match self {
            Self::Index | Self::Create | Self::Show | Self::Edit => vec![Method::GET],
            Self::Store => vec![Method::POST],
            Self::Update => vec![Method::PUT, Method::PATCH],
            Self::Destroy => vec![Method::DELETE],
        }
    }

    /// Whether the action addresses a single item rather than the collection
    #[must_use]
    pub const fn is_item(self) -> bool {
        matches!(self, Self::Show | Self::Edit | Self::Update | Self::Destroy)
    }

    /// Path for this action given the resource's collection and item URIs
    #[must_use]
    pub fn uri(self, collection: &str, item: &str) -> String {
        match self {
            Self::Index | Self::Store => collection.to_string(),
            Self::Create => format!("{collection}/create"),
            Self::Show | Self::Update | Self::Destroy => item.to_string(),
            Self::Edit => format!("{item}/edit"),
        }
    }
}

impl fmt::Display for ResourceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Controller action bound to a route
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionDescriptor {
    /// Route name (`users.posts.show`)
    pub name: String,
    /// Controller action reference (`PostController@show`)
    pub uses: String,
    /// Controller identifier
    pub controller: String,
    /// Resource action
    pub action: ResourceAction,
    /// Middleware attached to the route
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub middleware: Vec<String>,
}

/// Resolves a resource action to a controller action
///
/// Closures with the same signature are resolvers too.
pub trait ActionResolver {
    /// Build the descriptor for `action` of `resource`
    ///
    /// # Errors
    ///
    /// Returns an error if the controller action cannot be resolved.
    fn resolve(
        &self,
        resource: &ResourceName,
        controller: &str,
        action: ResourceAction,
        options: &RouteOptions,
    ) -> Result<ActionDescriptor, RouteError>;
}

impl<F> ActionResolver for F
where
    F: Fn(&ResourceName, &str, ResourceAction, &RouteOptions) -> Result<ActionDescriptor, RouteError>,
{
    fn resolve(
        &self,
        resource: &ResourceName,
        controller: &str,
        action: ResourceAction,
        options: &RouteOptions,
    ) -> Result<ActionDescriptor, RouteError> {
        self(resource, controller, action, options)
    }
}

/// `Controller@action` references with dotted route names
///
/// The route name is the resource chain followed by the action
/// (`users.posts.show`) unless `options.names` overrides it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultActionResolver;

impl ActionResolver for DefaultActionResolver {
    fn resolve(
        &self,
        resource: &ResourceName,
        controller: &str,
        action: ResourceAction,
        options: &RouteOptions,
    ) -> Result<ActionDescriptor, RouteError> {
        let name = options.names.get(action.as_str()).map_or_else(
            || format!("{}.{action}", resource.segments().join(".")),
            Clone::clone,
        );

        Ok(ActionDescriptor {
            name,
            uses: format!("{controller}@{action}"),
            controller: controller.to_string(),
            action,
            middleware: options.middleware.clone(),
        })
    }
}
