//! In-memory route table

use super::Router;
use crate::action::ActionDescriptor;
use crate::error::RouteError;
use http::Method;
use serde::{Serialize, Serializer};

/// One recorded registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredRoute {
    /// Methods the route answers to
    #[serde(serialize_with = "serialize_methods")]
    pub methods: Vec<Method>,
    /// URI template without leading slash
    pub uri: String,
    /// Bound controller action
    pub action: ActionDescriptor,
}

impl RegisteredRoute {
    /// URI template with a leading slash
    #[must_use]
    pub fn path(&self) -> String {
        format!("/{}", self.uri)
    }

    /// Methods joined with `|` (`PUT|PATCH`)
    #[must_use]
    pub fn method_list(&self) -> String {
        self.methods
            .iter()
            .map(Method::as_str)
            .collect::<Vec<_>>()
            .join("|")
    }
}

fn serialize_methods<S: Serializer>(methods: &[Method], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(methods.iter().map(Method::as_str))
}

/// Records registrations in order
///
/// Registering a method and URI pair twice fails with
/// [`RouteError::DuplicateRoute`].
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<RegisteredRoute>,
}

impl RouteTable {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes in registration order
    #[must_use]
    pub fn routes(&self) -> &[RegisteredRoute] {
        &self.routes
    }

    /// Number of registered routes
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether nothing is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Look up a route by name
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&RegisteredRoute> {
        self.routes.iter().find(|route| route.action.name == name)
    }

    /// Take the recorded routes
    #[must_use]
    pub fn into_routes(self) -> Vec<RegisteredRoute> {
        self.routes
    }
}

impl Router for RouteTable {
    /// Position of the route in the table
    type Route = usize;

    fn add_route(
        &mut self,
        methods: &[Method],
        uri: &str,
        action: ActionDescriptor,
    ) -> Result<usize, RouteError> {
        for method in methods {
            let taken = self
                .routes
                .iter()
                .any(|route| route.uri == uri && route.methods.contains(method));
            if taken {
                return Err(RouteError::DuplicateRoute {
                    method: method.clone(),
                    uri: uri.to_string(),
                });
            }
        }

        self.routes.push(RegisteredRoute {
            methods: methods.to_vec(),
            uri: uri.to_string(),
            action,
        });
        Ok(self.routes.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ResourceAction;

    fn descriptor(action: ResourceAction) -> ActionDescriptor {
        ActionDescriptor {
            name: format!("posts.{action}"),
            uses: format!("PostController@{action}"),
            controller: "PostController".to_string(),
            action,
            middleware: Vec::new(),
        }
    }

    #[test]
    fn test_records_in_order() {
        let mut table = RouteTable::new();
        assert_eq!(table.get("posts", descriptor(ResourceAction::Index)).unwrap(), 0);
        assert_eq!(table.post("posts", descriptor(ResourceAction::Store)).unwrap(), 1);

        assert_eq!(table.len(), 2);
        assert_eq!(table.routes()[1].methods, vec![Method::POST]);
        assert_eq!(table.by_name("posts.store").unwrap().path(), "/posts");
    }

    #[test]
    fn test_duplicate_method_and_uri() {
        let mut table = RouteTable::new();
        table
            .match_methods(&[Method::PUT, Method::PATCH], "posts/{post}", descriptor(ResourceAction::Update))
            .unwrap();

        let err = table
            .add_route(&[Method::PATCH], "posts/{post}", descriptor(ResourceAction::Update))
            .unwrap_err();
        assert_eq!(
            err,
            RouteError::DuplicateRoute {
                method: Method::PATCH,
                uri: "posts/{post}".to_string(),
            }
        );
    }

    #[test]
    fn test_same_uri_other_method() {
        let mut table = RouteTable::new();
        table.get("posts/{post}", descriptor(ResourceAction::Show)).unwrap();
        table.delete("posts/{post}", descriptor(ResourceAction::Destroy)).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_serializes_methods_as_strings() {
        let mut table = RouteTable::new();
        table
            .match_methods(&[Method::PUT, Method::PATCH], "posts/{post}", descriptor(ResourceAction::Update))
            .unwrap();

        let json = serde_json::to_value(table.routes()).unwrap();
        assert_eq!(json[0]["methods"], serde_json::json!(["PUT", "PATCH"]));
        assert_eq!(json[0]["action"]["uses"], "PostController@update");
        assert_eq!(table.routes()[0].method_list(), "PUT|PATCH");
    }
}
