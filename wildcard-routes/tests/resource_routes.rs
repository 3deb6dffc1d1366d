//! Integration tests for URI synthesis and resource registration
//!
//! Covers the documented URI shapes, alias handling and registration order.

use http::Method;
use proptest::prelude::*;
use wildcard_routes::prelude::*;

fn synthesizer() -> UriSynthesizer {
    UriSynthesizer::default()
}

fn overrides(pairs: &[(&str, &str)]) -> WildcardOverrides {
    pairs.iter().copied().collect()
}

/// Helper to register one resource into a fresh table
fn register(name: &str, controller: &str, options: &RouteOptions) -> RouteTable {
    let mut registrar = ResourceRegistrar::new(RouteTable::new());
    registrar.register(name, controller, options).unwrap();
    registrar.into_router()
}

#[test]
fn test_collection_uri_of_nested_resource() {
    assert_eq!(synthesizer().collection_uri(&"a.b".into(), &overrides(&[])), "a/{a}/b");
}

#[test]
fn test_item_uri_of_nested_resource() {
    assert_eq!(synthesizer().item_uri(&"a.b".into(), &overrides(&[])), "a/{a}/b/{b}");
}

#[test]
fn test_item_uri_with_parent_alias() {
    assert_eq!(
        synthesizer().item_uri(&"a.b".into(), &overrides(&[("a", "author")])),
        "a/{author}/b/{b}"
    );
}

#[test]
fn test_unmatched_alias_changes_nothing() {
    assert_eq!(
        synthesizer().item_uri(&"a.b".into(), &overrides(&[("z", "x")])),
        "a/{a}/b/{b}"
    );
}

#[test]
fn test_register_posts_in_order() {
    let table = register("posts", "PostController", &RouteOptions::new());

    let expected = [
        (vec![Method::GET], "posts", "posts.index"),
        (vec![Method::GET], "posts/create", "posts.create"),
        (vec![Method::POST], "posts", "posts.store"),
        (vec![Method::GET], "posts/{post}", "posts.show"),
        (vec![Method::GET], "posts/{post}/edit", "posts.edit"),
        (vec![Method::PUT, Method::PATCH], "posts/{post}", "posts.update"),
        (vec![Method::DELETE], "posts/{post}", "posts.destroy"),
    ];

    assert_eq!(table.len(), expected.len());
    for (route, (methods, uri, name)) in table.routes().iter().zip(expected) {
        assert_eq!(route.methods, methods);
        assert_eq!(route.uri, uri);
        assert_eq!(route.action.name, name);
        assert_eq!(route.action.uses, format!("PostController@{}", route.action.action));
    }
}

#[test]
fn test_register_nested_with_own_alias() {
    let options = RouteOptions::new().alias(AliasMap::new().with("b", "item"));
    let table = register("a.b", "BController", &options);

    for name in ["a.b.show", "a.b.update", "a.b.destroy"] {
        assert_eq!(table.by_name(name).unwrap().uri, "a/{a}/b/{item}");
    }
    assert_eq!(table.by_name("a.b.edit").unwrap().uri, "a/{a}/b/{item}/edit");

    for name in ["a.b.index", "a.b.store"] {
        assert_eq!(table.by_name(name).unwrap().uri, "a/{a}/b");
    }
    assert_eq!(table.by_name("a.b.create").unwrap().uri, "a/{a}/b/create");
}

#[test]
fn test_nested_collision_avoided_by_alias() {
    let options = RouteOptions::new().alias(AliasMap::new().with("users", "author"));
    let table = register("users.posts", "PostController", &options);

    assert_eq!(
        table.by_name("users.posts.show").unwrap().uri,
        "users/{author}/posts/{post}"
    );
}

#[test]
fn test_alias_on_irregular_segment() {
    let options = RouteOptions::new().alias(AliasMap::new().with("categories", "slug"));
    let table = register("categories.products", "ProductController", &options);

    assert_eq!(
        table.by_name("categories.products.show").unwrap().uri,
        "categories/{slug}/products/{product}"
    );
}

#[test]
fn test_edit_registered_before_update_and_destroy() {
    let table = register("photos", "PhotoController", &RouteOptions::new());
    let position = |action: ResourceAction| {
        table
            .routes()
            .iter()
            .position(|route| route.action.action == action)
            .unwrap()
    };

    assert!(position(ResourceAction::Edit) < position(ResourceAction::Update));
    assert!(position(ResourceAction::Edit) < position(ResourceAction::Destroy));
    assert!(position(ResourceAction::Create) < position(ResourceAction::Show));
}

#[test]
fn test_custom_namer() {
    let mut registrar =
        ResourceRegistrar::new(RouteTable::new()).with_namer(|segment: &str| format!("{segment}_id"));
    registrar
        .register("users.posts", "PostController", &RouteOptions::new())
        .unwrap();

    assert_eq!(
        registrar.router().by_name("users.posts.show").unwrap().uri,
        "users/{users_id}/posts/{posts_id}"
    );
}

fn segment() -> impl Strategy<Value = String> {
    "[a-z][a-z_-]{0,11}"
}

proptest! {
    #[test]
    fn prop_plain_collection_uri_is_name(name in segment()) {
        let uri = synthesizer().collection_uri(&name.as_str().into(), &overrides(&[("x", "y")]));
        prop_assert_eq!(&uri, &name);
        prop_assert!(!uri.contains('{'), "uri {:?} contains a wildcard", uri);
    }

    #[test]
    fn prop_synthesis_is_idempotent(
        segments in prop::collection::vec(segment(), 1..5),
        alias in segment(),
    ) {
        let s = synthesizer();
        let name = ResourceName::new(segments.join("."));
        let aliases = AliasMap::new().with(segments[0].clone(), alias);
        let o = WildcardOverrides::from_aliases(&aliases, &SingularWildcard);

        prop_assert_eq!(s.nested_uri(&segments, &o), s.nested_uri(&segments, &o));
        prop_assert_eq!(s.collection_uri(&name, &o), s.collection_uri(&name, &o));
        prop_assert_eq!(s.item_uri(&name, &o), s.item_uri(&name, &o));
    }

    #[test]
    fn prop_item_uri_extends_collection_uri(segments in prop::collection::vec(segment(), 1..5)) {
        let s = synthesizer();
        let name = ResourceName::new(segments.join("."));
        let none = WildcardOverrides::none();

        let collection = s.collection_uri(&name, &none);
        let item = s.item_uri(&name, &none);
        prop_assert!(
            item.starts_with(&format!("{collection}/{{")),
            "item {:?} does not extend collection {:?}",
            item,
            collection
        );
        prop_assert!(item.ends_with('}'), "item {:?} does not end with a wildcard", item);
    }
}
