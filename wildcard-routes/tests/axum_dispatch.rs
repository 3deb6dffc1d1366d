//! Integration tests for mounting resource routes on axum
//!
//! Registers a nested resource with aliased wildcards and checks that
//! requests reach the handler bound for each action.

use axum::body::Body;
use axum::extract::Path;
use http::{Method, Request, StatusCode};
use std::collections::BTreeMap;
use tower::ServiceExt;
use wildcard_routes::prelude::*;

type Params = Path<BTreeMap<String, String>>;

/// Render the action and its path parameters, e.g. `show author=7 post=3`
fn describe(action: &str, params: &BTreeMap<String, String>) -> String {
    let mut out = action.to_string();
    for (key, value) in params {
        out.push_str(&format!(" {key}={value}"));
    }
    out
}

/// Helper to create a test app for `users.posts` with `users` aliased to `author`
fn test_app() -> axum::Router {
    let router: AxumRouter = AxumRouter::new()
        .handler("PostController@index", |Path(p): Params| async move { describe("index", &p) })
        .handler("PostController@create", |Path(p): Params| async move { describe("create", &p) })
        .handler("PostController@store", |Path(p): Params| async move { describe("store", &p) })
        .handler("PostController@show", |Path(p): Params| async move { describe("show", &p) })
        .handler("PostController@edit", |Path(p): Params| async move { describe("edit", &p) })
        .handler("PostController@update", |Path(p): Params| async move { describe("update", &p) })
        .handler("PostController@destroy", |Path(p): Params| async move { describe("destroy", &p) });

    let mut registrar = ResourceRegistrar::new(router);
    registrar
        .register(
            "users.posts",
            "PostController",
            &RouteOptions::new().alias(AliasMap::new().with("users", "author")),
        )
        .unwrap();

    registrar.into_router().into_inner()
}

async fn send(method: Method, uri: &str) -> (StatusCode, String) {
    let response = test_app()
        .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_collection_routes() {
    assert_eq!(send(Method::GET, "/users/7/posts").await, (StatusCode::OK, "index author=7".to_string()));
    assert_eq!(send(Method::POST, "/users/7/posts").await, (StatusCode::OK, "store author=7".to_string()));
}

#[tokio::test]
async fn test_create_is_not_shadowed_by_show() {
    assert_eq!(
        send(Method::GET, "/users/7/posts/create").await,
        (StatusCode::OK, "create author=7".to_string())
    );
}

#[tokio::test]
async fn test_item_routes_use_aliased_parameters() {
    assert_eq!(
        send(Method::GET, "/users/7/posts/3").await,
        (StatusCode::OK, "show author=7 post=3".to_string())
    );
    assert_eq!(
        send(Method::GET, "/users/7/posts/3/edit").await,
        (StatusCode::OK, "edit author=7 post=3".to_string())
    );
    assert_eq!(
        send(Method::DELETE, "/users/7/posts/3").await,
        (StatusCode::OK, "destroy author=7 post=3".to_string())
    );
}

#[tokio::test]
async fn test_update_answers_put_and_patch() {
    for method in [Method::PUT, Method::PATCH] {
        assert_eq!(
            send(method, "/users/7/posts/3").await,
            (StatusCode::OK, "update author=7 post=3".to_string())
        );
    }
}

#[tokio::test]
async fn test_unregistered_method() {
    let (status, _) = send(Method::POST, "/users/7/posts/3").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[test]
fn test_missing_handler_is_reported() {
    let router: AxumRouter = AxumRouter::new().handler("PostController@index", || async { "index" });

    let mut registrar = ResourceRegistrar::new(router);
    let err = registrar
        .register("posts", "PostController", &RouteOptions::new())
        .unwrap_err();

    assert_eq!(err, RouteError::UnresolvedAction("PostController@create".to_string()));
}

#[test]
fn test_only_registers_bound_actions() {
    let router: AxumRouter = AxumRouter::new()
        .handler("PostController@index", || async { "index" })
        .handler("PostController@show", || async { "show" });

    let mut registrar = ResourceRegistrar::new(router);
    registrar
        .register(
            "posts",
            "PostController",
            &RouteOptions::new().only([ResourceAction::Index, ResourceAction::Show]),
        )
        .unwrap();
}
