//! End-to-end API tests against a real PostgreSQL container.
//!
//! Run with `cargo test -- --ignored` on a machine with Docker.

use axum::http::{Method, StatusCode};
use serde_json::json;
use uuid::Uuid;

use crate::{
    db::repositories::{BlogRepository, UserRepository},
    models::BlogStatus,
    test_utils::test_app::{
        create_blog, create_test_app, create_test_app_with, login, register, send,
        signed_in_admin, signed_in_user, unique_username, TEST_PASSWORD,
    },
};

fn listed(body: &serde_json::Value, blog_id: Uuid) -> bool {
    body["blogs"]
        .as_array()
        .unwrap()
        .iter()
        .any(|b| b["id"] == blog_id.to_string())
}

#[tokio::test]
#[ignore = "requires docker for the postgres container"]
async fn test_register_hashes_password_and_rejects_duplicates() {
    let (app, state) = create_test_app().await;
    let username = unique_username();
    let user_id = register(&app, &username).await;

    let stored = UserRepository::find_by_id(state.db(), &user_id)
        .await
        .unwrap()
        .unwrap();
    assert_ne!(stored.password_hash, TEST_PASSWORD);

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/register",
        None,
        Some(json!({
            "firstName": "Other",
            "lastName": "Person",
            "username": username,
            "email": format!("{}@other.example.com", unique_username()),
            "password": TEST_PASSWORD,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "ALREADY_EXISTS");
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
#[ignore = "requires docker for the postgres container"]
async fn test_login_failures_are_indistinguishable() {
    let (app, _state) = create_test_app().await;
    let username = unique_username();
    register(&app, &username).await;

    let wrong_password = send(
        &app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({ "identifier": username, "password": "WrongPassword1" })),
    )
    .await;
    let unknown_user = send(
        &app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({ "identifier": unique_username(), "password": "WrongPassword1" })),
    )
    .await;

    assert_eq!(wrong_password.0, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password, unknown_user);
}

#[tokio::test]
#[ignore = "requires docker for the postgres container"]
async fn test_suspended_user_cannot_login() {
    let (app, state) = create_test_app().await;
    let (_admin_id, admin_token) = signed_in_admin(&app, &state).await;
    let username = unique_username();
    let user_id = register(&app, &username).await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/admin/users/{user_id}/status"),
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["isSuspended"], true);

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({ "identifier": username, "password": TEST_PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Account suspended");
}

#[tokio::test]
#[ignore = "requires docker for the postgres container"]
async fn test_admin_cannot_target_self() {
    let (app, state) = create_test_app().await;
    let (admin_id, admin_token) = signed_in_admin(&app, &state).await;

    let (status, _) = send(
        &app,
        Method::PATCH,
        &format!("/admin/users/{admin_id}/status"),
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app,
        Method::PATCH,
        &format!("/admin/users/{admin_id}/role"),
        Some(&admin_token),
        Some(json!({ "role": "user" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "requires docker for the postgres container"]
async fn test_admin_routes_require_admin_role() {
    let (app, _state) = create_test_app().await;
    let (_id, token) = signed_in_user(&app).await;

    let (status, _) = send(&app, Method::GET, "/admin/stats", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(&app, Method::GET, "/admin/stats", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires docker for the postgres container"]
async fn test_non_owner_cannot_touch_blog() {
    let (app, state) = create_test_app().await;
    let (_owner, owner_token) = signed_in_user(&app).await;
    let (_other, other_token) = signed_in_user(&app).await;
    let blog_id = create_blog(&app, &owner_token, None).await;

    let (status, _) = send(
        &app,
        Method::PATCH,
        &format!("/blogs/{blog_id}"),
        Some(&other_token),
        Some(json!({ "title": "Hijacked" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/blogs/{blog_id}"),
        Some(&other_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::PATCH,
        &format!("/blogs/trash/{blog_id}"),
        Some(&other_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let blog = BlogRepository::find_scoped(state.db(), &blog_id, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(blog.title, "Original title");
    assert_eq!(blog.status, BlogStatus::Active);
}

#[tokio::test]
#[ignore = "requires docker for the postgres container"]
async fn test_trash_and_restore_round_trip() {
    let (app, _state) = create_test_app().await;
    let (_owner, token) = signed_in_user(&app).await;
    let blog_id = create_blog(&app, &token, None).await;

    let (status, _) = send(
        &app,
        Method::PATCH,
        &format!("/blogs/trash/{blog_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, "/blogs", None, None).await;
    assert!(!listed(&body, blog_id));
    let (status, _) = send(&app, Method::GET, &format!("/blogs/{blog_id}"), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, body) = send(&app, Method::GET, "/profile/trash", Some(&token), None).await;
    assert!(listed(&body, blog_id));

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/blogs/trash/{blog_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Blog is already in trash");

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/blogs/restore/{blog_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["blog"]["status"], "active");

    let (_, body) = send(&app, Method::GET, "/blogs", None, None).await;
    assert!(listed(&body, blog_id));
    let (_, body) = send(&app, Method::GET, "/profile/blogs", Some(&token), None).await;
    assert!(listed(&body, blog_id));
}

#[tokio::test]
#[ignore = "requires docker for the postgres container"]
async fn test_moderation_disable_and_enable() {
    let (app, state) = create_test_app().await;
    let (_admin, admin_token) = signed_in_admin(&app, &state).await;
    let (_owner, owner_token) = signed_in_user(&app).await;
    let blog_id = create_blog(&app, &owner_token, None).await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/admin/blogs/{blog_id}/disable"),
        Some(&admin_token),
        Some(json!({ "reason": "spam" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["blog"]["status"], "disabled");
    assert_eq!(body["blog"]["disabledReason"], "spam");

    // Disabled posts stay publicly listed unless MODERATION_HIDE_DISABLED is set
    let (_, body) = send(&app, Method::GET, "/blogs", None, None).await;
    assert!(listed(&body, blog_id));

    let (status, _) = send(
        &app,
        Method::PATCH,
        &format!("/blogs/{blog_id}"),
        Some(&owner_token),
        Some(json!({ "title": "Edited" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(
        &app,
        Method::GET,
        "/admin/blogs?status=disabled",
        Some(&admin_token),
        None,
    )
    .await;
    assert!(listed(&body, blog_id));

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/admin/blogs/{blog_id}/enable"),
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["blog"]["status"], "active");
    assert!(body["blog"]["disabledReason"].is_null());
    assert!(body["blog"]["disabledAt"].is_null());
}

#[tokio::test]
#[ignore = "requires docker for the postgres container"]
async fn test_cannot_disable_trashed_blog() {
    let (app, state) = create_test_app().await;
    let (_admin, admin_token) = signed_in_admin(&app, &state).await;
    let (_owner, owner_token) = signed_in_user(&app).await;
    let blog_id = create_blog(&app, &owner_token, None).await;

    send(
        &app,
        Method::PATCH,
        &format!("/blogs/trash/{blog_id}"),
        Some(&owner_token),
        None,
    )
    .await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/admin/blogs/{blog_id}/disable"),
        Some(&admin_token),
        Some(json!({ "reason": "spam" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Cannot disable a blog that is already in trash"
    );
}

#[tokio::test]
#[ignore = "requires docker for the postgres container"]
async fn test_category_in_use_cannot_be_deleted() {
    let (app, state) = create_test_app().await;
    let (_admin, admin_token) = signed_in_admin(&app, &state).await;
    let (_owner, owner_token) = signed_in_user(&app).await;

    let name = format!("Tech-{}", unique_username());
    let (status, body) = send(
        &app,
        Method::POST,
        "/categories/create",
        Some(&admin_token),
        Some(json!({ "name": name })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let category_id: Uuid = body["category"]["id"].as_str().unwrap().parse().unwrap();

    let (status, _) = send(
        &app,
        Method::POST,
        "/categories/create",
        Some(&admin_token),
        Some(json!({ "name": name })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let blog_id = create_blog(&app, &owner_token, Some(category_id)).await;
    let (_, body) = send(&app, Method::GET, &format!("/blogs/{blog_id}"), None, None).await;
    assert_eq!(body["blog"]["category"]["name"], name.as_str());

    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/categories/{category_id}"),
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONFLICT");

    let (status, _) = send(&app, Method::GET, "/categories", None, None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires docker for the postgres container"]
async fn test_unlike_never_goes_below_zero() {
    let (app, _state) = create_test_app().await;
    let (owner_id, token) = signed_in_user(&app).await;
    let blog_id = create_blog(&app, &token, None).await;

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/blogs/{blog_id}/unlike"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["likesCount"], 0);

    let (_, body) = send(
        &app,
        Method::POST,
        &format!("/blogs/{blog_id}/like"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(body["likesCount"], 1);

    let (_, body) = send(&app, Method::POST, &format!("/blogs/{blog_id}/view"), None, None).await;
    assert_eq!(body["viewCount"], 1);

    let (_, body) = send(&app, Method::GET, &format!("/user/{owner_id}/stats"), None, None).await;
    assert_eq!(body["totalLikes"], 1);
    assert_eq!(body["totalViews"], 1);
    assert_eq!(body["postCount"], 1);
}

#[tokio::test]
#[ignore = "requires docker for the postgres container"]
async fn test_change_password_requires_previous() {
    let (app, _state) = create_test_app().await;
    let username = unique_username();
    register(&app, &username).await;
    let token = login(&app, &username).await;

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/auth/password",
        Some(&token),
        Some(json!({ "previousPassword": "WrongPassword1", "newPassword": "Password456" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/auth/password",
        Some(&token),
        Some(json!({ "previousPassword": TEST_PASSWORD, "newPassword": "Password456" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({ "identifier": username, "password": "Password456" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires docker for the postgres container"]
async fn test_disable_reason_is_optional() {
    let (app, state) = create_test_app().await;
    let (_admin, admin_token) = signed_in_admin(&app, &state).await;
    let (_owner, owner_token) = signed_in_user(&app).await;
    let with_empty_body = create_blog(&app, &owner_token, None).await;
    let without_body = create_blog(&app, &owner_token, None).await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/admin/blogs/{with_empty_body}/disable"),
        Some(&admin_token),
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["blog"]["status"], "disabled");
    assert!(body["blog"]["disabledReason"].is_null());
    assert!(body["blog"]["disabledAt"].is_string());

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/admin/blogs/{without_body}/disable"),
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["blog"]["status"], "disabled");
    assert!(body["blog"]["disabledReason"].is_null());
}

#[tokio::test]
#[ignore = "requires docker for the postgres container"]
async fn test_disabled_blogs_hidden_when_configured() {
    let (app, state) =
        create_test_app_with(|config| config.moderation.hide_disabled_from_public = true).await;
    let (_admin, admin_token) = signed_in_admin(&app, &state).await;
    let (_owner, owner_token) = signed_in_user(&app).await;
    let blog_id = create_blog(&app, &owner_token, None).await;

    let (_, body) = send(&app, Method::GET, "/blogs", None, None).await;
    assert!(listed(&body, blog_id));

    let (status, _) = send(
        &app,
        Method::PATCH,
        &format!("/admin/blogs/{blog_id}/disable"),
        Some(&admin_token),
        Some(json!({ "reason": "spam" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, "/blogs", None, None).await;
    assert!(!listed(&body, blog_id));
    let (status, _) = send(&app, Method::GET, &format!("/blogs/{blog_id}"), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Still visible to the owner and to moderators
    let (_, body) = send(&app, Method::GET, "/profile/blogs", Some(&owner_token), None).await;
    assert!(listed(&body, blog_id));
    let (_, body) = send(
        &app,
        Method::GET,
        "/admin/blogs?status=disabled",
        Some(&admin_token),
        None,
    )
    .await;
    assert!(listed(&body, blog_id));
}

#[tokio::test]
#[ignore = "requires docker for the postgres container"]
async fn test_owner_permanent_delete() {
    let (app, state) = create_test_app().await;
    let (_owner, token) = signed_in_user(&app).await;
    let active = create_blog(&app, &token, None).await;
    let trashed = create_blog(&app, &token, None).await;

    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/blogs/{active}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let (status, _) = send(&app, Method::GET, &format!("/blogs/{active}"), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    send(
        &app,
        Method::PATCH,
        &format!("/blogs/trash/{trashed}"),
        Some(&token),
        None,
    )
    .await;
    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/blogs/{trashed}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, "/profile/trash", Some(&token), None).await;
    assert!(!listed(&body, trashed));
    for id in [active, trashed] {
        let row = BlogRepository::find_scoped(state.db(), &id, None).await.unwrap();
        assert!(row.is_none());
    }

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/blogs/{active}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires docker for the postgres container"]
async fn test_admin_permanent_delete() {
    let (app, state) = create_test_app().await;
    let (_admin, admin_token) = signed_in_admin(&app, &state).await;
    let (_owner, owner_token) = signed_in_user(&app).await;
    let blog_id = create_blog(&app, &owner_token, None).await;

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/admin/blogs/{blog_id}"),
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, "/profile/blogs", Some(&owner_token), None).await;
    assert!(!listed(&body, blog_id));

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/admin/blogs/{blog_id}"),
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires docker for the postgres container"]
async fn test_malformed_requests_use_error_envelope() {
    let (app, _state) = create_test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/register",
        None,
        Some(json!({ "username": unique_username(), "password": TEST_PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["message"].is_string());

    let (status, body) = send(&app, Method::GET, "/blogs/not-a-uuid", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/register",
        None,
        Some(json!({
            "firstName": "   ",
            "lastName": "User",
            "username": unique_username(),
            "email": format!("{}@example.com", unique_username()),
            "password": TEST_PASSWORD,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}
