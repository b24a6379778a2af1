//! HTTP-level integration tests for `/meetings` and `/dean/meetings`,
//! including the dean sign-off signature rule.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json_auth, put_json_auth, seed_user};
use sqlx::PgPool;

use academe_db::models::user::UpdateUser;
use academe_db::repositories::UserRepo;

fn meeting_body() -> serde_json::Value {
    serde_json::json!({
        "title": "Council session 14",
        "date": "2026-05-11",
        "time": "14:00 - 16:00",
        "location": "Senate Hall",
        "status": "completed",
        "attendees": 12,
        "participants": ["Dr. Hamdan", "Dr. Farouk"],
        "minutes": "Curriculum revision approved in principle."
    })
}

/// Give a user a first/last name so display-name derivation has material.
async fn name_user(pool: &PgPool, id: i64, first: &str, last: &str) {
    let update = UpdateUser {
        username: None,
        email: None,
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
        role_id: None,
        department: None,
        is_staff: None,
        is_active: None,
    };
    UserRepo::update(pool, id, &update)
        .await
        .expect("update should succeed")
        .expect("user must exist");
}

/// Any authenticated user can create and read meetings.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_meeting_create_and_get(pool: PgPool) {
    let (_, token) = seed_user(&pool, "teach", "teacher", false).await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/meetings",
        meeting_body(),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["signedByDean"], false);
    assert_eq!(created["signature"], serde_json::Value::Null);

    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/v1/meetings/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched["title"], "Council session 14");
    assert_eq!(fetched["participants"][0], "Dr. Hamdan");
}

/// Signing without an explicit signature derives "{first} {last}".
#[sqlx::test(migrations = "../db/migrations")]
async fn test_sign_off_derives_display_name(pool: PgPool) {
    let (dean, token) = seed_user(&pool, "rhaddad", "dean", true).await;
    name_user(&pool, dean.id, "Rahma", "Haddad").await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/dean/meetings",
        meeting_body(),
        &token,
    )
    .await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = put_json_auth(
        common::build_test_app(pool),
        &format!("/api/v1/dean/meetings/{id}"),
        serde_json::json!({ "signedByDean": true }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let signed = body_json(response).await;
    assert_eq!(signed["signedByDean"], true);
    assert_eq!(signed["signature"], "Rahma Haddad");
}

/// A dean with no name on file signs with their username.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_sign_off_falls_back_to_username(pool: PgPool) {
    let (_, token) = seed_user(&pool, "deanonly", "dean", true).await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/dean/meetings",
        meeting_body(),
        &token,
    )
    .await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = put_json_auth(
        common::build_test_app(pool),
        &format!("/api/v1/dean/meetings/{id}"),
        serde_json::json!({ "signedByDean": true }),
        &token,
    )
    .await;
    let signed = body_json(response).await;
    assert_eq!(signed["signature"], "deanonly");
}

/// An explicit signature in the payload is preserved, not overwritten.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_sign_off_explicit_signature_wins(pool: PgPool) {
    let (dean, token) = seed_user(&pool, "rhaddad", "dean", true).await;
    name_user(&pool, dean.id, "Rahma", "Haddad").await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/dean/meetings",
        meeting_body(),
        &token,
    )
    .await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = put_json_auth(
        common::build_test_app(pool),
        &format!("/api/v1/dean/meetings/{id}"),
        serde_json::json!({ "signedByDean": true, "signature": "Prof. R. Haddad (acting)" }),
        &token,
    )
    .await;
    let signed = body_json(response).await;
    assert_eq!(signed["signature"], "Prof. R. Haddad (acting)");
}

/// The derivation fires only on the false -> true transition; a second
/// update by a different dean leaves the original signature alone.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_sign_off_only_once_per_sign_event(pool: PgPool) {
    let (first_dean, first_token) = seed_user(&pool, "firstdean", "dean", true).await;
    name_user(&pool, first_dean.id, "Amina", "Khalil").await;
    let (_, second_token) = seed_user(&pool, "seconddean", "dean", true).await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/dean/meetings",
        meeting_body(),
        &first_token,
    )
    .await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    // First dean signs.
    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/dean/meetings/{id}"),
        serde_json::json!({ "signedByDean": true }),
        &first_token,
    )
    .await;
    assert_eq!(body_json(response).await["signature"], "Amina Khalil");

    // Second dean touches the meeting with the flag still true.
    let response = put_json_auth(
        common::build_test_app(pool),
        &format!("/api/v1/dean/meetings/{id}"),
        serde_json::json!({ "signedByDean": true, "minutes": "Addendum recorded." }),
        &second_token,
    )
    .await;
    let updated = body_json(response).await;
    assert_eq!(updated["signature"], "Amina Khalil");
    assert_eq!(updated["minutes"], "Addendum recorded.");
}

/// The dean meeting mount rejects non-dean roles with 403.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_dean_meetings_forbidden_for_teacher(pool: PgPool) {
    let (_, token) = seed_user(&pool, "teach", "teacher", false).await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/dean/meetings", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// An out-of-vocabulary meeting status is rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_meeting_invalid_status(pool: PgPool) {
    let (_, token) = seed_user(&pool, "teach", "teacher", false).await;
    let app = common::build_test_app(pool);

    let mut body = meeting_body();
    body["status"] = serde_json::json!("postponed");
    let response = post_json_auth(app, "/api/v1/meetings", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
