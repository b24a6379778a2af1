//! HTTP-level integration tests for the dean surface: decision issuance,
//! the students-needing-attention scan, plan approval, and the dashboard.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json_auth, seed_user};
use sqlx::PgPool;

use academe_db::models::student_profile::UpsertStudentProfile;
use academe_db::models::user::User;
use academe_db::repositories::StudentProfileRepo;

/// Seed a student user with an optional GPA/department profile.
async fn seed_student(
    pool: &PgPool,
    username: &str,
    gpa: Option<f64>,
    department: Option<&str>,
) -> User {
    let (user, _) = seed_user(pool, username, "student", false).await;
    if gpa.is_some() || department.is_some() {
        let profile = UpsertStudentProfile {
            user_id: user.id,
            gpa,
            department: department.map(str::to_string),
        };
        StudentProfileRepo::upsert(pool, &profile)
            .await
            .expect("profile upsert should succeed");
    }
    user
}

/// Issue a decision via the API, asserting 201.
async fn issue(pool: &PgPool, token: &str, student_id: i64, decision_type: &str) {
    let body = serde_json::json!({
        "student": student_id,
        "decision_type": decision_type,
        "notes": "Recorded during review."
    });
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/dean/academic-decisions/issue",
        body,
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// RBAC sweep
// ---------------------------------------------------------------------------

/// Every dean endpoint answers 403 for an authenticated non-dean.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_dean_surface_forbidden_for_other_roles(pool: PgPool) {
    let (_, teacher_token) = seed_user(&pool, "teach", "teacher", false).await;

    let get_paths = [
        "/api/v1/dean/meetings",
        "/api/v1/dean/academic-decisions",
        "/api/v1/dean/academic-decisions/students",
        "/api/v1/dean/plan-approval",
        "/api/v1/dean/dashboard/stats",
        "/api/v1/dean/dashboard/recent-activity",
    ];
    for path in get_paths {
        let response = get_auth(common::build_test_app(pool.clone()), path, &teacher_token).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN, "GET {path}");
    }

    let post_paths = [
        "/api/v1/dean/academic-decisions/issue",
        "/api/v1/dean/plan-approval/1/approve",
        "/api/v1/dean/plan-approval/1/return",
    ];
    for path in post_paths {
        let response = post_json_auth(
            common::build_test_app(pool.clone()),
            path,
            serde_json::json!({}),
            &teacher_token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN, "POST {path}");
    }
}

/// The dean surface also fails closed without a token.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_dean_surface_unauthenticated(pool: PgPool) {
    let response = common::get(
        common::build_test_app(pool),
        "/api/v1/dean/dashboard/stats",
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Decision issuance
// ---------------------------------------------------------------------------

/// Issuing against an unknown student returns 404 and writes nothing.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_issue_decision_unknown_student(pool: PgPool) {
    let (_, dean_token) = seed_user(&pool, "thedean", "dean", true).await;

    let body = serde_json::json!({
        "student": 424242,
        "decision_type": "first-warning",
        "notes": ""
    });
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/dean/academic-decisions/issue",
        body,
        &dean_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/dean/academic-decisions",
        &dean_token,
    )
    .await;
    let list = body_json(response).await;
    assert_eq!(list.as_array().unwrap().len(), 0, "no record was created");
}

/// A successful issue returns the decision with usernames resolved.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_issue_decision_success(pool: PgPool) {
    let (dean, dean_token) = seed_user(&pool, "thedean", "dean", true).await;
    let student = seed_student(&pool, "stud1", Some(1.4), Some("Physics")).await;

    let body = serde_json::json!({
        "student": student.id,
        "decision_type": "first-warning",
        "notes": "GPA below threshold two terms running."
    });
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/dean/academic-decisions/issue",
        body,
        &dean_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["student_id"], student.id);
    assert_eq!(json["student_username"], "stud1");
    assert_eq!(json["issued_by"], dean.id);
    assert_eq!(json["issued_by_username"], "thedean");
    assert_eq!(json["decision_type"], "first-warning");
}

/// An out-of-vocabulary decision type is rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_issue_decision_invalid_type(pool: PgPool) {
    let (_, dean_token) = seed_user(&pool, "thedean", "dean", true).await;
    let student = seed_student(&pool, "stud1", None, None).await;

    let body = serde_json::json!({
        "student": student.id,
        "decision_type": "expulsion"
    });
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/dean/academic-decisions/issue",
        body,
        &dean_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Students needing attention
// ---------------------------------------------------------------------------

/// `?gpa=2.0` keeps exactly the students strictly below the threshold,
/// counting a missing profile as GPA 0.0.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_attention_gpa_threshold(pool: PgPool) {
    let (_, dean_token) = seed_user(&pool, "thedean", "dean", true).await;
    seed_student(&pool, "low", Some(1.5), None).await;
    seed_student(&pool, "boundary", Some(2.0), None).await;
    seed_student(&pool, "high", Some(3.6), None).await;
    seed_student(&pool, "noprofile", None, None).await;

    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/dean/academic-decisions/students?gpa=2.0",
        &dean_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let usernames: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["student_id"].as_str().unwrap())
        .collect();
    assert_eq!(usernames, vec!["low", "noprofile"]);

    // The profile-less student reports an effective GPA of 0.0.
    let noprofile = &json.as_array().unwrap()[1];
    assert_eq!(noprofile["gpa"], 0.0);
    assert_eq!(noprofile["previous_warnings"], 0);
}

/// The warnings filter matches the exact count of prior decisions.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_attention_warning_count(pool: PgPool) {
    let (_, dean_token) = seed_user(&pool, "thedean", "dean", true).await;
    let once = seed_student(&pool, "once", Some(1.0), None).await;
    let twice = seed_student(&pool, "twice", Some(1.0), None).await;
    seed_student(&pool, "never", Some(1.0), None).await;

    issue(&pool, &dean_token, once.id, "first-warning").await;
    issue(&pool, &dean_token, twice.id, "first-warning").await;
    issue(&pool, &dean_token, twice.id, "second-warning").await;

    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/dean/academic-decisions/students?warnings=1",
        &dean_token,
    )
    .await;
    let json = body_json(response).await;
    let usernames: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["student_id"].as_str().unwrap())
        .collect();
    assert_eq!(usernames, vec!["once"]);
}

/// Filters combine conjunctively; department must match exactly.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_attention_combined_filters(pool: PgPool) {
    let (_, dean_token) = seed_user(&pool, "thedean", "dean", true).await;
    seed_student(&pool, "match", Some(1.2), Some("Mathematics")).await;
    seed_student(&pool, "wrongdept", Some(1.2), Some("Physics")).await;
    seed_student(&pool, "goodgpa", Some(3.0), Some("Mathematics")).await;

    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/dean/academic-decisions/students?gpa=2.0&warnings=0&department=Mathematics",
        &dean_token,
    )
    .await;
    let json = body_json(response).await;
    let array = json.as_array().unwrap();
    assert_eq!(array.len(), 1);
    assert_eq!(array[0]["student_id"], "match");
    assert_eq!(array[0]["department"], "Mathematics");
}

/// Without query parameters the scan returns every student.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_attention_no_filters(pool: PgPool) {
    let (_, dean_token) = seed_user(&pool, "thedean", "dean", true).await;
    seed_student(&pool, "one", Some(3.9), None).await;
    seed_student(&pool, "two", None, None).await;

    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/dean/academic-decisions/students",
        &dean_token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Plan approval
// ---------------------------------------------------------------------------

/// Seed a plan through the API as a teacher; returns its id.
async fn seed_plan(pool: &PgPool, token: &str) -> i64 {
    let body = serde_json::json!({
        "subject_name": "Thermodynamics",
        "submission_status": "submitted",
        "plan_content": "Weeks 1-4: laws and state functions."
    });
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/study-plans",
        body,
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Approve then return: the plan lands on needs_revision with its content
/// replaced by the reviewer notes.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_approve_then_return_plan(pool: PgPool) {
    let (_, teacher_token) = seed_user(&pool, "teach", "teacher", false).await;
    let (_, dean_token) = seed_user(&pool, "thedean", "dean", true).await;
    let plan_id = seed_plan(&pool, &teacher_token).await;

    // Approve.
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/dean/plan-approval/{plan_id}/approve"),
        serde_json::json!({}),
        &dean_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({ "status": "approved" }));

    // Return with notes.
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/dean/plan-approval/{plan_id}/return"),
        serde_json::json!({ "notes": "Add assessment rubric." }),
        &dean_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "needs_revision");
    assert_eq!(json["notes"], "Add assessment rubric.");

    // The stored plan reflects the return; prior content is gone.
    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/v1/dean/plan-approval/{plan_id}"),
        &dean_token,
    )
    .await;
    let plan = body_json(response).await;
    assert_eq!(plan["submission_status"], "needs_revision");
    assert_eq!(plan["plan_content"], "Add assessment rubric.");
}

/// Approving a nonexistent plan answers 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_approve_unknown_plan(pool: PgPool) {
    let (_, dean_token) = seed_user(&pool, "thedean", "dean", true).await;

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/dean/plan-approval/9999/approve",
        serde_json::json!({}),
        &dean_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// The dean sees every plan regardless of owner.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_dean_plan_list_unscoped(pool: PgPool) {
    let (_, token_a) = seed_user(&pool, "teacher_a", "teacher", false).await;
    let (_, token_b) = seed_user(&pool, "teacher_b", "teacher", false).await;
    let (_, dean_token) = seed_user(&pool, "thedean", "dean", true).await;
    seed_plan(&pool, &token_a).await;
    seed_plan(&pool, &token_b).await;

    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/dean/plan-approval",
        &dean_token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// Stats mirror direct counts of the underlying predicates.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_dashboard_stats(pool: PgPool) {
    let (_, teacher_token) = seed_user(&pool, "teach", "teacher", false).await;
    let (_, dean_token) = seed_user(&pool, "thedean", "dean", true).await;

    // Two submitted plans; one gets approved.
    let plan_a = seed_plan(&pool, &teacher_token).await;
    seed_plan(&pool, &teacher_token).await;
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/dean/plan-approval/{plan_a}/approve"),
        serde_json::json!({}),
        &dean_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // One completed unsigned meeting.
    let meeting = serde_json::json!({
        "title": "Council session 15",
        "date": "2026-06-02",
        "time": "10:00 - 12:00",
        "location": "Senate Hall",
        "status": "completed"
    });
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/dean/meetings",
        meeting,
        &dean_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // One warning and one dismissal; only the warning counts as pending.
    let student = seed_student(&pool, "stud1", Some(1.0), None).await;
    issue(&pool, &dean_token, student.id, "first-warning").await;
    issue(&pool, &dean_token, student.id, "dismissal").await;

    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/dean/dashboard/stats",
        &dean_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let stats = body_json(response).await;
    assert_eq!(stats["pending_decisions"], 1);
    assert_eq!(stats["plans_to_review"], 1);
    assert_eq!(stats["meetings_to_sign"], 1);
    assert_eq!(stats["approved_plans"], 1);
}

/// The dashboard feed returns at most 10 entries, newest first, with the
/// acting user's username resolved.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_dashboard_recent_activity_feed(pool: PgPool) {
    let (_, dean_token) = seed_user(&pool, "thedean", "dean", true).await;
    let student = seed_student(&pool, "stud1", Some(1.0), None).await;

    // Each issue records one activity entry.
    for _ in 0..12 {
        issue(&pool, &dean_token, student.id, "first-warning").await;
    }

    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/dean/dashboard/recent-activity",
        &dean_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 10);
    for entry in entries {
        assert!(entry["description"].is_string());
        assert!(entry["timestamp"].is_string());
        assert_eq!(entry["user"], "thedean");
    }
}
