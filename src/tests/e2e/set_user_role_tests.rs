// End to end tests for the role assignment gate over HTTP and GraphQL.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::roles::core::claims::{Role, UserClaims};
use crate::shared::infrastructure::daily_summary_store::in_memory::InMemoryDailySummaryStore;
use crate::shared::infrastructure::identity_store::in_memory::InMemoryIdentityStore;
use crate::shell::auth::CALLER_ROLE_HEADER;
use crate::shell::http::router;
use crate::tests::fixtures::shell::make_test_state_with;

fn app_with(identities: Arc<InMemoryIdentityStore>) -> Router {
    router(make_test_state_with(
        Arc::new(InMemoryDailySummaryStore::new()),
        identities,
    ))
}

async fn post_json(
    app: Router,
    uri: &str,
    caller_role: Option<&str>,
    body: String,
) -> (StatusCode, Value) {
    let mut request = Request::post(uri).header("content-type", "application/json");
    if let Some(role) = caller_role {
        request = request.header(CALLER_ROLE_HEADER, role);
    }
    let response = app
        .oneshot(request.body(Body::from(body)).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or_default())
}

fn set_role_body(uid: &str, business_id: &str, role: &str) -> String {
    json!({ "uid": uid, "businessId": business_id, "role": role }).to_string()
}

#[tokio::test]
async fn it_should_assign_the_role_when_an_admin_calls() {
    let identities = Arc::new(InMemoryIdentityStore::new());
    let (status, json) = post_json(
        app_with(identities.clone()),
        "/set-user-role",
        Some("admin"),
        set_role_body("user-1", "biz1", "employee"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "ok": true }));
    assert_eq!(
        identities.claims("user-1").await,
        Some(UserClaims {
            business_id: "biz1".into(),
            role: Role::Employee,
        })
    );
}

#[tokio::test]
async fn it_should_return_403_permission_denied_for_a_non_admin() {
    let identities = Arc::new(InMemoryIdentityStore::new());
    let (status, json) = post_json(
        app_with(identities.clone()),
        "/set-user-role",
        Some("employee"),
        set_role_body("user-1", "biz1", "admin"),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        json,
        json!({ "code": "permission-denied", "message": "Admins only" })
    );
    assert_eq!(identities.claims("user-1").await, None);
}

#[tokio::test]
async fn it_should_return_403_without_a_caller_role() {
    let (status, json) = post_json(
        app_with(Arc::new(InMemoryIdentityStore::new())),
        "/set-user-role",
        None,
        set_role_body("user-1", "biz1", "client"),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["code"], "permission-denied");
}

#[tokio::test]
async fn it_should_return_400_invalid_argument_for_missing_args() {
    let (status, json) = post_json(
        app_with(Arc::new(InMemoryIdentityStore::new())),
        "/set-user-role",
        Some("admin"),
        json!({ "role": "client" }).to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json,
        json!({ "code": "invalid-argument", "message": "Missing args" })
    );
}

#[tokio::test]
async fn it_should_return_400_invalid_argument_for_an_unknown_role() {
    let (status, json) = post_json(
        app_with(Arc::new(InMemoryIdentityStore::new())),
        "/set-user-role",
        Some("admin"),
        set_role_body("user-1", "biz1", "owner"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json,
        json!({ "code": "invalid-argument", "message": "Invalid role" })
    );
}

#[tokio::test]
async fn it_should_return_500_internal_when_the_identity_store_fails() {
    let mut identities = InMemoryIdentityStore::new();
    identities.toggle_offline();
    let (status, json) = post_json(
        app_with(Arc::new(identities)),
        "/set-user-role",
        Some("admin"),
        set_role_body("user-1", "biz1", "client"),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "internal");
}

#[tokio::test]
async fn it_should_assign_the_role_through_the_graphql_mutation() {
    let identities = Arc::new(InMemoryIdentityStore::new());
    let query = r#"mutation { setUserRole(uid: "user-2", businessId: "biz1", role: "client") { ok } }"#;
    let (status, json) = post_json(
        app_with(identities.clone()),
        "/gql",
        Some("admin"),
        json!({ "query": query }).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["setUserRole"]["ok"], true);
    assert_eq!(
        identities.claims("user-2").await.map(|c| c.role),
        Some(Role::Client)
    );
}

#[tokio::test]
async fn it_should_carry_the_error_code_in_graphql_extensions() {
    let query = r#"mutation { setUserRole(uid: "user-2", businessId: "biz1", role: "client") { ok } }"#;
    let (_, json) = post_json(
        app_with(Arc::new(InMemoryIdentityStore::new())),
        "/gql",
        Some("client"),
        json!({ "query": query }).to_string(),
    )
    .await;

    assert_eq!(json["errors"][0]["message"], "Admins only");
    assert_eq!(json["errors"][0]["extensions"]["code"], "permission-denied");
}

#[tokio::test]
async fn it_should_read_daily_summaries_through_graphql() {
    let app = app_with(Arc::new(InMemoryIdentityStore::new()));
    let created = json!({
        "businessId": "biz1",
        "appointmentId": "appt-1",
        "before": null,
        "after": { "startAt": "2024-03-01T10:00:00Z", "priceCents": 5000 }
    });
    let (status, _) = post_json(
        app.clone(),
        "/triggers/appointment-written",
        None,
        created.to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let query = r#"{ dailySummary(businessId: "biz1", dateKey: "2024-03-01") { appointmentsCount revenueCents dateKey } }"#;
    let (_, json) = post_json(app, "/gql", None, json!({ "query": query }).to_string()).await;
    assert_eq!(
        json["data"]["dailySummary"],
        json!({ "appointmentsCount": 1, "revenueCents": 5000, "dateKey": "2024-03-01" })
    );
}

#[tokio::test]
async fn it_should_judge_the_caller_before_a_wrongly_typed_role() {
    let body = json!({ "uid": "user-1", "businessId": "biz1", "role": 7 }).to_string();

    let (status, json) = post_json(
        app_with(Arc::new(InMemoryIdentityStore::new())),
        "/set-user-role",
        Some("employee"),
        body.clone(),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["code"], "permission-denied");

    let (status, json) = post_json(
        app_with(Arc::new(InMemoryIdentityStore::new())),
        "/set-user-role",
        Some("admin"),
        body,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Invalid role");
}
