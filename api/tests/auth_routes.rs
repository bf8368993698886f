//! Integration tests for the account and profile routes, run against the
//! in-memory repositories through the full actix application.

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web};
use serde_json::json;
use uuid::Uuid;

use hh_api::app::{create_app, AppState};
use hh_core::domain::entities::user::{User, UserRole};
use hh_core::repositories::{MockBookingRepository, MockHouseRepository, MockUserRepository};
use hh_core::services::token::TokenService;
use hh_shared::config::AuthConfig;

type TestState = web::Data<AppState<MockUserRepository, MockHouseRepository, MockBookingRepository>>;

fn test_state() -> TestState {
    web::Data::new(AppState::new(
        Arc::new(MockUserRepository::new()),
        Arc::new(MockHouseRepository::new()),
        Arc::new(MockBookingRepository::new()),
        Arc::new(TokenService::new(&AuthConfig::new("integration-test-secret"))),
    ))
}

fn signup_body(name: &str, email: &str, role: &str) -> serde_json::Value {
    json!({
        "name": name,
        "email": email,
        "password": "hunter22",
        "role": role,
    })
}

#[actix_rt::test]
async fn test_signup_login_currentuser_roundtrip() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone())).await;

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/signup")
            .set_json(signup_body("Jane", "jane@x.com", "tenant"))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(created["email"], "jane@x.com");
    assert!(created.get("password_hash").is_none());

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/login")
            .set_json(json!({"email": "jane@x.com", "password": "hunter22"}))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(response).await;
    let token = body["token"].as_str().unwrap().to_string();

    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/currentuser")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let user: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(user["email"], "jane@x.com");
    assert_eq!(user["role"], "tenant");
}

#[actix_rt::test]
async fn test_duplicate_signup_is_conflict() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone())).await;

    for (expected, role) in [(StatusCode::CREATED, "tenant"), (StatusCode::CONFLICT, "owner")] {
        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/signup")
                .set_json(signup_body("Jane", "jane@x.com", role))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), expected);
    }
}

#[actix_rt::test]
async fn test_login_failures_are_indistinguishable() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone())).await;

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/signup")
            .set_json(signup_body("Jane", "jane@x.com", "tenant"))
            .to_request(),
    )
    .await;

    let wrong_password = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/login")
            .set_json(json!({"email": "jane@x.com", "password": "wrong-password"}))
            .to_request(),
    )
    .await;
    let unknown_email = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/login")
            .set_json(json!({"email": "ghost@x.com", "password": "hunter22"}))
            .to_request(),
    )
    .await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    let body_a = test::read_body(wrong_password).await;
    let body_b = test::read_body(unknown_email).await;
    assert_eq!(body_a, body_b);
}

#[actix_rt::test]
async fn test_currentuser_rejects_bad_or_missing_token() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone())).await;

    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/currentuser")
            .insert_header(("Authorization", "Bearer not-a-token"))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/currentuser").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_valid_token_for_missing_user_is_not_found() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone())).await;

    // a well-formed token whose subject was never stored
    let ghost = User::new(
        "Ghost".to_string(),
        "ghost@x.com".to_string(),
        "hash".to_string(),
        UserRole::Tenant,
    );
    let token = state.token_service.generate(&ghost).unwrap();

    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/currentuser")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_owner_probe_scenarios() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone())).await;

    for (email, role) in [("owner@x.com", "owner"), ("tenant@x.com", "tenant")] {
        test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/signup")
                .set_json(signup_body("U", email, role))
                .to_request(),
        )
        .await;
    }

    for (email, expected) in [
        ("owner@x.com", true),
        ("tenant@x.com", false),
        ("unknown@x.com", false),
    ] {
        let response = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/owner/{}", email))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["owner"], expected, "probe for {}", email);
    }
}

#[actix_rt::test]
async fn test_profile_fetch_by_email_and_id() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone())).await;

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/signup")
            .set_json(signup_body("Jane", "jane@x.com", "tenant"))
            .to_request(),
    )
    .await;
    let user = state
        .auth_service
        .profile_by_email("jane@x.com")
        .await
        .unwrap();

    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/profile/jane@x.com").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/getprofileinfo/{}", user.id))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["email"], "jane@x.com");

    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/getprofileinfo/{}", Uuid::new_v4()))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_profile_update_requires_matching_identity() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone())).await;

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/signup")
            .set_json(signup_body("Jane", "jane@x.com", "tenant"))
            .to_request(),
    )
    .await;
    let login: serde_json::Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/login")
            .set_json(json!({"email": "jane@x.com", "password": "hunter22"}))
            .to_request(),
    )
    .await;
    let token = login["token"].as_str().unwrap().to_string();
    let user = state
        .auth_service
        .profile_by_email("jane@x.com")
        .await
        .unwrap();

    // unauthenticated
    let response = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/updateprofile/{}", user.id))
            .set_json(json!({"address": "5 Hill Road"}))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // someone else's profile
    let response = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/updateprofile/{}", Uuid::new_v4()))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(json!({"address": "5 Hill Road"}))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // own profile, partial patch
    let response = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/updateprofile/{}", user.id))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(json!({"address": "5 Hill Road"}))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["address"], "5 Hill Road");
    assert_eq!(body["name"], "Jane");

    let stored = state.auth_service.profile_by_id(user.id).await.unwrap();
    assert_eq!(stored.address.as_deref(), Some("5 Hill Road"));
}
