//! Integration tests for the listing catalog and booking routes, covering
//! the pagination contract, lenient filter parsing, ownership checks, and
//! the booking conflict guard over the full actix application.

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web};
use serde_json::json;
use uuid::Uuid;

use hh_api::app::{create_app, AppState};
use hh_core::domain::entities::house::HouseFields;
use hh_core::repositories::{MockBookingRepository, MockHouseRepository, MockUserRepository};
use hh_core::services::token::TokenService;
use hh_shared::config::AuthConfig;

type TestState = web::Data<AppState<MockUserRepository, MockHouseRepository, MockBookingRepository>>;

const OWNER: &str = "owner@x.com";
const TENANT: &str = "tenant@x.com";

fn test_state() -> TestState {
    web::Data::new(AppState::new(
        Arc::new(MockUserRepository::new()),
        Arc::new(MockHouseRepository::new()),
        Arc::new(MockBookingRepository::new()),
        Arc::new(TokenService::new(&AuthConfig::new("integration-test-secret"))),
    ))
}

fn fields(name: &str, city: &str, rent: i64) -> HouseFields {
    HouseFields {
        house_name: name.to_string(),
        address: "1 Test Lane".to_string(),
        city: city.to_string(),
        bedrooms: 2,
        bathrooms: 1,
        room_size: "800 sqft".to_string(),
        rent_per_month: rent,
        availability_date: "2026-09-01".to_string(),
        picture: None,
        phone_number: "+000".to_string(),
        description: None,
    }
}

fn house_body(name: &str) -> serde_json::Value {
    json!({
        "house_name": name,
        "address": "1 Test Lane",
        "city": "Dhaka",
        "bedrooms": 2,
        "bathrooms": 1,
        "room_size": "800 sqft",
        "rent_per_month": 1500,
        "availability_date": "2026-09-01",
        "phone_number": "+000",
    })
}

/// Register an account over HTTP and return a bearer token for it
async fn login_as<S>(app: &S, email: &str, role: &str) -> String
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
{
    let response = test::call_service(
        app,
        test::TestRequest::post()
            .uri("/signup")
            .set_json(json!({
                "name": "U",
                "email": email,
                "password": "hunter22",
                "role": role,
            }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::call_and_read_body_json(
        app,
        test::TestRequest::post()
            .uri("/login")
            .set_json(json!({"email": email, "password": "hunter22"}))
            .to_request(),
    )
    .await;
    body["token"].as_str().unwrap().to_string()
}

#[actix_rt::test]
async fn test_search_pagination_contract() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone())).await;

    for i in 0..23 {
        state
            .house_service
            .add(OWNER, fields(&format!("House {}", i), "Dhaka", 1000 + i))
            .await
            .unwrap();
    }

    let page: serde_json::Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/houses").to_request())
            .await;
    assert_eq!(page["totalPages"], 3);
    assert_eq!(page["currentPage"], 1);
    assert_eq!(page["result"].as_array().unwrap().len(), 10);

    let last: serde_json::Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/houses?page=3").to_request(),
    )
    .await;
    assert_eq!(last["currentPage"], 3);
    assert_eq!(last["result"].as_array().unwrap().len(), 3);

    // past the end: empty slice, not an error
    let past: serde_json::Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/houses?page=9").to_request(),
    )
    .await;
    assert_eq!(past["totalPages"], 3);
    assert_eq!(past["result"].as_array().unwrap().len(), 0);
}

#[actix_rt::test]
async fn test_search_is_lenient_about_bad_numbers() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone())).await;

    for i in 0..3 {
        state
            .house_service
            .add(OWNER, fields(&format!("House {}", i), "Dhaka", 1000))
            .await
            .unwrap();
    }

    // non-numeric values relax their criterion instead of rejecting
    let page: serde_json::Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/houses?bedrooms=two&page=zero")
            .to_request(),
    )
    .await;
    assert_eq!(page["currentPage"], 1);
    assert_eq!(page["result"].as_array().unwrap().len(), 3);
}

#[actix_rt::test]
async fn test_search_rent_window_is_inclusive() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone())).await;

    for (name, rent) in [("Cheap", 499), ("Low", 500), ("High", 2000), ("Costly", 2001)] {
        state
            .house_service
            .add(OWNER, fields(name, "Dhaka", rent))
            .await
            .unwrap();
    }

    let page: serde_json::Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/houses?minRent=500&maxRent=2000")
            .to_request(),
    )
    .await;
    let mut names: Vec<&str> = page["result"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["house_name"].as_str().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, vec!["High", "Low"]);
}

#[actix_rt::test]
async fn test_title_search_including_empty_fragment() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone())).await;

    state
        .house_service
        .add(OWNER, fields("Sunny Flat", "Dhaka", 1500))
        .await
        .unwrap();
    state
        .house_service
        .add(OWNER, fields("Lake Villa", "Dhaka", 2500))
        .await
        .unwrap();

    let matched: serde_json::Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/housesearch/FLAT").to_request(),
    )
    .await;
    assert_eq!(matched.as_array().unwrap().len(), 1);

    // empty fragment returns the whole catalog
    let all: serde_json::Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/housesearch/").to_request(),
    )
    .await;
    assert_eq!(all.as_array().unwrap().len(), 2);
}

#[actix_rt::test]
async fn test_listing_mutations_enforce_role_and_ownership() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone())).await;

    let owner_token = login_as(&app, OWNER, "owner").await;
    let tenant_token = login_as(&app, TENANT, "tenant").await;
    let rival_token = login_as(&app, "rival@x.com", "owner").await;

    // unauthenticated create
    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/addhouse")
            .set_json(house_body("Sunny Flat"))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // tenants cannot list houses
    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/addhouse")
            .insert_header(("Authorization", format!("Bearer {}", tenant_token)))
            .set_json(house_body("Sunny Flat"))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/addhouse")
            .insert_header(("Authorization", format!("Bearer {}", owner_token)))
            .set_json(house_body("Sunny Flat"))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let house: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(house["owner_email"], OWNER);
    let house_id = house["id"].as_str().unwrap().to_string();

    // another owner cannot touch it
    let response = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/updatehouse/{}", house_id))
            .insert_header(("Authorization", format!("Bearer {}", rival_token)))
            .set_json(house_body("Stolen Flat"))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/updatehouse/{}", house_id))
            .insert_header(("Authorization", format!("Bearer {}", owner_token)))
            .set_json(house_body("Renamed Flat"))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(updated["house_name"], "Renamed Flat");

    let response = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/deletehouse/{}", house_id))
            .insert_header(("Authorization", format!("Bearer {}", owner_token)))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/house/{}", house_id))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_booking_conflict_guard() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone())).await;

    let house = state
        .house_service
        .add(OWNER, fields("Sunny Flat", "Dhaka", 1500))
        .await
        .unwrap();
    let body = json!({"houseId": house.id, "email": "a@x.com"});

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/mybooking")
            .set_json(body.clone())
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let booking: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(booking["status"], "pending");
    assert_eq!(booking["owner_email"], OWNER);

    // identical pair: soft conflict at 200, nothing written
    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/mybooking")
            .set_json(body)
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let conflict: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(conflict["message"], "This house already booked");

    let mine: serde_json::Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/mybooking/a@x.com").to_request(),
    )
    .await;
    assert_eq!(mine.as_array().unwrap().len(), 1);

    // same house, different tenant is fine
    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/mybooking")
            .set_json(json!({"houseId": house.id, "email": "b@x.com"}))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let incoming: serde_json::Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/bookedhouse/{}", OWNER))
            .to_request(),
    )
    .await;
    assert_eq!(incoming.as_array().unwrap().len(), 2);
}

#[actix_rt::test]
async fn test_booking_unknown_house_is_not_found() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone())).await;

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/mybooking")
            .set_json(json!({"houseId": Uuid::new_v4(), "email": "a@x.com"}))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_approval_is_owner_only_and_idempotent() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone())).await;

    let owner_token = login_as(&app, OWNER, "owner").await;
    let tenant_token = login_as(&app, TENANT, "tenant").await;

    let house = state
        .house_service
        .add(OWNER, fields("Sunny Flat", "Dhaka", 1500))
        .await
        .unwrap();
    let booking: serde_json::Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/mybooking")
            .set_json(json!({"houseId": house.id, "email": TENANT}))
            .to_request(),
    )
    .await;
    let booking_id = booking["id"].as_str().unwrap().to_string();

    // tenant cannot approve
    let response = test::call_service(
        &app,
        test::TestRequest::patch()
            .uri(&format!("/approvedbooking/{}", booking_id))
            .insert_header(("Authorization", format!("Bearer {}", tenant_token)))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    for _ in 0..2 {
        let approved: serde_json::Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::patch()
                .uri(&format!("/approvedbooking/{}", booking_id))
                .insert_header(("Authorization", format!("Bearer {}", owner_token)))
                .to_request(),
        )
        .await;
        assert_eq!(approved["status"], "approved");
    }
}

#[actix_rt::test]
async fn test_booking_removal_is_tenant_or_owner_only() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone())).await;

    let tenant_token = login_as(&app, TENANT, "tenant").await;
    let stranger_token = login_as(&app, "stranger@x.com", "tenant").await;

    let house = state
        .house_service
        .add(OWNER, fields("Sunny Flat", "Dhaka", 1500))
        .await
        .unwrap();
    let booking: serde_json::Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/mybooking")
            .set_json(json!({"houseId": house.id, "email": TENANT}))
            .to_request(),
    )
    .await;
    let booking_id = booking["id"].as_str().unwrap().to_string();

    let response = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/booking/{}", booking_id))
            .insert_header(("Authorization", format!("Bearer {}", stranger_token)))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/booking/{}", booking_id))
            .insert_header(("Authorization", format!("Bearer {}", tenant_token)))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let remaining: serde_json::Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/mybooking/{}", TENANT))
            .to_request(),
    )
    .await;
    assert!(remaining.as_array().unwrap().is_empty());
}
