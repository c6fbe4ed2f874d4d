//! Body-parsing contract: malformed JSON becomes a problem+json 400.

mod common;
mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use backend::infra::state::build_state;
use serde_json::json;

use crate::common::assert_problem_details_from_service_response;
use crate::support::app_builder::create_test_app;

macro_rules! empty_app {
    () => {{
        let state = build_state().build().expect("create test state");
        create_test_app(state)
            .with_prod_routes()
            .build()
            .await
            .expect("create test app")
    }};
}

#[actix_web::test]
async fn syntactically_invalid_json_is_rejected() {
    let app = empty_app!();

    let req = test::TestRequest::post()
        .uri("/api/professional-areas")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"name": "Salud","#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "BAD_REQUEST",
        StatusCode::BAD_REQUEST,
        Some("Invalid JSON"),
    )
    .await;
}

#[actix_web::test]
async fn empty_body_is_rejected() {
    let app = empty_app!();

    let req = test::TestRequest::post()
        .uri("/api/professional-areas")
        .insert_header(("content-type", "application/json"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "BAD_REQUEST",
        StatusCode::BAD_REQUEST,
        Some("unexpected end of input"),
    )
    .await;
}

#[actix_web::test]
async fn wrong_field_types_are_rejected() {
    let app = empty_app!();

    let req = test::TestRequest::post()
        .uri("/api/professional-areas")
        .set_json(json!({"name": 42}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "BAD_REQUEST",
        StatusCode::BAD_REQUEST,
        Some("wrong types"),
    )
    .await;
}

#[actix_web::test]
async fn valid_body_still_passes_through() {
    let app = empty_app!();

    let req = test::TestRequest::post()
        .uri("/api/professional-areas")
        .set_json(json!({"name": "Salud"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
}
