#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use serde_json::Value;

// Logging is auto-installed for most test binaries
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

pub use backend_test_support::problem_details::assert_problem_details_from_service_response;

/// Read and parse a JSON response body.
pub async fn read_json(resp: ServiceResponse<BoxBody>) -> Value {
    let body = actix_web::test::read_body(resp).await;
    serde_json::from_slice(&body).expect("response body should be valid JSON")
}
