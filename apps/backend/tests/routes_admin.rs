//! Admin routes: review flow, job management, stats, ETag revalidation.

mod common;
mod support;

use actix_web::http::header::{ETAG, IF_NONE_MATCH};
use actix_web::http::StatusCode;
use actix_web::test;
use backend::config::http::SeedProfile;
use backend::infra::state::build_state;
use serde_json::json;

use crate::common::assert_problem_details_from_service_response;
use crate::support::app_builder::create_test_app;

macro_rules! seeded_app {
    () => {{
        let state = build_state()
            .with_seed(SeedProfile::Demo)
            .build()
            .expect("create test state");
        create_test_app(state)
            .with_prod_routes()
            .build()
            .await
            .expect("create test app")
    }};
}

#[actix_web::test]
async fn admin_jobs_listing_includes_application_counts() {
    let app = seeded_app!();

    let req = test::TestRequest::get().uri("/api/admin/jobs").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key(ETAG));

    let json = common::read_json(resp).await;
    let jobs = json.as_array().expect("array response");
    assert_eq!(jobs.len(), 3);
    for job in jobs {
        assert_eq!(job["applicationsCount"], 1, "seeded posting: {job}");
    }
    // Newest posting first
    assert_eq!(jobs[0]["title"], "Diseñador UX/UI");
}

#[actix_web::test]
async fn admin_jobs_listing_supports_if_none_match() {
    let app = seeded_app!();

    let req = test::TestRequest::get().uri("/api/admin/jobs").to_request();
    let resp = test::call_service(&app, req).await;
    let etag = resp
        .headers()
        .get(ETAG)
        .and_then(|v| v.to_str().ok())
        .expect("etag header")
        .to_string();

    // Unchanged store revalidates to 304
    let req = test::TestRequest::get()
        .uri("/api/admin/jobs")
        .insert_header((IF_NONE_MATCH, etag.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);
    let body = test::read_body(resp).await;
    assert!(body.is_empty());

    // Any mutation invalidates the ETag
    let req = test::TestRequest::post()
        .uri("/api/admin/jobs/1/toggle-status")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/admin/jobs")
        .insert_header((IF_NONE_MATCH, etag.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fresh_etag = resp
        .headers()
        .get(ETAG)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert_ne!(etag, fresh_etag);
}

#[actix_web::test]
async fn review_flow_updates_the_application() {
    let app = seeded_app!();

    let req = test::TestRequest::post()
        .uri("/api/admin/job-applications/1/review")
        .set_json(json!({"status": "accepted", "notes": "Programar entrevista."}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let reviewed = common::read_json(resp).await;
    assert_eq!(reviewed["status"], "accepted");
    assert_eq!(reviewed["notes"], "Programar entrevista.");
    assert_eq!(reviewed["reviewedBy"], 1);
    assert!(reviewed["reviewedAt"].is_string());

    // The accepted application now counts toward the success rate
    let req = test::TestRequest::get()
        .uri("/api/admin/job-stats")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let stats = common::read_json(resp).await;
    assert_eq!(stats["successRate"], "25.0");
}

#[actix_web::test]
async fn review_of_unknown_application_is_404() {
    let app = seeded_app!();

    let req = test::TestRequest::post()
        .uri("/api/admin/job-applications/99/review")
        .set_json(json!({"status": "rejected"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "APPLICATION_NOT_FOUND",
        StatusCode::NOT_FOUND,
        Some("Job application 99 not found"),
    )
    .await;
}

#[actix_web::test]
async fn review_with_unknown_status_is_400() {
    let app = seeded_app!();

    let req = test::TestRequest::post()
        .uri("/api/admin/job-applications/1/review")
        .set_json(json!({"status": "archived"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "BAD_REQUEST",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
}

#[actix_web::test]
async fn non_numeric_path_id_is_400() {
    let app = seeded_app!();

    let req = test::TestRequest::post()
        .uri("/api/admin/jobs/abc/toggle-status")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "INVALID_ID",
        StatusCode::BAD_REQUEST,
        Some("Invalid id: abc"),
    )
    .await;
}

#[actix_web::test]
async fn delete_job_cascades_to_its_applications() {
    let app = seeded_app!();

    let req = test::TestRequest::delete().uri("/api/admin/jobs/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = common::read_json(resp).await;
    assert_eq!(body["success"], true);

    // Posting 1's application is gone; the spontaneous one survives
    let req = test::TestRequest::get()
        .uri("/api/job-applications")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let json = common::read_json(resp).await;
    let applications = json.as_array().unwrap();
    assert_eq!(applications.len(), 3);
    assert!(applications.iter().all(|a| a["jobId"] != 1));
    assert!(applications
        .iter()
        .any(|a| a["jobId"] == serde_json::Value::Null));

    // Deleting again is a 404
    let req = test::TestRequest::delete().uri("/api/admin/jobs/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "JOB_NOT_FOUND",
        StatusCode::NOT_FOUND,
        Some("Job 1 not found"),
    )
    .await;
}

#[actix_web::test]
async fn admin_applications_listing_embeds_job_and_profile() {
    let app = seeded_app!();

    let req = test::TestRequest::get()
        .uri("/api/admin/job-applications")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = common::read_json(resp).await;
    let applications = json.as_array().expect("array response");
    assert_eq!(applications.len(), 4);

    // Newest application first: the spontaneous one
    assert_eq!(applications[0]["jobId"], serde_json::Value::Null);
    assert_eq!(applications[0]["job"], serde_json::Value::Null);
    assert_eq!(applications[0]["profile"]["fullName"], "Juan Pérez");

    let attached: Vec<_> = applications
        .iter()
        .filter(|a| !a["job"].is_null())
        .collect();
    assert_eq!(attached.len(), 3);
    for application in attached {
        assert_eq!(application["job"]["id"], application["jobId"]);
    }
}

#[actix_web::test]
async fn admin_profiles_listing_includes_application_counts() {
    let app = seeded_app!();

    let req = test::TestRequest::get()
        .uri("/api/admin/user-profiles")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = common::read_json(resp).await;
    let profiles = json.as_array().expect("array response");
    assert_eq!(profiles.len(), 2);
    // Each seeded profile has two applications (one per posting pair)
    for profile in profiles {
        assert_eq!(profile["applicationsCount"], 2, "profile: {profile}");
    }
}

#[actix_web::test]
async fn job_stats_are_computed_from_the_store() {
    let app = seeded_app!();

    let req = test::TestRequest::get()
        .uri("/api/admin/job-stats")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let stats = common::read_json(resp).await;
    assert_eq!(stats["totalJobs"], 3);
    assert_eq!(stats["jobsThisMonth"], 3);
    assert_eq!(stats["totalApplications"], 4);
    assert_eq!(stats["applicationsThisWeek"], 3);
    assert_eq!(stats["activeProfiles"], 2);
    assert_eq!(stats["profilesAvailable"], 2);
    assert_eq!(stats["successRate"], "0.0");
}
