//! Dashboard widget endpoints over the seeded demo store.

mod common;
mod support;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test;
use backend::config::http::SeedProfile;
use backend::infra::state::build_state;
use serde_json::Value;

use crate::support::app_builder::create_test_app;

async fn seeded_app(
) -> impl Service<actix_http::Request, Response = ServiceResponse<actix_web::body::BoxBody>, Error = actix_web::Error>
{
    let state = build_state()
        .with_seed(SeedProfile::Demo)
        .build()
        .expect("create test state");
    create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("create test app")
}

async fn get_json(
    app: &impl Service<
        actix_http::Request,
        Response = ServiceResponse<actix_web::body::BoxBody>,
        Error = actix_web::Error,
    >,
    uri: &str,
) -> Value {
    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::OK, "GET {uri}");
    common::read_json(resp).await
}

#[actix_web::test]
async fn dashboard_stats_returns_the_demo_figures() {
    let app = seeded_app().await;
    let json = get_json(&app, "/api/dashboard/stats").await;

    assert_eq!(json["usersTotal"], "5,248");
    assert_eq!(json["usersChange"], 12.3);
    assert_eq!(json["ordersTotal"], "1,473");
    assert_eq!(json["ordersChange"], 8.2);
    assert_eq!(json["revenue"], "$48,592");
    assert_eq!(json["revenueChange"], -3.1);
    assert_eq!(json["productsTotal"], "892");
    assert_eq!(json["productsChange"], 4.7);
}

#[actix_web::test]
async fn recent_orders_are_newest_first_top_four() {
    let app = seeded_app().await;
    let json = get_json(&app, "/api/orders/recent").await;

    let orders = json.as_array().expect("array response");
    assert_eq!(orders.len(), 4);
    assert_eq!(orders[0]["orderNumber"], "ORD-0102");
    assert_eq!(orders[3]["orderNumber"], "ORD-0099");

    // Embedded customer summary is part of the wire format
    assert_eq!(orders[0]["customer"]["name"], "María González");
    assert!(orders[0]["customer"]["avatarUrl"].is_string());

    let created: Vec<&str> = orders
        .iter()
        .map(|o| o["createdAt"].as_str().unwrap())
        .collect();
    let mut sorted = created.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(created, sorted, "orders should be createdAt-descending");
}

#[actix_web::test]
async fn top_selling_products_are_sales_desc_top_three() {
    let app = seeded_app().await;
    let json = get_json(&app, "/api/products/top-selling").await;

    let products = json.as_array().expect("array response");
    assert_eq!(products.len(), 3);
    let sales: Vec<i64> = products
        .iter()
        .map(|p| p["sales"].as_i64().unwrap())
        .collect();
    assert_eq!(sales, vec![324, 256, 198]);
    assert_eq!(products[0]["productId"], "PRD-001");
}

#[actix_web::test]
async fn recent_activities_are_newest_first_top_four() {
    let app = seeded_app().await;
    let json = get_json(&app, "/api/activities/recent").await;

    let activities = json.as_array().expect("array response");
    assert_eq!(activities.len(), 4);
    assert_eq!(activities[0]["type"], "user");
    assert!(activities[0]["message"]
        .as_str()
        .unwrap()
        .contains("Laura Sánchez"));
    assert_eq!(activities[0]["timeAgo"], "Hace 5 minutos");
}

#[actix_web::test]
async fn full_order_and_product_listings_are_served() {
    let app = seeded_app().await;

    let orders = get_json(&app, "/api/orders").await;
    assert_eq!(orders.as_array().unwrap().len(), 4);

    let products = get_json(&app, "/api/products").await;
    assert_eq!(products.as_array().unwrap().len(), 3);
}
