mod common;

use axum::http::{Method, StatusCode};
use chrono::{Duration, Utc};
use futures::future::join_all;
use lpg_order_api::entities::{
    cylinder_mortgage::Entity as CylinderMortgageEntity,
    delivery_descriptor::Entity as DeliveryDescriptorEntity,
    order::Entity as OrderEntity,
    order_commodity_line::Entity as OrderCommodityLineEntity,
    order_gas_line::Entity as OrderGasLineEntity,
    usage_fee::Entity as UsageFeeEntity,
};
use rust_decimal_macros::dec;
use sea_orm::{ConnectionTrait, DatabaseBackend, EntityTrait, PaginatorTrait, Statement};
use serde_json::{json, Value};
use std::collections::HashSet;

use common::{assert_status_and_read, read_json, TestApp};

async fn seed_catalog(app: &TestApp) {
    app.seed_supplier("SUP_1", "GS").await;
    app.seed_customer("CIS_1", "SUP_1", dec!(0)).await;
    app.seed_gas_cylinder(1, "SUP_1", "propane", 20, true).await;
    app.seed_gas_price(1, dec!(100), Utc::now() - Duration::days(1))
        .await;
    app.seed_commodity(1, "SUP_1", "gas stove").await;
    app.seed_commodity_price(1, dec!(1500)).await;
}

fn order_payload() -> Value {
    json!({
        "order_infos": {
            "supplier_id": "SUP_1",
            "cis_id": "CIS_1",
            "contact_phone": "0911222333",
            "delivery_type": "immediate",
            "address_id": 7,
            "delivery_time_stamp": Utc::now().to_rfc3339()
        },
        "order_gas_list": [
            {
                "gas_id": 1,
                "numbers_of_cylinder": 2,
                "delivery_descriptor": {
                    "delivery_location": "12 Main St",
                    "usage_name": "kitchen",
                    "floor": 3,
                    "is_elevator": false
                }
            }
        ],
        "order_commodity_list": [
            { "commodity_id": 1, "numbers_of_commodity": 1 }
        ]
    })
}

#[tokio::test]
async fn sequential_creations_produce_sequential_ids() {
    let app = TestApp::new().await;
    seed_catalog(&app).await;

    for expected in ["GSO_1", "GSO_2", "GSO_3"] {
        let response = app
            .request(Method::POST, "/api/v1/orders", Some(order_payload()))
            .await;
        let body = assert_status_and_read(response, StatusCode::OK).await;
        assert_eq!(body["data"]["order_id"], expected);
    }
}

#[tokio::test]
async fn concurrent_creations_yield_distinct_ids() {
    let app = TestApp::new().await;
    seed_catalog(&app).await;

    let attempts = 8;
    let service = app.state.services.orders.clone();
    let requests: Vec<_> = (0..attempts)
        .map(|_| {
            let service = service.clone();
            let payload: lpg_order_api::services::orders::CreateOrderRequest =
                serde_json::from_value(order_payload()).expect("payload deserializes");
            tokio::spawn(async move { service.create_order(payload).await })
        })
        .collect();

    let mut ids = HashSet::new();
    for result in join_all(requests).await {
        let response = result.expect("task join").expect("order created");
        assert!(ids.insert(response.order_id.clone()), "duplicate order id");
    }
    assert_eq!(ids.len(), attempts);

    let stored = OrderEntity::find().count(&*app.state.db).await.unwrap();
    assert_eq!(stored, attempts as u64);
}

#[tokio::test]
async fn creation_is_atomic_when_a_late_insert_fails() {
    let app = TestApp::new().await;
    seed_catalog(&app).await;

    // Sabotage the last table the transaction writes to. The whole order
    // must roll back, leaving no partial rows anywhere.
    app.state
        .db
        .execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            "DROP TABLE usage_fees".to_string(),
        ))
        .await
        .expect("drop usage_fees");

    let mut payload = order_payload();
    payload["usage_fee"] = json!({ "number_of_records": 2, "money": "60" });

    let response = app
        .request(Method::POST, "/api/v1/orders", Some(payload))
        .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let db = &*app.state.db;
    assert_eq!(OrderEntity::find().count(db).await.unwrap(), 0);
    assert_eq!(OrderGasLineEntity::find().count(db).await.unwrap(), 0);
    assert_eq!(OrderCommodityLineEntity::find().count(db).await.unwrap(), 0);
    assert_eq!(DeliveryDescriptorEntity::find().count(db).await.unwrap(), 0);
    assert_eq!(CylinderMortgageEntity::find().count(db).await.unwrap(), 0);
}

#[tokio::test]
async fn repeated_descriptors_resolve_to_one_row() {
    let app = TestApp::new().await;
    seed_catalog(&app).await;

    let descriptor = json!({
        "delivery_location": "12 Main St",
        "usage_name": "kitchen",
        "floor": 3,
        "is_elevator": false
    });
    let mut payload = order_payload();
    payload["order_gas_list"] = json!([
        { "gas_id": 1, "numbers_of_cylinder": 1, "delivery_descriptor": descriptor },
        { "gas_id": 1, "numbers_of_cylinder": 2, "delivery_descriptor": descriptor }
    ]);

    let response = app
        .request(Method::POST, "/api/v1/orders", Some(payload))
        .await;
    let body = assert_status_and_read(response, StatusCode::OK).await;
    assert_eq!(body["data"]["delivery_ids"].as_array().unwrap().len(), 1);

    let db = &*app.state.db;
    assert_eq!(DeliveryDescriptorEntity::find().count(db).await.unwrap(), 1);
    let lines = OrderGasLineEntity::find().all(db).await.unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].delivery_id, lines[1].delivery_id);
}

#[tokio::test]
async fn order_without_product_lines_is_rejected() {
    let app = TestApp::new().await;
    seed_catalog(&app).await;

    let mut payload = order_payload();
    payload["order_gas_list"] = json!([]);
    payload["order_commodity_list"] = json!([]);

    let response = app
        .request(Method::POST, "/api/v1/orders", Some(payload))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        OrderEntity::find().count(&*app.state.db).await.unwrap(),
        0
    );
}

#[tokio::test]
async fn zero_quantity_is_rejected() {
    let app = TestApp::new().await;
    seed_catalog(&app).await;

    let mut payload = order_payload();
    payload["order_gas_list"][0]["numbers_of_cylinder"] = json!(0);

    let response = app
        .request(Method::POST, "/api/v1/orders", Some(payload))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn gas_line_without_effective_price_is_not_found() {
    let app = TestApp::new().await;
    app.seed_supplier("SUP_1", "GS").await;
    app.seed_customer("CIS_1", "SUP_1", dec!(0)).await;
    app.seed_gas_cylinder(1, "SUP_1", "propane", 20, true).await;
    // The only price row takes effect tomorrow, so nothing is in effect now.
    app.seed_gas_price(1, dec!(100), Utc::now() + Duration::days(1))
        .await;

    let mut payload = order_payload();
    payload["order_commodity_list"] = json!([]);

    let response = app
        .request(Method::POST, "/api/v1/orders", Some(payload))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json(response).await;
    assert_eq!(body["error"], "Not Found");
    assert!(body["message"].is_string());

    assert_eq!(
        OrderEntity::find().count(&*app.state.db).await.unwrap(),
        0
    );
    assert_eq!(
        UsageFeeEntity::find().count(&*app.state.db).await.unwrap(),
        0
    );
}

#[tokio::test]
async fn structurally_invalid_body_is_a_bad_request() {
    let app = TestApp::new().await;
    seed_catalog(&app).await;

    let response = app
        .request(Method::POST, "/api/v1/orders", Some(json!({})))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_supplier_is_not_found() {
    let app = TestApp::new().await;

    let response = app
        .request(Method::POST, "/api/v1/orders", Some(order_payload()))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
