mod common;

use axum::http::{Method, StatusCode};
use chrono::{Duration, Utc};
use lpg_order_api::entities::order;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use common::{assert_status_and_read, TestApp};

fn decimal(value: &Value) -> Decimal {
    match value {
        Value::String(s) => s.parse().expect("decimal string"),
        Value::Number(n) => n.to_string().parse().expect("decimal number"),
        other => panic!("not a decimal value: {other}"),
    }
}

async fn seed_catalog(app: &TestApp, init_arrears: Decimal) {
    app.seed_supplier("SUP_1", "GS").await;
    app.seed_customer("CIS_1", "SUP_1", init_arrears).await;
    app.seed_gas_cylinder(1, "SUP_1", "propane", 20, true).await;
    app.seed_gas_price(1, dec!(100), Utc::now() - Duration::days(1))
        .await;
    app.seed_commodity(1, "SUP_1", "gas stove").await;
    app.seed_commodity_price(1, dec!(1500)).await;
}

fn full_order_payload(discount: Decimal, gas_discount: Decimal) -> Value {
    json!({
        "order_infos": {
            "supplier_id": "SUP_1",
            "cis_id": "CIS_1",
            "contact_phone": "0911222333",
            "delivery_type": "scheduled",
            "time_slot": "14:00-16:00",
            "discount": discount,
            "gas_discount": gas_discount,
            "address_id": 7,
            "delivery_time_stamp": Utc::now().to_rfc3339()
        },
        "order_gas_list": [
            { "gas_id": 1, "numbers_of_cylinder": 2 }
        ],
        "order_commodity_list": [
            { "commodity_id": 1, "numbers_of_commodity": 1 }
        ],
        "cylinder_mortgage_list": [
            {
                "take_cylinder_type": "steel",
                "cylinder_specification": 20,
                "money": "300",
                "numbers_of_cylinder": 2
            }
        ],
        "order_refund_list": [
            {
                "refund_gas_kilogram": "10",
                "refund_gas_type": "propane",
                "gas_price": "5",
                "order_refund_type": "residual_gas"
            }
        ],
        "usage_fee": { "number_of_records": 2, "money": "60" }
    })
}

async fn create_order(app: &TestApp, payload: Value) -> String {
    let response = app
        .request(Method::POST, "/api/v1/orders", Some(payload))
        .await;
    let body = assert_status_and_read(response, StatusCode::OK).await;
    body["data"]["order_id"].as_str().expect("order_id").to_string()
}

#[tokio::test]
async fn detail_totals_every_charge_and_deduction() {
    let app = TestApp::new().await;
    seed_catalog(&app, dec!(250)).await;

    let order_id = create_order(&app, full_order_payload(dec!(100), dec!(10))).await;

    let response = app
        .request(Method::GET, &format!("/api/v1/orders/{order_id}"), None)
        .await;
    let body = assert_status_and_read(response, StatusCode::OK).await;
    let data = &body["data"];

    // 100*2 gas + 1500 commodity + 300*2 mortgage + 60 usage fee
    // - 5*10 refund - 100 discount - 10 gas discount = 2200.
    assert_eq!(decimal(&data["total_price"]), dec!(2200));
    assert_eq!(decimal(&data["arrears"]), dec!(250));
    assert_eq!(data["customer_name"], "Test Customer");
    // Undelivered outranks the scheduled delivery type.
    assert_eq!(data["delivery_status"], "waiting");

    let gas_lines = data["gas_lines"].as_array().expect("gas_lines");
    assert_eq!(gas_lines.len(), 1);
    assert_eq!(decimal(&gas_lines[0]["price"]), dec!(100));
    assert_eq!(gas_lines[0]["numbers_of_cylinder"], 2);

    assert_eq!(data["commodity_lines"].as_array().unwrap().len(), 1);
    assert_eq!(data["mortgages"].as_array().unwrap().len(), 1);
    assert_eq!(data["usage_fees"].as_array().unwrap().len(), 1);
    assert_eq!(data["refunds"].as_array().unwrap().len(), 1);
    assert_eq!(data["payups"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn scheduled_label_applies_once_no_longer_undelivered() {
    let app = TestApp::new().await;
    seed_catalog(&app, dec!(0)).await;

    let order_id = create_order(&app, full_order_payload(dec!(0), dec!(0))).await;

    let stored = order::Entity::find_by_id(order_id.clone())
        .one(&*app.state.db)
        .await
        .unwrap()
        .unwrap();
    let mut active: order::ActiveModel = stored.into();
    active.order_status = Set("accomplished".to_string());
    active.update(&*app.state.db).await.unwrap();

    let response = app
        .request(Method::GET, &format!("/api/v1/orders/{order_id}"), None)
        .await;
    let body = assert_status_and_read(response, StatusCode::OK).await;
    assert_eq!(body["data"]["delivery_status"], "scheduled");
}

#[tokio::test]
async fn total_price_never_goes_negative() {
    let app = TestApp::new().await;
    seed_catalog(&app, dec!(0)).await;

    let order_id = create_order(&app, full_order_payload(dec!(5000), dec!(0))).await;

    let response = app
        .request(Method::GET, &format!("/api/v1/orders/{order_id}"), None)
        .await;
    let body = assert_status_and_read(response, StatusCode::OK).await;
    assert_eq!(decimal(&body["data"]["total_price"]), dec!(0));
}

#[tokio::test]
async fn gas_line_keeps_its_creation_time_price() {
    let app = TestApp::new().await;
    seed_catalog(&app, dec!(0)).await;

    let order_id = create_order(&app, full_order_payload(dec!(0), dec!(0))).await;

    // A later price change must not rewrite history.
    app.seed_gas_price(1, dec!(999), Utc::now() - Duration::minutes(1))
        .await;

    let response = app
        .request(Method::GET, &format!("/api/v1/orders/{order_id}"), None)
        .await;
    let body = assert_status_and_read(response, StatusCode::OK).await;
    let gas_lines = body["data"]["gas_lines"].as_array().expect("gas_lines");
    assert_eq!(decimal(&gas_lines[0]["price"]), dec!(100));
}

#[tokio::test]
async fn missing_order_is_not_found() {
    let app = TestApp::new().await;

    let response = app
        .request(Method::GET, "/api/v1/orders/GSO_404", None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
