mod common;

use axum::http::{Method, StatusCode};
use chrono::{Duration, Utc};
use lpg_order_api::errors::ServiceError;
use lpg_order_api::services::pricing::{PriceScope, PriceSource};
use rust_decimal_macros::dec;

use common::{assert_status_and_read, TestApp};

#[tokio::test]
async fn customer_override_beats_supplier_price() {
    let app = TestApp::new().await;
    app.seed_supplier("SUP_1", "GS").await;
    app.seed_customer("CIS_1", "SUP_1", dec!(0)).await;
    app.seed_gas_cylinder(1, "SUP_1", "propane", 20, true).await;

    let now = Utc::now();
    app.seed_gas_price(1, dec!(100), now - Duration::days(1)).await;
    app.seed_cis_gas_price(1, "CIS_1", dec!(80), now - Duration::hours(1))
        .await;

    let customer_scope = PriceScope::Customer {
        supplier_id: "SUP_1".into(),
        cis_id: "CIS_1".into(),
    };
    let resolved = app
        .state
        .services
        .pricing
        .resolve_gas_price(1, &customer_scope, None)
        .await
        .expect("resolve with customer scope");
    assert_eq!(resolved.price, dec!(80));
    assert_eq!(resolved.source, PriceSource::CustomerOverride);
    assert!(resolved.cis_gp_id.is_some());
    assert!(resolved.gp_id.is_none());

    let supplier_scope = PriceScope::Supplier {
        supplier_id: "SUP_1".into(),
    };
    let resolved = app
        .state
        .services
        .pricing
        .resolve_gas_price(1, &supplier_scope, None)
        .await
        .expect("resolve with supplier scope");
    assert_eq!(resolved.price, dec!(100));
    assert_eq!(resolved.source, PriceSource::Supplier);
}

#[tokio::test]
async fn temporal_resolution_picks_latest_past_row() {
    let app = TestApp::new().await;
    app.seed_supplier("SUP_1", "GS").await;
    app.seed_gas_cylinder(1, "SUP_1", "propane", 20, true).await;

    let t = Utc::now();
    app.seed_gas_price(1, dec!(90), t - Duration::days(2)).await;
    let expected_gp = app.seed_gas_price(1, dec!(95), t - Duration::days(1)).await;
    app.seed_gas_price(1, dec!(120), t + Duration::days(1)).await;

    let scope = PriceScope::Supplier {
        supplier_id: "SUP_1".into(),
    };
    let resolved = app
        .state
        .services
        .pricing
        .resolve_gas_price(1, &scope, Some(t))
        .await
        .expect("resolve as of t");
    assert_eq!(resolved.price, dec!(95));
    assert_eq!(resolved.gp_id, Some(expected_gp));
}

#[tokio::test]
async fn missing_price_is_not_found() {
    let app = TestApp::new().await;
    app.seed_supplier("SUP_1", "GS").await;
    app.seed_gas_cylinder(1, "SUP_1", "propane", 20, true).await;
    // Only a future-dated row exists.
    app.seed_gas_price(1, dec!(100), Utc::now() + Duration::days(3))
        .await;

    let scope = PriceScope::Supplier {
        supplier_id: "SUP_1".into(),
    };
    let err = app
        .state
        .services
        .pricing
        .resolve_gas_price(1, &scope, None)
        .await
        .expect_err("no effective price yet");
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn invisible_cylinder_is_excluded_from_supplier_list() {
    let app = TestApp::new().await;
    app.seed_supplier("SUP_1", "GS").await;
    app.seed_customer("CIS_1", "SUP_1", dec!(0)).await;
    app.seed_gas_cylinder(1, "SUP_1", "propane", 20, false).await;

    let now = Utc::now();
    app.seed_gas_price(1, dec!(100), now - Duration::days(1)).await;

    let scope = PriceScope::Supplier {
        supplier_id: "SUP_1".into(),
    };
    let err = app
        .state
        .services
        .pricing
        .resolve_gas_price(1, &scope, None)
        .await
        .expect_err("invisible cylinder has no supplier price");
    assert!(matches!(err, ServiceError::NotFound(_)));

    // A customer override still applies to that customer.
    app.seed_cis_gas_price(1, "CIS_1", dec!(70), now - Duration::hours(1))
        .await;
    let customer_scope = PriceScope::Customer {
        supplier_id: "SUP_1".into(),
        cis_id: "CIS_1".into(),
    };
    let resolved = app
        .state
        .services
        .pricing
        .resolve_gas_price(1, &customer_scope, None)
        .await
        .expect("override ignores visibility");
    assert_eq!(resolved.price, dec!(70));
}

#[tokio::test]
async fn gas_price_listing_merges_both_lists() {
    let app = TestApp::new().await;
    app.seed_supplier("SUP_1", "GS").await;
    app.seed_customer("CIS_1", "SUP_1", dec!(0)).await;
    app.seed_gas_cylinder(1, "SUP_1", "propane", 20, true).await;
    app.seed_gas_cylinder(2, "SUP_1", "propane", 16, true).await;
    app.seed_gas_cylinder(3, "SUP_1", "butane", 4, true).await;

    let now = Utc::now();
    app.seed_gas_price(1, dec!(100), now - Duration::days(1)).await;
    app.seed_gas_price(2, dec!(85), now - Duration::days(1)).await;
    app.seed_cis_gas_price(1, "CIS_1", dec!(80), now - Duration::hours(1))
        .await;
    // Cylinder 3 has no price row anywhere and must be omitted.

    let response = app
        .request(
            Method::GET,
            "/api/v1/orders/gas-prices?supplier_id=SUP_1&cis_id=CIS_1",
            None,
        )
        .await;
    let body = assert_status_and_read(response, StatusCode::OK).await;
    let data = body["data"].as_array().expect("data array");
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["gas_id"], 1);
    assert_eq!(data[0]["source"], "customer_override");
    assert_eq!(data[0]["price"], "80");
    assert_eq!(data[1]["gas_id"], 2);
    assert_eq!(data[1]["source"], "supplier");
    assert_eq!(data[1]["price"], "85");
}

#[tokio::test]
async fn commodity_listing_uses_latest_price() {
    let app = TestApp::new().await;
    app.seed_supplier("SUP_1", "GS").await;
    app.seed_commodity(1, "SUP_1", "gas stove").await;
    app.seed_commodity_price(1, dec!(1500)).await;
    let latest = app.seed_commodity_price(1, dec!(1600)).await;

    let response = app
        .request(Method::GET, "/api/v1/commodities?supplier_id=SUP_1", None)
        .await;
    let body = assert_status_and_read(response, StatusCode::OK).await;
    let data = body["data"].as_array().expect("data array");
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["commodity_price_id"], latest);
    assert_eq!(data[0]["price"], "1600");
}
