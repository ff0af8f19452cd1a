#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, Response, StatusCode},
    Router,
};
use chrono::{DateTime, Utc};
use lpg_order_api::{
    config::AppConfig,
    db,
    entities::{
        cis_gas_price, commodity, commodity_price, customer_in_supplier, cylinder_price,
        gas_cylinder, gas_price, supplier,
    },
    events::{self, EventSender},
    handlers::AppServices,
    AppState,
};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, Set};
use serde_json::Value;
use tokio::sync::mpsc;
use tower::ServiceExt;
use uuid::Uuid;

/// Test harness backed by a throwaway file SQLite database. Each instance
/// gets its own file so parallel tests never share state.
pub struct TestApp {
    router: Router,
    pub state: AppState,
    db_file: std::path::PathBuf,
    _event_task: tokio::task::JoinHandle<()>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_file = std::env::temp_dir().join(format!("lpg_order_test_{}.db", Uuid::new_v4()));
        let _ = std::fs::remove_file(&db_file);

        let mut cfg = AppConfig::new(
            format!("sqlite://{}?mode=rwc", db_file.display()),
            "127.0.0.1".to_string(),
            18_080,
            "test".to_string(),
        );
        cfg.auto_migrate = true;
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let db_arc = Arc::new(pool);
        let (event_tx, event_rx) = mpsc::channel(256);
        let event_sender = EventSender::new(event_tx);
        let event_task = tokio::spawn(events::process_events(event_rx));

        let services = AppServices::new(db_arc.clone(), Arc::new(event_sender.clone()));
        let state = AppState {
            db: db_arc,
            config: cfg,
            event_sender,
            services,
        };

        let router = Router::new()
            .nest("/api/v1", lpg_order_api::api_v1_routes())
            .with_state(state.clone());

        Self {
            router,
            state,
            db_file,
            _event_task: event_task,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                builder
                    .body(Body::from(json.to_string()))
                    .expect("build request")
            }
            None => builder.body(Body::empty()).expect("build request"),
        };
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router oneshot")
    }

    pub async fn seed_supplier(&self, supplier_id: &str, prefix: &str) {
        supplier::ActiveModel {
            supplier_id: Set(supplier_id.to_string()),
            prefix: Set(prefix.to_string()),
            supplier_name: Set(format!("{} Gas Co", prefix)),
        }
        .insert(&*self.state.db)
        .await
        .expect("seed supplier");
    }

    pub async fn seed_customer(
        &self,
        cis_id: &str,
        supplier_id: &str,
        init_arrears: Decimal,
    ) {
        customer_in_supplier::ActiveModel {
            cis_id: Set(cis_id.to_string()),
            customer_id: Set(1),
            supplier_id: Set(supplier_id.to_string()),
            customer_name: Set("Test Customer".to_string()),
            main_phone: Set("0911222333".to_string()),
            init_arrears: Set(init_arrears),
            note: Set(None),
        }
        .insert(&*self.state.db)
        .await
        .expect("seed customer");
    }

    pub async fn seed_gas_cylinder(
        &self,
        gas_id: i32,
        supplier_id: &str,
        gas_type: &str,
        kilogram: i32,
        visible: bool,
    ) {
        gas_cylinder::ActiveModel {
            gas_id: Set(gas_id),
            supplier_id: Set(supplier_id.to_string()),
            gas_type: Set(gas_type.to_string()),
            kilogram: Set(kilogram),
            visible: Set(visible),
            deleted: Set(false),
        }
        .insert(&*self.state.db)
        .await
        .expect("seed gas cylinder");
    }

    pub async fn seed_gas_price(
        &self,
        gas_id: i32,
        price: Decimal,
        effect: DateTime<Utc>,
    ) -> i32 {
        gas_price::ActiveModel {
            gas_id: Set(gas_id),
            price: Set(price),
            effect_time_stamp: Set(effect),
            upload_time_stamp: Set(Utc::now()),
            deleted: Set(false),
            ..Default::default()
        }
        .insert(&*self.state.db)
        .await
        .expect("seed gas price")
        .gp_id
    }

    pub async fn seed_cis_gas_price(
        &self,
        gas_id: i32,
        cis_id: &str,
        price: Decimal,
        effect: DateTime<Utc>,
    ) -> i32 {
        cis_gas_price::ActiveModel {
            gas_id: Set(gas_id),
            cis_id: Set(cis_id.to_string()),
            price: Set(price),
            effect_time_stamp: Set(effect),
            upload_time_stamp: Set(Utc::now()),
            deleted: Set(false),
            ..Default::default()
        }
        .insert(&*self.state.db)
        .await
        .expect("seed customer gas price")
        .cis_gp_id
    }

    pub async fn seed_commodity(
        &self,
        commodity_id: i32,
        supplier_id: &str,
        name: &str,
    ) {
        commodity::ActiveModel {
            commodity_id: Set(commodity_id),
            supplier_id: Set(supplier_id.to_string()),
            commodity_name: Set(name.to_string()),
            commodity_type: Set("appliance".to_string()),
            visible: Set(true),
            instock: Set(true),
            deleted: Set(false),
        }
        .insert(&*self.state.db)
        .await
        .expect("seed commodity");
    }

    pub async fn seed_commodity_price(&self, commodity_id: i32, price: Decimal) -> i32 {
        commodity_price::ActiveModel {
            commodity_id: Set(commodity_id),
            price: Set(price),
            create_time_stamp: Set(Utc::now()),
            deleted: Set(false),
            ..Default::default()
        }
        .insert(&*self.state.db)
        .await
        .expect("seed commodity price")
        .commodity_price_id
    }

    pub async fn seed_cylinder_price(
        &self,
        cylinder_specification: i32,
        customer_action_type: &str,
        price: Decimal,
    ) -> i32 {
        cylinder_price::ActiveModel {
            cylinder_specification: Set(cylinder_specification),
            customer_action_type: Set(customer_action_type.to_string()),
            price: Set(price),
            deleted: Set(false),
            ..Default::default()
        }
        .insert(&*self.state.db)
        .await
        .expect("seed cylinder price")
        .cp_id
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_file);
    }
}

pub async fn read_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    serde_json::from_slice(&bytes).expect("parse response body")
}

pub async fn assert_status_and_read(response: Response<Body>, expected: StatusCode) -> Value {
    assert_eq!(response.status(), expected);
    read_json(response).await
}
