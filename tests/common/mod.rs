#![allow(dead_code)]
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use powerplant_dispatch::{api, config::Config, optimizer::ProductionPlanner, state::AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

pub fn app() -> Router {
    api::router(AppState::new(ProductionPlanner::default()), &Config::default())
}

pub fn fuels(wind_percentage: f64) -> Value {
    json!({
        "gas(euro/MWh)": 13.4,
        "kerosine(euro/MWh)": 50.8,
        "co2(euro/ton)": 20,
        "wind(%)": wind_percentage
    })
}

pub fn plant(name: &str, kind: &str, efficiency: f64, pmin: f64, pmax: f64) -> Value {
    json!({
        "name": name,
        "type": kind,
        "efficiency": efficiency,
        "pmin": pmin,
        "pmax": pmax
    })
}

pub async fn post_json(app: Router, uri: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

pub async fn post_plan(app: Router, payload: Value) -> (StatusCode, Value) {
    post_json(app, "/productionplan", payload.to_string()).await
}

pub fn production_of(plan: &Value, name: &str) -> f64 {
    plan.as_array()
        .unwrap()
        .iter()
        .find(|entry| entry["name"] == name)
        .and_then(|entry| entry["p"].as_f64())
        .unwrap()
}
