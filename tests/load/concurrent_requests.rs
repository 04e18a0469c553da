//! Concurrent production plan requests
//!
//! Every request is independent, so many clients hitting the same router at
//! once must each get exactly the answer a lone client would get.

use std::time::{Duration, Instant};

use axum::http::StatusCode;
use serde_json::{json, Value};
use tokio::task::JoinSet;

use crate::common::{app, fuels, plant, post_plan};

fn payload(load: f64) -> Value {
    json!({
        "load": load,
        "fuels": fuels(60.0),
        "powerplants": [
            plant("gasfiredbig1", "gasfired", 0.53, 100.0, 460.0),
            plant("gasfiredbig2", "gasfired", 0.53, 100.0, 460.0),
            plant("tj1", "turbojet", 0.3, 0.0, 16.0),
            plant("windpark1", "windturbine", 1.0, 0.0, 150.0),
        ]
    })
}

async fn run_clients(clients: usize, requests_per_client: usize) -> Duration {
    let router = app();

    // answers a single client gets, used as the reference
    let mut expected = Vec::new();
    for i in 0..requests_per_client {
        let load = 100.0 + 75.0 * i as f64;
        expected.push(post_plan(router.clone(), payload(load)).await);
    }

    let start = Instant::now();
    let mut tasks = JoinSet::new();

    for _ in 0..clients {
        let router = router.clone();
        let expected = expected.clone();
        tasks.spawn(async move {
            for (i, reference) in expected.iter().enumerate() {
                let load = 100.0 + 75.0 * i as f64;
                let answer = post_plan(router.clone(), payload(load)).await;
                assert_eq!(&answer, reference);
            }
        });
    }

    while let Some(result) = tasks.join_next().await {
        result.unwrap();
    }

    assert!(expected.iter().all(|(status, _)| *status == StatusCode::OK || *status == StatusCode::BAD_REQUEST));
    start.elapsed()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_clients_get_identical_plans() {
    run_clients(16, 20).await;
}

/// 200 clients x 50 requests, every answer must still match.
#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
#[ignore] // Ignore by default as this is a slow test
async fn test_sustained_concurrent_load() {
    let elapsed = run_clients(200, 50).await;
    println!("10000 production plans in {:?}", elapsed);
    assert!(elapsed < Duration::from_secs(30), "plans took {:?}", elapsed);
}
