//! End-to-end tests for the algoviz HTTP API.
//!
//! Requests go straight to the router via `tower::ServiceExt::oneshot`, without
//! starting a network server.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

use algoviz_server::config::ServerConfig;
use algoviz_server::router::build_router;
use algoviz_server::state::AppState;

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

fn test_app() -> Router {
    build_router(AppState::new(ServerConfig::default()))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(json!(null));
    (status, json)
}

async fn post_json(
    app: &Router,
    path: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    send(app, request).await
}

async fn get_json(app: &Router, path: &str) -> (StatusCode, serde_json::Value) {
    send(app, Request::builder().uri(path).body(Body::empty()).unwrap()).await
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[tokio::test]
async fn lists_all_algorithms() {
    let app = test_app();
    let (status, body) = get_json(&app, "/algorithms").await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 11);
    let dijkstra = list.iter().find(|a| a["name"] == "dijkstra").unwrap();
    assert_eq!(dijkstra["family"], "graph");
    assert_eq!(dijkstra["requires"], json!(["graph", "start"]));
}

// ---------------------------------------------------------------------------
// Trace generation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bubble_sort_trace() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/traces",
        json!({"algorithm": "bubble-sort", "array": [5, 3, 8, 1]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["family"], "sort");

    let steps = body["steps"].as_array().unwrap();
    assert_eq!(body["len"], steps.len());
    let last = steps.last().unwrap();
    assert_eq!(last["kind"], "done");
    assert_eq!(last["array"], json!([1, 3, 5, 8]));
    let compares = steps.iter().filter(|s| s["kind"] == "compare").count();
    assert_eq!(compares, 6);
}

#[tokio::test]
async fn fingerprint_replays_same_trace() {
    let app = test_app();
    let request = json!({"algorithm": "quick-sort", "random": {"len": 12, "seed": 42}});
    let (_, first) = post_json(&app, "/traces", request.clone()).await;
    let (_, second) = post_json(&app, "/traces", request).await;
    assert_eq!(first["fingerprint"], second["fingerprint"]);

    let fp = first["fingerprint"].as_str().unwrap();
    let (status, recalled) = get_json(&app, &format!("/traces/{}", fp)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(recalled["steps"], first["steps"]);
    assert_eq!(recalled["algorithm"], "quick-sort");
}

#[tokio::test]
async fn dijkstra_reports_infinity_for_unreachable() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/traces",
        json!({
            "algorithm": "dijkstra",
            "graph": {"A": [{"to": "B", "weight": 2}], "B": [], "C": ["A"]},
            "start": "A"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let last = body["steps"].as_array().unwrap().last().unwrap().clone();
    assert_eq!(last["kind"], "done");
    assert_eq!(last["distances"]["B"], json!(2.0));
    assert_eq!(last["distances"]["C"], "Infinity");
}

#[tokio::test]
async fn missing_start_vertex_yields_empty_trace() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/traces",
        json!({"algorithm": "bfs", "graph": {"A": []}, "start": "Z"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["len"], 0);
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_algorithm_is_404() {
    let app = test_app();
    let (status, body) = post_json(&app, "/traces", json!({"algorithm": "bogo-sort"})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn search_without_target_is_400() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/traces",
        json!({"algorithm": "linear-search", "array": [1, 2]}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]["message"].as_str().unwrap().contains("target"));
}

#[tokio::test]
async fn unsorted_binary_search_is_400() {
    let app = test_app();
    let (status, _) = post_json(
        &app,
        "/traces",
        json!({"algorithm": "binary-search", "array": [3, 1, 2], "target": 1}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn negative_weight_is_400() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/traces",
        json!({"algorithm": "dijkstra", "graph": {"A": [{"to": "B", "weight": -1}]}, "start": "A"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn oversized_input_is_413() {
    let app = build_router(AppState::new(ServerConfig {
        max_input_len: 4,
        ..ServerConfig::default()
    }));
    let (status, body) = post_json(
        &app,
        "/traces",
        json!({"algorithm": "merge-sort", "array": [5, 4, 3, 2, 1]}),
    )
    .await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"]["code"], "TOO_LARGE");
}

#[tokio::test]
async fn random_input_at_the_default_length_cap() {
    let app = test_app();
    let limit = ServerConfig::default().max_input_len;

    let (status, body) = post_json(
        &app,
        "/traces",
        json!({"algorithm": "bubble-sort", "random": {"len": limit, "seed": 7}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["steps"][0]["array"].as_array().unwrap().len(), limit);

    let (status, body) = post_json(
        &app,
        "/traces",
        json!({"algorithm": "bubble-sort", "random": {"len": limit + 1, "seed": 7}}),
    )
    .await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"]["code"], "TOO_LARGE");
}

#[tokio::test]
async fn sort_over_the_trace_budget_is_413() {
    // Sorts project n * (n^2 + 3n + 1) cells: 981 for n = 9, 1310 for n = 10.
    let app = build_router(AppState::new(ServerConfig {
        max_trace_cells: 1000,
        ..ServerConfig::default()
    }));
    let nine: Vec<i64> = (1..=9).rev().collect();
    let ten: Vec<i64> = (1..=10).rev().collect();

    let (status, _) = post_json(&app, "/traces", json!({"algorithm": "bubble-sort", "array": nine})).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) =
        post_json(&app, "/traces", json!({"algorithm": "bubble-sort", "array": ten})).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(body["error"]["message"].as_str().unwrap().contains("snapshot cells"));
}

/// A directed chain `v0 -> v1 -> ... -> v7`, optionally closed back to `v0`.
fn chain(closed: bool) -> serde_json::Value {
    let mut graph = serde_json::Map::new();
    for i in 0..8 {
        let next = if i < 7 {
            vec![json!(format!("v{}", i + 1))]
        } else if closed {
            vec![json!("v0")]
        } else {
            vec![]
        };
        graph.insert(format!("v{}", i), json!(next));
    }
    serde_json::Value::Object(graph)
}

#[tokio::test]
async fn graph_over_the_trace_budget_is_413() {
    // Traversals project (3V + 2E + 2) * 3V cells: 960 with 7 edges, 1008 with 8.
    let app = build_router(AppState::new(ServerConfig {
        max_trace_cells: 1000,
        ..ServerConfig::default()
    }));
    let (status, _) = post_json(
        &app,
        "/traces",
        json!({"algorithm": "dijkstra", "graph": chain(false), "start": "v0"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = post_json(
        &app,
        "/traces",
        json!({"algorithm": "dijkstra", "graph": chain(true), "start": "v0"}),
    )
    .await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn too_many_edges_is_413() {
    let app = build_router(AppState::new(ServerConfig {
        max_edges: 7,
        ..ServerConfig::default()
    }));
    let (status, _) =
        post_json(&app, "/traces", json!({"algorithm": "bfs", "graph": chain(false), "start": "v0"})).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) =
        post_json(&app, "/traces", json!({"algorithm": "bfs", "graph": chain(true), "start": "v0"})).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(body["error"]["message"].as_str().unwrap().contains("edges"));
}

#[tokio::test]
async fn algorithms_with_identical_steps_replay_separately() {
    let app = test_app();
    let (_, bubble) =
        post_json(&app, "/traces", json!({"algorithm": "bubble-sort", "array": [1, 2]})).await;
    let (_, insertion) =
        post_json(&app, "/traces", json!({"algorithm": "insertion-sort", "array": [1, 2]})).await;
    assert_eq!(bubble["steps"], insertion["steps"]);
    assert_ne!(bubble["fingerprint"], insertion["fingerprint"]);

    let fp = bubble["fingerprint"].as_str().unwrap();
    let (_, recalled) = get_json(&app, &format!("/traces/{}", fp)).await;
    assert_eq!(recalled["algorithm"], "bubble-sort");

    let fp = insertion["fingerprint"].as_str().unwrap();
    let (_, recalled) = get_json(&app, &format!("/traces/{}", fp)).await;
    assert_eq!(recalled["algorithm"], "insertion-sort");
}

#[tokio::test]
async fn unknown_fingerprint_is_404() {
    let app = test_app();
    let (status, _) = get_json(&app, "/traces/deadbeef").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn full_cache_still_serves_new_traces() {
    let app = build_router(AppState::new(ServerConfig {
        max_cached: 1,
        ..ServerConfig::default()
    }));
    let (_, first) = post_json(&app, "/traces", json!({"algorithm": "heap-sort", "array": [2, 1]})).await;
    let (status, second) =
        post_json(&app, "/traces", json!({"algorithm": "heap-sort", "array": [3, 1]})).await;
    assert_eq!(status, StatusCode::OK);

    let fp1 = first["fingerprint"].as_str().unwrap();
    let fp2 = second["fingerprint"].as_str().unwrap();
    assert_eq!(get_json(&app, &format!("/traces/{}", fp1)).await.0, StatusCode::OK);
    assert_eq!(get_json(&app, &format!("/traces/{}", fp2)).await.0, StatusCode::NOT_FOUND);
}
