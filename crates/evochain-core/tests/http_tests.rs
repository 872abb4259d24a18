//! Integration tests for the HTTP fetcher against a local fixture service.
//!
//! Each test binds an `axum` router to an ephemeral port and drives real
//! `reqwest` traffic through `EvolutionService`.

#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

mod common;

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use evochain_core::{ChainError, CoreConfig, ErrorKind, EvolutionService, Fetcher, HttpFetcher};
use evochain_types::ChainId;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use common::branching_chain_fixtures;

type Documents = Arc<BTreeMap<String, Value>>;

async fn serve_document(State(docs): State<Documents>, uri: Uri) -> Response {
    match uri.path() {
        "/broken/" => (StatusCode::OK, "<html>not json</html>").into_response(),
        "/down/" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        path => docs.get(path).map_or_else(
            || StatusCode::NOT_FOUND.into_response(),
            |doc| Json(doc.clone()).into_response(),
        ),
    }
}

/// Start the fixture service and return its base URL.
async fn start_server(fixtures: impl FnOnce(&str) -> Vec<(String, Value)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let docs: BTreeMap<String, Value> = fixtures(&base)
        .into_iter()
        .map(|(url, doc)| (url.trim_start_matches(&base).to_owned(), doc))
        .collect();
    let router = Router::new()
        .fallback(serve_document)
        .with_state(Arc::new(docs));

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    base
}

fn config(base: &str) -> CoreConfig {
    CoreConfig {
        api_url: base.to_owned(),
        request_timeout_ms: 5_000,
        ..CoreConfig::default()
    }
}

fn http_fetcher(base: &str) -> Fetcher {
    Fetcher::from(HttpFetcher::new(&config(base)).unwrap())
}

#[tokio::test]
async fn fetch_returns_parsed_document() {
    let base = start_server(|base| vec![(format!("{base}/thing/"), json!({ "ok": true }))]).await;
    let fetcher = http_fetcher(&base);

    let doc = fetcher.fetch(&format!("{base}/thing/")).await.unwrap();
    assert_eq!(doc, json!({ "ok": true }));
    assert_eq!(fetcher.name(), "http");
}

#[tokio::test]
async fn server_error_is_transport_error() {
    let base = start_server(|_| Vec::new()).await;
    let fetcher = http_fetcher(&base);

    let err = fetcher.fetch(&format!("{base}/down/")).await.unwrap_err();
    assert!(matches!(err, ChainError::Transport { status: 500, .. }));
}

#[tokio::test]
async fn missing_resource_is_transport_error() {
    let base = start_server(|_| Vec::new()).await;
    let fetcher = http_fetcher(&base);

    let err = fetcher.fetch(&format!("{base}/nowhere/")).await.unwrap_err();
    assert!(matches!(err, ChainError::Transport { status: 404, .. }));
}

#[tokio::test]
async fn html_body_is_decode_error() {
    let base = start_server(|_| Vec::new()).await;
    let fetcher = http_fetcher(&base);

    let err = fetcher.fetch(&format!("{base}/broken/")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[tokio::test]
async fn unreachable_service_is_request_error() {
    // Bind then drop, so nothing listens on the port.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = http_fetcher(&base)
        .fetch(&format!("{base}/thing/"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Request);
}

#[tokio::test]
async fn full_chain_over_http() {
    let base = start_server(|base| branching_chain_fixtures(base, 10)).await;
    let service = EvolutionService::from_config(config(&base)).unwrap();

    let graph = service.get_evolution_chain(ChainId(10)).await.unwrap();

    let ids: Vec<u32> = graph.nodes.keys().map(|id| id.into_inner()).collect();
    assert_eq!(ids, [1, 2, 3, 4]);
    let mut edges: Vec<(u32, u32)> = graph
        .edges
        .iter()
        .map(|link| (link.from.into_inner(), link.to.into_inner()))
        .collect();
    edges.sort_unstable();
    assert_eq!(edges, [(1, 2), (1, 3), (3, 4)]);
    assert_eq!(graph.find_by_name("D").map(|r| r.stats.special_attack), Some(104));
}
