// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integration tests: the status and redirect routers end to end.
//!
//! Requests go through the full axum stack (routing, extractors, trace
//! layer) via `tower::ServiceExt::oneshot`, with metrics served from an
//! in-memory source.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use host_metrics::{MemorySource, MetricReader, SourcePaths};
use status_server::routes::{redirect_router, status_router};
use std::sync::Arc;
use tower::ServiceExt;

// ── Helpers ────────────────────────────────────────────────────

const MEMINFO: &str = "\
MemTotal:        3963904 kB
MemFree:         2028000 kB
MemAvailable:    2900000 kB
Buffers:          500000 kB
Cached:           300000 kB
";

fn healthy_source() -> MemorySource {
    MemorySource::new()
        .with("/proc/uptime", "500.0 0\n")
        .with("/proc/loadavg", "0.10 0.20 0.30 1/200 1234\n")
        .with("/proc/meminfo", MEMINFO)
}

fn app(source: MemorySource) -> Router {
    status_router(Arc::new(MetricReader::new(source, SourcePaths::default())))
}

async fn get(app: Router, method: Method, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

// ── Status page ────────────────────────────────────────────────

#[tokio::test]
async fn status_page_renders_all_metrics() {
    let (status, headers, body) = get(app(healthy_source()), Method::GET, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert_eq!(
        body,
        "<!DOCTYPE html><pre>OK /\n\n\
         uptime:  8m20s\n\
         load:    0.10 0.20 0.30 1/200 1234\n\
         mem:     1109 MiB / 3871 MiB (28%)\n"
    );
}

#[tokio::test]
async fn status_page_echoes_any_path() {
    let (status, _, body) = get(app(healthy_source()), Method::GET, "/some/deep/path?q=1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("<!DOCTYPE html><pre>OK /some/deep/path\n\n"));
}

#[tokio::test]
async fn status_page_shows_decoded_path() {
    let (_, _, body) = get(app(healthy_source()), Method::GET, "/a%20b").await;
    assert!(body.starts_with("<!DOCTYPE html><pre>OK /a b\n\n"), "body was: {body}");
}

#[tokio::test]
async fn decoded_path_is_still_escaped() {
    let (_, _, body) = get(app(healthy_source()), Method::GET, "/%3Cb%3Ex").await;
    assert!(body.starts_with("<!DOCTYPE html><pre>OK /&lt;b&gt;x\n\n"), "body was: {body}");
    assert!(!body["<!DOCTYPE html><pre>".len()..].contains('<'));
}

#[tokio::test]
async fn status_page_answers_any_method() {
    let (status, _, body) = get(app(healthy_source()), Method::POST, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("mem:     1109 MiB / 3871 MiB (28%)\n"));
}

#[tokio::test]
async fn failed_metrics_are_rendered_inline() {
    let source = MemorySource::new()
        .with("/proc/uptime", "500.0 0\n")
        .with(
            "/proc/meminfo",
            "MemTotal: 0 kB\nMemFree: 0 kB\nMemAvailable: 0 kB\nBuffers: 0 kB\nCached: 0 kB\n",
        );
    let (status, _, body) = get(app(source), Method::GET, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("uptime:  8m20s\n"));
    assert!(body.contains("load:    cannot open /proc/loadavg"));
    assert!(body.contains("mem:     total memory reported as 0 kB in /proc/meminfo\n"));
}

#[tokio::test]
async fn every_metric_failing_still_returns_ok() {
    let (status, _, body) = get(app(MemorySource::new()), Method::GET, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("<!DOCTYPE html><pre>OK /\n\n"));
    assert_eq!(body.matches("cannot open").count(), 3);
}

// ── Redirect ───────────────────────────────────────────────────

#[tokio::test]
async fn redirect_sends_everything_to_fixed_origin() {
    let target = "https://status.example.org/";
    for uri in ["/", "/anything/else?x=1"] {
        let app = redirect_router(target).unwrap();
        let (status, headers, _) = get(app, Method::GET, uri).await;
        assert_eq!(status, StatusCode::FOUND);
        assert_eq!(headers[header::LOCATION], target);
    }
}

#[tokio::test]
async fn redirect_get_carries_link_body() {
    let target = "https://status.example.org/";
    let (_, headers, body) = get(redirect_router(target).unwrap(), Method::GET, "/").await;
    assert!(headers[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert_eq!(body, "<a href=\"https://status.example.org/\">Found</a>.\n\n");
}

#[tokio::test]
async fn redirect_post_has_no_body() {
    let (status, _, body) = get(
        redirect_router("https://status.example.org/").unwrap(),
        Method::POST,
        "/",
    )
    .await;
    assert_eq!(status, StatusCode::FOUND);
    assert!(body.is_empty());
}

#[test]
fn redirect_rejects_unrepresentable_target() {
    assert!(redirect_router("https://bad\nhost/").is_err());
}
