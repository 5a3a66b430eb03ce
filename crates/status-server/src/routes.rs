// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Axum routers for the status page and the plaintext redirect.
//!
//! Both routers answer every method on every path: the status router via
//! a fallback that renders the page, the redirect router via a fallback
//! that points at a single fixed origin.

use crate::{render, ServerError};
use axum::{
    extract::State,
    http::{header, HeaderValue, Method, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Router,
};
use host_metrics::{LineSource, MetricReader};
use percent_encoding::percent_decode_str;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Builds the status-page router over a shared [`MetricReader`].
pub fn status_router<S>(reader: Arc<MetricReader<S>>) -> Router
where
    S: LineSource + Send + Sync + 'static,
{
    Router::new()
        .fallback(status_page::<S>)
        .with_state(reader)
        .layer(TraceLayer::new_for_http())
}

/// Builds a router that answers every request with `302 Found` to `target`.
pub fn redirect_router(target: &str) -> Result<Router, ServerError> {
    let location = HeaderValue::from_str(target).map_err(|e| {
        ServerError::ConfigError(format!("invalid redirect target '{target}': {e}"))
    })?;
    let redirect = RedirectTarget {
        location,
        body: render::redirect_body(target).into(),
    };

    Ok(Router::new()
        .fallback(redirect_to)
        .with_state(redirect)
        .layer(TraceLayer::new_for_http()))
}

async fn status_page<S>(State(reader): State<Arc<MetricReader<S>>>, uri: Uri) -> Response
where
    S: LineSource + Send + Sync + 'static,
{
    // The reads are synchronous file I/O; keep them off the async workers.
    let report = match tokio::task::spawn_blocking(move || reader.report()).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(error = %e, "metric reader task failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    for (metric, err) in report.failures() {
        tracing::warn!(metric, error = %err, "metric extraction failed");
    }

    let path = percent_decode_str(uri.path()).decode_utf8_lossy();
    Html(render::render_html(&path, &report)).into_response()
}

#[derive(Clone)]
struct RedirectTarget {
    location: HeaderValue,
    body: Arc<str>,
}

async fn redirect_to(State(target): State<RedirectTarget>, method: Method) -> Response {
    let headers = [(header::LOCATION, target.location)];
    if method == Method::GET {
        (StatusCode::FOUND, headers, Html(target.body.to_string())).into_response()
    } else {
        (StatusCode::FOUND, headers).into_response()
    }
}
