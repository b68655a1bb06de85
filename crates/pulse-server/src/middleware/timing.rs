// SPDX-License-Identifier: Apache-2.0

use axum::body::Body;
use axum::http::{HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;
use pulse_api::PROCESS_TIME_HEADER;
use std::time::Instant;
use tracing::Instrument;

/// Stamps every response, success or error, with the elapsed wall-clock
/// handling time in milliseconds (two decimals) and wraps the request in a
/// tracing span.
pub(crate) async fn response_timing_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().to_string();
    let route = request.uri().path().to_string();
    let span = tracing::info_span!("http.request", method = %method, route = %route);

    let started = Instant::now();
    let mut response = next.run(request).instrument(span).await;
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    if let Ok(value) = HeaderValue::from_str(&format!("{elapsed_ms:.2}")) {
        response.headers_mut().insert(PROCESS_TIME_HEADER, value);
    }
    response
}
