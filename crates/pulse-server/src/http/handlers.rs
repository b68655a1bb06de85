use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pulse_api::{
    ApiError, HealthDto, PredictRequestDto, PredictResponseDto, PredictionDto, ResourceMetricsDto,
};
use serde_json::json;
use tracing::{debug, error};

pub(crate) fn api_error_response(status: StatusCode, err: ApiError) -> Response {
    (status, Json(json!({"error": err}))).into_response()
}

pub(crate) async fn health_handler() -> impl IntoResponse {
    Json(HealthDto::current())
}

/// Point-in-time snapshot of the process's resource usage. Not a time
/// series; a sampling failure surfaces as a service error.
pub(crate) async fn metrics_handler(State(state): State<AppState>) -> Response {
    match state.sampler.sample() {
        Ok(snapshot) => Json(ResourceMetricsDto {
            cpu_percent: snapshot.cpu_percent,
            mem_rss_bytes: snapshot.mem_rss_bytes,
            mem_rss_mb: snapshot.mem_rss_mb(),
            num_threads: snapshot.num_threads,
        })
        .into_response(),
        Err(err) => {
            error!(error = %err, "resource sampling failed");
            api_error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::resource_sampling(&err.to_string()),
            )
        }
    }
}

pub(crate) async fn predict_handler(
    State(state): State<AppState>,
    Json(request): Json<PredictRequestDto>,
) -> Response {
    let input = match request.into_input() {
        Ok(input) => input,
        Err(err) => return api_error_response(StatusCode::BAD_REQUEST, err),
    };

    // Every item classifies independently and in input order; classification
    // itself has no failure conditions.
    let texts = input.into_texts();
    debug!(batch_size = texts.len(), "classifying batch");
    let results: Vec<PredictionDto> = texts
        .iter()
        .map(|text| {
            let prediction = state.classifier.classify(text);
            PredictionDto::new(prediction.label, prediction.polarity)
        })
        .collect();

    Json(PredictResponseDto { results }).into_response()
}
