#![forbid(unsafe_code)]

//! Wire contract for the pulse prediction service: request/response DTOs,
//! request validation, and the API error taxonomy.

mod dto;
mod errors;

pub use dto::{
    HealthDto, PredictInput, PredictRequestDto, PredictResponseDto, PredictionDto,
    ResourceMetricsDto,
};
pub use errors::{ApiError, ApiErrorCode};

pub const CRATE_NAME: &str = "pulse-api";

/// Response header carrying the elapsed wall-clock handling time, in
/// milliseconds with two-decimal precision. Present on every response.
pub const PROCESS_TIME_HEADER: &str = "x-process-time-ms";
