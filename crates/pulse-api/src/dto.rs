// SPDX-License-Identifier: Apache-2.0

use crate::errors::ApiError;
use pulse_core::{Label, ENGINE};
use serde::{Deserialize, Serialize};

/// Predict request as it appears on the wire: two optional fields.
///
/// Unknown fields are tolerated for compatibility with older clients that
/// sent advisory flags alongside the batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictRequestDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texts: Option<Vec<String>>,
}

/// Validated predict input: exactly one of a single text or a non-empty batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredictInput {
    Single(String),
    Batch(Vec<String>),
}

impl PredictInput {
    #[must_use]
    pub fn into_texts(self) -> Vec<String> {
        match self {
            PredictInput::Single(text) => vec![text],
            PredictInput::Batch(texts) => texts,
        }
    }
}

impl PredictRequestDto {
    /// Collapses the two nullable wire fields into a tagged input.
    ///
    /// When both fields are present, `text` wins. No usable input fails with
    /// a client error; an empty string is a valid (degenerate) single input.
    pub fn into_input(self) -> Result<PredictInput, ApiError> {
        match (self.text, self.texts) {
            (Some(text), _) => Ok(PredictInput::Single(text)),
            (None, Some(texts)) if texts.is_empty() => Err(ApiError::empty_batch()),
            (None, Some(texts)) => Ok(PredictInput::Batch(texts)),
            (None, None) => Err(ApiError::missing_input()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PredictionDto {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polarity: Option<f64>,
}

impl PredictionDto {
    #[must_use]
    pub fn new(label: Label, polarity: f64) -> Self {
        Self {
            label: label.as_str().to_string(),
            polarity: Some(polarity),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PredictResponseDto {
    pub results: Vec<PredictionDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HealthDto {
    pub status: String,
    pub engine: String,
    pub labels: Vec<String>,
}

impl HealthDto {
    /// The fixed health acknowledgement: `ok`, the engine identifier, and the
    /// closed label set in canonical order.
    #[must_use]
    pub fn current() -> Self {
        Self {
            status: "ok".to_string(),
            engine: ENGINE.to_string(),
            labels: Label::names().iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceMetricsDto {
    pub cpu_percent: f64,
    pub mem_rss_bytes: u64,
    pub mem_rss_mb: f64,
    pub num_threads: usize,
}
