// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ApiErrorCode {
    MissingInput,
    EmptyBatch,
    ResourceSampling,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
    pub details: Value,
}

impl ApiError {
    #[must_use]
    pub fn new(code: ApiErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
        }
    }

    #[must_use]
    pub fn missing_input() -> Self {
        Self::new(
            ApiErrorCode::MissingInput,
            "Provide either 'text' or 'texts'.",
            json!({"fields": ["text", "texts"]}),
        )
    }

    #[must_use]
    pub fn empty_batch() -> Self {
        Self::new(
            ApiErrorCode::EmptyBatch,
            "'texts' must contain at least one item.",
            json!({"field": "texts"}),
        )
    }

    #[must_use]
    pub fn resource_sampling(reason: &str) -> Self {
        Self::new(
            ApiErrorCode::ResourceSampling,
            "resource sampling failed",
            json!({"reason": reason}),
        )
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

const _: fn() = || {
    fn assert_traits<T: Serialize + for<'de> Deserialize<'de>>() {}
    assert_traits::<ApiErrorCode>();
    assert_traits::<ApiError>();
};
