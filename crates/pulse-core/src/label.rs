// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt;

/// Polarity above this bound classifies as positive.
pub const POSITIVE_THRESHOLD: f64 = 0.25;

/// Polarity below this bound classifies as negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// The closed three-way sentiment label set.
///
/// The ordering is the documented canonical order; it carries no ordinal
/// semantics in decision logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Negative,
    Neutral,
    Positive,
}

impl Label {
    pub const ALL: [Label; 3] = [Label::Negative, Label::Neutral, Label::Positive];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Label::Negative => "negative",
            Label::Neutral => "neutral",
            Label::Positive => "positive",
        }
    }

    /// Canonical label names in canonical order, as reported by `/health`.
    #[must_use]
    pub fn names() -> [&'static str; 3] {
        [
            Label::Negative.as_str(),
            Label::Neutral.as_str(),
            Label::Positive.as_str(),
        ]
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a polarity score to its label band.
///
/// The neutral band `[-0.1, 0.25]` is closed on both ends, so every real
/// polarity takes exactly one branch.
#[must_use]
pub fn label_for_polarity(polarity: f64) -> Label {
    if polarity > POSITIVE_THRESHOLD {
        Label::Positive
    } else if polarity < NEGATIVE_THRESHOLD {
        Label::Negative
    } else {
        Label::Neutral
    }
}
