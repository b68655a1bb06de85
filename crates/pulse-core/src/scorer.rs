// SPDX-License-Identifier: Apache-2.0

use vader_sentiment::SentimentIntensityAnalyzer;

/// Seam for the external polarity scorer.
///
/// Implementations must return a value in `[-1, 1]` for any input text; the
/// scorer is treated as an opaque, deterministic pure function.
pub trait PolarityScorer: Send + Sync {
    fn polarity(&self, text: &str) -> f64;
}

/// Production scorer backed by the VADER lexicon.
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer for VaderScorer {
    fn polarity(&self, text: &str) -> f64 {
        // The compound score is already normalized into [-1, 1]; the clamp
        // guards the banding contract against float drift in the lexicon.
        self.analyzer
            .polarity_scores(text)
            .get("compound")
            .copied()
            .unwrap_or(0.0)
            .clamp(-1.0, 1.0)
    }
}
