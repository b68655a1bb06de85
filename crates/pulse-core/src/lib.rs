#![forbid(unsafe_code)]

//! Sentiment label set, polarity threshold banding, and the lexicon-backed
//! classifier shared by the prediction service and the batch evaluator.

use std::sync::Arc;

mod label;
mod scorer;

pub use label::{label_for_polarity, Label, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
pub use scorer::{PolarityScorer, VaderScorer};

pub const CRATE_NAME: &str = "pulse-core";

/// Identifier of the scoring engine, reported by the service health endpoint.
pub const ENGINE: &str = "vader";

/// A single classification outcome: the discrete label plus the raw polarity
/// it was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub label: Label,
    pub polarity: f64,
}

/// Maps text to `(label, polarity)` through an injected polarity scorer.
///
/// Classification cannot fail: any input string yields a polarity in
/// `[-1, 1]` and a label from the closed set.
#[derive(Clone)]
pub struct Classifier {
    scorer: Arc<dyn PolarityScorer>,
}

impl Classifier {
    #[must_use]
    pub fn new(scorer: Arc<dyn PolarityScorer>) -> Self {
        Self { scorer }
    }

    /// Classifier backed by the production lexicon scorer.
    #[must_use]
    pub fn with_default_scorer() -> Self {
        Self::new(Arc::new(VaderScorer::new()))
    }

    #[must_use]
    pub fn classify(&self, text: &str) -> Prediction {
        let polarity = self.scorer.polarity(text);
        Prediction {
            label: label_for_polarity(polarity),
            polarity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedScorer(f64);

    impl PolarityScorer for FixedScorer {
        fn polarity(&self, _text: &str) -> f64 {
            self.0
        }
    }

    #[test]
    fn banding_splits_the_polarity_range_into_three_closed_classes() {
        assert_eq!(label_for_polarity(-1.0), Label::Negative);
        assert_eq!(label_for_polarity(-0.11), Label::Negative);
        assert_eq!(label_for_polarity(0.0), Label::Neutral);
        assert_eq!(label_for_polarity(0.26), Label::Positive);
        assert_eq!(label_for_polarity(1.0), Label::Positive);
    }

    #[test]
    fn band_boundaries_are_inclusive_neutral() {
        assert_eq!(label_for_polarity(NEGATIVE_THRESHOLD), Label::Neutral);
        assert_eq!(label_for_polarity(POSITIVE_THRESHOLD), Label::Neutral);
        assert_eq!(label_for_polarity(-0.100_000_1), Label::Negative);
        assert_eq!(label_for_polarity(0.250_000_1), Label::Positive);
    }

    #[test]
    fn classify_reports_the_scorer_polarity_unchanged() {
        let classifier = Classifier::new(Arc::new(FixedScorer(0.4)));
        let prediction = classifier.classify("anything");
        assert_eq!(prediction.label, Label::Positive);
        assert_eq!(prediction.polarity, 0.4);
    }

    #[test]
    fn every_polarity_maps_into_the_closed_label_set() {
        let mut step = -1.0_f64;
        while step <= 1.0 {
            let classifier = Classifier::new(Arc::new(FixedScorer(step)));
            let prediction = classifier.classify("sweep");
            assert!(Label::ALL.contains(&prediction.label));
            assert!((-1.0..=1.0).contains(&prediction.polarity));
            step += 0.01;
        }
    }

    #[test]
    fn lexicon_scorer_smoke() {
        let classifier = Classifier::with_default_scorer();
        assert_eq!(classifier.classify("I love it").label, Label::Positive);
        assert_eq!(classifier.classify("this is horrible").label, Label::Negative);
        // Words absent from the lexicon score 0.0.
        assert_eq!(classifier.classify("the table").label, Label::Neutral);
        assert_eq!(classifier.classify("").label, Label::Neutral);
    }

    #[test]
    fn lexicon_scorer_stays_in_range() {
        let scorer = VaderScorer::new();
        for text in ["great great great great", "awful terrible horrible", "", "42"] {
            let polarity = scorer.polarity(text);
            assert!((-1.0..=1.0).contains(&polarity), "out of range for {text:?}");
        }
    }
}
