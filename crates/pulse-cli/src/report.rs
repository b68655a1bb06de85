use std::collections::BTreeSet;
use std::fmt::Write as _;

/// Per-class precision/recall/F1 with support (true occurrences).
#[derive(Debug, Clone, PartialEq)]
pub struct ClassStats {
    pub label: String,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: usize,
}

fn norm(value: &str) -> &str {
    value.trim()
}

/// Fraction of rows where prediction equals ground truth, exactly K/N.
#[must_use]
pub fn accuracy(y_true: &[String], y_pred: &[String]) -> f64 {
    if y_true.is_empty() {
        return 0.0;
    }
    let matches = y_true
        .iter()
        .zip(y_pred)
        .filter(|(truth, pred)| norm(truth) == norm(pred))
        .count();
    matches as f64 / y_true.len() as f64
}

/// Per-class statistics over the union of observed labels, sorted.
#[must_use]
pub fn classification_report(y_true: &[String], y_pred: &[String]) -> Vec<ClassStats> {
    let labels: BTreeSet<&str> = y_true
        .iter()
        .chain(y_pred)
        .map(|v| norm(v))
        .filter(|v| !v.is_empty())
        .collect();

    labels
        .into_iter()
        .map(|label| {
            let mut tp = 0usize;
            let mut fp = 0usize;
            let mut fn_ = 0usize;
            for (truth, pred) in y_true.iter().zip(y_pred) {
                let truth_hit = norm(truth) == label;
                let pred_hit = norm(pred) == label;
                match (truth_hit, pred_hit) {
                    (true, true) => tp += 1,
                    (false, true) => fp += 1,
                    (true, false) => fn_ += 1,
                    (false, false) => {}
                }
            }
            let precision = ratio(tp, tp + fp);
            let recall = ratio(tp, tp + fn_);
            let f1 = if precision + recall > 0.0 {
                2.0 * precision * recall / (precision + recall)
            } else {
                0.0
            };
            ClassStats {
                label: label.to_string(),
                precision,
                recall,
                f1,
                support: tp + fn_,
            }
        })
        .collect()
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Plain-text table in the shape of the classic classification report.
#[must_use]
pub fn render_report(stats: &[ClassStats]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>12} {:>10} {:>10} {:>10} {:>10}",
        "", "precision", "recall", "f1-score", "support"
    );
    for class in stats {
        let _ = writeln!(
            out,
            "{:>12} {:>10.2} {:>10.2} {:>10.2} {:>10}",
            class.label, class.precision, class.recall, class.f1, class.support
        );
    }
    if !stats.is_empty() {
        let n = stats.len() as f64;
        let (p, r, f) = stats.iter().fold((0.0, 0.0, 0.0), |acc, c| {
            (acc.0 + c.precision, acc.1 + c.recall, acc.2 + c.f1)
        });
        let support: usize = stats.iter().map(|c| c.support).sum();
        let _ = writeln!(
            out,
            "{:>12} {:>10.2} {:>10.2} {:>10.2} {:>10}",
            "macro avg",
            p / n,
            r / n,
            f / n,
            support
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn accuracy_is_exactly_matches_over_rows() {
        let y_true = labels(&["positive", "negative", "neutral", "positive"]);
        let y_pred = labels(&["positive", "negative", "positive", "negative"]);
        assert_eq!(accuracy(&y_true, &y_pred), 2.0 / 4.0);
    }

    #[test]
    fn accuracy_of_empty_input_is_zero() {
        assert_eq!(accuracy(&[], &[]), 0.0);
    }

    #[test]
    fn accuracy_ignores_surrounding_whitespace() {
        let y_true = labels(&[" positive "]);
        let y_pred = labels(&["positive"]);
        assert_eq!(accuracy(&y_true, &y_pred), 1.0);
    }

    #[test]
    fn per_class_stats_match_hand_computation() {
        // positive: tp=1 fp=1 fn=0; negative: tp=1 fp=0 fn=1.
        let y_true = labels(&["positive", "negative", "negative"]);
        let y_pred = labels(&["positive", "negative", "positive"]);
        let report = classification_report(&y_true, &y_pred);
        assert_eq!(report.len(), 2);

        let negative = &report[0];
        assert_eq!(negative.label, "negative");
        assert_eq!(negative.precision, 1.0);
        assert_eq!(negative.recall, 0.5);
        assert_eq!(negative.support, 2);

        let positive = &report[1];
        assert_eq!(positive.label, "positive");
        assert_eq!(positive.precision, 0.5);
        assert_eq!(positive.recall, 1.0);
        assert_eq!(positive.support, 1);
        let expected_f1 = 2.0 * 0.5 * 1.0 / 1.5;
        assert!((positive.f1 - expected_f1).abs() < 1e-12);
    }

    #[test]
    fn unseen_predicted_labels_get_zero_recall_rows() {
        let y_true = labels(&["positive", "positive"]);
        let y_pred = labels(&["neutral", "positive"]);
        let report = classification_report(&y_true, &y_pred);
        let neutral = report.iter().find(|c| c.label == "neutral").expect("row");
        assert_eq!(neutral.support, 0);
        assert_eq!(neutral.recall, 0.0);
        assert_eq!(neutral.f1, 0.0);
    }

    #[test]
    fn rendered_report_contains_every_class_and_macro_avg() {
        let y_true = labels(&["positive", "negative"]);
        let y_pred = labels(&["positive", "negative"]);
        let rendered = render_report(&classification_report(&y_true, &y_pred));
        assert!(rendered.contains("precision"));
        assert!(rendered.contains("positive"));
        assert!(rendered.contains("negative"));
        assert!(rendered.contains("macro avg"));
    }
}
