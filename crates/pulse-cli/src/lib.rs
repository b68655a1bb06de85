#![forbid(unsafe_code)]

//! Offline batch evaluation: classify a feedback CSV (in-process or through
//! the prediction service), attach prediction columns, and report accuracy
//! against ground-truth labels when they are present.

use pulse_api::PredictionDto;
use pulse_core::Classifier;
use std::path::{Path, PathBuf};

mod client;
mod dataset;
mod report;

pub use client::{fetch_predictions, fetch_resource_metrics};
pub use dataset::Dataset;
pub use report::{accuracy, classification_report, render_report, ClassStats};

pub const FEEDBACK_COLUMN: &str = "feedback";
pub const GROUND_TRUTH_COLUMN: &str = "sentiment (text)";
pub const PREDICTED_LABEL_COLUMN: &str = "predicted_sentiment";
pub const PREDICTED_POLARITY_COLUMN: &str = "predicted_polarity";
pub const DEFAULT_OUTPUT_NAME: &str = "with_predictions.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionMode {
    /// Classify in-process.
    Local,
    /// One batch predict call against a running prediction service.
    Api,
}

#[derive(Debug, Clone)]
pub struct EvalOptions {
    pub data: PathBuf,
    pub out: Option<PathBuf>,
    pub mode: PredictionMode,
    pub api_url: String,
    pub show_resources: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvalOutcome {
    pub rows: usize,
    pub out_path: PathBuf,
    pub accuracy: Option<f64>,
}

/// Output path next to the input, mirroring the original fixed sibling path.
#[must_use]
pub fn default_output_path(data: &Path) -> PathBuf {
    data.parent()
        .map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_NAME), Path::to_path_buf)
        .join(DEFAULT_OUTPUT_NAME)
}

/// Runs the whole evaluation workflow once.
///
/// Fatal: missing data file, missing `feedback` column, any service failure
/// in api mode. Non-fatal: a missing ground-truth column only skips the
/// accuracy report.
pub fn run_eval(opts: &EvalOptions) -> Result<EvalOutcome, String> {
    if !opts.data.exists() {
        return Err(format!("data file {} does not exist", opts.data.display()));
    }
    let mut dataset = Dataset::load(&opts.data)?;
    let feedback_idx = dataset.require_column(FEEDBACK_COLUMN)?;
    let texts = dataset.column_values(feedback_idx);

    let predictions: Vec<PredictionDto> = match opts.mode {
        PredictionMode::Local => {
            let classifier = Classifier::with_default_scorer();
            texts
                .iter()
                .map(|text| {
                    let prediction = classifier.classify(text);
                    PredictionDto::new(prediction.label, prediction.polarity)
                })
                .collect()
        }
        PredictionMode::Api => fetch_predictions(&opts.api_url, &texts)?,
    };
    if predictions.len() != texts.len() {
        return Err(format!(
            "prediction count {} does not match row count {}",
            predictions.len(),
            texts.len()
        ));
    }

    dataset.append_predictions(&predictions);

    let accuracy = match dataset.column(GROUND_TRUTH_COLUMN) {
        Some(truth_idx) => {
            let y_true = dataset.column_values(truth_idx);
            let y_pred: Vec<String> = predictions.iter().map(|p| p.label.clone()).collect();
            let acc = report::accuracy(&y_true, &y_pred);
            println!("Accuracy: {acc}");
            print!(
                "{}",
                report::render_report(&report::classification_report(&y_true, &y_pred))
            );
            Some(acc)
        }
        None => {
            println!("No ground truth sentiment labels found for accuracy calculation.");
            None
        }
    };

    let out_path = opts
        .out
        .clone()
        .unwrap_or_else(|| default_output_path(&opts.data));
    dataset.write(&out_path)?;
    println!("Saved: {}", out_path.display());

    if opts.show_resources {
        let metrics = fetch_resource_metrics(&opts.api_url)?;
        println!(
            "Resources: {}",
            serde_json::to_string(&metrics).map_err(|e| e.to_string())?
        );
    }

    Ok(EvalOutcome {
        rows: texts.len(),
        out_path,
        accuracy,
    })
}
