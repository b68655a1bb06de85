use crate::{PREDICTED_LABEL_COLUMN, PREDICTED_POLARITY_COLUMN};
use pulse_api::PredictionDto;
use std::path::Path;

/// A delimited tabular dataset held in memory: headers plus string cells.
///
/// Loaded once, augmented in place, written back; original columns pass
/// through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn load(path: &Path) -> Result<Self, String> {
        let mut reader =
            csv::Reader::from_path(path).map_err(|e| format!("read {}: {e}", path.display()))?;
        let headers = reader
            .headers()
            .map_err(|e| format!("read {} headers: {e}", path.display()))?
            .iter()
            .map(ToString::to_string)
            .collect();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| format!("read {}: {e}", path.display()))?;
            rows.push(record.iter().map(ToString::to_string).collect());
        }
        Ok(Self { headers, rows })
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn require_column(&self, name: &str) -> Result<usize, String> {
        self.column(name).ok_or_else(|| {
            format!(
                "'{name}' column not found. Available: {:?}",
                self.headers
            )
        })
    }

    /// Values of one column, in row order; short rows read as empty cells.
    #[must_use]
    pub fn column_values(&self, idx: usize) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.get(idx).cloned().unwrap_or_default())
            .collect()
    }

    /// Appends the predicted label and polarity columns, one entry per row.
    pub fn append_predictions(&mut self, predictions: &[PredictionDto]) {
        self.headers.push(PREDICTED_LABEL_COLUMN.to_string());
        self.headers.push(PREDICTED_POLARITY_COLUMN.to_string());
        for (row, prediction) in self.rows.iter_mut().zip(predictions) {
            row.push(prediction.label.clone());
            row.push(prediction.polarity.map_or_else(String::new, |p| p.to_string()));
        }
    }

    pub fn write(&self, path: &Path) -> Result<(), String> {
        let mut writer =
            csv::Writer::from_path(path).map_err(|e| format!("write {}: {e}", path.display()))?;
        writer
            .write_record(&self.headers)
            .map_err(|e| format!("write {}: {e}", path.display()))?;
        for row in &self.rows {
            writer
                .write_record(row)
                .map_err(|e| format!("write {}: {e}", path.display()))?;
        }
        writer
            .flush()
            .map_err(|e| format!("write {}: {e}", path.display()))
    }
}
