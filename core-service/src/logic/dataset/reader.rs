use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::record::{CsvRow, ReferenceRecord, CSV_COLUMN_COUNT};

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("cannot open dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: {reason}")]
    InvalidRow { line: u64, reason: String },
}

/// Historical labeled readings, loaded once and read-only afterwards
#[derive(Debug, Clone, Default)]
pub struct ReferenceDataset {
    records: Vec<ReferenceRecord>,
    source: String,
}

impl ReferenceDataset {
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_reader(file, &path.display().to_string())
    }

    /// Parse the ten-column reference CSV
    /// Drops record id, product id and failure type
    pub fn from_reader<R: Read>(reader: R, source: &str) -> Result<Self, DatasetError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut records = Vec::new();

        for result in rdr.records() {
            let row = result?;
            let line = row.position().map(|p| p.line()).unwrap_or_default();

            if row.len() != CSV_COLUMN_COUNT {
                return Err(DatasetError::InvalidRow {
                    line,
                    reason: format!("expected {} columns, got {}", CSV_COLUMN_COUNT, row.len()),
                });
            }

            let parsed: CsvRow = row.deserialize(None).map_err(|e| DatasetError::InvalidRow {
                line,
                reason: e.to_string(),
            })?;

            if parsed.machine_failure > 1 {
                return Err(DatasetError::InvalidRow {
                    line,
                    reason: format!("failure flag {} is not 0 or 1", parsed.machine_failure),
                });
            }

            records.push(ReferenceRecord::from(parsed));
        }

        if records.is_empty() {
            log::warn!("Reference dataset {} has no rows", source);
        } else {
            log::info!("Loaded {} reference rows from {}", records.len(), source);
        }

        Ok(Self {
            records,
            source: source.to_string(),
        })
    }

    pub fn from_records(records: Vec<ReferenceRecord>) -> Self {
        Self {
            records,
            source: "<memory>".to_string(),
        }
    }

    pub fn records(&self) -> &[ReferenceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Rows whose ground-truth failure flag equals `label`
    pub fn filter_by_label(&self, label: u8) -> Vec<&ReferenceRecord> {
        self.records
            .iter()
            .filter(|r| r.machine_failure == label)
            .collect()
    }

    /// `[ok_rows, failure_rows]`
    pub fn label_counts(&self) -> [usize; 2] {
        let failures = self.records.iter().filter(|r| r.machine_failure == 1).count();
        [self.records.len() - failures, failures]
    }
}
