//! CSV-backed record store
//! Implements the RecordStore port against a single flat file

use crate::domain::{ports::RecordStore, DomainError, Record};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

impl From<csv::Error> for DomainError {
    fn from(err: csv::Error) -> Self {
        DomainError::Storage(err.to_string())
    }
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::Storage(err.to_string())
    }
}

const HEADER: [&str; 5] = ["id", "name", "marks", "grade", "course"];

/// Store adapter persisting the dataset to one CSV file
///
/// Every call reads or rewrites the entire file. Writes go to a temp file in
/// the same directory and are renamed into place, so readers never observe a
/// partially written dataset.
#[derive(Clone)]
pub struct CsvRecordStore {
    path: PathBuf,
}

impl CsvRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_records(&self) -> Result<Vec<Record>, DomainError> {
        // A dataset that has never been written to is empty, not broken
        if !self.path.exists() {
            debug!(path = %self.path.display(), "Backing file missing, treating as empty dataset");
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&self.path)?;

        let records = reader.deserialize().collect::<Result<Vec<Record>, _>>()?;
        Ok(records)
    }

    fn write_records(&self, records: &[Record]) -> Result<(), DomainError> {
        let tmp = self.path.with_extension("csv.tmp");

        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_path(&tmp)?;

            // Header row is written explicitly so an empty dataset still
            // leaves a parseable file behind
            writer.write_record(HEADER)?;
            for record in records {
                writer.serialize(record)?;
            }
            writer.flush()?;
        }

        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[async_trait]
impl RecordStore for CsvRecordStore {
    async fn load_all(&self) -> Result<Vec<Record>, DomainError> {
        let records = self.read_records()?;
        debug!(path = %self.path.display(), count = records.len(), "Dataset loaded");
        Ok(records)
    }

    async fn save_all(&self, records: &[Record]) -> Result<(), DomainError> {
        self.write_records(records)?;
        info!(path = %self.path.display(), count = records.len(), "Dataset rewritten");
        Ok(())
    }
}
