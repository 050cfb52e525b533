mod parser;

use crate::readiness::Publication;
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum CorpusImportError {
    #[error("failed to read publication export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid publication CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid publication JSON data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Loads publication corpora from the exports the dashboard backend
/// produces: a header-addressed CSV or a JSON array of records.
pub struct PublicationImporter;

impl PublicationImporter {
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Vec<Publication>, CorpusImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<Publication>, CorpusImportError> {
        let publications = parser::parse_rows(reader)?;
        debug!(count = publications.len(), "parsed publication CSV export");
        Ok(publications)
    }

    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Vec<Publication>, CorpusImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(file)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Vec<Publication>, CorpusImportError> {
        let publications: Vec<Publication> = serde_json::from_reader(reader)?;
        debug!(count = publications.len(), "parsed publication JSON export");
        Ok(publications)
    }
}
