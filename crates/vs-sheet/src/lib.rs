//! vs-sheet: sizing worksheet file format, validation and batch evaluation.
//!
//! A worksheet lists service lines (steam or gas) the way rows of the
//! sizing spreadsheet do. Files are YAML or JSON; [`load`] and
//! [`save_report`] pick the format from the file extension.

pub mod evaluate;
pub mod schema;
pub mod validate;

pub use evaluate::{LineResult, SheetReport, evaluate_line, evaluate_worksheet};
pub use schema::*;
pub use validate::{ValidationError, validate_worksheet};

use std::path::Path;

use tracing::debug;

pub type SheetResult<T> = Result<T, SheetError>;

#[derive(thiserror::Error, Debug)]
pub enum SheetError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unsupported file format: {path} (expected .yaml, .yml or .json)")]
    Format { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Yaml,
    Json,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> SheetResult<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("yaml" | "yml") => Ok(FileFormat::Yaml),
            Some("json") => Ok(FileFormat::Json),
            _ => Err(SheetError::Format {
                path: path.display().to_string(),
            }),
        }
    }
}

pub fn load(path: &Path) -> SheetResult<Worksheet> {
    match FileFormat::from_path(path)? {
        FileFormat::Yaml => load_yaml(path),
        FileFormat::Json => load_json(path),
    }
}

pub fn load_yaml(path: &Path) -> SheetResult<Worksheet> {
    let content = std::fs::read_to_string(path)?;
    let sheet: Worksheet = serde_yaml::from_str(&content)?;
    validate_worksheet(&sheet)?;
    debug!(path = %path.display(), lines = sheet.lines.len(), "loaded worksheet");
    Ok(sheet)
}

pub fn load_json(path: &Path) -> SheetResult<Worksheet> {
    let content = std::fs::read_to_string(path)?;
    let sheet: Worksheet = serde_json::from_str(&content)?;
    validate_worksheet(&sheet)?;
    debug!(path = %path.display(), lines = sheet.lines.len(), "loaded worksheet");
    Ok(sheet)
}

pub fn save_yaml(path: &Path, sheet: &Worksheet) -> SheetResult<()> {
    validate_worksheet(sheet)?;
    let content = serde_yaml::to_string(sheet)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn save_json(path: &Path, sheet: &Worksheet) -> SheetResult<()> {
    validate_worksheet(sheet)?;
    let content = serde_json::to_string_pretty(sheet)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Write evaluation results, YAML or JSON by extension.
pub fn save_report(path: &Path, report: &SheetReport) -> SheetResult<()> {
    let content = match FileFormat::from_path(path)? {
        FileFormat::Yaml => serde_yaml::to_string(report)?,
        FileFormat::Json => serde_json::to_string_pretty(report)?,
    };
    std::fs::write(path, content)?;
    Ok(())
}
