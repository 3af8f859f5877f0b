//! Worksheet validation logic.

use crate::schema::{LATEST_VERSION, ServiceDef, ServiceLine, Worksheet};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Empty ID at line {index}")]
    EmptyId { index: usize },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_worksheet(sheet: &Worksheet) -> Result<(), ValidationError> {
    if sheet.version == 0 || sheet.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: sheet.version,
        });
    }

    let mut line_ids = HashSet::new();
    for (index, line) in sheet.lines.iter().enumerate() {
        if line.id.trim().is_empty() {
            return Err(ValidationError::EmptyId { index });
        }
        if !line_ids.insert(&line.id) {
            return Err(ValidationError::DuplicateId {
                id: line.id.clone(),
                context: "lines".to_string(),
            });
        }
        validate_line(line)?;
    }

    Ok(())
}

fn validate_line(line: &ServiceLine) -> Result<(), ValidationError> {
    match &line.service {
        ServiceDef::Steam {
            pressure_psig,
            temperature_f,
        } => {
            check_finite(&line.id, "pressure_psig", *pressure_psig)?;
            check_finite(&line.id, "temperature_f", *temperature_f)?;
        }
        ServiceDef::Gas {
            molecular_weight,
            pressure_psig,
            temperature_f,
            scfd,
        } => {
            check_finite(&line.id, "molecular_weight", *molecular_weight)?;
            if *molecular_weight <= 0.0 {
                return Err(invalid(
                    &line.id,
                    "molecular_weight",
                    *molecular_weight,
                    "must be positive",
                ));
            }
            check_finite(&line.id, "pressure_psig", *pressure_psig)?;
            check_finite(&line.id, "temperature_f", *temperature_f)?;
            if let Some(scfd) = scfd {
                check_finite(&line.id, "scfd", *scfd)?;
                if *scfd < 0.0 {
                    return Err(invalid(&line.id, "scfd", *scfd, "must be non-negative"));
                }
            }
        }
    }
    Ok(())
}

fn check_finite(id: &str, field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(id, field, value, "must be finite"))
    }
}

fn invalid(id: &str, field: &str, value: f64, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: format!("{id}.{field}"),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
