//! Batch evaluation of a worksheet.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use vs_formulas::{FormulaResult, Formulas, PhaseLabel, classify, volume};

use crate::schema::{ServiceDef, ServiceLine, Worksheet};
use crate::validate::{ValidationError, validate_worksheet};

/// Computed values for one worksheet line.
///
/// A line whose formula failed carries the message in `error` and leaves
/// the value fields empty; the rest of the sheet is still evaluated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineResult {
    pub id: String,
    #[serde(default)]
    pub tag: String,
    pub service: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<PhaseLabel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_volume_ft3_lb: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LineResult {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SheetReport {
    pub name: String,
    /// Steam table the lines were evaluated against.
    pub steam_table: String,
    pub lines: Vec<LineResult>,
}

impl SheetReport {
    pub fn failures(&self) -> usize {
        self.lines.iter().filter(|line| !line.is_ok()).count()
    }
}

struct Computed {
    phase: Option<PhaseLabel>,
    volume: f64,
    gpm: Option<f64>,
}

pub fn evaluate_worksheet(
    sheet: &Worksheet,
    formulas: &Formulas<'_>,
) -> Result<SheetReport, ValidationError> {
    validate_worksheet(sheet)?;

    let lines = sheet
        .lines
        .iter()
        .map(|line| evaluate_line(line, formulas))
        .collect();

    Ok(SheetReport {
        name: sheet.name.clone(),
        steam_table: formulas.table_name().to_string(),
        lines,
    })
}

pub fn evaluate_line(line: &ServiceLine, formulas: &Formulas<'_>) -> LineResult {
    let mut result = LineResult {
        id: line.id.clone(),
        tag: line.tag.clone(),
        service: line.service.kind().to_string(),
        phase: None,
        specific_volume_ft3_lb: None,
        gpm: None,
        error: None,
    };

    match compute(&line.service, formulas) {
        Ok(computed) => {
            debug!(id = %line.id, v_ft3_lb = computed.volume, "line evaluated");
            result.phase = computed.phase;
            result.specific_volume_ft3_lb = Some(computed.volume);
            result.gpm = computed.gpm;
        }
        Err(err) => {
            warn!(id = %line.id, error = %err, "line evaluation failed");
            result.error = Some(err.to_string());
        }
    }
    result
}

fn compute(service: &ServiceDef, formulas: &Formulas<'_>) -> FormulaResult<Computed> {
    match *service {
        ServiceDef::Steam {
            pressure_psig,
            temperature_f,
        } => {
            let phase = classify(formulas.table(), pressure_psig, temperature_f)?;
            let v = volume(formulas.table(), phase, pressure_psig, temperature_f)?;
            Ok(Computed {
                phase: Some(phase),
                volume: v,
                gpm: None,
            })
        }
        ServiceDef::Gas {
            molecular_weight,
            pressure_psig,
            temperature_f,
            scfd,
        } => {
            let volume = formulas.gas_volume(molecular_weight, pressure_psig, temperature_f)?;
            let gpm = scfd
                .map(|scfd| formulas.scfd_to_gpm(scfd, pressure_psig, temperature_f))
                .transpose()?;
            Ok(Computed {
                phase: None,
                volume,
                gpm,
            })
        }
    }
}
