//! Worksheet schema definitions.

use serde::{Deserialize, Serialize};

/// Newest worksheet format version this crate reads.
pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Worksheet {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub lines: Vec<ServiceLine>,
}

/// One row of the sizing worksheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceLine {
    pub id: String,
    /// Free text, usually the valve tag.
    #[serde(default)]
    pub tag: String,
    pub service: ServiceDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServiceDef {
    Steam {
        pressure_psig: f64,
        temperature_f: f64,
    },
    Gas {
        molecular_weight: f64,
        pressure_psig: f64,
        temperature_f: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        scfd: Option<f64>,
    },
}

impl ServiceDef {
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceDef::Steam { .. } => "steam",
            ServiceDef::Gas { .. } => "gas",
        }
    }
}
