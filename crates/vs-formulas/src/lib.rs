//! vs-formulas: valve sizing formulas.
//!
//! Provides:
//! - steam phase classification ([`classify`]) and specific volume lookup
//!   ([`volume`]) against any [`vs_steam::SteamTable`]
//! - ideal gas specific volume ([`gas_volume`])
//! - standard gas flow to gallons per minute ([`scfd_to_gpm`])
//! - the string-based worksheet surface ([`udf`])
//!
//! All inputs are imperial: pressures in psig, temperatures in °F, volumes
//! in ft³/lb.
//!
//! # Example
//!
//! ```
//! use vs_formulas::{PhaseLabel, classify, volume};
//! use vs_steam::Iapws97;
//!
//! let table = Iapws97::new();
//! let phase = classify(&table, 100.0, 500.0).unwrap();
//! assert_eq!(phase, PhaseLabel::SuperheatedSteam);
//!
//! let v = volume(&table, phase, 100.0, 500.0).unwrap();
//! assert!((v - 4.8525).abs() < 1e-3);
//! ```

pub mod error;
pub mod flow;
pub mod gas;
pub mod phase;
pub mod udf;
pub mod volume;

pub use error::{FormulaError, FormulaResult};
pub use flow::scfd_to_gpm;
pub use gas::gas_volume;
pub use phase::{PhaseLabel, classify};
pub use udf::Formulas;
pub use volume::volume;
