//! vs-steam: steam property lookups for the valve sizing formulas.
//!
//! Provides:
//! - `SteamTable` trait: the capability interface the formulas query
//! - `SteamQuery` / `SteamState`: request and response types
//! - `Iapws97`: native IAPWS-IF97 backend (regions 1 to 4)
//! - `CoolPropSteamTable`: CoolProp backend via `rfluids` (feature `coolprop`)
//!
//! # Architecture
//!
//! The sizing formulas only ever see `&dyn SteamTable`, so any conforming
//! steam table can be substituted without touching classification or
//! volume lookup. Every backend must fail loudly: out-of-range or
//! non-convergent queries return `SteamError`, never zero or NaN.
//!
//! # Example
//!
//! ```
//! use vs_core::units::mpa;
//! use vs_steam::{Iapws97, SteamQuery, SteamTable};
//!
//! let table = Iapws97::new();
//! let sat = table
//!     .evaluate(SteamQuery::PressureQuality { p: mpa(0.1), x: 1.0 })
//!     .unwrap();
//! assert!((sat.temperature_k() - 372.756).abs() < 1e-3);
//! ```

#[cfg(feature = "coolprop")]
pub mod coolprop;
pub mod error;
pub mod if97;
pub mod state;
pub mod table;

// Re-exports for ergonomics
#[cfg(feature = "coolprop")]
pub use coolprop::CoolPropSteamTable;
pub use error::{SteamError, SteamResult};
pub use if97::Iapws97;
pub use state::{Region, SteamQuery, SteamState};
pub use table::SteamTable;
