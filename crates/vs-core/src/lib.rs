//! vs-core: stable foundation for the valve sizing formulas.
//!
//! Contains:
//! - units (uom SI types, constructors, and the imperial conversions the
//!   sizing worksheet relies on)
//! - numeric (finiteness checks and rounding helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{VsError, VsResult};
pub use numeric::*;
pub use units::*;
