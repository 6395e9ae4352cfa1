//! # Spline Calculations
//!
//! Calculations follow the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`spline`] - Dudley strength check of a splined shaft and hub
//! - [`form`] - Data-sheet presets that produce a [`SplineInput`]

pub mod form;
pub mod spline;

// Re-export commonly used types
pub use form::{CycleBand, HardnessClass, RevolutionBand, SplineForm};
pub use spline::{calculate, SafetyCheck, SplineInput, SplineResult};
