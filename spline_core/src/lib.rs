//! # spline_core - Spline Coupling Strength Calculations
//!
//! `spline_core` checks a splined shaft and hub with the Dudley method: shaft
//! shear, tooth shear, tooth compression and hub bursting, each reported as a
//! safety factor against hardness-indexed allowable stresses. All inputs and
//! outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use spline_core::calculations::{calculate, SplineForm};
//!
//! let input = SplineForm::demo().to_input();
//! let result = calculate(&input).unwrap();
//! println!("{} governs at SF {:.2}", result.governing_check(), result.min_safety_factor());
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Spline input/result types, the Dudley pipeline and data-sheet presets
//! - [`dudley_factors`] - Application, life, wear life and load distribution factors
//! - [`materials`] - Hardness and tooth-end types, allowable stresses
//! - [`equations`] - Closed-form stress formulas
//! - [`lookup`] - Step tables behind the factor and allowable lookups
//! - [`report`] - Text report in MPa
//! - [`project`] - Project container for several spline cases
//! - [`units`] - Unit conversions and type-safe wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - JSON files with atomic saves

pub mod calculations;
pub mod dudley_factors;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod lookup;
pub mod materials;
pub mod project;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, SafetyCheck, SplineForm, SplineInput, SplineResult};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_input, load_project, save_input, save_project};
pub use project::{Project, ProjectMetadata, SplineCase};
pub use report::{format_report, SplineReport};
