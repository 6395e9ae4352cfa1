//! # Unit Types
//!
//! Type-safe wrappers for the units that appear in the Dudley method, plus
//! the plain `f64` conversion functions the calculation pipeline uses.
//!
//! ## SI Units (Primary)
//!
//! Inputs and results are SI: metres, newton-metres, pascals. The published
//! Dudley tables and the centrifugal bursting formula are in US customary
//! units, so PSI and inches appear only at those boundaries:
//! - Stress: pascals (Pa), megapascals (MPa), pounds per square inch (psi)
//! - Length: metres (m), inches (in)
//!
//! The allowable-stress tables, the centrifugal bursting stress and the
//! report convert through the newtypes below.
//!
//! ## Example
//!
//! ```rust
//! use spline_core::units::{Inches, Meters, Pascals, Psi};
//!
//! let wall = Meters(0.0254);
//! let wall_in: Inches = wall.into();
//! assert!((wall_in.0 - 1.0).abs() < 1e-12);
//!
//! let allowable: Pascals = Psi(20_000.0).into();
//! assert!((allowable.0 - 1.378_951_458_633_6e8).abs() < 1.0);
//! ```

use serde::{Deserialize, Serialize};

/// Pascals in one pound per square inch
pub const PASCALS_PER_PSI: f64 = 6894.757293168;

/// Metres in one inch (exact)
pub const METERS_PER_INCH: f64 = 0.0254;

/// Convert a stress in psi to pascals
#[inline]
pub fn psi_to_pascals(psi: f64) -> f64 {
    psi * PASCALS_PER_PSI
}

/// Convert a stress in pascals to psi
#[inline]
pub fn pascals_to_psi(pa: f64) -> f64 {
    pa / PASCALS_PER_PSI
}

/// Convert a length in metres to inches
#[inline]
pub fn meters_to_inches(m: f64) -> f64 {
    m / METERS_PER_INCH
}

/// Convert a length in inches to metres
#[inline]
pub fn inches_to_meters(inches: f64) -> f64 {
    inches * METERS_PER_INCH
}

/// Convert a stress in pascals to megapascals (report units)
#[inline]
pub fn pascals_to_megapascals(pa: f64) -> f64 {
    pa / 1.0e6
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in pascals (N/m²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Stress in megapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

/// Stress in pounds per square inch (psi)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Psi(pub f64);

impl From<Psi> for Pascals {
    fn from(psi: Psi) -> Self {
        Pascals(psi_to_pascals(psi.0))
    }
}

impl From<Pascals> for Psi {
    fn from(pa: Pascals) -> Self {
        Psi(pascals_to_psi(pa.0))
    }
}

impl From<Pascals> for Megapascals {
    fn from(pa: Pascals) -> Self {
        Megapascals(pascals_to_megapascals(pa.0))
    }
}

impl From<Megapascals> for Pascals {
    fn from(mpa: Megapascals) -> Self {
        Pascals(mpa.0 * 1.0e6)
    }
}

// ============================================================================
// Length Units
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Meters> for Inches {
    fn from(m: Meters) -> Self {
        Inches(meters_to_inches(m.0))
    }
}

impl From<Inches> for Meters {
    fn from(inches: Inches) -> Self {
        Meters(inches_to_meters(inches.0))
    }
}
