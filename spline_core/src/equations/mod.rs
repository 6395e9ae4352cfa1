//! # Spline Strength Equations
//!
//! All closed-form equations used by the Dudley calculation live here so
//! they can be checked against the published method in isolation from the
//! table lookups and the pipeline.
//!
//! ## Modules
//!
//! - [`stress`] - Shaft, teeth, compressive and bursting stresses
//! - [`form_factor`] - Lewis form factor for the tensile bursting term
//!
//! ## References
//!
//! - D. W. Dudley, "When Splines Need Stress Control"
//! - AGMA 908-B89: Geometry Factors for Determining the Pitting Resistance
//!   and Bending Strength of Spur, Helical and Herringbone Gear Teeth

pub mod form_factor;
pub mod stress;

// Re-export commonly used items
pub use stress::{
    // Shaft shear
    solid_shaft_stress,
    hollow_shaft_stress,
    shaft_stress,
    max_stress,
    safety_factor,
    // Teeth
    teeth_shear_stress,
    compressive_stress,
    factored_compressive_stress_flexible,
    factored_compressive_stress_rigid,
    // Bursting
    bursting_radial_stress,
    bursting_centrifugal_stress,
    bursting_tensile_stress,
    total_bursting_stress,
    bursting_safety_factor,
};

pub use form_factor::{lewis_form_factor, spline_lewis_form_factor};
