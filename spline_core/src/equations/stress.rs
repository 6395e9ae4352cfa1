//! # Spline Stress Formulas
//!
//! Closed-form stresses of the Dudley method. All inputs are SI (N·m, m,
//! rpm) and all stresses are returned in Pa.
//!
//! ## Notation
//!
//! - `T` = Transmitted torque
//! - `D_re` = Root diameter of the external (shaft) spline
//! - `D_h` = Bore diameter of a hollow shaft
//! - `D` = Pitch diameter
//! - `z` = Number of teeth
//! - `F_e` = Effective face width, `F` = full face width
//! - `t_c` = Chordal tooth thickness at the pitch line
//! - `H` = Radial height of tooth contact
//! - `φ` = Pressure angle
//! - `t_w` = Hub wall thickness
//! - `K_a`, `K_m`, `L_f`, `L_w` = see [`crate::dudley_factors`]
//!
//! ## References
//!
//! - D. W. Dudley, "When Splines Need Stress Control"

use std::f64::consts::PI;

use crate::dudley_factors::RIGID_SPLINE_LIFE_MULTIPLIER;
use crate::units::{Inches, Meters, Pascals, Psi};

// =============================================================================
// SHAFT SHEAR
// =============================================================================

/// Torsional shear stress of a solid shaft at the spline root
///
/// # Formula
/// - S_s = 16T / (π·D_re³)
#[inline]
pub fn solid_shaft_stress(t: f64, d_re: f64) -> f64 {
    16.0 * t / (PI * d_re.powi(3))
}

/// Torsional shear stress of a hollow shaft at the spline root
///
/// # Formula
/// - S_s = 16T·D_re / (π·(D_re⁴ − D_h⁴))
#[inline]
pub fn hollow_shaft_stress(t: f64, d_re: f64, d_h: f64) -> f64 {
    16.0 * t * d_re / (PI * (d_re.powi(4) - d_h.powi(4)))
}

/// Shaft shear stress, hollow when the bore diameter is anything but exactly 0.0
#[inline]
pub fn shaft_stress(t: f64, d_re: f64, d_h: f64) -> f64 {
    if d_h == 0.0 {
        solid_shaft_stress(t, d_re)
    } else {
        hollow_shaft_stress(t, d_re, d_h)
    }
}

/// Stress scaled by application and life factors
///
/// # Formula
/// - S' = S·K_a / L_f
#[inline]
pub fn max_stress(s: f64, k_a: f64, l_f: f64) -> f64 {
    s * k_a / l_f
}

/// Ratio of allowable to working stress
#[inline]
pub fn safety_factor(max_stress: f64, allowable: f64) -> f64 {
    allowable / max_stress
}

// =============================================================================
// TEETH
// =============================================================================

/// Shear stress at the pitch line of the teeth
///
/// # Formula
/// - S_s,t = 4T·K_m / (D·z·F_e·t_c)
#[inline]
pub fn teeth_shear_stress(t: f64, k_m: f64, d: f64, z: f64, f_e: f64, t_c: f64) -> f64 {
    4.0 * t * k_m / (d * z * f_e * t_c)
}

/// Compressive (bearing) stress on the tooth flanks
///
/// # Formula
/// - S_c = 2T·K_m / (D·z·F_e·H)
#[inline]
pub fn compressive_stress(t: f64, k_m: f64, d: f64, z: f64, f_e: f64, h: f64) -> f64 {
    2.0 * t * k_m / (d * z * f_e * h)
}

/// Compressive stress of a flexible spline, derated by wear life
///
/// # Formula
/// - S_c' = S_c·K_a / L_w
#[inline]
pub fn factored_compressive_stress_flexible(s_c: f64, k_a: f64, l_w: f64) -> f64 {
    s_c * k_a / l_w
}

/// Compressive stress of a rigid spline, derated by fatigue life
///
/// # Formula
/// - S_c' = S_c·K_a / (9·L_f)
#[inline]
pub fn factored_compressive_stress_rigid(s_c: f64, k_a: f64, l_f: f64) -> f64 {
    s_c * k_a / (RIGID_SPLINE_LIFE_MULTIPLIER * l_f)
}

// =============================================================================
// BURSTING
// =============================================================================

/// Bursting stress from the radial tooth load component
///
/// # Formula
/// - S1 = T·tan φ / (π·D·t_w·F)
#[inline]
pub fn bursting_radial_stress(t: f64, phi_rad: f64, d: f64, t_w: f64, f: f64) -> f64 {
    t * phi_rad.tan() / (PI * d * t_w * f)
}

/// Centrifugal hoop stress of the internally toothed part
///
/// The published formula is in US customary units, so both diameters go in
/// as inches and the result comes out in psi before converting to Pa.
///
/// # Formula
/// - S2 = 0.828e-6·n²·(2·D_oi² + 0.424·D_ri²)   [psi, in]
#[inline]
pub fn bursting_centrifugal_stress(n_rpm: f64, d_oi: f64, d_ri: f64) -> f64 {
    let d_oi_in = Inches::from(Meters(d_oi)).0;
    let d_ri_in = Inches::from(Meters(d_ri)).0;
    let s2 = Psi(0.828e-6 * n_rpm.powi(2) * (2.0 * d_oi_in.powi(2) + 0.424 * d_ri_in.powi(2)));
    Pascals::from(s2).0
}

/// Bursting stress from the tangential tooth load acting as a beam
///
/// # Formula
/// - S3 = 4T / (D²·F_e·Y)
#[inline]
pub fn bursting_tensile_stress(t: f64, d: f64, f_e: f64, y: f64) -> f64 {
    4.0 * t / (d.powi(2) * f_e * y)
}

/// Total bursting stress; the centrifugal term is not load-factored
///
/// # Formula
/// - S_t = K_a·K_m·(S1 + S3) + S2
#[inline]
pub fn total_bursting_stress(k_a: f64, k_m: f64, s1: f64, s2: f64, s3: f64) -> f64 {
    k_a * k_m * (s1 + s3) + s2
}

/// Bursting safety factor against the life-derated total
///
/// # Formula
/// - f = S_t,max / (S_t / L_f)
#[inline]
pub fn bursting_safety_factor(s_t: f64, allowable: f64, l_f: f64) -> f64 {
    allowable / (s_t / l_f)
}
