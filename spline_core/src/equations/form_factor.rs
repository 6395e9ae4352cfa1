//! # Lewis Form Factor
//!
//! Tooth form factor Y for the tensile bursting term, for callers that want
//! to derive it from tooth geometry instead of using the customary 1.5.
//!
//! A spline acts like a spur gear, so the helix angle factor `k_ψ` and the
//! helical factor `C_h` are both 1.0 unless given.
//!
//! ## References
//!
//! - AGMA 908-B89, Eq. 5.78

/// Lewis form factor Y (AGMA 908-B89 Eq. 5.78)
///
/// ```text
/// Y = k_ψ / ( (cos φ_nL / cos φ_nr) · (6·h_F / (s_F²·C_h) − tan φ_nL / s_F) )
/// ```
///
/// # Arguments
/// * `phi_nr` - Operating normal pressure angle (rad)
/// * `phi_nl` - Load angle (rad)
/// * `h_f` - Height of the Lewis parabola (m)
/// * `s_f` - Tooth thickness at the critical section (m)
/// * `k_psi` - Helix angle factor
/// * `c_h` - Helical factor
#[inline]
pub fn lewis_form_factor(phi_nr: f64, phi_nl: f64, h_f: f64, s_f: f64, k_psi: f64, c_h: f64) -> f64 {
    k_psi / ((phi_nl.cos() / phi_nr.cos()) * (6.0 * h_f / (s_f.powi(2) * c_h) - phi_nl.tan() / s_f))
}

/// Lewis form factor for a spline (k_ψ = C_h = 1)
#[inline]
pub fn spline_lewis_form_factor(phi_nr: f64, phi_nl: f64, h_f: f64, s_f: f64) -> f64 {
    lewis_form_factor(phi_nr, phi_nl, h_f, s_f, 1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_load_angle_reduces_to_cantilever() {
        // With φ_nL = φ_nr = 0: Y = s_F² / (6 h_F)
        let y = spline_lewis_form_factor(0.0, 0.0, 0.002, 0.003);
        assert!((y - 0.003_f64.powi(2) / (6.0 * 0.002)).abs() < 1e-12);
    }

    #[test]
    fn test_helix_factor_scales_linearly() {
        let phi = 30.0_f64.to_radians();
        let base = spline_lewis_form_factor(phi, phi, 0.002, 0.003);
        let scaled = lewis_form_factor(phi, phi, 0.002, 0.003, 2.0, 1.0);
        assert!((scaled - 2.0 * base).abs() < 1e-12);
    }
}
