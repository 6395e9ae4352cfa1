//! # Text Report
//!
//! Human-readable summary of a spline calculation, grouped by check with all
//! stresses in MPa. Table-derived values carry the name of the Dudley table
//! they came from. The wear life factor line is only printed for flexible
//! splines.
//!
//! ```rust
//! use spline_core::calculations::{calculate, SplineForm};
//! use spline_core::report::format_report;
//!
//! let input = SplineForm::demo().to_input();
//! let result = calculate(&input).unwrap();
//! let text = format_report(&input, &result);
//! assert!(text.contains("Shaft Safety Factor"));
//! ```

use std::fmt;

use crate::calculations::spline::{SplineInput, SplineResult};
use crate::dudley_factors::dudley_ref;
use crate::units::{Megapascals, Pascals};

const RULE: &str = "═══════════════════════════════════════";

fn mpa(pa: f64) -> f64 {
    Megapascals::from(Pascals(pa)).0
}

fn status_icon(safety_factor: f64) -> &'static str {
    if safety_factor >= 1.0 {
        "[OK]"
    } else {
        "[FAIL]"
    }
}

/// Borrowed view of one calculation, formatted through `Display`
pub struct SplineReport<'a> {
    pub input: &'a SplineInput,
    pub result: &'a SplineResult,
}

impl<'a> SplineReport<'a> {
    pub fn new(input: &'a SplineInput, result: &'a SplineResult) -> Self {
        SplineReport { input, result }
    }
}

impl fmt::Display for SplineReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let input = self.input;
        let r = self.result;

        writeln!(f, "{RULE}")?;
        if input.label.is_empty() {
            writeln!(f, "  SPLINE CALCULATION RESULTS")?;
        } else {
            writeln!(f, "  SPLINE CALCULATION RESULTS: {}", input.label)?;
        }
        writeln!(f, "{RULE}")?;
        writeln!(f)?;
        writeln!(
            f,
            "Input: T = {:.1} N·m, n = {:.0} rpm, {} teeth, {}, {}, {}",
            input.torque_nm,
            input.speed_rpm,
            input.tooth_count,
            input.hardness,
            input.tooth_end,
            if input.flexible { "flexible" } else { "rigid" }
        )?;
        writeln!(f)?;

        writeln!(f, "Shaft Stress")?;
        writeln!(f, "  Shaft Stress:                  {:.3} MPa", mpa(r.shaft_stress_pa))?;
        writeln!(
            f,
            "  Allowable Shear Stress:        {:.3} MPa ({})",
            mpa(r.allowable_shear_stress_pa),
            dudley_ref::SHEAR_ALLOWABLE
        )?;
        writeln!(f, "  Adjusted Shaft Stress:         {:.3} MPa", mpa(r.max_shaft_stress_pa))?;
        writeln!(
            f,
            "  Shaft Safety Factor:           {:.3} {}",
            r.shaft_safety_factor,
            status_icon(r.shaft_safety_factor)
        )?;
        writeln!(f)?;

        writeln!(f, "Teeth Shear Stress")?;
        writeln!(f, "  Teeth Shear Stress:            {:.3} MPa", mpa(r.teeth_shear_stress_pa))?;
        writeln!(f, "  Teeth Max Stress:              {:.3} MPa", mpa(r.max_teeth_shear_stress_pa))?;
        writeln!(
            f,
            "  Teeth Safety Factor:           {:.3} {}",
            r.teeth_safety_factor,
            status_icon(r.teeth_safety_factor)
        )?;
        writeln!(f)?;

        writeln!(f, "Compressive Stress")?;
        writeln!(f, "  Compressive Stress:            {:.3} MPa", mpa(r.compressive_stress_pa))?;
        writeln!(
            f,
            "  Allowable Compressive Stress:  {:.3} MPa ({})",
            mpa(r.allowable_compressive_stress_pa),
            dudley_ref::COMPRESSIVE_ALLOWABLE
        )?;
        writeln!(
            f,
            "  Factored Compressive Stress:   {:.3} MPa",
            mpa(r.factored_compressive_stress_pa)
        )?;
        writeln!(
            f,
            "  Compressive Safety Factor:     {:.3} {}",
            r.compressive_safety_factor,
            status_icon(r.compressive_safety_factor)
        )?;
        writeln!(f)?;

        writeln!(f, "Bursting Stress")?;
        writeln!(f, "  Radial:                        {:.3} MPa", mpa(r.bursting_radial_stress_pa))?;
        writeln!(f, "  Centrifugal:                   {:.3} MPa", mpa(r.bursting_centrifugal_stress_pa))?;
        writeln!(f, "  Tensile:                       {:.3} MPa", mpa(r.bursting_tensile_stress_pa))?;
        writeln!(f, "  Total:                         {:.3} MPa", mpa(r.total_bursting_stress_pa))?;
        writeln!(
            f,
            "  Allowable Bursting Stress:     {:.3} MPa ({})",
            mpa(r.allowable_bursting_stress_pa),
            dudley_ref::BURSTING_ALLOWABLE
        )?;
        writeln!(
            f,
            "  Bursting Safety Factor:        {:.3} {}",
            r.bursting_safety_factor,
            status_icon(r.bursting_safety_factor)
        )?;
        writeln!(f)?;

        writeln!(f, "Factors")?;
        writeln!(f, "  Application Factor, Ka:        {:.2} ({})", r.application_factor, dudley_ref::K_A)?;
        writeln!(f, "  Fatigue Life Factor, Lf:       {:.2} ({})", r.life_factor, dudley_ref::L_F)?;
        writeln!(
            f,
            "  Load Distribution Factor, Km:  {:.2} ({})",
            r.load_distribution_factor,
            dudley_ref::K_M
        )?;
        if let Some(l_w) = r.wear_life_factor {
            writeln!(f, "  Wear Life Factor, Lw:          {:.2} ({})", l_w, dudley_ref::L_W)?;
        }
        writeln!(f, "  Lewis Form Factor, Y:          {:.3} ({})", input.lewis_form_factor, dudley_ref::LEWIS_Y)?;
        writeln!(f)?;

        let governing = r.governing_check();
        writeln!(f, "{RULE}")?;
        writeln!(
            f,
            "  RESULT: {} (governs: {}, SF = {:.3})",
            if r.passes() { "PASS" } else { "FAIL" },
            governing,
            r.min_safety_factor()
        )?;
        write!(f, "{RULE}")
    }
}

/// Render the report to a string
pub fn format_report(input: &SplineInput, result: &SplineResult) -> String {
    SplineReport::new(input, result).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::spline::calculate;
    use crate::calculations::SplineForm;

    #[test]
    fn test_report_sections() {
        let input = SplineForm::demo().to_input();
        let result = calculate(&input).unwrap();
        let text = format_report(&input, &result);

        for heading in ["Shaft Stress", "Teeth Shear Stress", "Compressive Stress", "Bursting Stress", "Factors"] {
            assert!(text.contains(heading), "missing section {heading}");
        }
        assert!(text.contains("Demo spline"));
        assert!(text.contains("Wear Life Factor, Lw:"));
        assert!(text.contains("governs: Compressive"));
        // 48.289 MPa shaft stress
        assert!(text.contains("48.289 MPa"));
    }

    #[test]
    fn test_rigid_report_omits_wear_factor() {
        let input = SplineForm::demo().to_input().rigid();
        let result = calculate(&input).unwrap();
        let text = SplineReport::new(&input, &result).to_string();
        assert!(!text.contains("Lw"));
        assert!(!text.contains(dudley_ref::L_W));
        assert!(text.contains("rigid"));
    }

    #[test]
    fn test_table_values_name_their_source() {
        let input = SplineForm::demo().to_input();
        let result = calculate(&input).unwrap();
        let text = format_report(&input, &result);

        for reference in [
            dudley_ref::SHEAR_ALLOWABLE,
            dudley_ref::COMPRESSIVE_ALLOWABLE,
            dudley_ref::BURSTING_ALLOWABLE,
            dudley_ref::K_A,
            dudley_ref::L_F,
            dudley_ref::K_M,
            dudley_ref::L_W,
            dudley_ref::LEWIS_Y,
        ] {
            assert!(text.contains(reference), "missing reference {reference}");
        }
        assert!(text.contains(&format!("Fatigue Life Factor, Lf:       {:.2} (", result.life_factor)));
    }

    #[test]
    fn test_mpa_conversion() {
        assert_eq!(mpa(2.5e6), 2.5);
    }
}
