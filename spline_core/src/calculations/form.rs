//! # Spline Design Form
//!
//! A preset-driven description of a spline coupling, laid out the way a
//! designer fills in a data sheet: diameters as measured, the pressure angle
//! in degrees, and banded selections for hardness, torque cycles and
//! revolutions. [`SplineForm::to_input`] turns it into a [`SplineInput`].
//!
//! ## Mapping
//!
//! - Contact height `H = (D_ri - hub tooth inner diameter) / 2`
//! - The tooth contact length is used for both `F` and `F_e`
//! - A band `< 1E k` becomes `10^k - 1` cycles or revolutions
//! - A hardness class becomes a representative value inside its range

use serde::{Deserialize, Serialize};

use crate::calculations::spline::{SplineInput, DEFAULT_LEWIS_FORM_FACTOR};
use crate::dudley_factors::{LoadShock, RotationDirection, SupplyShock};
use crate::errors::{CalcError, CalcResult};
use crate::materials::{Hardness, ToothEnd};

/// Published hardness ranges of the allowable-stress tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum HardnessClass {
    /// Brinell 160-200
    Brinell160To200,
    /// Brinell 230-260
    Brinell230To260,
    /// Brinell 302-351
    Brinell302To351,
    /// Rockwell C 33-38
    RockwellC33To38,
    /// Rockwell C 42-46
    RockwellC42To46,
    /// Rockwell C 48-53
    RockwellC48To53,
    /// Rockwell C 58-63
    #[default]
    RockwellC58To63,
}

impl HardnessClass {
    /// All classes for selection lists
    pub const ALL: [HardnessClass; 7] = [
        HardnessClass::Brinell160To200,
        HardnessClass::Brinell230To260,
        HardnessClass::Brinell302To351,
        HardnessClass::RockwellC33To38,
        HardnessClass::RockwellC42To46,
        HardnessClass::RockwellC48To53,
        HardnessClass::RockwellC58To63,
    ];

    /// Representative hardness used for the table lookup
    pub fn hardness(&self) -> Hardness {
        match self {
            HardnessClass::Brinell160To200 => Hardness::brinell(180.0),
            HardnessClass::Brinell230To260 => Hardness::brinell(240.0),
            HardnessClass::Brinell302To351 => Hardness::brinell(320.0),
            HardnessClass::RockwellC33To38 => Hardness::rockwell_c(35.0),
            HardnessClass::RockwellC42To46 => Hardness::rockwell_c(44.0),
            HardnessClass::RockwellC48To53 => Hardness::rockwell_c(50.0),
            HardnessClass::RockwellC58To63 => Hardness::rockwell_c(60.0),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            HardnessClass::Brinell160To200 => "Brinell 160-200",
            HardnessClass::Brinell230To260 => "Brinell 230-260",
            HardnessClass::Brinell302To351 => "Brinell 302-351",
            HardnessClass::RockwellC33To38 => "Rockwell C 33-38",
            HardnessClass::RockwellC42To46 => "Rockwell C 42-46",
            HardnessClass::RockwellC48To53 => "Rockwell C 48-53",
            HardnessClass::RockwellC58To63 => "Rockwell C 58-63",
        }
    }

    /// Parse a display name such as "Rockwell C 58-63"
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let wanted = s.trim().to_uppercase().replace([' ', '_'], "");
        HardnessClass::ALL
            .into_iter()
            .find(|class| class.display_name().to_uppercase().replace(' ', "") == wanted)
            .ok_or_else(|| CalcError::unrecognized_hardness_type(s))
    }
}

impl std::fmt::Display for HardnessClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Parse "< 1E4" style labels into the exponent
fn parse_band_exponent(field: &str, s: &str) -> CalcResult<i32> {
    let trimmed = s.trim().trim_start_matches('<').trim();
    let exponent = trimmed
        .strip_prefix("1E")
        .or_else(|| trimmed.strip_prefix("1e"))
        .and_then(|e| e.parse::<i32>().ok());
    exponent.ok_or_else(|| CalcError::invalid_input(field, s, "Expected a band like \"< 1E4\""))
}

/// Start/stop torque cycle band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CycleBand {
    /// Fewer than 1E3 cycles
    Below1E3,
    /// Fewer than 1E4 cycles
    #[default]
    Below1E4,
    /// Fewer than 1E5 cycles
    Below1E5,
    /// Fewer than 1E6 cycles
    Below1E6,
    /// Fewer than 1E7 cycles
    Below1E7,
}

impl CycleBand {
    pub const ALL: [CycleBand; 5] = [
        CycleBand::Below1E3,
        CycleBand::Below1E4,
        CycleBand::Below1E5,
        CycleBand::Below1E6,
        CycleBand::Below1E7,
    ];

    /// Decade of the exclusive upper bound
    pub fn exponent(&self) -> i32 {
        match self {
            CycleBand::Below1E3 => 3,
            CycleBand::Below1E4 => 4,
            CycleBand::Below1E5 => 5,
            CycleBand::Below1E6 => 6,
            CycleBand::Below1E7 => 7,
        }
    }

    /// Largest whole cycle count in the band
    pub fn cycles(&self) -> f64 {
        10f64.powi(self.exponent()) - 1.0
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CycleBand::Below1E3 => "< 1E3",
            CycleBand::Below1E4 => "< 1E4",
            CycleBand::Below1E5 => "< 1E5",
            CycleBand::Below1E6 => "< 1E6",
            CycleBand::Below1E7 => "< 1E7",
        }
    }

    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let exponent = parse_band_exponent("torque_cycles", s)?;
        CycleBand::ALL
            .into_iter()
            .find(|band| band.exponent() == exponent)
            .ok_or_else(|| CalcError::out_of_range("torque_cycles", s, "No cycle band with this bound"))
    }
}

impl std::fmt::Display for CycleBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Total revolution band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RevolutionBand {
    Below1E4,
    Below1E5,
    Below1E6,
    Below1E7,
    Below1E8,
    Below1E9,
    #[default]
    Below1E10,
}

impl RevolutionBand {
    pub const ALL: [RevolutionBand; 7] = [
        RevolutionBand::Below1E4,
        RevolutionBand::Below1E5,
        RevolutionBand::Below1E6,
        RevolutionBand::Below1E7,
        RevolutionBand::Below1E8,
        RevolutionBand::Below1E9,
        RevolutionBand::Below1E10,
    ];

    pub fn exponent(&self) -> i32 {
        match self {
            RevolutionBand::Below1E4 => 4,
            RevolutionBand::Below1E5 => 5,
            RevolutionBand::Below1E6 => 6,
            RevolutionBand::Below1E7 => 7,
            RevolutionBand::Below1E8 => 8,
            RevolutionBand::Below1E9 => 9,
            RevolutionBand::Below1E10 => 10,
        }
    }

    /// Largest whole revolution count in the band
    pub fn revolutions(&self) -> f64 {
        10f64.powi(self.exponent()) - 1.0
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RevolutionBand::Below1E4 => "< 1E4",
            RevolutionBand::Below1E5 => "< 1E5",
            RevolutionBand::Below1E6 => "< 1E6",
            RevolutionBand::Below1E7 => "< 1E7",
            RevolutionBand::Below1E8 => "< 1E8",
            RevolutionBand::Below1E9 => "< 1E9",
            RevolutionBand::Below1E10 => "< 1E10",
        }
    }

    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let exponent = parse_band_exponent("total_revolutions", s)?;
        RevolutionBand::ALL
            .into_iter()
            .find(|band| band.exponent() == exponent)
            .ok_or_else(|| CalcError::out_of_range("total_revolutions", s, "No revolution band with this bound"))
    }
}

impl std::fmt::Display for RevolutionBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Spline data sheet.
///
/// Lengths in metres, torque in N·m, speed in rev/min, pressure angle in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplineForm {
    #[serde(default)]
    pub label: String,

    // Geometry
    /// Bore diameter D_h (0.0 for a solid shaft)
    #[serde(default)]
    pub bore_diameter_m: f64,
    /// Outside diameter D_oi
    pub outside_diameter_m: f64,
    /// Pitch diameter D
    pub pitch_diameter_m: f64,
    /// Root diameter of the shaft D_re
    pub root_diameter_m: f64,
    /// Inner diameter of the hub teeth
    pub hub_tooth_inner_diameter_m: f64,
    /// Outside diameter of the shaft teeth D_ri
    pub shaft_tooth_outer_diameter_m: f64,
    /// Misalignment / pitch diameter
    pub relative_misalignment: f64,
    /// Length of tooth contact F
    pub contact_length_m: f64,
    /// Chordal tooth thickness t_c
    pub chordal_thickness_m: f64,
    pub tooth_count: u32,
    pub pressure_angle_deg: f64,
    /// Hub wall thickness t_w
    pub wall_thickness_m: f64,

    // Mechanical load
    pub torque_nm: f64,
    pub speed_rpm: f64,

    // General data
    #[serde(default)]
    pub hardness: HardnessClass,
    #[serde(default = "default_supply_shock")]
    pub supply_shock: SupplyShock,
    #[serde(default)]
    pub load_shock: LoadShock,
    #[serde(default)]
    pub torque_cycles: CycleBand,
    #[serde(default)]
    pub revolutions: RevolutionBand,
    #[serde(default)]
    pub rotation: RotationDirection,
    #[serde(default)]
    pub tooth_end: ToothEnd,
    #[serde(default = "default_flexible")]
    pub flexible: bool,
}

fn default_supply_shock() -> SupplyShock {
    SupplyShock::MediumShock
}

fn default_flexible() -> bool {
    true
}

impl SplineForm {
    /// Worked example: 26-tooth, 40 mm pitch diameter, 30° spline at 500 N·m
    pub fn demo() -> Self {
        SplineForm {
            label: "Demo spline".to_string(),
            bore_diameter_m: 0.0,
            outside_diameter_m: 0.065,
            pitch_diameter_m: 0.04,
            root_diameter_m: 0.0375,
            hub_tooth_inner_diameter_m: 0.0375,
            shaft_tooth_outer_diameter_m: 0.0425,
            relative_misalignment: 0.001,
            contact_length_m: 0.03,
            chordal_thickness_m: 0.00242,
            tooth_count: 26,
            pressure_angle_deg: 30.0,
            wall_thickness_m: 0.01,
            torque_nm: 500.0,
            speed_rpm: 3000.0,
            hardness: HardnessClass::default(),
            supply_shock: default_supply_shock(),
            load_shock: LoadShock::Uniform,
            torque_cycles: CycleBand::default(),
            revolutions: RevolutionBand::default(),
            rotation: RotationDirection::default(),
            tooth_end: ToothEnd::default(),
            flexible: true,
        }
    }

    /// Radial height of tooth contact H
    pub fn contact_height_m(&self) -> f64 {
        (self.shaft_tooth_outer_diameter_m - self.hub_tooth_inner_diameter_m) / 2.0
    }

    /// Build the calculation input from the data sheet
    pub fn to_input(&self) -> SplineInput {
        SplineInput {
            label: self.label.clone(),
            torque_nm: self.torque_nm,
            root_diameter_m: self.root_diameter_m,
            bore_diameter_m: self.bore_diameter_m,
            pitch_diameter_m: self.pitch_diameter_m,
            tooth_count: self.tooth_count,
            effective_face_width_m: self.contact_length_m,
            face_width_m: self.contact_length_m,
            chordal_thickness_m: self.chordal_thickness_m,
            contact_height_m: self.contact_height_m(),
            relative_misalignment: self.relative_misalignment,
            pressure_angle_rad: self.pressure_angle_deg.to_radians(),
            wall_thickness_m: self.wall_thickness_m,
            hub_outside_diameter_m: self.outside_diameter_m,
            hub_major_diameter_m: self.shaft_tooth_outer_diameter_m,
            speed_rpm: self.speed_rpm,
            supply_shock: self.supply_shock,
            load_shock: self.load_shock,
            hardness: self.hardness.hardness(),
            torque_cycles: self.torque_cycles.cycles(),
            total_revolutions: self.revolutions.revolutions(),
            rotation: self.rotation,
            tooth_end: self.tooth_end,
            flexible: self.flexible,
            lewis_form_factor: DEFAULT_LEWIS_FORM_FACTOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::spline::calculate;
    use crate::materials::HardnessScale;

    #[test]
    fn test_hardness_classes_hit_their_table_rows() {
        let expected = [
            (HardnessScale::Brinell, 180.0),
            (HardnessScale::Brinell, 240.0),
            (HardnessScale::Brinell, 320.0),
            (HardnessScale::RockwellC, 35.0),
            (HardnessScale::RockwellC, 44.0),
            (HardnessScale::RockwellC, 50.0),
            (HardnessScale::RockwellC, 60.0),
        ];
        for (class, (scale, value)) in HardnessClass::ALL.iter().zip(expected) {
            let hardness = class.hardness();
            assert_eq!(hardness.scale, scale);
            assert_eq!(hardness.value, value);
        }
    }

    #[test]
    fn test_hardness_class_parsing() {
        assert_eq!(
            HardnessClass::from_str_flexible("Rockwell C 58-63").unwrap(),
            HardnessClass::RockwellC58To63
        );
        assert_eq!(
            HardnessClass::from_str_flexible("brinell 160-200").unwrap(),
            HardnessClass::Brinell160To200
        );
        assert!(HardnessClass::from_str_flexible("Vickers 500").is_err());
    }

    #[test]
    fn test_bands() {
        assert_eq!(CycleBand::Below1E3.cycles(), 999.0);
        assert_eq!(CycleBand::Below1E4.cycles(), 9_999.0);
        assert_eq!(RevolutionBand::Below1E10.revolutions(), 9_999_999_999.0);
        assert_eq!(CycleBand::from_str_flexible("< 1E5").unwrap(), CycleBand::Below1E5);
        assert_eq!(RevolutionBand::from_str_flexible("<1e8").unwrap(), RevolutionBand::Below1E8);
        assert!(CycleBand::from_str_flexible("< 1E9").is_err());
        assert!(RevolutionBand::from_str_flexible("lots").is_err());
    }

    #[test]
    fn test_to_input_mapping() {
        let form = SplineForm::demo();
        let input = form.to_input();
        assert!((input.contact_height_m - 0.0025).abs() < 1e-12);
        assert_eq!(input.face_width_m, input.effective_face_width_m);
        assert!((input.pressure_angle_rad - std::f64::consts::PI / 6.0).abs() < 1e-12);
        assert_eq!(input.hub_major_diameter_m, 0.0425);
        assert_eq!(input.torque_cycles, 9_999.0);
        assert_eq!(input.hardness, Hardness::rockwell_c(60.0));
        assert_eq!(input.supply_shock, SupplyShock::MediumShock);
        assert_eq!(input.lewis_form_factor, DEFAULT_LEWIS_FORM_FACTOR);
    }

    #[test]
    fn test_demo_runs() {
        let result = calculate(&SplineForm::demo().to_input()).unwrap();
        assert_eq!(result.application_factor, 2.0);
        assert_eq!(result.life_factor, 1.0);
        assert_eq!(result.wear_life_factor, Some(0.5));
        assert!(result.shaft_safety_factor > 1.0);
    }

    #[test]
    fn test_form_defaults_from_json() {
        let json = r#"{
            "outside_diameter_m": 0.065,
            "pitch_diameter_m": 0.04,
            "root_diameter_m": 0.0375,
            "hub_tooth_inner_diameter_m": 0.0375,
            "shaft_tooth_outer_diameter_m": 0.0425,
            "relative_misalignment": 0.001,
            "contact_length_m": 0.03,
            "chordal_thickness_m": 0.00242,
            "tooth_count": 26,
            "pressure_angle_deg": 30.0,
            "wall_thickness_m": 0.01,
            "torque_nm": 500.0,
            "speed_rpm": 3000.0
        }"#;
        let form: SplineForm = serde_json::from_str(json).unwrap();
        assert_eq!(form.hardness, HardnessClass::RockwellC58To63);
        assert_eq!(form.supply_shock, SupplyShock::MediumShock);
        assert_eq!(form.load_shock, LoadShock::Uniform);
        assert_eq!(form.torque_cycles, CycleBand::Below1E4);
        assert_eq!(form.revolutions, RevolutionBand::Below1E10);
        assert!(form.flexible);
        assert_eq!(form.to_input(), SplineForm::demo().to_input().with_label(""));
    }
}
