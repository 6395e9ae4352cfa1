//! # Spline Coupling Calculation (Dudley Method)
//!
//! Checks a splined shaft-hub coupling against four failure modes and
//! reports a safety factor for each:
//!
//! 1. Shaft shear at the spline root
//! 2. Tooth shear at the pitch line
//! 3. Tooth flank compression (wear for flexible splines)
//! 4. Hub bursting (radial + centrifugal + tensile)
//!
//! ## Assumptions
//!
//! - Steel spline, hardness within the published Dudley tables
//! - Torque is steady apart from the shock captured by K_a
//! - A bore diameter of exactly 0.0 means a solid shaft
//!
//! ## Example
//!
//! ```rust
//! use spline_core::calculations::spline::{calculate, SplineInput};
//! use spline_core::dudley_factors::{LoadShock, RotationDirection, SupplyShock};
//! use spline_core::materials::{Hardness, ToothEnd};
//!
//! let input = SplineInput {
//!     label: "Input shaft".to_string(),
//!     torque_nm: 500.0,
//!     root_diameter_m: 0.0375,
//!     bore_diameter_m: 0.0,
//!     pitch_diameter_m: 0.04,
//!     tooth_count: 26,
//!     effective_face_width_m: 0.03,
//!     face_width_m: 0.03,
//!     chordal_thickness_m: 0.00242,
//!     contact_height_m: 0.0025,
//!     relative_misalignment: 0.001,
//!     pressure_angle_rad: 30.0_f64.to_radians(),
//!     wall_thickness_m: 0.01,
//!     hub_outside_diameter_m: 0.065,
//!     hub_major_diameter_m: 0.0425,
//!     speed_rpm: 3000.0,
//!     supply_shock: SupplyShock::MediumShock,
//!     load_shock: LoadShock::Uniform,
//!     hardness: Hardness::rockwell_c(60.0),
//!     torque_cycles: 9_999.0,
//!     total_revolutions: 1.0e8,
//!     rotation: RotationDirection::Unidirectional,
//!     tooth_end: ToothEnd::Straight,
//!     flexible: true,
//!     lewis_form_factor: 1.5,
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("Shaft safety factor: {:.2}", result.shaft_safety_factor);
//! println!("Governing: {}", result.governing_check());
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::dudley_factors::{
    application_factor, life_factor, load_distribution_factor, wear_life_factor, LoadShock,
    RotationDirection, SupplyShock,
};
use crate::equations;
use crate::errors::{CalcError, CalcResult};
use crate::materials::{
    allowable_bursting_stress, allowable_compressive_stress, allowable_shear_stress, Hardness, ToothEnd,
};

/// Customary Lewis form factor when tooth geometry is not analysed
pub const DEFAULT_LEWIS_FORM_FACTOR: f64 = 1.5;

fn default_bore_diameter() -> f64 {
    0.0
}

fn default_flexible() -> bool {
    true
}

fn default_lewis_form_factor() -> f64 {
    DEFAULT_LEWIS_FORM_FACTOR
}

/// Input parameters for a spline coupling.
///
/// All lengths in metres, torque in N·m, speed in rev/min, angles in radians.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Input shaft",
///   "torque_nm": 500.0,
///   "root_diameter_m": 0.0375,
///   "pitch_diameter_m": 0.04,
///   "tooth_count": 26,
///   "effective_face_width_m": 0.03,
///   "face_width_m": 0.03,
///   "chordal_thickness_m": 0.00242,
///   "contact_height_m": 0.0025,
///   "relative_misalignment": 0.001,
///   "pressure_angle_rad": 0.5236,
///   "wall_thickness_m": 0.01,
///   "hub_outside_diameter_m": 0.065,
///   "hub_major_diameter_m": 0.0425,
///   "speed_rpm": 3000.0,
///   "supply_shock": "MediumShock",
///   "load_shock": "Uniform",
///   "hardness": { "value": 60.0, "scale": "RockwellC" },
///   "torque_cycles": 9999.0,
///   "total_revolutions": 1.0e8
/// }
/// ```
///
/// Omitted optional fields take their documented defaults: solid shaft,
/// unidirectional torque, straight teeth, flexible spline, Y = 1.5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplineInput {
    /// User label for this coupling (e.g., "Input shaft", "PTO spline")
    #[serde(default)]
    pub label: String,

    /// Transmitted torque T (N·m)
    pub torque_nm: f64,

    /// Root diameter of the shaft spline D_re (m)
    pub root_diameter_m: f64,

    /// Bore diameter of a hollow shaft D_h (m). Default 0.0 = solid shaft.
    #[serde(default = "default_bore_diameter")]
    pub bore_diameter_m: f64,

    /// Pitch diameter D (m)
    pub pitch_diameter_m: f64,

    /// Number of teeth z
    pub tooth_count: u32,

    /// Effective face width F_e (m)
    pub effective_face_width_m: f64,

    /// Full face width F (m)
    pub face_width_m: f64,

    /// Chordal tooth thickness at the pitch line t_c (m)
    pub chordal_thickness_m: f64,

    /// Radial height of tooth contact H (m)
    pub contact_height_m: f64,

    /// Shaft-to-hub misalignment divided by diameter
    pub relative_misalignment: f64,

    /// Pressure angle φ (rad)
    pub pressure_angle_rad: f64,

    /// Hub wall thickness t_w (m)
    pub wall_thickness_m: f64,

    /// Outside diameter of the internally toothed part D_oi (m)
    pub hub_outside_diameter_m: f64,

    /// Major diameter of the internally toothed part D_ri (m)
    pub hub_major_diameter_m: f64,

    /// Shaft speed n (rev/min)
    pub speed_rpm: f64,

    /// Shock class of the power source
    pub supply_shock: SupplyShock,

    /// Shock class of the driven load
    pub load_shock: LoadShock,

    /// Surface hardness of the spline material
    pub hardness: Hardness,

    /// Start/stop torque cycles over the life of the spline
    pub torque_cycles: f64,

    /// Total revolutions over the life of the spline
    pub total_revolutions: f64,

    /// Torque direction (default: unidirectional)
    #[serde(default)]
    pub rotation: RotationDirection,

    /// Tooth end design (default: straight)
    #[serde(default)]
    pub tooth_end: ToothEnd,

    /// Flexible (crowned/floating) spline rather than rigid (default: true)
    #[serde(default = "default_flexible")]
    pub flexible: bool,

    /// Lewis form factor Y (default: 1.5)
    #[serde(default = "default_lewis_form_factor")]
    pub lewis_form_factor: f64,
}

impl SplineInput {
    /// Validate input parameters.
    ///
    /// Table-bracket checks (hardness, revolutions) happen during the lookup
    /// itself; this catches values no formula can take.
    pub fn validate(&self) -> CalcResult<()> {
        let positive = [
            ("root_diameter_m", self.root_diameter_m),
            ("pitch_diameter_m", self.pitch_diameter_m),
            ("effective_face_width_m", self.effective_face_width_m),
            ("face_width_m", self.face_width_m),
            ("chordal_thickness_m", self.chordal_thickness_m),
            ("contact_height_m", self.contact_height_m),
            ("wall_thickness_m", self.wall_thickness_m),
            ("lewis_form_factor", self.lewis_form_factor),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Must be a finite, positive number",
                ));
            }
        }

        let non_negative = [
            ("torque_nm", self.torque_nm),
            ("bore_diameter_m", self.bore_diameter_m),
            ("hub_outside_diameter_m", self.hub_outside_diameter_m),
            ("hub_major_diameter_m", self.hub_major_diameter_m),
            ("speed_rpm", self.speed_rpm),
            ("torque_cycles", self.torque_cycles),
            ("total_revolutions", self.total_revolutions),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Must be a finite, non-negative number",
                ));
            }
        }

        // Sign is not constrained for these two
        for (field, value) in [
            ("relative_misalignment", self.relative_misalignment),
            ("pressure_angle_rad", self.pressure_angle_rad),
        ] {
            if !value.is_finite() {
                return Err(CalcError::invalid_input(field, value.to_string(), "Must be a finite number"));
            }
        }

        if self.tooth_count == 0 {
            return Err(CalcError::invalid_input("tooth_count", "0", "Spline must have at least one tooth"));
        }
        if self.bore_diameter_m >= self.root_diameter_m {
            return Err(CalcError::invalid_input(
                "bore_diameter_m",
                self.bore_diameter_m.to_string(),
                "Bore must be smaller than the root diameter",
            ));
        }
        Ok(())
    }

    /// Set the case label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the tooth end design
    pub fn with_tooth_end(mut self, tooth_end: ToothEnd) -> Self {
        self.tooth_end = tooth_end;
        self
    }

    /// Treat the spline as rigid (fixed) instead of flexible
    pub fn rigid(mut self) -> Self {
        self.flexible = false;
        self
    }

    /// True when the shaft is hollow (bore diameter not exactly 0.0)
    pub fn is_hollow(&self) -> bool {
        self.bore_diameter_m != 0.0
    }
}

/// The four Dudley strength checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SafetyCheck {
    /// Shaft torsional shear
    ShaftShear,
    /// Tooth shear at the pitch line
    TeethShear,
    /// Tooth flank compression
    Compressive,
    /// Hub bursting
    Bursting,
}

impl SafetyCheck {
    /// All checks in report order
    pub const ALL: [SafetyCheck; 4] = [
        SafetyCheck::ShaftShear,
        SafetyCheck::TeethShear,
        SafetyCheck::Compressive,
        SafetyCheck::Bursting,
    ];

    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            SafetyCheck::ShaftShear => "Shaft Shear",
            SafetyCheck::TeethShear => "Teeth Shear",
            SafetyCheck::Compressive => "Compressive",
            SafetyCheck::Bursting => "Bursting",
        }
    }
}

impl std::fmt::Display for SafetyCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Results from the Dudley calculation. All stresses in Pa.
///
/// ## JSON Example (abridged)
///
/// ```json
/// {
///   "shaft_stress_pa": 48288788.7,
///   "application_factor": 2.0,
///   "life_factor": 1.0,
///   "shaft_safety_factor": 3.57,
///   "wear_life_factor": 1.0,
///   "compressive_safety_factor": 0.90,
///   "bursting_safety_factor": 3.54
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplineResult {
    /// Nominal shaft shear stress S_s
    pub shaft_stress_pa: f64,
    /// Application factor K_a
    pub application_factor: f64,
    /// Fatigue life factor L_f
    pub life_factor: f64,
    /// Allowable shear stress S'_s,max (shared by shaft and teeth)
    pub allowable_shear_stress_pa: f64,
    /// Shaft shear stress adjusted for application and life, S_s·K_a/L_f
    pub max_shaft_stress_pa: f64,
    /// Shaft shear safety factor
    pub shaft_safety_factor: f64,

    /// Load distribution factor K_m
    pub load_distribution_factor: f64,
    /// Nominal tooth shear stress
    pub teeth_shear_stress_pa: f64,
    /// Tooth shear stress adjusted for application and life
    pub max_teeth_shear_stress_pa: f64,
    /// Tooth shear safety factor
    pub teeth_safety_factor: f64,

    /// Nominal compressive stress S_c
    pub compressive_stress_pa: f64,
    /// Allowable compressive stress S'_c
    pub allowable_compressive_stress_pa: f64,
    /// Wear life factor L_w (flexible splines only)
    pub wear_life_factor: Option<f64>,
    /// Compressive stress adjusted for application and wear/fatigue life
    pub factored_compressive_stress_pa: f64,
    /// Compressive safety factor
    pub compressive_safety_factor: f64,

    /// Bursting stress from the radial load, S1
    pub bursting_radial_stress_pa: f64,
    /// Centrifugal bursting stress, S2
    pub bursting_centrifugal_stress_pa: f64,
    /// Tensile bursting stress, S3
    pub bursting_tensile_stress_pa: f64,
    /// Total bursting stress S_t
    pub total_bursting_stress_pa: f64,
    /// Allowable bursting stress S'_t,max
    pub allowable_bursting_stress_pa: f64,
    /// Bursting safety factor
    pub bursting_safety_factor: f64,
}

impl SplineResult {
    /// Safety factor of one check
    pub fn safety_factor(&self, check: SafetyCheck) -> f64 {
        match check {
            SafetyCheck::ShaftShear => self.shaft_safety_factor,
            SafetyCheck::TeethShear => self.teeth_safety_factor,
            SafetyCheck::Compressive => self.compressive_safety_factor,
            SafetyCheck::Bursting => self.bursting_safety_factor,
        }
    }

    /// The check with the smallest safety factor
    pub fn governing_check(&self) -> SafetyCheck {
        SafetyCheck::ALL
            .into_iter()
            .min_by(|a, b| self.safety_factor(*a).total_cmp(&self.safety_factor(*b)))
            .unwrap_or(SafetyCheck::ShaftShear)
    }

    /// Smallest of the four safety factors
    pub fn min_safety_factor(&self) -> f64 {
        self.safety_factor(self.governing_check())
    }

    /// Check if every safety factor is at least 1.0
    pub fn passes(&self) -> bool {
        SafetyCheck::ALL.iter().all(|check| self.safety_factor(*check) >= 1.0)
    }
}

/// Run the Dudley calculation.
///
/// # Arguments
///
/// * `input` - Spline coupling parameters
///
/// # Returns
///
/// * `Ok(SplineResult)` - Every intermediate stress, factor and safety factor
/// * `Err(CalcError)` - The first invalid input or table miss; no partial result
pub fn calculate(input: &SplineInput) -> CalcResult<SplineResult> {
    input.validate()?;

    let t = input.torque_nm;
    let z = f64::from(input.tooth_count);

    // Shaft shear
    let shaft_stress_pa = equations::shaft_stress(t, input.root_diameter_m, input.bore_diameter_m);
    let k_a = application_factor(input.supply_shock, input.load_shock);
    let l_f = life_factor(input.torque_cycles, input.rotation)?;
    let allowable_shear_stress_pa = allowable_shear_stress(input.hardness)?;
    let max_shaft_stress_pa = equations::max_stress(shaft_stress_pa, k_a, l_f);
    let shaft_safety_factor = equations::safety_factor(max_shaft_stress_pa, allowable_shear_stress_pa);
    debug!(
        label = %input.label,
        hollow = input.is_hollow(),
        k_a,
        l_f,
        shaft_safety_factor,
        "shaft shear check"
    );

    // Teeth shear
    let k_m = load_distribution_factor(input.relative_misalignment, input.effective_face_width_m)?;
    let teeth_shear_stress_pa = equations::teeth_shear_stress(
        t,
        k_m,
        input.pitch_diameter_m,
        z,
        input.effective_face_width_m,
        input.chordal_thickness_m,
    );
    let max_teeth_shear_stress_pa = equations::max_stress(teeth_shear_stress_pa, k_a, l_f);
    let teeth_safety_factor = equations::safety_factor(max_teeth_shear_stress_pa, allowable_shear_stress_pa);
    debug!(label = %input.label, k_m, teeth_safety_factor, "teeth shear check");

    // Compressive
    let compressive_stress_pa = equations::compressive_stress(
        t,
        k_m,
        input.pitch_diameter_m,
        z,
        input.effective_face_width_m,
        input.contact_height_m,
    );
    let allowable_compressive_stress_pa = allowable_compressive_stress(input.hardness, input.tooth_end)?;
    let (wear_life_factor, factored_compressive_stress_pa) = if input.flexible {
        let l_w = wear_life_factor(input.total_revolutions)?;
        (
            Some(l_w),
            equations::factored_compressive_stress_flexible(compressive_stress_pa, k_a, l_w),
        )
    } else {
        (
            None,
            equations::factored_compressive_stress_rigid(compressive_stress_pa, k_a, l_f),
        )
    };
    let compressive_safety_factor = allowable_compressive_stress_pa / factored_compressive_stress_pa;
    debug!(
        label = %input.label,
        flexible = input.flexible,
        l_w = ?wear_life_factor,
        compressive_safety_factor,
        "compressive check"
    );

    // Bursting
    let bursting_radial_stress_pa = equations::bursting_radial_stress(
        t,
        input.pressure_angle_rad,
        input.pitch_diameter_m,
        input.wall_thickness_m,
        input.face_width_m,
    );
    let bursting_centrifugal_stress_pa = equations::bursting_centrifugal_stress(
        input.speed_rpm,
        input.hub_outside_diameter_m,
        input.hub_major_diameter_m,
    );
    let bursting_tensile_stress_pa = equations::bursting_tensile_stress(
        t,
        input.pitch_diameter_m,
        input.effective_face_width_m,
        input.lewis_form_factor,
    );
    let total_bursting_stress_pa = equations::total_bursting_stress(
        k_a,
        k_m,
        bursting_radial_stress_pa,
        bursting_centrifugal_stress_pa,
        bursting_tensile_stress_pa,
    );
    let allowable_bursting_stress_pa = allowable_bursting_stress(input.hardness)?;
    let bursting_safety_factor =
        equations::bursting_safety_factor(total_bursting_stress_pa, allowable_bursting_stress_pa, l_f);
    debug!(label = %input.label, bursting_safety_factor, "bursting check");

    let result = SplineResult {
        shaft_stress_pa,
        application_factor: k_a,
        life_factor: l_f,
        allowable_shear_stress_pa,
        max_shaft_stress_pa,
        shaft_safety_factor,
        load_distribution_factor: k_m,
        teeth_shear_stress_pa,
        max_teeth_shear_stress_pa,
        teeth_safety_factor,
        compressive_stress_pa,
        allowable_compressive_stress_pa,
        wear_life_factor,
        factored_compressive_stress_pa,
        compressive_safety_factor,
        bursting_radial_stress_pa,
        bursting_centrifugal_stress_pa,
        bursting_tensile_stress_pa,
        total_bursting_stress_pa,
        allowable_bursting_stress_pa,
        bursting_safety_factor,
    };

    if !result.passes() {
        warn!(
            label = %input.label,
            governing = %result.governing_check(),
            min_safety_factor = result.min_safety_factor(),
            "spline safety factor below 1.0"
        );
    }

    Ok(result)
}
