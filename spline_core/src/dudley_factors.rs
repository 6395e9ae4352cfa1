//! # Dudley Factors
//!
//! Empirical multipliers used by the Dudley spline method.
//!
//! ## Overview
//!
//! Nominal stresses are scaled by these factors before being compared with
//! the hardness-indexed allowable stresses:
//!
//! ```text
//! S'   = S  × K_a / L_f            (shaft and teeth shear)
//! S_c' = S_c × K_a / L_w           (compressive, flexible spline)
//! S_c' = S_c × K_a / (9 L_f)       (compressive, rigid spline)
//! S_t  = K_a × K_m × (S1 + S3) + S2
//! ```
//!
//! ## Factor Summary
//!
//! | Factor | Description              | Indexed by                         |
//! |--------|--------------------------|------------------------------------|
//! | K_a    | Application              | supply shock × load shock          |
//! | L_f    | Fatigue life             | torque cycles, rotation direction  |
//! | L_w    | Wear life (flexible)     | total revolutions                  |
//! | K_m    | Load distribution        | misalignment × effective face width|
//!
//! ## Reference
//!
//! D. W. Dudley, "When Splines Need Stress Control"

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::lookup::{bracket_index, StepTable};

// ============================================================================
// Reference Tables
// ============================================================================

/// Table references for report traceability.
pub mod dudley_ref {
    /// Spline application factor K_a
    pub const K_A: &str = "Dudley: spline application factor";
    /// Fatigue life factor L_f
    pub const L_F: &str = "Dudley: fatigue life factor";
    /// Allowable shear stress by hardness
    pub const SHEAR_ALLOWABLE: &str = "Dudley: allowable shear stress";
    /// Load distribution factor K_m
    pub const K_M: &str = "Dudley: load distribution factor";
    /// Allowable compressive stress by hardness
    pub const COMPRESSIVE_ALLOWABLE: &str = "Dudley: allowable compressive stress";
    /// Wear life factor L_w
    pub const L_W: &str = "Dudley: wear life factor";
    /// Allowable tensile (bursting) stress by hardness
    pub const BURSTING_ALLOWABLE: &str = "Dudley: allowable tensile stress";
    /// Lewis form factor
    pub const LEWIS_Y: &str = "AGMA 908-B89 Eq. 5.78";
}

/// Empirical divisor applied to the life factor for rigid (fixed) splines
pub const RIGID_SPLINE_LIFE_MULTIPLIER: f64 = 9.0;

// ============================================================================
// Application Factor
// ============================================================================

/// Shock level of the power source driving the spline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SupplyShock {
    /// Turbine, electric motor
    #[default]
    Uniform,
    /// Hydraulic motor
    LightShock,
    /// Internal combustion engine
    MediumShock,
}

impl SupplyShock {
    /// All supply shock classes in table order
    pub const ALL: [SupplyShock; 3] = [
        SupplyShock::Uniform,
        SupplyShock::LightShock,
        SupplyShock::MediumShock,
    ];

    /// Row index into the application factor table
    pub fn index(&self) -> usize {
        match self {
            SupplyShock::Uniform => 0,
            SupplyShock::LightShock => 1,
            SupplyShock::MediumShock => 2,
        }
    }

    /// Class from its table index (0..=2)
    pub fn from_index(index: usize) -> CalcResult<Self> {
        Self::ALL.get(index).copied().ok_or_else(|| {
            CalcError::out_of_range("supply_shock", index.to_string(), "Supply shock class must be 0, 1 or 2")
        })
    }

    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            SupplyShock::Uniform => "Uniform (turbine, motor)",
            SupplyShock::LightShock => "Light shock (hydraulic motor)",
            SupplyShock::MediumShock => "Medium shock (internal combustion engine)",
        }
    }
}

impl std::fmt::Display for SupplyShock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Shock level of the driven load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LoadShock {
    /// Generator, fan
    #[default]
    Uniform,
    /// Oscillating pump
    LightShock,
    /// Actuating pump (intermittent shock)
    MediumShock,
    /// Punches, shears
    HeavyShock,
}

impl LoadShock {
    /// All load shock classes in table order
    pub const ALL: [LoadShock; 4] = [
        LoadShock::Uniform,
        LoadShock::LightShock,
        LoadShock::MediumShock,
        LoadShock::HeavyShock,
    ];

    /// Column index into the application factor table
    pub fn index(&self) -> usize {
        match self {
            LoadShock::Uniform => 0,
            LoadShock::LightShock => 1,
            LoadShock::MediumShock => 2,
            LoadShock::HeavyShock => 3,
        }
    }

    /// Class from its table index (0..=3)
    pub fn from_index(index: usize) -> CalcResult<Self> {
        Self::ALL.get(index).copied().ok_or_else(|| {
            CalcError::out_of_range("load_shock", index.to_string(), "Load shock class must be 0, 1, 2 or 3")
        })
    }

    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            LoadShock::Uniform => "Uniform (generator, fan)",
            LoadShock::LightShock => "Light shock (oscillating pump)",
            LoadShock::MediumShock => "Intermittent shock (actuating pump)",
            LoadShock::HeavyShock => "Heavy shock (punches, shears)",
        }
    }
}

impl std::fmt::Display for LoadShock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// K_a by `[supply][load]`
const APPLICATION_FACTOR: [[f64; 4]; 3] = [
    [1.0, 1.2, 1.5, 1.8],
    [1.2, 1.3, 1.8, 2.1],
    [2.0, 2.2, 2.4, 2.8],
];

/// Spline application factor K_a
pub fn application_factor(supply: SupplyShock, load: LoadShock) -> f64 {
    APPLICATION_FACTOR[supply.index()][load.index()]
}

/// Spline application factor K_a from raw class indices.
///
/// Fails with `InputOutOfRange` when either index is outside the table.
pub fn application_factor_by_index(supply: usize, load: usize) -> CalcResult<f64> {
    let supply = SupplyShock::from_index(supply)?;
    let load = LoadShock::from_index(load)?;
    Ok(application_factor(supply, load))
}

// ============================================================================
// Life Factors
// ============================================================================

/// Direction of torque reversal over the life of the spline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RotationDirection {
    /// Torque always applied in one direction
    #[default]
    Unidirectional,
    /// Torque fully reversed every cycle
    FullyReversed,
}

impl RotationDirection {
    /// All variants for selection lists
    pub const ALL: [RotationDirection; 2] = [RotationDirection::Unidirectional, RotationDirection::FullyReversed];

    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            RotationDirection::Unidirectional => "Unidirectional",
            RotationDirection::FullyReversed => "Fully-reversed",
        }
    }
}

impl std::fmt::Display for RotationDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// L_f as (unidirectional, fully reversed) by torque cycles
const LIFE_FACTOR: StepTable<(f64, f64)> = StepTable::new(
    "torque_cycles",
    None,
    &[
        (1.0e3, (1.8, 1.8)),
        (1.0e4, (1.0, 1.0)),
        (1.0e5, (0.5, 0.4)),
        (1.0e6, (0.4, 0.3)),
        (f64::INFINITY, (0.3, 0.2)),
    ],
);

/// Fatigue life factor L_f for a number of start/stop torque cycles.
pub fn life_factor(torque_cycles: f64, rotation: RotationDirection) -> CalcResult<f64> {
    if !torque_cycles.is_finite() || torque_cycles < 0.0 {
        return Err(CalcError::invalid_input(
            "torque_cycles",
            torque_cycles.to_string(),
            "Cycle count must be a finite, non-negative number",
        ));
    }
    let (unidirectional, reversed) = LIFE_FACTOR.lookup(torque_cycles)?;
    Ok(match rotation {
        RotationDirection::Unidirectional => unidirectional,
        RotationDirection::FullyReversed => reversed,
    })
}

/// L_w by total revolutions; nothing is published at or beyond 1e10
const WEAR_LIFE_FACTOR: StepTable<f64> = StepTable::new(
    "total_revolutions",
    None,
    &[
        (1.0e4, 4.0),
        (1.0e5, 2.8),
        (1.0e6, 2.0),
        (1.0e7, 1.4),
        (1.0e8, 1.0),
        (1.0e9, 0.7),
        (1.0e10, 0.5),
    ],
);

/// Wear life factor L_w for flexible splines.
pub fn wear_life_factor(total_revolutions: f64) -> CalcResult<f64> {
    if total_revolutions < 0.0 {
        return Err(CalcError::invalid_input(
            "total_revolutions",
            total_revolutions.to_string(),
            "Revolution count cannot be negative",
        ));
    }
    WEAR_LIFE_FACTOR.lookup(total_revolutions)
}

// ============================================================================
// Load Distribution Factor
// ============================================================================

/// Relative misalignment breakpoints (misalignment / diameter)
pub const MISALIGNMENT_BREAKPOINTS: [f64; 4] = [0.001, 0.002, 0.004, 0.008];

/// Effective face width breakpoints in metres (12.7, 25.4, 50.8, 101 mm)
pub const FACE_WIDTH_BREAKPOINTS_M: [f64; 4] = [12.7e-3, 25.4e-3, 50.8e-3, 101.0e-3];

/// K_m by `[misalignment][face width]`
const LOAD_DISTRIBUTION_FACTOR: [[f64; 4]; 4] = [
    [1.0, 1.0, 1.0, 1.5],
    [1.0, 1.0, 1.5, 2.0],
    [1.0, 1.5, 2.0, 2.5],
    [1.5, 2.0, 2.5, 3.0],
];

/// Load distribution factor K_m.
///
/// Values above the top breakpoint clamp to the last row/column.
pub fn load_distribution_factor(relative_misalignment: f64, face_width_m: f64) -> CalcResult<f64> {
    if relative_misalignment.is_nan() {
        return Err(CalcError::out_of_range(
            "relative_misalignment",
            relative_misalignment.to_string(),
            "Value is not a number",
        ));
    }
    if face_width_m.is_nan() {
        return Err(CalcError::out_of_range(
            "effective_face_width_m",
            face_width_m.to_string(),
            "Value is not a number",
        ));
    }
    let row = bracket_index(relative_misalignment, &MISALIGNMENT_BREAKPOINTS);
    let col = bracket_index(face_width_m, &FACE_WIDTH_BREAKPOINTS_M);
    Ok(LOAD_DISTRIBUTION_FACTOR[row][col])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_factor_table() {
        let expected = [
            [1.0, 1.2, 1.5, 1.8],
            [1.2, 1.3, 1.8, 2.1],
            [2.0, 2.2, 2.4, 2.8],
        ];
        for (i, row) in expected.iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                assert_eq!(application_factor_by_index(i, j).unwrap(), *value);
            }
        }
        assert_eq!(application_factor(SupplyShock::MediumShock, LoadShock::HeavyShock), 2.8);
    }

    #[test]
    fn test_application_factor_out_of_range() {
        let err = application_factor_by_index(3, 0).unwrap_err();
        assert_eq!(err.error_code(), "INPUT_OUT_OF_RANGE");
        assert!(application_factor_by_index(0, 4).is_err());
    }

    #[test]
    fn test_life_factor_boundaries() {
        use RotationDirection::*;
        assert_eq!(life_factor(1.0, Unidirectional).unwrap(), 1.8);
        assert_eq!(life_factor(1.0, FullyReversed).unwrap(), 1.8);
        assert_eq!(life_factor(999.0, Unidirectional).unwrap(), 1.8);
        // On the breakpoint falls into the higher bucket
        assert_eq!(life_factor(1000.0, Unidirectional).unwrap(), 1.0);
        assert_eq!(life_factor(9999.0, FullyReversed).unwrap(), 1.0);
        assert_eq!(life_factor(10_000.0, Unidirectional).unwrap(), 0.5);
        assert_eq!(life_factor(10_001.0, FullyReversed).unwrap(), 0.4);
        assert_eq!(life_factor(99_999.0, Unidirectional).unwrap(), 0.5);
        assert_eq!(life_factor(500_000.0, FullyReversed).unwrap(), 0.3);
        assert_eq!(life_factor(1.0e9, Unidirectional).unwrap(), 0.3);
        assert_eq!(life_factor(1.0e9, FullyReversed).unwrap(), 0.2);
    }

    #[test]
    fn test_life_factor_rejects_negative() {
        assert!(life_factor(-1.0, RotationDirection::Unidirectional).is_err());
        assert!(life_factor(f64::INFINITY, RotationDirection::Unidirectional).is_err());
    }

    #[test]
    fn test_wear_life_factor() {
        let cases = [
            (5.0e3, 4.0),
            (5.0e4, 2.8),
            (5.0e5, 2.0),
            (5.0e6, 1.4),
            (5.0e7, 1.0),
            (5.0e8, 0.7),
            (5.0e9, 0.5),
        ];
        for (revs, expected) in cases {
            assert_eq!(wear_life_factor(revs).unwrap(), expected);
        }
        assert_eq!(wear_life_factor(1.0e4).unwrap(), 2.8);
    }

    #[test]
    fn test_wear_life_factor_beyond_table() {
        let err = wear_life_factor(1.0e10).unwrap_err();
        assert_eq!(err.error_code(), "INPUT_OUT_OF_RANGE");
    }

    #[test]
    fn test_load_distribution_grid() {
        let misalignments = [0.0005, 0.0015, 0.003, 0.006];
        let widths = [0.006, 0.018, 0.03, 0.06];
        let expected = [
            [1.0, 1.0, 1.0, 1.5],
            [1.0, 1.0, 1.5, 2.0],
            [1.0, 1.5, 2.0, 2.5],
            [1.5, 2.0, 2.5, 3.0],
        ];
        for (i, m) in misalignments.iter().enumerate() {
            for (j, w) in widths.iter().enumerate() {
                assert_eq!(
                    load_distribution_factor(*m, *w).unwrap(),
                    expected[i][j],
                    "misalignment {m}, face width {w}"
                );
            }
        }
    }

    #[test]
    fn test_load_distribution_breakpoints() {
        // Breakpoints belong to the row/column they start
        assert_eq!(load_distribution_factor(0.002, 0.0254).unwrap(), 2.0);
        assert_eq!(load_distribution_factor(0.0019, 0.0508).unwrap(), 2.0);
        assert_eq!(load_distribution_factor(0.004, 0.0127).unwrap(), 2.0);
        assert_eq!(load_distribution_factor(0.001, 0.0127).unwrap(), 1.0);
    }

    #[test]
    fn test_load_distribution_clamps() {
        let top = load_distribution_factor(0.008, 0.101).unwrap();
        assert_eq!(top, 3.0);
        assert_eq!(load_distribution_factor(1.0, 1.0).unwrap(), top);
        assert!(load_distribution_factor(f64::NAN, 0.05).is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&SupplyShock::MediumShock).unwrap();
        assert_eq!(json, "\"MediumShock\"");
        let parsed: RotationDirection = serde_json::from_str("\"FullyReversed\"").unwrap();
        assert_eq!(parsed, RotationDirection::FullyReversed);
    }
}
