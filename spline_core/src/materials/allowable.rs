//! Allowable spline stresses by surface hardness.
//!
//! Values are the published Dudley tables in psi, converted to pascals on
//! lookup. Each table starts at the lowest published hardness (160 HB,
//! 33 HRC) and ends at an exclusive upper bound (351 HB, 63 HRC); anything
//! outside is `InputOutOfRange`.
//!
//! | Material               | Brinell | Rockwell C | Shear  | Compressive (straight / crowned) | Tensile |
//! |------------------------|---------|------------|--------|----------------------------------|---------|
//! | Steel                  | 160-200 |            | 20 000 | 1 500 / 6 000                    | 22 000  |
//! | Steel                  | 230-260 |            | 30 000 | 2 000 / 8 000                    | 32 000  |
//! | Steel                  | 302-351 | 33-38      | 40 000 | 3 000 / 12 000                   | 45 000  |
//! | Thru-hardened steel    |         | 42-46      | 45 000 |                                  | 45 000  |
//! | Surface-hardened steel |         | 48-53      | 40 000 | 4 000 / 16 000                   | 50 000  |
//! | Case-hardened steel    |         | 58-63      | 50 000 | 5 000 / 20 000                   | 55 000  |
//!
//! Gaps between published ranges take the next range up: 201-229 HB reads the
//! 230-260 row and 46-48 HRC reads the 48-53 row. Without that, 42-46 HRC
//! would have no compressive value at all.

use crate::errors::CalcResult;
use crate::lookup::StepTable;
use crate::materials::{Hardness, HardnessScale, ToothEnd};
use crate::units::{Pascals, Psi};

/// Lowest published Brinell hardness
pub const BRINELL_MIN: f64 = 160.0;

/// Lowest published Rockwell C hardness
pub const ROCKWELL_C_MIN: f64 = 33.0;

const SHEAR_BRINELL_PSI: StepTable<f64> = StepTable::new(
    "hardness_hb",
    Some(BRINELL_MIN),
    &[(200.0, 20_000.0), (260.0, 30_000.0), (351.0, 40_000.0)],
);

const SHEAR_ROCKWELL_C_PSI: StepTable<f64> = StepTable::new(
    "hardness_hrc",
    Some(ROCKWELL_C_MIN),
    &[(38.0, 40_000.0), (46.0, 45_000.0), (53.0, 40_000.0), (63.0, 50_000.0)],
);

/// (straight, crowned)
const COMPRESSIVE_BRINELL_PSI: StepTable<(f64, f64)> = StepTable::new(
    "hardness_hb",
    Some(BRINELL_MIN),
    &[
        (200.0, (1_500.0, 6_000.0)),
        (260.0, (2_000.0, 8_000.0)),
        (351.0, (3_000.0, 12_000.0)),
    ],
);

/// (straight, crowned)
const COMPRESSIVE_ROCKWELL_C_PSI: StepTable<(f64, f64)> = StepTable::new(
    "hardness_hrc",
    Some(ROCKWELL_C_MIN),
    &[
        (38.0, (3_000.0, 12_000.0)),
        (53.0, (4_000.0, 16_000.0)),
        (63.0, (5_000.0, 20_000.0)),
    ],
);

const BURSTING_BRINELL_PSI: StepTable<f64> = StepTable::new(
    "hardness_hb",
    Some(BRINELL_MIN),
    &[(200.0, 22_000.0), (260.0, 32_000.0), (351.0, 45_000.0)],
);

const BURSTING_ROCKWELL_C_PSI: StepTable<f64> = StepTable::new(
    "hardness_hrc",
    Some(ROCKWELL_C_MIN),
    &[(46.0, 45_000.0), (53.0, 50_000.0), (63.0, 55_000.0)],
);

/// Maximum allowable shear stress S'_s,max in Pa.
pub fn allowable_shear_stress(hardness: Hardness) -> CalcResult<f64> {
    let psi = match hardness.scale {
        HardnessScale::Brinell => SHEAR_BRINELL_PSI.lookup(hardness.value)?,
        HardnessScale::RockwellC => SHEAR_ROCKWELL_C_PSI.lookup(hardness.value)?,
    };
    Ok(Pascals::from(Psi(psi)).0)
}

/// Allowable compressive stress S'_c in Pa.
pub fn allowable_compressive_stress(hardness: Hardness, tooth_end: ToothEnd) -> CalcResult<f64> {
    let (straight, crowned) = match hardness.scale {
        HardnessScale::Brinell => COMPRESSIVE_BRINELL_PSI.lookup(hardness.value)?,
        HardnessScale::RockwellC => COMPRESSIVE_ROCKWELL_C_PSI.lookup(hardness.value)?,
    };
    let psi = match tooth_end {
        ToothEnd::Straight => straight,
        ToothEnd::Crowned => crowned,
    };
    Ok(Pascals::from(Psi(psi)).0)
}

/// Maximum allowable tensile (bursting) stress S'_t,max in Pa.
pub fn allowable_bursting_stress(hardness: Hardness) -> CalcResult<f64> {
    let psi = match hardness.scale {
        HardnessScale::Brinell => BURSTING_BRINELL_PSI.lookup(hardness.value)?,
        HardnessScale::RockwellC => BURSTING_ROCKWELL_C_PSI.lookup(hardness.value)?,
    };
    Ok(Pascals::from(Psi(psi)).0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() < tol,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_allowable_shear_stress() {
        let cases = [
            (Hardness::brinell(180.0), 1.37895),
            (Hardness::brinell(245.0), 2.06843),
            (Hardness::brinell(326.0), 2.7579),
            (Hardness::rockwell_c(35.0), 2.757901),
            (Hardness::rockwell_c(44.0), 3.10264),
            (Hardness::rockwell_c(50.0), 2.757901),
            (Hardness::rockwell_c(60.0), 3.44738),
        ];
        for (hardness, expected) in cases {
            assert_close(allowable_shear_stress(hardness).unwrap() / 1.0e8, expected, 1e-4);
        }
    }

    #[test]
    fn test_shear_gap_between_thru_and_surface_hardened() {
        // 46-48 HRC is not published; the 48-53 range applies
        assert_close(
            allowable_shear_stress(Hardness::rockwell_c(47.0)).unwrap(),
            Pascals::from(Psi(40_000.0)).0,
            1e-6,
        );
    }

    #[test]
    fn test_brinell_gap_takes_next_range() {
        // 201-229 HB is not published
        for hb in [200.0, 215.0, 229.9] {
            assert_close(
                allowable_shear_stress(Hardness::brinell(hb)).unwrap(),
                Pascals::from(Psi(30_000.0)).0,
                1e-6,
            );
            assert_close(
                allowable_compressive_stress(Hardness::brinell(hb), ToothEnd::Crowned).unwrap(),
                Pascals::from(Psi(8_000.0)).0,
                1e-6,
            );
        }
        assert_close(
            allowable_bursting_stress(Hardness::brinell(199.9)).unwrap(),
            Pascals::from(Psi(22_000.0)).0,
            1e-6,
        );
    }

    #[test]
    fn test_thru_hardened_compressive_uses_surface_hardened_row() {
        let crowned = allowable_compressive_stress(Hardness::rockwell_c(44.0), ToothEnd::Crowned).unwrap();
        assert_close(crowned, Pascals::from(Psi(16_000.0)).0, 1e-6);
    }

    #[test]
    fn test_allowable_compressive_stress() {
        let straight = allowable_compressive_stress(Hardness::brinell(180.0), ToothEnd::Straight).unwrap();
        assert_close(straight / 1.0e7, 1.0342, 1e-3);
        let crowned = allowable_compressive_stress(Hardness::brinell(180.0), ToothEnd::Crowned).unwrap();
        assert_close(crowned / 1.0e7, 4.1369, 1e-3);
        let straight = allowable_compressive_stress(Hardness::rockwell_c(60.0), ToothEnd::Straight).unwrap();
        assert_close(straight / 1.0e7, 3.4474, 1e-3);
        let crowned = allowable_compressive_stress(Hardness::rockwell_c(60.0), ToothEnd::Crowned).unwrap();
        assert_close(crowned / 1.0e8, 1.378953593947702, 1e-3);
    }

    #[test]
    fn test_allowable_bursting_stress() {
        let cases = [
            (Hardness::brinell(180.0), 1.5168466),
            (Hardness::brinell(240.0), 2.2063223),
            (Hardness::brinell(340.0), 3.1026408),
            (Hardness::rockwell_c(35.0), 3.1026408),
            (Hardness::rockwell_c(45.0), 3.1026408),
            (Hardness::rockwell_c(60.0), 3.7921165),
            (Hardness::rockwell_c(49.0), 3.4473786),
        ];
        for (hardness, expected) in cases {
            assert_close(allowable_bursting_stress(hardness).unwrap() / 1.0e8, expected, 1e-4);
        }
    }

    #[test]
    fn test_top_of_table_is_out_of_range() {
        let err = allowable_shear_stress(Hardness::brinell(351.0)).unwrap_err();
        assert_eq!(err.error_code(), "INPUT_OUT_OF_RANGE");
        assert!(allowable_bursting_stress(Hardness::rockwell_c(63.0)).is_err());
        assert!(allowable_compressive_stress(Hardness::rockwell_c(70.0), ToothEnd::Crowned).is_err());
    }

    #[test]
    fn test_below_table_is_out_of_range() {
        assert!(allowable_shear_stress(Hardness::brinell(120.0)).is_err());
        assert!(allowable_compressive_stress(Hardness::rockwell_c(20.0), ToothEnd::Straight).is_err());
        assert!(allowable_shear_stress(Hardness::brinell(f64::NAN)).is_err());
    }
}
