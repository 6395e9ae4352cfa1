//! # Table Lookups
//!
//! The Dudley method is driven by short published tables. Rather than nesting
//! conditionals, each table is stored as an ordered list of
//! `(exclusive upper bound, value)` steps and searched for the first bound
//! the input is strictly below. A value sitting exactly on a breakpoint
//! therefore lands in the *next* step.
//!
//! Anything the table does not cover (below its published minimum, at or
//! above its last bound, NaN) is an [`CalcError::InputOutOfRange`] rather
//! than a silent fallback.
//!
//! ## Example
//!
//! ```rust
//! use spline_core::lookup::StepTable;
//!
//! const WEAR: StepTable<f64> = StepTable::new("n_total", None, &[(1e4, 4.0), (1e5, 2.8)]);
//!
//! assert_eq!(WEAR.lookup(5e3).unwrap(), 4.0);
//! assert_eq!(WEAR.lookup(1e4).unwrap(), 2.8);
//! assert!(WEAR.lookup(1e5).is_err());
//! ```

use crate::errors::{CalcError, CalcResult};

/// Ordered step function over a scalar input.
#[derive(Debug, Clone, Copy)]
pub struct StepTable<T: 'static> {
    /// Input name used in error messages
    pub field: &'static str,
    /// Inclusive lower limit of the published table, if it has one
    pub lower_bound: Option<f64>,
    /// `(exclusive upper bound, value)` pairs, bounds ascending
    pub steps: &'static [(f64, T)],
}

impl<T: Copy> StepTable<T> {
    /// Create a table. Bounds must be ascending.
    pub const fn new(field: &'static str, lower_bound: Option<f64>, steps: &'static [(f64, T)]) -> Self {
        StepTable {
            field,
            lower_bound,
            steps,
        }
    }

    /// Exclusive upper limit of the table (the last bound)
    pub fn upper_bound(&self) -> f64 {
        self.steps.last().map(|(bound, _)| *bound).unwrap_or(f64::NEG_INFINITY)
    }

    /// Look up the step containing `x`.
    pub fn lookup(&self, x: f64) -> CalcResult<T> {
        if x.is_nan() {
            return Err(CalcError::out_of_range(self.field, x.to_string(), "Value is not a number"));
        }
        if let Some(lower) = self.lower_bound {
            if x < lower {
                return Err(CalcError::out_of_range(
                    self.field,
                    x.to_string(),
                    format!("Below the lowest tabulated value ({})", lower),
                ));
            }
        }
        self.steps
            .iter()
            .find(|(bound, _)| x < *bound)
            .map(|(_, value)| *value)
            .ok_or_else(|| {
                CalcError::out_of_range(
                    self.field,
                    x.to_string(),
                    format!("At or above the highest tabulated bound ({})", self.upper_bound()),
                )
            })
    }
}

/// Bracket index of `value` against ascending `breakpoints`.
///
/// Counts the breakpoints at or below `value`, clamped to the last index, so
/// anything above the top breakpoint maps onto the last row/column.
pub fn bracket_index(value: f64, breakpoints: &[f64]) -> usize {
    let count = breakpoints.iter().take_while(|bp| value >= **bp).count();
    count.min(breakpoints.len().saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: StepTable<f64> = StepTable::new("x", Some(1.0), &[(10.0, 1.5), (20.0, 2.5)]);

    #[test]
    fn test_step_boundaries() {
        assert_eq!(TABLE.lookup(1.0).unwrap(), 1.5);
        assert_eq!(TABLE.lookup(9.999).unwrap(), 1.5);
        // Exactly on a breakpoint moves to the next step
        assert_eq!(TABLE.lookup(10.0).unwrap(), 2.5);
    }

    #[test]
    fn test_out_of_range() {
        let err = TABLE.lookup(20.0).unwrap_err();
        assert_eq!(err.error_code(), "INPUT_OUT_OF_RANGE");
        assert!(TABLE.lookup(0.5).is_err());
        assert!(TABLE.lookup(f64::NAN).is_err());
    }

    #[test]
    fn test_unbounded_last_step() {
        const OPEN: StepTable<u8> = StepTable::new("n", None, &[(1.0, 0), (f64::INFINITY, 1)]);
        assert_eq!(OPEN.lookup(-5.0).unwrap(), 0);
        assert_eq!(OPEN.lookup(1e300).unwrap(), 1);
    }

    #[test]
    fn test_bracket_index() {
        let bps = [0.001, 0.002, 0.004, 0.008];
        assert_eq!(bracket_index(0.0005, &bps), 0);
        assert_eq!(bracket_index(0.001, &bps), 1);
        assert_eq!(bracket_index(0.003, &bps), 2);
        assert_eq!(bracket_index(0.006, &bps), 3);
        assert_eq!(bracket_index(0.008, &bps), 3);
        assert_eq!(bracket_index(1.0, &bps), 3);
    }
}
