//! # Spline Materials
//!
//! Surface hardness and tooth-end description of the spline material. These
//! two properties select the allowable stresses in [`allowable`].
//!
//! ## Hardness Scales
//!
//! - **Brinell (HB)**: through-hardened steels, 160-351 HB
//! - **Rockwell C (HRC)**: through-, surface- and case-hardened steels, 33-63 HRC
//!
//! ## Example
//!
//! ```rust
//! use spline_core::materials::{Hardness, HardnessScale, ToothEnd};
//! use spline_core::materials::allowable::allowable_compressive_stress;
//!
//! let hardness = Hardness::rockwell_c(60.0);
//! let sc = allowable_compressive_stress(hardness, ToothEnd::Crowned).unwrap();
//! assert!((sc / 1.0e8 - 1.378953).abs() < 1e-3);
//!
//! assert_eq!(HardnessScale::from_str_flexible("hrc").unwrap(), HardnessScale::RockwellC);
//! ```

pub mod allowable;

pub use allowable::{allowable_bursting_stress, allowable_compressive_stress, allowable_shear_stress};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Hardness measurement scale
///
/// Deserializes through [`HardnessScale::from_str_flexible`], so JSON accepts
/// the same spellings as the text parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String")]
pub enum HardnessScale {
    /// Brinell hardness number (HB)
    #[default]
    Brinell,
    /// Rockwell C (HRC)
    RockwellC,
}

impl HardnessScale {
    /// All scales for selection lists
    pub const ALL: [HardnessScale; 2] = [HardnessScale::Brinell, HardnessScale::RockwellC];

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().replace([' ', '_', '-'], "").as_str() {
            "BRINELL" | "HB" | "HBW" => Ok(HardnessScale::Brinell),
            "ROCKWELLC" | "HRC" => Ok(HardnessScale::RockwellC),
            _ => Err(CalcError::unrecognized_hardness_type(s)),
        }
    }

    /// Unit suffix (HB, HRC)
    pub fn unit(&self) -> &'static str {
        match self {
            HardnessScale::Brinell => "HB",
            HardnessScale::RockwellC => "HRC",
        }
    }

    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            HardnessScale::Brinell => "Brinell",
            HardnessScale::RockwellC => "Rockwell C",
        }
    }
}

impl std::fmt::Display for HardnessScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for HardnessScale {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_flexible(s)
    }
}

impl TryFrom<String> for HardnessScale {
    type Error = CalcError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_str_flexible(&s)
    }
}

/// Measured surface hardness of the spline material.
///
/// ## JSON Example
///
/// ```json
/// { "value": 60.0, "scale": "RockwellC" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hardness {
    /// Hardness number on `scale`
    pub value: f64,

    /// Measurement scale (default: Brinell)
    #[serde(default)]
    pub scale: HardnessScale,
}

impl Hardness {
    /// Create a hardness value on the given scale
    pub fn new(value: f64, scale: HardnessScale) -> Self {
        Hardness { value, scale }
    }

    /// Brinell hardness
    pub fn brinell(value: f64) -> Self {
        Hardness::new(value, HardnessScale::Brinell)
    }

    /// Rockwell C hardness
    pub fn rockwell_c(value: f64) -> Self {
        Hardness::new(value, HardnessScale::RockwellC)
    }
}

impl std::fmt::Display for Hardness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.scale.unit())
    }
}

/// Tooth end design
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String")]
pub enum ToothEnd {
    /// Straight (uncrowned) teeth
    #[default]
    Straight,
    /// Crowned teeth, tolerant of misalignment
    Crowned,
}

impl ToothEnd {
    /// All tooth end designs for selection lists
    pub const ALL: [ToothEnd; 2] = [ToothEnd::Straight, ToothEnd::Crowned];

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().as_str() {
            "STRAIGHT" => Ok(ToothEnd::Straight),
            "CROWNED" => Ok(ToothEnd::Crowned),
            _ => Err(CalcError::unrecognized_tooth_end(s)),
        }
    }

    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            ToothEnd::Straight => "Straight",
            ToothEnd::Crowned => "Crowned",
        }
    }
}

impl std::fmt::Display for ToothEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for ToothEnd {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_flexible(s)
    }
}

impl TryFrom<String> for ToothEnd {
    type Error = CalcError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_str_flexible(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hardness_scale_parsing() {
        assert_eq!(HardnessScale::from_str_flexible("Brinell").unwrap(), HardnessScale::Brinell);
        assert_eq!(HardnessScale::from_str_flexible("Rockwell C").unwrap(), HardnessScale::RockwellC);
        assert_eq!(HardnessScale::from_str_flexible("rockwell_c").unwrap(), HardnessScale::RockwellC);
        assert_eq!("HRC".parse::<HardnessScale>().unwrap(), HardnessScale::RockwellC);
    }

    #[test]
    fn test_unrecognized_hardness_type() {
        let err = HardnessScale::from_str_flexible("Vickers").unwrap_err();
        assert_eq!(err, CalcError::unrecognized_hardness_type("Vickers"));
    }

    #[test]
    fn test_tooth_end_parsing() {
        assert_eq!(ToothEnd::from_str_flexible("crowned").unwrap(), ToothEnd::Crowned);
        let err = "Tapered".parse::<ToothEnd>().unwrap_err();
        assert_eq!(err.error_code(), "UNRECOGNIZED_TOOTH_END_PROFILE");
    }

    #[test]
    fn test_hardness_serialization() {
        let hardness = Hardness::rockwell_c(58.0);
        let json = serde_json::to_string(&hardness).unwrap();
        assert!(json.contains("RockwellC"));
        let roundtrip: Hardness = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, hardness);

        // Scale defaults to Brinell; text spellings are case-insensitive
        let parsed: Hardness = serde_json::from_str(r#"{ "value": 180.0 }"#).unwrap();
        assert_eq!(parsed.scale, HardnessScale::Brinell);
        for scale in ["Rockwell C", "hrc", "rockwellc"] {
            let json = format!(r#"{{ "value": 44.0, "scale": "{scale}" }}"#);
            let parsed: Hardness = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed.scale, HardnessScale::RockwellC);
        }
        let parsed: ToothEnd = serde_json::from_str(r#""CROWNED""#).unwrap();
        assert_eq!(parsed, ToothEnd::Crowned);
    }

    #[test]
    fn test_unknown_json_spellings_rejected() {
        assert!(serde_json::from_str::<Hardness>(r#"{ "value": 500.0, "scale": "Vickers" }"#).is_err());
        assert!(serde_json::from_str::<ToothEnd>(r#""Tapered""#).is_err());
    }
}
