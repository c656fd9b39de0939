//! Enum-valued report fields.
//!
//! Both enums tolerate values they do not know about. A report written by a
//! newer shrinker must still load, so unrecognised names are kept verbatim
//! in an `Other` variant instead of failing the decode.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Something a keep rule forbids the shrinker from doing to its matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum KeepConstraint {
    DontObfuscate,
    DontOptimize,
    DontShrink,
    Other(String),
}

impl KeepConstraint {
    /// The constraint categories the aggregator tracks.
    pub fn known() -> [KeepConstraint; 3] {
        [Self::DontObfuscate, Self::DontOptimize, Self::DontShrink]
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::DontObfuscate => "DONT_OBFUSCATE",
            Self::DontOptimize => "DONT_OPTIMIZE",
            Self::DontShrink => "DONT_SHRINK",
            Self::Other(name) => name,
        }
    }

    /// Short label used in summaries.
    pub fn short_label(&self) -> &str {
        match self {
            Self::DontObfuscate => "OBF",
            Self::DontOptimize => "OPT",
            Self::DontShrink => "SHR",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for KeepConstraint {
    fn from(name: String) -> Self {
        match name.as_str() {
            "DONT_OBFUSCATE" | "NO_OBFUSCATE" => Self::DontObfuscate,
            "DONT_OPTIMIZE" | "NO_OPTIMIZE" => Self::DontOptimize,
            "DONT_SHRINK" | "NO_SHRINK" => Self::DontShrink,
            _ => Self::Other(name),
        }
    }
}

impl From<KeepConstraint> for String {
    fn from(constraint: KeepConstraint) -> Self {
        match constraint {
            KeepConstraint::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for KeepConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification attached to a keep rule by the producer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum KeepRuleTag {
    /// The rule keeps an entire package.
    PackageWide,
    Other(String),
}

impl From<String> for KeepRuleTag {
    fn from(name: String) -> Self {
        match name.as_str() {
            "PACKAGE_WIDE" => Self::PackageWide,
            _ => Self::Other(name),
        }
    }
}

impl From<KeepRuleTag> for String {
    fn from(tag: KeepRuleTag) -> Self {
        match tag {
            KeepRuleTag::PackageWide => "PACKAGE_WIDE".to_string(),
            KeepRuleTag::Other(name) => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_accepts_both_spellings() {
        let parsed: Vec<KeepConstraint> =
            serde_json::from_str(r#"["DONT_SHRINK", "NO_OBFUSCATE", "NO_OPTIMIZE"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                KeepConstraint::DontShrink,
                KeepConstraint::DontObfuscate,
                KeepConstraint::DontOptimize
            ]
        );
    }

    #[test]
    fn test_unknown_constraint_is_preserved() {
        let parsed: KeepConstraint = serde_json::from_str(r#""DONT_REPACKAGE""#).unwrap();
        assert_eq!(parsed, KeepConstraint::Other("DONT_REPACKAGE".into()));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), r#""DONT_REPACKAGE""#);
    }

    #[test]
    fn test_constraint_serializes_canonical_name() {
        let json = serde_json::to_string(&KeepConstraint::from("NO_SHRINK".to_string())).unwrap();
        assert_eq!(json, r#""DONT_SHRINK""#);
    }

    #[test]
    fn test_tag_round_trip_unknown() {
        let tag: KeepRuleTag = serde_json::from_str(r#""CONDITIONAL""#).unwrap();
        assert_eq!(tag, KeepRuleTag::Other("CONDITIONAL".into()));
    }
}
