use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A research publication record as supplied by the publication store.
///
/// The engine consumes these read-only; `year` may be absent when the
/// source row carried no parseable publication year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub id: String,
    pub title: String,
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub year: Option<u16>,
}

/// Mission destination an analysis is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetEnvironment {
    Moon,
    Mars,
    Transit,
}

impl TargetEnvironment {
    pub const fn ordered() -> [Self; 3] {
        [Self::Moon, Self::Mars, Self::Transit]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Moon => "moon",
            Self::Mars => "mars",
            Self::Transit => "transit",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Moon => "Lunar Surface",
            Self::Mars => "Mars Surface",
            Self::Transit => "Deep Space Transit",
        }
    }
}

impl fmt::Display for TargetEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEnvironment(pub String);

impl fmt::Display for UnknownEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown target environment '{}', expected moon, mars, or transit",
            self.0
        )
    }
}

impl std::error::Error for UnknownEnvironment {}

impl FromStr for TargetEnvironment {
    type Err = UnknownEnvironment;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "moon" | "lunar" => Ok(Self::Moon),
            "mars" | "martian" => Ok(Self::Mars),
            "transit" | "deep_space" | "deep-space" => Ok(Self::Transit),
            other => Err(UnknownEnvironment(other.to_string())),
        }
    }
}

/// Three-band readiness verdict, ordered Green > Yellow > Red.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadinessLevel {
    Green,
    Yellow,
    Red,
}

impl ReadinessLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Green => "Green",
            Self::Yellow => "Yellow",
            Self::Red => "Red",
        }
    }
}

/// How much publication volume underlies a score, independent of its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapConfidence {
    Low,
    Medium,
    High,
}

impl GapConfidence {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Weight used by the confidence-weighted overall index.
    pub const fn weight(self) -> u32 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_parses_common_spellings() {
        assert_eq!(
            " Mars ".parse::<TargetEnvironment>(),
            Ok(TargetEnvironment::Mars)
        );
        assert_eq!(
            "deep-space".parse::<TargetEnvironment>(),
            Ok(TargetEnvironment::Transit)
        );
        assert!("europa".parse::<TargetEnvironment>().is_err());
    }

    #[test]
    fn levels_serialize_to_dashboard_tokens() {
        assert_eq!(
            serde_json::to_string(&ReadinessLevel::Green).expect("serializes"),
            "\"Green\""
        );
        assert_eq!(
            serde_json::to_string(&GapConfidence::Medium).expect("serializes"),
            "\"medium\""
        );
        assert_eq!(
            serde_json::to_string(&TargetEnvironment::Transit).expect("serializes"),
            "\"transit\""
        );
    }

    #[test]
    fn publication_accepts_missing_optional_fields() {
        let parsed: Publication = serde_json::from_str(
            r#"{"id": "p-1", "title": "Bone loss aboard the ISS", "abstract": "Observed."}"#,
        )
        .expect("valid publication json");
        assert!(parsed.keywords.is_empty());
        assert_eq!(parsed.year, None);
    }
}
