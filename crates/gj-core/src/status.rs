//! Work status enum as the single source of truth for status keywords.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Work status encoded by a bracket tag in a commit message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkStatus {
    Done,
    Wip,
    Fix,
    Feat,
    Bug,
}

impl WorkStatus {
    /// Canonical uppercase form, as displayed in journal entries.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Done => "DONE",
            Self::Wip => "WIP",
            Self::Fix => "FIX",
            Self::Feat => "FEAT",
            Self::Bug => "BUG",
        }
    }
}

impl fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WorkStatus {
    type Err = UnknownStatus;

    /// Case-insensitive. `FEATURE` is accepted as an alias for `FEAT`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DONE" => Ok(Self::Done),
            "WIP" => Ok(Self::Wip),
            "FIX" => Ok(Self::Fix),
            "FEAT" | "FEATURE" => Ok(Self::Feat),
            "BUG" => Ok(Self::Bug),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

impl Serialize for WorkStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for WorkStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for unrecognized status keywords.
#[derive(Debug, Clone)]
pub struct UnknownStatus(String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown work status: {}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_all_variants() {
        let variants = [
            WorkStatus::Done,
            WorkStatus::Wip,
            WorkStatus::Fix,
            WorkStatus::Feat,
            WorkStatus::Bug,
        ];

        for variant in &variants {
            let s = variant.to_string();
            let parsed: WorkStatus = s.parse().expect("should parse");
            assert_eq!(parsed, *variant, "roundtrip failed for {variant:?}");
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("done".parse::<WorkStatus>().unwrap(), WorkStatus::Done);
        assert_eq!("Wip".parse::<WorkStatus>().unwrap(), WorkStatus::Wip);
        assert_eq!("FIX".parse::<WorkStatus>().unwrap(), WorkStatus::Fix);
    }

    #[test]
    fn feature_alias_parses() {
        assert_eq!("feature".parse::<WorkStatus>().unwrap(), WorkStatus::Feat);
        assert_eq!("FEATURE".parse::<WorkStatus>().unwrap(), WorkStatus::Feat);
    }

    #[test]
    fn unknown_status_errors() {
        let result: Result<WorkStatus, _> = "cicd".parse();
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "unknown work status: cicd");
    }

    #[test]
    fn serde_uses_uppercase_form() {
        let json = serde_json::to_string(&WorkStatus::Done).unwrap();
        assert_eq!(json, "\"DONE\"");
        let parsed: WorkStatus = serde_json::from_str("\"wip\"").unwrap();
        assert_eq!(parsed, WorkStatus::Wip);
    }
}
