use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the vision model should treat the captured image: a quick concise
/// answer, or a thorough assignment-style walkthrough.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    Search,
    Assignment,
}

impl Default for AnalysisMode {
    fn default() -> Self {
        AnalysisMode::Search
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisMode::Search => write!(f, "search"),
            AnalysisMode::Assignment => write!(f, "assignment"),
        }
    }
}

impl FromStr for AnalysisMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "search" => Ok(AnalysisMode::Search),
            "assignment" => Ok(AnalysisMode::Assignment),
            other => Err(format!("unknown analysis mode: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_search() {
        assert_eq!(AnalysisMode::default(), AnalysisMode::Search);
    }

    #[test]
    fn test_serializes_lowercase() {
        let serialized = serde_json::to_string(&AnalysisMode::Assignment).unwrap();

        assert_eq!(serialized, "\"assignment\"");
    }

    #[test]
    fn test_parses_case_insensitively() {
        assert_eq!(
            "Assignment".parse::<AnalysisMode>().unwrap(),
            AnalysisMode::Assignment
        );
        assert_eq!(
            " search ".parse::<AnalysisMode>().unwrap(),
            AnalysisMode::Search
        );
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!("verbose".parse::<AnalysisMode>().is_err());
    }
}
