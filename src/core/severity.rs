//! Severity classification that drives routing

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Warning = 0,
    Error = 1,
    FatalError = 2,
    UnknownMessage = 3,
}

impl Severity {
    /// Every severity, in declaration order
    pub const ALL: [Severity; 4] = [
        Severity::Warning,
        Severity::Error,
        Severity::FatalError,
        Severity::UnknownMessage,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::FatalError => "FatalError",
            Severity::UnknownMessage => "UnknownMessage",
        }
    }

    pub fn color(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Severity::Warning => Yellow,
            Severity::Error => Red,
            Severity::FatalError => BrightRed,
            Severity::UnknownMessage => Magenta,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "WARNING" | "WARN" => Ok(Severity::Warning),
            "ERROR" => Ok(Severity::Error),
            "FATALERROR" | "FATAL" => Ok(Severity::FatalError),
            "UNKNOWNMESSAGE" | "UNKNOWN" => Ok(Severity::UnknownMessage),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("warn".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!("Fatal".parse::<Severity>(), Ok(Severity::FatalError));
        assert_eq!("unknown".parse::<Severity>(), Ok(Severity::UnknownMessage));
        assert!("info".parse::<Severity>().is_err());
    }

    #[test]
    fn test_all_is_ordered() {
        let mut sorted = Severity::ALL;
        sorted.sort();
        assert_eq!(sorted, Severity::ALL);
    }
}
