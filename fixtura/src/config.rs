//! Configuration for how specifications compare member names.

use std::fmt;

/// Environment variable read by [`MatchConfig::from_env`]
pub const NAME_COMPARISON_ENV: &str = "FIXTURA_NAME_COMPARISON";

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Unrecognised name comparison mode
    InvalidNameComparison(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNameComparison(value) => write!(
                f,
                "Invalid name comparison: {} (expected ordinal or ordinal_ignore_case)",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// How two member names are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameComparison {
    /// Exact, case-sensitive comparison
    #[default]
    Ordinal,
    /// Comparison that ignores Unicode case
    OrdinalIgnoreCase,
}

impl NameComparison {
    pub fn matches(self, expected: &str, actual: &str) -> bool {
        match self {
            NameComparison::Ordinal => expected == actual,
            NameComparison::OrdinalIgnoreCase => expected.to_lowercase() == actual.to_lowercase(),
        }
    }

    /// Parse a mode name as accepted in configuration
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ordinal" => Ok(NameComparison::Ordinal),
            "ordinal_ignore_case" => Ok(NameComparison::OrdinalIgnoreCase),
            _ => Err(ConfigError::InvalidNameComparison(value.to_string())),
        }
    }
}

/// Settings shared by the type-and-name specifications
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchConfig {
    /// Rule applied to parameter and property names
    pub name_comparison: NameComparison,
}

impl MatchConfig {
    pub fn new(name_comparison: NameComparison) -> Self {
        Self { name_comparison }
    }

    /// Build a configuration from the process environment.
    ///
    /// An unset variable yields the default configuration.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let name_comparison = match lookup(NAME_COMPARISON_ENV) {
            Some(value) => NameComparison::parse(&value)?,
            None => NameComparison::default(),
        };
        Ok(Self { name_comparison })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_case_sensitive() {
        let config = MatchConfig::default();
        assert_eq!(config.name_comparison, NameComparison::Ordinal);
        assert!(config.name_comparison.matches("parameter", "parameter"));
        assert!(!config.name_comparison.matches("parameter", "Parameter"));
    }

    #[test]
    fn test_ignore_case() {
        let comparison = NameComparison::OrdinalIgnoreCase;
        assert!(comparison.matches("parameter", "PARAMETER"));
        assert!(!comparison.matches("parameter", "parameters"));
    }

    #[test]
    fn test_parse() {
        assert_eq!(NameComparison::parse("ordinal"), Ok(NameComparison::Ordinal));
        assert_eq!(
            NameComparison::parse(" Ordinal_Ignore_Case "),
            Ok(NameComparison::OrdinalIgnoreCase)
        );
        assert_eq!(
            NameComparison::parse("fuzzy"),
            Err(ConfigError::InvalidNameComparison("fuzzy".to_string()))
        );
    }

    #[test]
    fn test_from_lookup() {
        let config = MatchConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, MatchConfig::default());

        let config = MatchConfig::from_lookup(|key| {
            assert_eq!(key, NAME_COMPARISON_ENV);
            Some("ordinal_ignore_case".to_string())
        })
        .unwrap();
        assert_eq!(config.name_comparison, NameComparison::OrdinalIgnoreCase);

        let error = MatchConfig::from_lookup(|_| Some("nope".to_string())).unwrap_err();
        assert_eq!(
            format!("{}", error),
            "Invalid name comparison: nope (expected ordinal or ordinal_ignore_case)"
        );
    }
}
