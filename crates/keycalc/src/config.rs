//! Engine configuration

use crate::core::display::DisplayFormat;
use crate::core::DivisionPolicy;
use serde::{Deserialize, Serialize};

/// Tunable behavior of a [`CalculatorEngine`](crate::core::engine::CalculatorEngine)
///
/// The defaults reproduce the keypad app exactly: lenient division and a
/// ten-character plain display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Divide-by-zero policy
    pub division: DivisionPolicy,
    /// Display rendering
    pub display: DisplayFormat,
}

impl EngineConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with strict division
    #[must_use]
    pub fn strict() -> Self {
        Self::new().with_division(DivisionPolicy::Strict)
    }

    /// Set division policy
    #[must_use]
    pub const fn with_division(mut self, division: DivisionPolicy) -> Self {
        self.division = division;
        self
    }

    /// Set display format
    #[must_use]
    pub const fn with_display(mut self, display: DisplayFormat) -> Self {
        self.display = display;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = EngineConfig::default();
        assert_eq!(config.division, DivisionPolicy::Lenient);
        assert_eq!(config.display.max_plain_len, 10);
        assert_eq!(config.display.exponent_digits, 5);
        assert_eq!(EngineConfig::new(), config);
    }

    #[test]
    fn test_config_strict() {
        assert_eq!(EngineConfig::strict().division, DivisionPolicy::Strict);
    }

    #[test]
    fn test_config_builders() {
        let display = DisplayFormat {
            max_plain_len: 12,
            exponent_digits: 3,
        };
        let config = EngineConfig::new()
            .with_division(DivisionPolicy::Strict)
            .with_display(display);
        assert_eq!(config.division, DivisionPolicy::Strict);
        assert_eq!(config.display, display);
    }

    #[test]
    fn test_config_from_partial_yaml() {
        let config: EngineConfig = serde_yaml_ng::from_str("division: strict\n").unwrap();
        assert_eq!(config.division, DivisionPolicy::Strict);
        assert_eq!(config.display, DisplayFormat::default());
    }

    #[test]
    fn test_config_nested_yaml() {
        let yaml = "display:\n  max_plain_len: 8\n";
        let config: EngineConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.division, DivisionPolicy::Lenient);
        assert_eq!(config.display.max_plain_len, 8);
        assert_eq!(config.display.exponent_digits, 5);
    }

    #[test]
    fn test_config_json_roundtrip_shape() {
        let json = serde_json::to_value(EngineConfig::strict()).unwrap();
        assert_eq!(json["division"], "strict");
        assert_eq!(json["display"]["max_plain_len"], 10);
    }

    #[test]
    fn test_config_rejects_unknown_policy() {
        let result: Result<EngineConfig, _> = serde_yaml_ng::from_str("division: loud\n");
        assert!(result.is_err());
    }
}
