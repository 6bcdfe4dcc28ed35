//! LINE Pay environment configuration.
//!
//! Supports sandbox and production environments with appropriate URLs.

use std::fmt;
use std::str::FromStr;

/// LINE Pay environment (sandbox or production).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Sandbox environment (test transactions).
    #[default]
    Sandbox,
    /// Production environment (real money).
    Production,
}

impl Environment {
    /// REST API base URL.
    pub fn rest_base_url(&self) -> &'static str {
        match self {
            Self::Sandbox => "https://sandbox-api-pay.line.me",
            Self::Production => "https://api-pay.line.me",
        }
    }

    /// Returns true if this is the production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Returns true if this is the sandbox environment.
    pub fn is_sandbox(&self) -> bool {
        matches!(self, Self::Sandbox)
    }

    /// Load environment from `LINE_PAY_ENVIRONMENT` env var.
    ///
    /// Returns `Sandbox` if not set or invalid.
    pub fn from_env() -> Self {
        std::env::var("LINE_PAY_ENVIRONMENT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sandbox => write!(f, "sandbox"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl FromStr for Environment {
    type Err = ParseEnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" | "prod" | "live" => Ok(Self::Production),
            "sandbox" | "test" | "testing" => Ok(Self::Sandbox),
            _ => Err(ParseEnvironmentError(s.to_string())),
        }
    }
}

/// Error parsing environment string.
#[derive(Debug, Clone)]
pub struct ParseEnvironmentError(String);

impl fmt::Display for ParseEnvironmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid environment '{}', expected 'sandbox' or 'production'",
            self.0
        )
    }
}

impl std::error::Error for ParseEnvironmentError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sandbox_url() {
        let env = Environment::Sandbox;
        assert_eq!(env.rest_base_url(), "https://sandbox-api-pay.line.me");
        assert!(env.is_sandbox());
        assert!(!env.is_production());
    }

    #[test]
    fn test_production_url() {
        let env = Environment::Production;
        assert_eq!(env.rest_base_url(), "https://api-pay.line.me");
        assert!(env.is_production());
        assert!(!env.is_sandbox());
    }

    #[test]
    fn test_parse_production() {
        assert_eq!(
            "production".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert_eq!(
            "prod".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert_eq!(
            "LIVE".parse::<Environment>().unwrap(),
            Environment::Production
        );
    }

    #[test]
    fn test_parse_sandbox() {
        assert_eq!(
            "sandbox".parse::<Environment>().unwrap(),
            Environment::Sandbox
        );
        assert_eq!("TEST".parse::<Environment>().unwrap(), Environment::Sandbox);
    }

    #[test]
    fn test_parse_invalid() {
        assert!("invalid".parse::<Environment>().is_err());
    }

    #[test]
    fn test_default_is_sandbox() {
        assert_eq!(Environment::default(), Environment::Sandbox);
    }

    #[test]
    fn test_display() {
        assert_eq!(Environment::Sandbox.to_string(), "sandbox");
        assert_eq!(Environment::Production.to_string(), "production");
    }
}
