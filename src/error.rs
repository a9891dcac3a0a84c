//! Error handling for the superheterodyne demonstrator
//!
//! This module defines the crate error type and a Result alias used by the
//! signal pipeline, the DSP primitives and the configuration loader.

use thiserror::Error;

/// Main error type for superhet-rs operations
#[derive(Error, Debug)]
pub enum SuperhetError {
    /// A pipeline parameter is outside its allowed domain
    #[error("Invalid {parameter}: {value} (allowed: {allowed})")]
    InvalidParameter {
        parameter: &'static str,
        value: u32,
        allowed: &'static str,
    },

    /// Errors related to filter design (order, cutoff)
    #[error("Filter design error: {0}")]
    FilterDesign(String),

    /// Errors related to filtering or synthesizing a signal
    #[error("Signal error: {0}")]
    Signal(String),

    /// Errors related to configuration loading
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<SuperhetError>,
    },
}

impl SuperhetError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        SuperhetError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Whether this error (or the error it wraps) is a parameter range violation
    pub fn is_invalid_parameter(&self) -> bool {
        match self {
            SuperhetError::InvalidParameter { .. } => true,
            SuperhetError::WithContext { source, .. } => source.is_invalid_parameter(),
            _ => false,
        }
    }
}

/// Result type alias for superhet-rs operations
pub type Result<T> = std::result::Result<T, SuperhetError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = SuperhetError::InvalidParameter {
            parameter: "signal frequency",
            value: 31,
            allowed: "1-30",
        };
        assert_eq!(
            err.to_string(),
            "Invalid signal frequency: 31 (allowed: 1-30)"
        );
    }

    #[test]
    fn test_error_with_context() {
        let err = SuperhetError::FilterDesign("order must be positive".to_string());
        let with_ctx = err.with_context("Failed to design IF filter");
        assert!(with_ctx.to_string().contains("Failed to design IF filter"));
        assert!(with_ctx.to_string().contains("order must be positive"));
    }

    #[test]
    fn test_is_invalid_parameter_through_context() {
        let err = SuperhetError::InvalidParameter {
            parameter: "noise amplitude",
            value: 70,
            allowed: "20-60",
        }
        .with_context("compute");
        assert!(err.is_invalid_parameter());
        assert!(!SuperhetError::Signal("x".into()).is_invalid_parameter());
    }

    #[test]
    fn test_result_ext_context() {
        let res: Result<()> = Err(SuperhetError::Config("bad key".into()));
        let err = res.context("Loading config").unwrap_err();
        assert_eq!(err.to_string(), "Loading config: Configuration error: bad key");
    }

    #[test]
    fn test_result_ext_with_context_from_io() {
        let res: Result<()> = Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into());
        let err = res.with_context(|| format!("Reading {}", "config.toml")).unwrap_err();
        assert_eq!(err.to_string(), "Reading config.toml: IO error: gone");
        assert!(!err.is_invalid_parameter());
    }
}
