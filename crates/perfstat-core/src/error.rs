//! Error types for perfstat
//!
//! Provides a unified error type for all perfstat crates.

use thiserror::Error;

/// Core error type for statistical operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// An operation that needs at least one value received none
    #[error("Empty input: {operation} needs at least one value")]
    EmptyInput { operation: String },

    /// Group-based analysis was given fewer than two non-empty groups
    #[error("need at least 2 groups, got {actual}")]
    TooFewGroups { actual: usize },

    /// Within-group degrees of freedom are not positive
    #[error("insufficient data: {n_total} observations across {n_groups} groups leave no within-group degrees of freedom")]
    InsufficientDegreesOfFreedom { n_total: usize, n_groups: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input(operation: &str) -> Self {
        Self::EmptyInput {
            operation: operation.to_string(),
        }
    }

    /// Create an error for invalid quantile
    pub fn invalid_quantile(p: f64) -> Self {
        Self::InvalidParameter(format!("Quantile {p} must be in [0, 1]"))
    }

    /// Create an error for a probability that must lie strictly inside (0, 1)
    pub fn invalid_probability(name: &str, p: f64) -> Self {
        Self::InvalidParameter(format!("{name} {p} must be in (0, 1)"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// True for the hard precondition failures of group-based analyses
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::InsufficientData { .. }
                | Self::EmptyInput { .. }
                | Self::TooFewGroups { .. }
                | Self::InsufficientDegreesOfFreedom { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("alpha must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: alpha must be positive");

        let err = Error::InvalidInput("duplicate group name".to_string());
        assert_eq!(err.to_string(), "Invalid input: duplicate group name");

        let err = Error::InsufficientData { expected: 10, actual: 5 };
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 10 samples, got 5"
        );

        let err = Error::Computation("integration diverged".to_string());
        assert_eq!(err.to_string(), "Computation error: integration diverged");
    }

    #[test]
    fn test_group_errors_are_distinguishable() {
        let too_few = Error::TooFewGroups { actual: 1 };
        assert!(too_few.to_string().contains("need at least 2 groups"));

        let no_df = Error::InsufficientDegreesOfFreedom {
            n_total: 2,
            n_groups: 2,
        };
        assert!(no_df.to_string().starts_with("insufficient data"));

        assert!(too_few.is_precondition());
        assert!(no_df.is_precondition());
        assert!(!Error::Computation("x".into()).is_precondition());
    }

    #[test]
    fn test_error_helper_functions() {
        match Error::empty_input("quantile estimation") {
            Error::EmptyInput { operation } => assert_eq!(operation, "quantile estimation"),
            _ => panic!("Wrong error type"),
        }
        assert_eq!(
            Error::empty_input("describe").to_string(),
            "Empty input: describe needs at least one value"
        );
        assert_ne!(
            Error::empty_input("describe").to_string(),
            Error::empty_input("tail ratio").to_string()
        );

        let err = Error::invalid_quantile(1.5);
        assert_eq!(
            err.to_string(),
            "Invalid parameter: Quantile 1.5 must be in [0, 1]"
        );

        let err = Error::invalid_probability("power", 1.2);
        assert_eq!(err.to_string(), "Invalid parameter: power 1.2 must be in (0, 1)");

        let err = Error::non_finite("input data");
        assert_eq!(
            err.to_string(),
            "Invalid input: input data contains NaN or infinite values"
        );
    }

    #[test]
    fn test_error_from_anyhow() {
        let err: Error = anyhow::anyhow!("custom error message").into();
        match err {
            Error::Other(_) => assert!(err.to_string().contains("custom error message")),
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_error_chaining() {
        fn inner() -> Result<()> {
            Err(Error::Computation("inner error".to_string()))
        }

        fn outer() -> Result<()> {
            inner().map_err(|e| Error::InvalidInput(format!("outer error: {e}")))
        }

        let err = outer().unwrap_err();
        assert!(err.to_string().contains("outer error"));
        assert!(err.to_string().contains("inner error"));
    }
}
