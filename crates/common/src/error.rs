//! Error type for the utility functions.
//!
//! Only caller-contract violations surface as errors. Malformed JSON is never
//! an error; see [`crate::json`].

use thiserror::Error;

/// Unified error type for utility operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UtilError {
    /// A duration or length was negative
    #[error("{name} must be non-negative, got {value}")]
    NegativeInput { name: &'static str, value: i64 },

    /// A length does not fit the platform's `usize`
    #[error("{name} {value} exceeds the platform limit of {max}")]
    TooLarge {
        name: &'static str,
        value: u64,
        max: u64,
    },

    /// Text could not be interpreted as a calendar date
    #[error("Invalid date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },
}

impl UtilError {
    /// Create a negative input error for the named parameter
    pub fn negative(name: &'static str, value: i64) -> Self {
        Self::NegativeInput { name, value }
    }

    /// Create a too-large error for a value above `usize::MAX`
    pub fn too_large(name: &'static str, value: u64) -> Self {
        Self::TooLarge {
            name,
            value,
            max: usize::MAX as u64,
        }
    }

    /// Creates an invalid date error.
    ///
    /// # Example
    /// ```ignore
    /// NaiveDate::parse_from_str(text, "%Y-%m-%d")
    ///     .map_err(|e| UtilError::invalid_date(text, e.to_string()))?;
    /// ```
    pub fn invalid_date(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Converts a signed caller value to `u64`, rejecting negatives.
///
/// Negative values are never clamped to zero.
pub(crate) fn non_negative(name: &'static str, value: i64) -> Result<u64, UtilError> {
    u64::try_from(value).map_err(|_| UtilError::negative(name, value))
}

/// Converts a validated `u64` to `usize`, rejecting values the platform
/// cannot address.
pub(crate) fn within_usize(name: &'static str, value: u64) -> Result<usize, UtilError> {
    usize::try_from(value).map_err(|_| UtilError::too_large(name, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_negative_accepts_zero_and_positive() {
        assert_eq!(non_negative("length", 0), Ok(0));
        assert_eq!(non_negative("length", 42), Ok(42));
        assert_eq!(non_negative("length", i64::MAX), Ok(i64::MAX as u64));
    }

    #[test]
    fn test_non_negative_rejects_negative() {
        assert_eq!(
            non_negative("duration_ms", -1),
            Err(UtilError::NegativeInput {
                name: "duration_ms",
                value: -1
            })
        );
    }

    #[test]
    fn test_within_usize_accepts_addressable_values() {
        assert_eq!(within_usize("length", 0), Ok(0));
        assert_eq!(within_usize("length", usize::MAX as u64), Ok(usize::MAX));
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn test_within_usize_rejects_values_above_usize_max() {
        let value = u64::from(u32::MAX) + 1;
        assert_eq!(
            within_usize("length", value),
            Err(UtilError::too_large("length", value))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            UtilError::negative("length", -5).to_string(),
            "length must be non-negative, got -5"
        );
        assert_eq!(
            UtilError::invalid_date("nope", "input contains invalid characters").to_string(),
            "Invalid date 'nope': input contains invalid characters"
        );
        assert_eq!(
            UtilError::TooLarge {
                name: "length",
                value: 10,
                max: 4
            }
            .to_string(),
            "length 10 exceeds the platform limit of 4"
        );
    }
}
