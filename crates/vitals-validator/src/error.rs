//! Validation Error Types

use crate::kind::MeasurementKind;
use std::borrow::Cow;
use thiserror::Error;

/// Reason a raw value was rejected.
///
/// The `Display` output is the message shown to the user, so every variant
/// renders a complete sentence.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RejectReason {
    /// Value absent or empty
    #[error("Please enter {}", .kind.prompt())]
    MissingValue { kind: MeasurementKind },

    /// Value does not parse as a finite number
    #[error("Please enter a valid number")]
    NotANumber,

    /// Value has a fractional part where a whole number is required
    #[error("{} must be a whole number", .kind.noun())]
    NonInteger { kind: MeasurementKind },

    /// Value is zero where a strictly positive amount is required
    #[error("{} must be greater than 0", .kind.noun())]
    Zero { kind: MeasurementKind },

    /// Value is negative where a strictly positive amount is required
    #[error("{} cannot be negative", .kind.noun())]
    Negative { kind: MeasurementKind },

    /// Positive value too small to survive rounding to a whole number
    #[error("{} rounds to 0 {unit}; please enter a larger amount", .kind.noun())]
    RoundsToZero {
        kind: MeasurementKind,
        unit: Cow<'static, str>,
    },

    /// Value below the configured minimum
    #[error("{} must be at least {min} {unit}", .kind.noun())]
    BelowMinimum {
        kind: MeasurementKind,
        min: f64,
        unit: Cow<'static, str>,
    },

    /// Value above the configured maximum
    #[error("{} cannot exceed {max} {unit}", .kind.noun())]
    AboveMaximum {
        kind: MeasurementKind,
        max: f64,
        unit: Cow<'static, str>,
    },
}

/// Errors while building a limit table from configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File or environment source could not be read or deserialized
    #[error("Failed to load limits: {0}")]
    Load(#[from] config::ConfigError),

    /// A descriptor failed its sanity check
    #[error("Invalid {kind} limits: {reason}")]
    InvalidLimit {
        kind: MeasurementKind,
        reason: &'static str,
    },
}

/// Name that does not match any measurement kind
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown measurement kind: {0}")]
pub struct UnknownKind(pub String);
