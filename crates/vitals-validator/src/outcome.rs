//! Validation Outcome

use crate::error::RejectReason;
use serde::Serialize;

/// Result of validating one raw value.
///
/// Serializes to `{"isValid", "message", "sanitizedValue"}`, the shape the
/// entry screens read; `sanitizedValue` is omitted on rejection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "OutcomeReport")]
pub enum Outcome {
    /// Value passed every check
    Accepted {
        /// Canonical value ready for storage and display
        sanitized_value: f64,
    },
    /// Value failed a check
    Rejected(RejectReason),
}

impl Outcome {
    /// Whether the value was accepted
    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Accepted { .. })
    }

    /// Canonical value, if accepted
    pub fn sanitized_value(&self) -> Option<f64> {
        match self {
            Outcome::Accepted { sanitized_value } => Some(*sanitized_value),
            Outcome::Rejected(_) => None,
        }
    }

    /// User-facing message, if rejected
    pub fn message(&self) -> Option<String> {
        self.reason().map(ToString::to_string)
    }

    /// Rejection reason, if rejected
    pub fn reason(&self) -> Option<&RejectReason> {
        match self {
            Outcome::Accepted { .. } => None,
            Outcome::Rejected(reason) => Some(reason),
        }
    }

    /// Convert into a `Result` for callers that want `?`
    pub fn into_result(self) -> Result<f64, RejectReason> {
        match self {
            Outcome::Accepted { sanitized_value } => Ok(sanitized_value),
            Outcome::Rejected(reason) => Err(reason),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OutcomeReport {
    is_valid: bool,
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sanitized_value: Option<f64>,
}

impl From<Outcome> for OutcomeReport {
    fn from(outcome: Outcome) -> Self {
        Self {
            is_valid: outcome.is_valid(),
            message: outcome.message(),
            sanitized_value: outcome.sanitized_value(),
        }
    }
}
