//! Validator for Measurement Entries

use crate::error::{ConfigError, RejectReason};
use crate::input::{Parsed, RawValue};
use crate::kind::MeasurementKind;
use crate::limits::{LimitTable, DEFAULT_LIMITS};
use crate::outcome::Outcome;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, trace};

/// Validator over the compiled-in limits
pub static DEFAULT_VALIDATOR: Validator = Validator {
    limits: Cow::Borrowed(&DEFAULT_LIMITS),
};

/// Range checker and canonicalizer for measurement entries.
///
/// Holds no state beyond its limit table, so one instance can be shared
/// freely between threads.
#[derive(Debug, Clone)]
pub struct Validator {
    limits: Cow<'static, LimitTable>,
}

impl Validator {
    /// Create a validator over a custom limit table
    pub fn new(limits: LimitTable) -> Self {
        Self {
            limits: Cow::Owned(limits),
        }
    }

    /// Create a validator from defaults, an optional file and the environment.
    /// See [`LimitTable::load`].
    pub fn from_config(path: Option<&Path>) -> Result<Self, ConfigError> {
        LimitTable::load(path).map(Self::new)
    }

    /// Limit table in use
    pub fn limits(&self) -> &LimitTable {
        &self.limits
    }

    /// Validate a raw value for `kind`.
    ///
    /// Checks run in order and the first failure wins: missing value, not a
    /// number, zero/negative (water and calories), below minimum, above
    /// maximum, fractional value (age).
    pub fn validate<'a>(&self, kind: MeasurementKind, raw: impl Into<RawValue<'a>>) -> Outcome {
        match self.check(kind, raw.into()) {
            Ok(sanitized_value) => {
                trace!(%kind, sanitized_value, "Accepted input");
                Outcome::Accepted { sanitized_value }
            }
            Err(reason) => {
                debug!(%kind, %reason, "Rejected input");
                Outcome::Rejected(reason)
            }
        }
    }

    fn check(&self, kind: MeasurementKind, raw: RawValue<'_>) -> Result<f64, RejectReason> {
        let value = match raw.parse() {
            Parsed::Missing => return Err(RejectReason::MissingValue { kind }),
            Parsed::NotANumber => return Err(RejectReason::NotANumber),
            Parsed::Number(value) => value,
        };

        check_positive(kind, value)?;

        let limit = self.limits.get(kind);
        if !limit.contains(value) {
            return Err(if value < limit.min {
                RejectReason::BelowMinimum {
                    kind,
                    min: limit.min,
                    unit: limit.unit.clone(),
                }
            } else {
                RejectReason::AboveMaximum {
                    kind,
                    max: limit.max,
                    unit: limit.unit.clone(),
                }
            });
        }

        // Whole-number check follows the range checks, so 130.5 years reports
        // the maximum rather than the fraction.
        if kind.requires_whole_number() && value.fract() != 0.0 {
            return Err(RejectReason::NonInteger { kind });
        }

        let sanitized = kind.canonicalization().apply(value);
        // Accepted intake amounts stay positive, so 0.4 ml is not stored as 0
        if kind.requires_positive() && sanitized == 0.0 {
            return Err(RejectReason::RoundsToZero {
                kind,
                unit: limit.unit.clone(),
            });
        }
        Ok(sanitized)
    }

    /// Validate a water intake entry (ml)
    pub fn validate_water<'a>(&self, raw: impl Into<RawValue<'a>>) -> Outcome {
        self.validate(MeasurementKind::Water, raw)
    }

    /// Validate a calorie entry (kcal)
    pub fn validate_calories<'a>(&self, raw: impl Into<RawValue<'a>>) -> Outcome {
        self.validate(MeasurementKind::Calories, raw)
    }

    /// Validate a body weight entry (kg)
    pub fn validate_weight<'a>(&self, raw: impl Into<RawValue<'a>>) -> Outcome {
        self.validate(MeasurementKind::Weight, raw)
    }

    /// Validate a body height entry (cm)
    pub fn validate_height<'a>(&self, raw: impl Into<RawValue<'a>>) -> Outcome {
        self.validate(MeasurementKind::Height, raw)
    }

    /// Validate an age entry (years)
    pub fn validate_age<'a>(&self, raw: impl Into<RawValue<'a>>) -> Outcome {
        self.validate(MeasurementKind::Age, raw)
    }
}

impl Default for Validator {
    fn default() -> Self {
        DEFAULT_VALIDATOR.clone()
    }
}

fn check_positive(kind: MeasurementKind, value: f64) -> Result<(), RejectReason> {
    if !kind.requires_positive() {
        Ok(())
    } else if value == 0.0 {
        Err(RejectReason::Zero { kind })
    } else if value < 0.0 {
        Err(RejectReason::Negative { kind })
    } else {
        Ok(())
    }
}

/// Validate `raw` for `kind` against the compiled-in limits
pub fn validate<'a>(kind: MeasurementKind, raw: impl Into<RawValue<'a>>) -> Outcome {
    DEFAULT_VALIDATOR.validate(kind, raw)
}

/// Validate a water intake entry against the compiled-in limits
pub fn validate_water<'a>(raw: impl Into<RawValue<'a>>) -> Outcome {
    DEFAULT_VALIDATOR.validate_water(raw)
}

/// Validate a calorie entry against the compiled-in limits
pub fn validate_calories<'a>(raw: impl Into<RawValue<'a>>) -> Outcome {
    DEFAULT_VALIDATOR.validate_calories(raw)
}

/// Validate a body weight entry against the compiled-in limits
pub fn validate_weight<'a>(raw: impl Into<RawValue<'a>>) -> Outcome {
    DEFAULT_VALIDATOR.validate_weight(raw)
}

/// Validate a body height entry against the compiled-in limits
pub fn validate_height<'a>(raw: impl Into<RawValue<'a>>) -> Outcome {
    DEFAULT_VALIDATOR.validate_height(raw)
}

/// Validate an age entry against the compiled-in limits
pub fn validate_age<'a>(raw: impl Into<RawValue<'a>>) -> Outcome {
    DEFAULT_VALIDATOR.validate_age(raw)
}
