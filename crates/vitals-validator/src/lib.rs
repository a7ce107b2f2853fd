//! Vitals Input Validation
//!
//! Range checking and canonicalization for the five logged measurements:
//! water intake, calories, body weight, body height and age.
//!
//! Every check is a pure function from a raw value to an [`Outcome`]. Invalid
//! input never produces an error, only a rejected outcome carrying the message
//! to show the user.
//!
//! ```
//! use vitals_validator::{validate, MeasurementKind};
//!
//! let outcome = validate(MeasurementKind::Weight, "70.56");
//! assert_eq!(outcome.sanitized_value(), Some(70.6));
//!
//! let outcome = validate(MeasurementKind::Water, 0.0);
//! assert_eq!(outcome.message().as_deref(), Some("Water intake must be greater than 0"));
//! ```

mod error;
mod filter;
mod input;
mod kind;
mod limits;
mod normalizer;
mod outcome;
mod validator;

pub use error::{ConfigError, RejectReason, UnknownKind};
pub use filter::InputMask;
pub use input::RawValue;
pub use kind::MeasurementKind;
pub use limits::{LimitDescriptor, LimitTable, DEFAULT_LIMITS, ENV_PREFIX};
pub use normalizer::Canonicalization;
pub use outcome::Outcome;
pub use validator::{
    validate, validate_age, validate_calories, validate_height, validate_water, validate_weight,
    Validator, DEFAULT_VALIDATOR,
};
