//! Limit Table
//!
//! Sensible bounds for each measurement kind. The compiled-in table is a
//! `static`; deployments may load an overriding table once at startup.

use crate::error::ConfigError;
use crate::kind::MeasurementKind;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::Path;
use tracing::{info, warn};

/// Prefix of environment variables that override limits,
/// e.g. `VITALS_LIMITS__WEIGHT__MAX=400`
pub const ENV_PREFIX: &str = "VITALS_LIMITS";

/// Inclusive bounds and unit label for one kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitDescriptor {
    /// Smallest accepted value
    pub min: f64,
    /// Largest accepted value
    pub max: f64,
    /// Unit shown in range messages
    pub unit: Cow<'static, str>,
}

impl LimitDescriptor {
    /// Create a descriptor with a static unit label
    pub const fn new(min: f64, max: f64, unit: &'static str) -> Self {
        Self {
            min,
            max,
            unit: Cow::Borrowed(unit),
        }
    }

    /// Whether `value` lies within `[min, max]`
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn check(&self, kind: MeasurementKind) -> Result<(), ConfigError> {
        let reason = if !self.min.is_finite() || !self.max.is_finite() {
            "bounds must be finite"
        } else if self.min > self.max {
            "min must not exceed max"
        } else if self.unit.trim().is_empty() {
            "unit must not be empty"
        } else {
            return Ok(());
        };
        Err(ConfigError::InvalidLimit { kind, reason })
    }
}

/// One limit descriptor per measurement kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitTable {
    pub water: LimitDescriptor,
    pub calories: LimitDescriptor,
    pub weight: LimitDescriptor,
    pub height: LimitDescriptor,
    pub age: LimitDescriptor,
}

/// Compiled-in limits
pub static DEFAULT_LIMITS: LimitTable = LimitTable::builtin();

impl LimitTable {
    const fn builtin() -> Self {
        Self {
            water: LimitDescriptor::new(0.0, 10_000.0, "ml"),
            calories: LimitDescriptor::new(0.0, 10_000.0, "kcal"),
            weight: LimitDescriptor::new(20.0, 500.0, "kg"),
            height: LimitDescriptor::new(50.0, 250.0, "cm"),
            age: LimitDescriptor::new(10.0, 120.0, "years"),
        }
    }

    /// Descriptor for `kind`
    pub fn get(&self, kind: MeasurementKind) -> &LimitDescriptor {
        match kind {
            MeasurementKind::Water => &self.water,
            MeasurementKind::Calories => &self.calories,
            MeasurementKind::Weight => &self.weight,
            MeasurementKind::Height => &self.height,
            MeasurementKind::Age => &self.age,
        }
    }

    /// Check every descriptor for sane bounds
    pub fn check(&self) -> Result<(), ConfigError> {
        MeasurementKind::ALL
            .into_iter()
            .try_for_each(|kind| self.get(kind).check(kind))
    }

    /// Build a table from the compiled-in defaults, an optional file and
    /// `VITALS_LIMITS__*` environment variables, later sources winning.
    ///
    /// Individual fields may be overridden; anything not mentioned keeps its
    /// default. The file format follows its extension (TOML, JSON, YAML...).
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        let table: Self = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        if let Err(e) = table.check() {
            warn!("Rejected limit table: {}", e);
            return Err(e);
        }
        info!("Loaded limit table: {:?}", table);
        Ok(table)
    }
}

impl Default for LimitTable {
    fn default() -> Self {
        Self::builtin()
    }
}
