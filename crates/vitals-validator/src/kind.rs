//! Measurement Kinds

use crate::error::UnknownKind;
use crate::filter::InputMask;
use crate::normalizer::Canonicalization;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five tracked quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementKind {
    /// Water intake (ml)
    Water,
    /// Calorie intake (kcal)
    Calories,
    /// Body weight (kg)
    Weight,
    /// Body height (cm)
    Height,
    /// Age (years)
    Age,
}

impl MeasurementKind {
    /// All kinds, in display order
    pub const ALL: [MeasurementKind; 5] = [
        MeasurementKind::Water,
        MeasurementKind::Calories,
        MeasurementKind::Weight,
        MeasurementKind::Height,
        MeasurementKind::Age,
    ];

    /// Lowercase identifier, also used as the configuration key
    pub fn name(self) -> &'static str {
        match self {
            MeasurementKind::Water => "water",
            MeasurementKind::Calories => "calories",
            MeasurementKind::Weight => "weight",
            MeasurementKind::Height => "height",
            MeasurementKind::Age => "age",
        }
    }

    /// How an accepted value is rounded before it is handed back
    pub fn canonicalization(self) -> Canonicalization {
        match self {
            MeasurementKind::Water | MeasurementKind::Calories | MeasurementKind::Age => {
                Canonicalization::RoundToInteger
            }
            MeasurementKind::Weight => Canonicalization::RoundToTenth,
            MeasurementKind::Height => Canonicalization::Passthrough,
        }
    }

    /// Keystroke filter the entry field applies for this kind
    pub fn input_mask(self) -> InputMask {
        InputMask::for_kind(self)
    }

    /// Intake amounts reject zero and negatives with their own messages
    pub(crate) fn requires_positive(self) -> bool {
        matches!(self, MeasurementKind::Water | MeasurementKind::Calories)
    }

    pub(crate) fn requires_whole_number(self) -> bool {
        matches!(self, MeasurementKind::Age)
    }

    /// Object of "Please enter ..."
    pub(crate) fn prompt(self) -> &'static str {
        match self {
            MeasurementKind::Water => "the amount of water",
            MeasurementKind::Calories => "the number of calories",
            MeasurementKind::Weight => "your weight",
            MeasurementKind::Height => "your height",
            MeasurementKind::Age => "your age",
        }
    }

    /// Sentence subject for range messages
    pub(crate) fn noun(self) -> &'static str {
        match self {
            MeasurementKind::Water => "Water intake",
            MeasurementKind::Calories => "Calories",
            MeasurementKind::Weight => "Weight",
            MeasurementKind::Height => "Height",
            MeasurementKind::Age => "Age",
        }
    }
}

impl fmt::Display for MeasurementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MeasurementKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        MeasurementKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
