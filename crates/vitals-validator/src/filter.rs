//! Keystroke Filter for Entry Fields

use crate::kind::MeasurementKind;

/// Character filter applied to text as it is typed, before validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMask {
    /// Digits plus at most one `.` or `,` decimal separator
    Decimal,
    /// Digits only
    Digits,
}

impl InputMask {
    /// Mask used by the entry field for `kind`
    pub fn for_kind(kind: MeasurementKind) -> Self {
        match kind {
            MeasurementKind::Height | MeasurementKind::Age => InputMask::Digits,
            MeasurementKind::Water | MeasurementKind::Calories | MeasurementKind::Weight => {
                InputMask::Decimal
            }
        }
    }

    /// Drop every character the mask does not allow.
    ///
    /// Only the first decimal separator survives; later ones are removed.
    pub fn mask(self, text: &str) -> String {
        let mut separator_seen = false;
        text.chars()
            .filter(|&c| match c {
                '0'..='9' => true,
                '.' | ',' if self == InputMask::Decimal && !separator_seen => {
                    separator_seen = true;
                    true
                }
                _ => false,
            })
            .collect()
    }

    /// Whether `text` passes the mask unchanged
    pub fn accepts(self, text: &str) -> bool {
        self.mask(text) == text
    }
}
