//! Canonical Rounding of Accepted Values

/// Canonicalization rule applied to an accepted value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Canonicalization {
    /// Round half away from zero to a whole number
    RoundToInteger,
    /// Round to one decimal place
    RoundToTenth,
    /// Keep the parsed value unchanged
    Passthrough,
}

impl Canonicalization {
    /// Canonical form of `value`.
    ///
    /// Every rule is a fixed point: applying it to its own output returns the
    /// same value.
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Canonicalization::RoundToInteger => value.round(),
            Canonicalization::RoundToTenth => (value * 10.0).round() / 10.0,
            Canonicalization::Passthrough => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_integer() {
        assert_eq!(Canonicalization::RoundToInteger.apply(249.4), 249.0);
        assert_eq!(Canonicalization::RoundToInteger.apply(249.5), 250.0);
    }

    #[test]
    fn test_round_to_tenth() {
        assert_eq!(Canonicalization::RoundToTenth.apply(70.56), 70.6);
        assert_eq!(Canonicalization::RoundToTenth.apply(70.54), 70.5);
        assert_eq!(Canonicalization::RoundToTenth.apply(80.0), 80.0);
    }

    #[test]
    fn test_fixed_point() {
        for value in [20.0, 55.55, 70.56, 123.45, 499.99] {
            for rule in [
                Canonicalization::RoundToInteger,
                Canonicalization::RoundToTenth,
                Canonicalization::Passthrough,
            ] {
                let once = rule.apply(value);
                assert_eq!(rule.apply(once), once);
            }
        }
    }
}
