use std::fmt;
use serde::{Serialize, Serializer};

/// A percentage derived from two counts. `NotApplicable` when the
/// denominator is zero so the display layer never sees NaN or infinity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rate {
    Percent(f64),
    NotApplicable,
}

impl Rate {
    pub fn of(numerator: u64, denominator: u64) -> Self {
        if denominator == 0 {
            return Rate::NotApplicable;
        }
        Rate::Percent(numerator as f64 / denominator as f64 * 100.0)
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Rate::Percent(value) => Some(*value),
            Rate::NotApplicable => None,
        }
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rate::Percent(value) if is_exact_tie(*value) => {
                let tenths = (value * 10.0 + 0.5) as u64;
                write!(f, "{}.{}", tenths / 10, tenths % 10)
            }
            Rate::Percent(value) => write!(f, "{:.1}", value),
            Rate::NotApplicable => f.write_str("N/A"),
        }
    }
}

/// Exactly halfway between two tenths. For a binary float that means an
/// odd number of quarters. Ties round up.
fn is_exact_tie(value: f64) -> bool {
    let quarters = value * 4.0;
    quarters.fract() == 0.0 && quarters % 2.0 == 1.0
}

impl Serialize for Rate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
