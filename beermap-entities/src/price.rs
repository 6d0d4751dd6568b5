use std::{cmp::Ordering, fmt};

/// A currency-agnostic price figure.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    /// Total ordering for sorting, including non-finite values.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for Price {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

impl From<Price> for f64 {
    fn from(from: Price) -> Self {
        from.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}
