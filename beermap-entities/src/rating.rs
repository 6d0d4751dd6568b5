/// A venue rating on a five-star scale.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Rating(f64);

impl Rating {
    pub const fn min() -> Self {
        Self(0.0)
    }

    pub const fn max() -> Self {
        Self(5.0)
    }

    pub fn clamp(self) -> Self {
        Self(self.0.max(Self::min().0).min(Self::max().0))
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }

    /// The rating rounded to the nearest half star for display.
    pub fn rounded_to_half(self) -> f64 {
        (self.clamp().0 * 2.0).round() / 2.0
    }
}

impl From<f64> for Rating {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

impl From<Rating> for f64 {
    fn from(from: Rating) -> Self {
        from.0
    }
}
