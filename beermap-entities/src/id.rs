use std::fmt;

/// Stable public identifier of a venue, unique within one catalog.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Id(u64);

impl Id {
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for Id {
    fn from(from: u64) -> Self {
        Self(from)
    }
}

impl From<Id> for u64 {
    fn from(from: Id) -> Self {
        from.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}
