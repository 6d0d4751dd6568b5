use std::fmt;

/// A geographic position given as latitude/longitude in degrees.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    pub const MAX_LAT_DEG: f64 = 90.0;
    pub const MAX_LNG_DEG: f64 = 180.0;

    /// Returns `None` if either coordinate is non-finite or out of range.
    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Option<Self> {
        let pos = Self { lat, lng };
        pos.is_valid().then_some(pos)
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && self.lat.abs() <= Self::MAX_LAT_DEG
            && self.lng.abs() <= Self::MAX_LNG_DEG
    }

    pub const fn lat_deg(&self) -> f64 {
        self.lat
    }

    pub const fn lng_deg(&self) -> f64 {
        self.lng
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}
