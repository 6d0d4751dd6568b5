use crate::{geo::MapPoint, id::Id, price::Price, rating::Rating, time_of_day::TimeOfDay};

/// A place shown on the map, with its price and availability attributes.
///
/// `address` is an opaque map-link string, not a postal address.
#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    pub id: Id,
    pub name: String,
    pub pos: MapPoint,
    pub price: Price,
    pub happy_hour_end: TimeOfDay,
    pub address: String,
    pub rating: Rating,
    pub description: Option<String>,
}
