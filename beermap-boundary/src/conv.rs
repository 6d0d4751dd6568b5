use thiserror::Error;

use beermap_entities::{
    geo::MapPoint, rating::Rating, time_of_day::TimeOfDayParseError, venue::Venue,
};

use super::VenueRecord;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConversionError {
    #[error("Invalid position ({lat}, {lng}) of venue {id}")]
    Position { id: u64, lat: f64, lng: f64 },
    #[error("Invalid happy hour end of venue {id}: {source}")]
    HappyHourEnd {
        id: u64,
        #[source]
        source: TimeOfDayParseError,
    },
}

impl TryFrom<VenueRecord> for Venue {
    type Error = ConversionError;

    fn try_from(from: VenueRecord) -> Result<Self, Self::Error> {
        let VenueRecord {
            id,
            name,
            lat,
            lng,
            cheapest_beer,
            happy_hour_end,
            address,
            rating,
            description,
        } = from;
        let pos = MapPoint::try_from_lat_lng_deg(lat, lng)
            .ok_or(ConversionError::Position { id, lat, lng })?;
        let happy_hour_end = happy_hour_end
            .parse()
            .map_err(|source| ConversionError::HappyHourEnd { id, source })?;
        Ok(Self {
            id: id.into(),
            name,
            pos,
            price: cheapest_beer.into(),
            happy_hour_end,
            address,
            rating: Rating::from(rating).clamp(),
            description,
        })
    }
}
