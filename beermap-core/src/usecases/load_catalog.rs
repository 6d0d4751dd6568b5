use beermap_boundary::VenueRecord;
use beermap_entities::{catalog::Catalog, venue::Venue};

use super::Result;

/// Converts a fetched dataset document into the immutable catalog.
///
/// The load is all-or-nothing: a single malformed record or a duplicate
/// id aborts it and the catalog stays empty.
pub fn load_catalog(records: Vec<VenueRecord>) -> Result<Catalog> {
    let mut venues = Vec::with_capacity(records.len());
    for record in records {
        venues.push(Venue::try_from(record)?);
    }
    Ok(Catalog::new(venues)?)
}
