use beermap_entities::{catalog::Catalog, time_of_day::TimeOfDay, venue::Venue};

use super::happy_hour::is_happy_hour_active;

/// Toggle state of the sidebar list. Both toggles default to off.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFilter {
    pub only_happy_hour: bool,
    pub sort_by_price_asc: bool,
}

/// Derives the displayed, ordered subset of the catalog.
///
/// Filtering keeps only venues whose happy hour is active at `now`.
/// Sorting is stable, so venues with equal prices keep their catalog
/// order. With both toggles off the result equals the catalog order.
/// A fresh sequence is returned on every call.
pub fn derive_displayed_list(
    catalog: &Catalog,
    filter: &DisplayFilter,
    now: TimeOfDay,
) -> Vec<Venue> {
    let mut venues: Vec<_> = catalog
        .iter()
        .filter(|venue| !filter.only_happy_hour || is_happy_hour_active(venue.happy_hour_end, now))
        .cloned()
        .collect();
    if filter.sort_by_price_asc {
        venues.sort_by(|a, b| a.price.total_cmp(&b.price));
    }
    venues
}
