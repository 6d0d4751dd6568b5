use std::{collections::HashMap, fmt};

use crate::{
    icon::{marker_icon, MarkerColor},
    usecases, Catalog, Id, MapGateway, MarkerHandle, NewMarker, Result, TimeOfDay,
};

/// One visual marker per catalog venue on the external map.
///
/// Built exactly once after both the catalog load and the map
/// initialization have completed; the catalog is immutable, so there is
/// no incremental diffing. Marker colors reflect the happy hour status
/// at creation time and are not refreshed afterwards: a marker created
/// before its window lapses keeps its color until the view is rebuilt.
pub struct Overlay {
    map: Box<dyn MapGateway>,
    markers: HashMap<Id, MarkerHandle>,
}

impl fmt::Debug for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Overlay")
            .field("markers", &self.markers)
            .finish_non_exhaustive()
    }
}

impl Overlay {
    /// Creates one marker per catalog venue, colored as of `now`.
    ///
    /// A failing marker aborts the whole pass; the initialization flow
    /// logs and swallows that outcome.
    pub fn create(map: Box<dyn MapGateway>, catalog: &Catalog, now: TimeOfDay) -> Result<Self> {
        let mut markers = HashMap::with_capacity(catalog.len());
        for venue in catalog {
            let color = if usecases::is_happy_hour_active(venue.happy_hour_end, now) {
                MarkerColor::HappyHour
            } else {
                MarkerColor::AfterHours
            };
            let handle = map.add_marker(NewMarker {
                pos: venue.pos,
                title: &venue.name,
                icon: marker_icon(color),
            })?;
            markers.insert(venue.id, handle);
        }
        debug!("Created {} markers", markers.len());
        Ok(Self { map, markers })
    }

    pub fn map(&self) -> &dyn MapGateway {
        self.map.as_ref()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn marker_of(&self, id: Id) -> Option<MarkerHandle> {
        self.markers.get(&id).copied()
    }

    /// Reverse lookup for dispatching marker clicks.
    pub fn venue_at(&self, handle: MarkerHandle) -> Option<Id> {
        self.markers
            .iter()
            .find_map(|(id, h)| (*h == handle).then_some(*id))
    }
}
