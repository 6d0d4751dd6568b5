use crate::{
    overlay::Overlay,
    selection::{SelectionCoordinator, SelectionTrigger},
    usecases::{self, DisplayFilter},
    Catalog, Id, MarkerHandle, TimeOfDay, Venue,
};

/// One beer map view instance: the catalog, the list toggles, the
/// selection and the marker overlay.
///
/// All state transitions are synchronous reactions to single events;
/// there is no parallelism within one view.
#[derive(Debug, Default)]
pub struct MapView {
    catalog: Catalog,
    filter: DisplayFilter,
    selection: SelectionCoordinator,
    overlay: Option<Overlay>,
}

impl MapView {
    pub fn new(catalog: Catalog, overlay: Option<Overlay>) -> Self {
        Self {
            catalog,
            filter: DisplayFilter::default(),
            selection: SelectionCoordinator::default(),
            overlay,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    pub fn filter(&self) -> DisplayFilter {
        self.filter
    }

    /// Flips the price sort toggle and returns the new value.
    pub fn toggle_sort_by_price(&mut self) -> bool {
        self.filter.sort_by_price_asc = !self.filter.sort_by_price_asc;
        self.filter.sort_by_price_asc
    }

    /// Flips the happy hour filter toggle and returns the new value.
    pub fn toggle_happy_hour_only(&mut self) -> bool {
        self.filter.only_happy_hour = !self.filter.only_happy_hour;
        self.filter.only_happy_hour
    }

    /// The filtered and sorted sidebar list as of `now`.
    pub fn displayed_at(&self, now: TimeOfDay) -> Vec<Venue> {
        usecases::derive_displayed_list(&self.catalog, &self.filter, now)
    }

    /// Same as [`Self::displayed_at`], evaluated on the local clock.
    pub fn displayed(&self) -> Vec<Venue> {
        self.displayed_at(TimeOfDay::now_local())
    }

    /// Selection triggered by a sidebar list entry.
    ///
    /// Returns `false` for ids that are not part of the catalog.
    pub fn select_from_list(&mut self, id: Id) -> bool {
        let Some(venue) = self.catalog.get(id) else {
            debug!("Ignoring list selection of unknown venue {id}");
            return false;
        };
        self.selection.select(
            venue,
            SelectionTrigger::List,
            self.overlay.as_ref().map(Overlay::map),
        );
        true
    }

    /// Selection triggered by a marker click; pans the camera there.
    ///
    /// Tolerates late events: clicks without an overlay (torn down or
    /// never initialized) and clicks on unknown markers are no-ops.
    pub fn marker_clicked(&mut self, handle: MarkerHandle) -> bool {
        let Some(overlay) = self.overlay.as_ref() else {
            debug!("Ignoring marker click without an overlay");
            return false;
        };
        let Some(venue) = overlay.venue_at(handle).and_then(|id| self.catalog.get(id)) else {
            debug!("Ignoring click on unknown marker {handle:?}");
            return false;
        };
        self.selection
            .select(venue, SelectionTrigger::Marker, Some(overlay.map()));
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selected(&self) -> Option<Id> {
        self.selection.selected()
    }

    pub fn selected_venue(&self) -> Option<&Venue> {
        self.selection.selected().and_then(|id| self.catalog.get(id))
    }

    /// Drops the marker overlay; events arriving afterwards are no-ops.
    pub fn teardown(&mut self) {
        self.selection.clear();
        self.overlay = None;
    }
}
