use crate::{Id, MapGateway, Venue, MIN_FOCUS_ZOOM};

/// Which input surface triggered a selection change.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SelectionTrigger {
    List,
    Marker,
}

/// Single source of truth for the currently focused venue.
///
/// At most one venue is selected system-wide; both the list and the
/// marker overlay converge on the same state here.
#[derive(Debug, Default)]
pub struct SelectionCoordinator {
    selected: Option<Id>,
}

impl SelectionCoordinator {
    pub fn selected(&self) -> Option<Id> {
        self.selected
    }

    /// Selects `venue` and asks the map to focus its position.
    ///
    /// A list-triggered selection additionally raises the zoom so the
    /// focused venue is discernible; a marker click keeps the current
    /// zoom. Without a map the selection state still changes.
    pub fn select(&mut self, venue: &Venue, trigger: SelectionTrigger, map: Option<&dyn MapGateway>) {
        self.selected = Some(venue.id);
        let Some(map) = map else {
            return;
        };
        map.pan_to(venue.pos);
        if trigger == SelectionTrigger::List {
            let zoom = map.zoom();
            map.set_zoom(zoom.max(MIN_FOCUS_ZOOM));
        }
    }

    /// Back to the initial no-selection state.
    pub fn clear(&mut self) {
        self.selected = None;
    }
}
