use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex,
};

use beermap_boundary::VenueRecord;

use crate::{
    error::AppError,
    icon::{marker_icon, MarkerColor},
    init::init_map_view,
    overlay::Overlay,
    prelude::*,
    usecases, Catalog, DatasetError, DatasetGateway, MapApi, MapError, MapGateway, MapLoader,
    MapOptions, MapPoint, MarkerHandle, NewMarker, TimeOfDay, MIN_FOCUS_ZOOM,
};

pub fn new_record(id: u64, price: f64, happy_hour_end: &str) -> VenueRecord {
    VenueRecord {
        id,
        name: format!("venue {id}"),
        lat: 41.0 + id as f64 / 100.0,
        lng: 29.0,
        cheapest_beer: price,
        happy_hour_end: happy_hour_end.into(),
        address: format!("https://maps.example.com/{id}"),
        rating: 4.0,
        description: None,
    }
}

pub fn new_catalog(records: Vec<VenueRecord>) -> Catalog {
    usecases::load_catalog(records).unwrap()
}

fn t(s: &str) -> TimeOfDay {
    s.parse().unwrap()
}

/// Commands issued to the mock map, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum MapCommand {
    AddMarker {
        handle: MarkerHandle,
        title: String,
        icon_url: String,
    },
    PanTo(MapPoint),
    SetZoom(u8),
}

#[derive(Debug, Default)]
struct MockMapInner {
    commands: Mutex<Vec<MapCommand>>,
    zoom: Mutex<u8>,
    next_marker: AtomicU64,
}

/// Recording stand-in for the external map instance.
#[derive(Debug, Clone, Default)]
pub struct MockMap(Arc<MockMapInner>);

impl MockMap {
    pub fn commands(&self) -> Vec<MapCommand> {
        self.0.commands.lock().unwrap().clone()
    }

    pub fn pan_count(&self) -> usize {
        self.commands()
            .iter()
            .filter(|c| matches!(c, MapCommand::PanTo(_)))
            .count()
    }
}

impl MapGateway for MockMap {
    fn add_marker(&self, marker: NewMarker<'_>) -> Result<MarkerHandle, MapError> {
        let handle = MarkerHandle(self.0.next_marker.fetch_add(1, Ordering::Relaxed));
        self.0.commands.lock().unwrap().push(MapCommand::AddMarker {
            handle,
            title: marker.title.to_owned(),
            icon_url: marker.icon.url,
        });
        Ok(handle)
    }

    fn pan_to(&self, pos: MapPoint) {
        self.0.commands.lock().unwrap().push(MapCommand::PanTo(pos));
    }

    fn zoom(&self) -> u8 {
        *self.0.zoom.lock().unwrap()
    }

    fn set_zoom(&self, zoom: u8) {
        *self.0.zoom.lock().unwrap() = zoom;
        self.0.commands.lock().unwrap().push(MapCommand::SetZoom(zoom));
    }
}

struct MockApi {
    map: MockMap,
}

impl MapApi for MockApi {
    fn new_map(&self, options: MapOptions) -> Result<Box<dyn MapGateway>, MapError> {
        *self.map.0.zoom.lock().unwrap() = options.zoom;
        Ok(Box::new(self.map.clone()))
    }
}

pub struct MockLoader {
    map: MockMap,
    fail: bool,
}

impl MockLoader {
    pub fn new(map: MockMap) -> Self {
        Self { map, fail: false }
    }

    pub fn failing() -> Self {
        Self {
            map: MockMap::default(),
            fail: true,
        }
    }
}

impl MapLoader for MockLoader {
    fn load(&self) -> Result<Box<dyn MapApi>, MapError> {
        if self.fail {
            return Err(MapError::Unavailable("no network".into()));
        }
        Ok(Box::new(MockApi {
            map: self.map.clone(),
        }))
    }
}

pub struct MockDataset {
    records: Option<Vec<VenueRecord>>,
}

impl MockDataset {
    pub fn new(records: Vec<VenueRecord>) -> Self {
        Self {
            records: Some(records),
        }
    }

    pub fn failing() -> Self {
        Self { records: None }
    }
}

impl DatasetGateway for MockDataset {
    fn fetch_venues(&self) -> Result<Vec<VenueRecord>, DatasetError> {
        self.records
            .clone()
            .ok_or_else(|| DatasetError::Unreachable("connection refused".into()))
    }
}

fn fixture_records() -> Vec<VenueRecord> {
    vec![
        new_record(1, 100.0, "18:00"),
        new_record(2, 80.0, "23:59"),
        new_record(3, 120.0, "16:30"),
    ]
}

fn fixture_view(map: &MockMap) -> MapView {
    let catalog = new_catalog(fixture_records());
    let overlay = Overlay::create(Box::new(map.clone()), &catalog, t("17:00")).unwrap();
    MapView::new(catalog, Some(overlay))
}

#[tokio::test]
async fn init_creates_one_marker_per_catalog_venue() {
    let map = MockMap::default();
    let dataset = MockDataset::new(fixture_records());
    let view = init_map_view(dataset, Some(MockLoader::new(map.clone()))).await;

    assert_eq!(view.catalog().len(), 3);
    let overlay = view.overlay().unwrap();
    assert_eq!(overlay.len(), 3);
    for venue in view.catalog() {
        assert!(overlay.marker_of(venue.id).is_some());
    }
}

#[tokio::test]
async fn init_without_credential_keeps_the_catalog_and_creates_no_markers() {
    let dataset = MockDataset::new(fixture_records());
    let view = init_map_view(dataset, None::<MockLoader>).await;

    assert_eq!(view.catalog().len(), 3);
    assert!(view.overlay().is_none());
}

#[tokio::test]
async fn init_with_unreachable_dataset_yields_an_empty_view() {
    let map = MockMap::default();
    let view = init_map_view(MockDataset::failing(), Some(MockLoader::new(map.clone()))).await;

    assert!(view.catalog().is_empty());
    // The map itself still comes up, with an empty marker set.
    let overlay = view.overlay().unwrap();
    assert!(overlay.is_empty());
}

#[tokio::test]
async fn init_with_failing_map_library_keeps_the_catalog() {
    let view = init_map_view(MockDataset::new(fixture_records()), Some(MockLoader::failing())).await;

    assert_eq!(view.catalog().len(), 3);
    assert!(view.overlay().is_none());
}

#[tokio::test]
async fn init_with_malformed_record_leaves_the_catalog_empty() {
    let mut records = fixture_records();
    records.push(new_record(4, 60.0, "late"));
    let view = init_map_view(MockDataset::new(records), None::<MockLoader>).await;

    assert!(view.catalog().is_empty());
}

#[test]
fn markers_are_colored_by_the_happy_hour_status_at_creation_time() {
    let map = MockMap::default();
    let catalog = new_catalog(fixture_records());
    Overlay::create(Box::new(map.clone()), &catalog, t("17:00")).unwrap();

    let gold = marker_icon(MarkerColor::HappyHour).url;
    let blue = marker_icon(MarkerColor::AfterHours).url;
    let icons: Vec<_> = map
        .commands()
        .into_iter()
        .filter_map(|c| match c {
            MapCommand::AddMarker { icon_url, .. } => Some(icon_url),
            _ => None,
        })
        .collect();
    // Venues 1 and 2 are still active at 17:00, venue 3 has lapsed.
    assert_eq!(icons, [gold.clone(), gold, blue]);
}

#[test]
fn a_failing_marker_aborts_the_whole_pass() {
    struct BrokenMap;

    impl MapGateway for BrokenMap {
        fn add_marker(&self, _: NewMarker<'_>) -> Result<MarkerHandle, MapError> {
            Err(MapError::Unavailable("marker limit".into()))
        }
        fn pan_to(&self, _: MapPoint) {}
        fn zoom(&self) -> u8 {
            0
        }
        fn set_zoom(&self, _: u8) {}
    }

    let catalog = new_catalog(fixture_records());
    let err = Overlay::create(Box::new(BrokenMap), &catalog, t("17:00")).unwrap_err();
    assert!(matches!(err, AppError::Map(_)));
}

#[test]
fn list_and_marker_selection_converge_on_the_same_state() {
    let map = MockMap::default();
    let mut view = fixture_view(&map);
    let id = view.catalog().first().unwrap().id;
    let handle = view.overlay().unwrap().marker_of(id).unwrap();

    assert!(view.select_from_list(id));
    let from_list = view.selected();

    view.clear_selection();
    assert_eq!(view.selected(), None);

    assert!(view.marker_clicked(handle));
    assert_eq!(view.selected(), from_list);
    assert_eq!(view.selected_venue().unwrap().id, id);
}

#[test]
fn selection_pans_the_camera_to_the_venue() {
    let map = MockMap::default();
    let mut view = fixture_view(&map);
    let venue = view.catalog().first().unwrap().clone();
    let handle = view.overlay().unwrap().marker_of(venue.id).unwrap();

    view.marker_clicked(handle);
    assert!(map.commands().contains(&MapCommand::PanTo(venue.pos)));
    assert_eq!(map.pan_count(), 1);
}

#[test]
fn list_selection_raises_the_zoom_to_the_focus_minimum() {
    let map = MockMap::default();
    let mut view = fixture_view(&map);
    let id = view.catalog().first().unwrap().id;

    view.select_from_list(id);
    assert!(map.commands().contains(&MapCommand::SetZoom(MIN_FOCUS_ZOOM)));
    assert_eq!(map.zoom(), MIN_FOCUS_ZOOM);

    // A second selection at a higher zoom keeps that zoom.
    map.set_zoom(16);
    view.select_from_list(id);
    assert_eq!(map.zoom(), 16);
}

#[test]
fn marker_selection_keeps_the_current_zoom() {
    let map = MockMap::default();
    let mut view = fixture_view(&map);
    let id = view.catalog().first().unwrap().id;
    let handle = view.overlay().unwrap().marker_of(id).unwrap();
    let zoom_before = map.zoom();

    view.marker_clicked(handle);
    assert_eq!(map.zoom(), zoom_before);
}

#[test]
fn unknown_ids_and_late_events_are_no_ops() {
    let map = MockMap::default();
    let mut view = fixture_view(&map);
    let id = view.catalog().first().unwrap().id;
    let handle = view.overlay().unwrap().marker_of(id).unwrap();

    assert!(!view.select_from_list(99.into()));
    assert!(!view.marker_clicked(MarkerHandle(999)));
    assert_eq!(view.selected(), None);

    view.select_from_list(id);
    view.teardown();
    assert_eq!(view.selected(), None);
    assert!(view.overlay().is_none());

    // Events arriving after teardown must not panic.
    assert!(!view.marker_clicked(handle));
    assert!(view.select_from_list(id));
}

#[test]
fn toggles_drive_the_displayed_list() {
    let map = MockMap::default();
    let mut view = fixture_view(&map);
    let now = t("17:00");

    assert_eq!(ids(&view.displayed_at(now)), [1, 2, 3]);

    assert!(view.toggle_sort_by_price());
    assert_eq!(ids(&view.displayed_at(now)), [2, 1, 3]);

    assert!(view.toggle_happy_hour_only());
    assert_eq!(ids(&view.displayed_at(now)), [2, 1]);

    assert!(!view.toggle_sort_by_price());
    assert_eq!(ids(&view.displayed_at(now)), [1, 2]);

    // Filtering affects the sidebar only, never the marker overlay.
    assert_eq!(view.overlay().unwrap().len(), view.catalog().len());
}

fn ids(venues: &[crate::Venue]) -> Vec<u64> {
    venues.iter().map(|v| v.id.into()).collect()
}
