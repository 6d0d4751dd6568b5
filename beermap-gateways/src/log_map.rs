use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};

use beermap_core::gateways::{
    MapApi, MapError, MapGateway, MapLoader, MapOptions, MarkerHandle, NewMarker,
};
use beermap_entities::geo::MapPoint;

/// Headless map backend that logs every consumed capability.
///
/// Stands in for a real mapping engine when the view runs without a
/// rendering surface, e.g. in the CLI.
#[derive(Debug, Default)]
pub struct LogMapLoader;

impl MapLoader for LogMapLoader {
    fn load(&self) -> Result<Box<dyn MapApi>, MapError> {
        log::debug!("Map library loaded");
        Ok(Box::new(LogMapApi))
    }
}

#[derive(Debug)]
struct LogMapApi;

impl MapApi for LogMapApi {
    fn new_map(&self, options: MapOptions) -> Result<Box<dyn MapGateway>, MapError> {
        log::info!(
            "New map centered at {} with zoom {}",
            options.center,
            options.zoom
        );
        Ok(Box::new(LogMap {
            next_marker: AtomicU64::new(0),
            zoom: AtomicU8::new(options.zoom),
        }))
    }
}

/// One headless map instance with a tracked zoom level.
#[derive(Debug)]
pub struct LogMap {
    next_marker: AtomicU64,
    zoom: AtomicU8,
}

impl MapGateway for LogMap {
    fn add_marker(&self, marker: NewMarker<'_>) -> Result<MarkerHandle, MapError> {
        let handle = MarkerHandle(self.next_marker.fetch_add(1, Ordering::Relaxed));
        log::debug!("Marker {handle:?} at {} ({})", marker.pos, marker.title);
        Ok(handle)
    }

    fn pan_to(&self, pos: MapPoint) {
        log::info!("Camera pans to {pos}");
    }

    fn zoom(&self) -> u8 {
        self.zoom.load(Ordering::Relaxed)
    }

    fn set_zoom(&self, zoom: u8) {
        self.zoom.store(zoom, Ordering::Relaxed);
        log::info!("Zoom set to {zoom}");
    }
}
