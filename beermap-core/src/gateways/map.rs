use thiserror::Error;

use beermap_entities::geo::MapPoint;

/// Initial zoom level of a newly constructed map.
pub const DEFAULT_ZOOM: u8 = 12;

/// Minimum zoom level after focusing a venue from the list.
pub const MIN_FOCUS_ZOOM: u8 = 14;

/// Logical edge length of a marker icon in pixels.
pub const MARKER_ICON_SIZE_PX: u32 = 36;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("The map library is not available: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Opaque reference to a marker owned by the map instance.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct MarkerHandle(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerIcon {
    /// Inline image reference, e.g. a `data:` URL.
    pub url: String,
    pub size_px: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMarker<'a> {
    pub pos: MapPoint,
    pub title: &'a str,
    pub icon: MarkerIcon,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapOptions {
    pub center: MapPoint,
    pub zoom: u8,
}

/// Asynchronously initialized loader of the external map library.
///
/// Loading blocks until the library is ready and is run on a dedicated
/// blocking task by the initialization flow.
pub trait MapLoader: Send {
    fn load(&self) -> Result<Box<dyn MapApi>, MapError>;
}

/// The loaded map library, able to construct map instances.
pub trait MapApi: Send {
    fn new_map(&self, options: MapOptions) -> Result<Box<dyn MapGateway>, MapError>;
}

/// Capabilities consumed from one external map instance.
///
/// Implementations use interior mutability; the map instance is owned by
/// the external collaborator and only commanded through this trait.
pub trait MapGateway: Send {
    fn add_marker(&self, marker: NewMarker<'_>) -> Result<MarkerHandle, MapError>;
    fn pan_to(&self, pos: MapPoint);
    fn zoom(&self) -> u8;
    fn set_zoom(&self, zoom: u8);
}
