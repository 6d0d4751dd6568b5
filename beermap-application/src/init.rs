use crate::{
    error::AppError, overlay::Overlay, usecases, view::MapView, Catalog, DatasetGateway,
    MapLoader, MapOptions, MapPoint, TimeOfDay, DEFAULT_ZOOM,
};

// Fallback map center when the catalog is empty.
const DEFAULT_CENTER_LAT_DEG: f64 = 41.015137;
const DEFAULT_CENTER_LNG_DEG: f64 = 28.97953;

/// Joins the dataset fetch and the map library load, then builds the view.
///
/// The two operations run concurrently on blocking tasks and may complete
/// in either order; the map and its marker overlay are only constructed
/// after BOTH have completed. Passing no map loader (missing credential)
/// leaves the whole map subsystem inert.
///
/// Every initialization failure is logged and swallowed: the returned
/// view may have an empty catalog, no overlay, or both, but this function
/// never fails.
pub async fn init_map_view<D, L>(dataset: D, map_loader: Option<L>) -> MapView
where
    D: DatasetGateway + 'static,
    L: MapLoader + 'static,
{
    let fetch = tokio::task::spawn_blocking(move || {
        let records = dataset.fetch_venues()?;
        usecases::load_catalog(records).map_err(AppError::from)
    });
    let load = map_loader.map(|loader| tokio::task::spawn_blocking(move || loader.load()));

    let catalog = match fetch.await {
        Ok(Ok(catalog)) => catalog,
        Ok(Err(err)) => {
            warn!("Failed to load the venue catalog: {err}");
            Catalog::default()
        }
        Err(err) => {
            error!("The catalog loading task failed: {err}");
            Catalog::default()
        }
    };

    let api = match load {
        Some(handle) => match handle.await {
            Ok(Ok(api)) => Some(api),
            Ok(Err(err)) => {
                warn!("The map library could not be loaded: {err}");
                None
            }
            Err(err) => {
                error!("The map loading task failed: {err}");
                None
            }
        },
        None => {
            info!("No map credential configured, the map subsystem stays inert");
            None
        }
    };

    let overlay = api.and_then(|api| {
        let center = catalog.first().map(|venue| venue.pos).unwrap_or_else(|| {
            MapPoint::try_from_lat_lng_deg(DEFAULT_CENTER_LAT_DEG, DEFAULT_CENTER_LNG_DEG)
                .unwrap_or_default()
        });
        let map = match api.new_map(MapOptions {
            center,
            zoom: DEFAULT_ZOOM,
        }) {
            Ok(map) => map,
            Err(err) => {
                warn!("Failed to construct the map: {err}");
                return None;
            }
        };
        match Overlay::create(map, &catalog, TimeOfDay::now_local()) {
            Ok(overlay) => Some(overlay),
            Err(err) => {
                warn!("Failed to populate the marker overlay: {err}");
                None
            }
        }
    });

    MapView::new(catalog, overlay)
}
