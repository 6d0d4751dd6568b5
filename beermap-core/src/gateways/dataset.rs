use thiserror::Error;

use beermap_boundary::VenueRecord;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("The dataset source is unreachable: {0}")]
    Unreachable(String),
    #[error("The dataset document is malformed: {0}")]
    Malformed(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Source of the venue dataset document.
pub trait DatasetGateway: Send {
    fn fetch_venues(&self) -> Result<Vec<VenueRecord>, DatasetError>;
}
