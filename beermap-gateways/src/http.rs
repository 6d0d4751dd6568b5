use beermap_boundary::VenueRecord;
use beermap_core::gateways::{DatasetError, DatasetGateway};

/// Venue dataset served as a JSON document over HTTP.
#[derive(Debug, Clone)]
pub struct HttpDatasetGateway {
    url: String,
}

impl HttpDatasetGateway {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl DatasetGateway for HttpDatasetGateway {
    fn fetch_venues(&self) -> Result<Vec<VenueRecord>, DatasetError> {
        log::debug!("GET {}", self.url);
        let response = reqwest::blocking::get(&self.url)
            .map_err(|err| DatasetError::Unreachable(err.to_string()))?;
        if !response.status().is_success() {
            return Err(DatasetError::Unreachable(format!(
                "GET {} returned {}",
                self.url,
                response.status()
            )));
        }
        response
            .json()
            .map_err(|err| DatasetError::Malformed(err.to_string()))
    }
}
