use thiserror::Error;

use beermap_boundary::ConversionError;
use beermap_entities::catalog::CatalogError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
