use thiserror::Error;

use beermap_core::{
    gateways::{DatasetError, MapError},
    usecases::Error as UsecaseError,
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Usecase(#[from] UsecaseError),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    Map(#[from] MapError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
