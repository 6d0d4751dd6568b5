//! # beermap-application
//!
//! Stateful flows of the beer map view: the initialization join, the
//! selection coordinator and the marker overlay, wired to the gateway
//! traits of `beermap-core`.

#[macro_use]
extern crate log;

mod icon;
mod init;
mod overlay;
mod selection;
mod view;

pub mod error;

pub mod prelude {
    pub use super::{icon::*, init::*, overlay::*, selection::*, view::*};
}

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use beermap_core::{gateways::*, usecases};
pub(crate) use beermap_entities::{catalog::*, geo::*, id::*, time_of_day::*, venue::*};

#[cfg(test)]
pub(crate) mod tests;
