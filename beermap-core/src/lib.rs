//! # beermap-core
//!
//! Business logic of the beer map: pure usecases over the entities and
//! gateway traits at the seams to the external collaborators (the venue
//! dataset source and the mapping engine).

pub mod gateways;
pub mod usecases;
