#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # beermap-entities
//!
//! Reusable, agnostic domain entities for the beer map.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod catalog;
pub mod geo;
pub mod id;
pub mod price;
pub mod rating;
pub mod time_of_day;
pub mod venue;
