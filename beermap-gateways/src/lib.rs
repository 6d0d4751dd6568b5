//! Concrete gateway implementations for the beer map: the HTTP dataset
//! source and a headless diagnostic map backend.

mod http;
mod log_map;

pub use self::{http::*, log_map::*};
