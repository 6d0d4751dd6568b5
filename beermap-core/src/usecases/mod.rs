mod derive_displayed_list;
mod error;
mod happy_hour;
mod load_catalog;

pub use self::{derive_displayed_list::*, error::Error, happy_hour::*, load_catalog::*};

type Result<T> = std::result::Result<T, Error>;
