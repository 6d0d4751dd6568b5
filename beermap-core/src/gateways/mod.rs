mod dataset;
mod map;

pub use self::{dataset::*, map::*};
