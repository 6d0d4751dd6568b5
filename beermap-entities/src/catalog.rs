use std::{collections::HashSet, slice};

use thiserror::Error;

use crate::{id::Id, venue::Venue};

/// The full, immutable set of venues loaded for one session.
///
/// Created once on a successful load and never mutated afterwards;
/// replacing it requires a full reload. The constructor enforces unique
/// ids; positions are valid by construction of [`crate::geo::MapPoint`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Catalog(Vec<Venue>);

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Duplicate venue id {0}")]
    DuplicateId(Id),
}

impl Catalog {
    pub fn new(venues: Vec<Venue>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::with_capacity(venues.len());
        for venue in &venues {
            if !ids.insert(venue.id) {
                return Err(CatalogError::DuplicateId(venue.id));
            }
        }
        Ok(Self(venues))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Venue> {
        self.0.iter()
    }

    pub fn get(&self, id: Id) -> Option<&Venue> {
        self.0.iter().find(|venue| venue.id == id)
    }

    pub fn first(&self) -> Option<&Venue> {
        self.0.first()
    }

    pub fn as_slice(&self) -> &[Venue] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Venue;
    type IntoIter = slice::Iter<'a, Venue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
