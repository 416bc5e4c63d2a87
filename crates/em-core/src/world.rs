//! The world graph that owns all locations.
//!
//! Locations are created once at world-build time and referenced by
//! [`LocationId`], an ordinal handle minted by [`World::add_location`].
//! The graph itself never changes during play; only location flags, item
//! ownership, and trial state do.

use crate::error::{CoreError, CoreResult};
use crate::location::Location;
use crate::trial::Trial;

/// Ordinal handle to a location in a [`World`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocationId(usize);

impl LocationId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "location #{}", self.0)
    }
}

/// The set of locations and their edges.
#[derive(Debug, Clone, Default)]
pub struct World {
    locations: Vec<Location>,
    start: Option<LocationId>,
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location. Names must be unique (case-insensitive).
    pub fn add_location(&mut self, location: Location) -> CoreResult<LocationId> {
        if self
            .locations
            .iter()
            .any(|l| l.name.eq_ignore_ascii_case(&location.name))
        {
            return Err(CoreError::DuplicateLocation(location.name));
        }
        let id = LocationId::new(self.locations.len());
        self.locations.push(location);
        Ok(id)
    }

    /// Set the starting location.
    pub fn set_start(&mut self, id: LocationId) {
        self.start = Some(id);
    }

    /// The starting location. Errors if the world has none.
    pub fn start(&self) -> CoreResult<LocationId> {
        self.start
            .ok_or_else(|| CoreError::LocationNotFound(LocationId::new(0)))
    }

    /// Borrow a location.
    pub fn location(&self, id: LocationId) -> &Location {
        &self.locations[id.index()]
    }

    /// Mutably borrow a location.
    pub fn location_mut(&mut self, id: LocationId) -> &mut Location {
        &mut self.locations[id.index()]
    }

    /// Add a directed edge from one location to another under a keyword.
    pub fn add_exit(&mut self, from: LocationId, key: &str, to: LocationId) -> CoreResult<()> {
        if to.index() >= self.locations.len() {
            return Err(CoreError::LocationNotFound(to));
        }
        self.locations
            .get_mut(from.index())
            .ok_or(CoreError::LocationNotFound(from))?
            .add_exit(key, to)
    }

    /// Follow an edge keyword from a location, if one exists.
    pub fn connection(&self, from: LocationId, key: &str) -> Option<LocationId> {
        self.location(from).exit_to(key)
    }

    /// Find a location by name (case-insensitive).
    pub fn find(&self, name: &str) -> Option<LocationId> {
        self.locations
            .iter()
            .position(|l| l.name.eq_ignore_ascii_case(name))
            .map(LocationId::new)
    }

    /// Iterate over all locations.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    /// Iterate over all trials in the world.
    pub fn trials(&self) -> impl Iterator<Item = &Trial> {
        self.locations.iter().filter_map(|l| l.trial.as_ref())
    }
}
