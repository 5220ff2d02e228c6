/// Songs compiled into the binary
pub mod builtin;
/// Song and station id types
pub mod entities;
/// Songs read from a JSON file at startup
pub mod file;

use std::collections::BTreeMap;

pub use builtin::BuiltinCatalog;
pub use entities::{Song, StationId};
pub use file::JsonFileCatalog;

use crate::errors::Result;

/// Where the catalog comes from. Loaded once, before the server binds.
pub trait CatalogSource: Send + Sync {
    /// Human readable label used in startup logs
    fn describe(&self) -> String;

    fn load(&self) -> Result<Catalog>;
}

/// Immutable station -> song table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    songs: BTreeMap<StationId, Song>,
}

impl Catalog {
    pub fn new(songs: impl IntoIterator<Item = (StationId, Song)>) -> Self {
        Catalog {
            songs: songs.into_iter().collect(),
        }
    }

    pub fn get(&self, station: StationId) -> Option<&Song> {
        self.songs.get(&station)
    }

    pub fn iter(&self) -> impl Iterator<Item = (StationId, &Song)> {
        self.songs.iter().map(|(id, song)| (*id, song))
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

impl FromIterator<(StationId, Song)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (StationId, Song)>>(iter: I) -> Self {
        Catalog::new(iter)
    }
}
