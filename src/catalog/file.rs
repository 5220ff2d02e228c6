use std::collections::BTreeMap;
use std::path::PathBuf;

use log::debug;

use crate::catalog::{Catalog, CatalogSource, Song, StationId};
use crate::errors::Result;

/// Reads `{"<station>": {"name": ..., "frequencies": [...], "durations": [...]}}`.
///
/// Keys outside the station range and songs breaking the length/duration
/// rules fail the whole load. Stations left out of the file are simply absent.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileCatalog { path: path.into() }
    }
}

impl CatalogSource for JsonFileCatalog {
    fn describe(&self) -> String {
        format!("catalog file {}", self.path.display())
    }

    fn load(&self) -> Result<Catalog> {
        let contents = std::fs::read_to_string(&self.path)?;
        let songs: BTreeMap<StationId, Song> = serde_json::from_str(&contents)?;
        debug!("Parsed {} songs from {:?}", songs.len(), self.path);
        Ok(songs.into_iter().collect())
    }
}
