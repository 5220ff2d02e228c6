use std::collections::BTreeMap;
use std::num::IntErrorKind;
use std::sync::Arc;

use log::debug;
use serde::Serialize;

use crate::catalog::{Catalog, StationId};
use crate::errors::{Error, Result};

pub const MISSING_STATION: &str = "Missing station parameter";
pub const STATION_OUT_OF_RANGE: &str = "Station must be between 0 and 9";

/// Body of a successful `/song` lookup. The song name is not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongPayload {
    pub frequencies: Vec<u32>,
    pub durations: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationInfo {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub stations: usize,
}

/// Answers song, listing and health queries over a catalog that never changes.
///
/// Cloning is cheap; every clone shares the same catalog.
#[derive(Debug, Clone)]
pub struct SongCatalogService {
    catalog: Arc<Catalog>,
}

impl SongCatalogService {
    pub fn new(catalog: Catalog) -> Self {
        SongCatalogService {
            catalog: Arc::new(catalog),
        }
    }

    /// Looks up the melody for the raw `station` query value.
    pub fn get_song(&self, station: Option<&str>) -> Result<SongPayload> {
        let station = parse_station(station)?;
        let song = self.catalog.get(station).ok_or(Error::NotFound(station))?;
        debug!("Serving {:?} on station {station}", song.name());

        Ok(SongPayload {
            frequencies: song.frequencies().to_vec(),
            durations: song.durations().to_vec(),
        })
    }

    pub fn list_stations(&self) -> BTreeMap<String, StationInfo> {
        self.catalog
            .iter()
            .map(|(station, song)| {
                (
                    station.to_string(),
                    StationInfo {
                        name: song.name().to_string(),
                    },
                )
            })
            .collect()
    }

    pub fn health(&self) -> Health {
        Health {
            status: "ok",
            stations: self.catalog.len(),
        }
    }
}

/// Strict integer parse of the `station` query value.
///
/// Anything that is not an integer counts as missing. Integers too large
/// for `i64` are still integers, so they fail the range check instead.
/// Single underscores between digits are separators (`0_5` is 5).
pub fn parse_station(raw: Option<&str>) -> Result<StationId> {
    let missing = || Error::InvalidRequest(MISSING_STATION.into());
    let raw = raw.ok_or_else(missing)?;
    let digits = strip_digit_separators(raw.trim()).ok_or_else(missing)?;

    let value = match digits.parse::<i64>() {
        Ok(value) => value,
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            return Err(Error::InvalidRequest(STATION_OUT_OF_RANGE.into()));
        }
        Err(_) => return Err(missing()),
    };

    u8::try_from(value)
        .ok()
        .and_then(StationId::new)
        .ok_or_else(|| Error::InvalidRequest(STATION_OUT_OF_RANGE.into()))
}

// None when an underscore is not flanked by digits on both sides
fn strip_digit_separators(raw: &str) -> Option<String> {
    let bytes = raw.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'_' {
            continue;
        }
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        if !(before.is_some_and(|c| c.is_ascii_digit()) && after.is_some_and(|c| c.is_ascii_digit()))
        {
            return None;
        }
    }
    Some(raw.replace('_', ""))
}
