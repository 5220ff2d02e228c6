use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::errors::{Error, Result};

/// Station number a client tunes to. Always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationId(u8);

impl StationId {
    pub const MIN: StationId = StationId(0);
    pub const MAX: StationId = StationId(9);

    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX.0).then_some(StationId(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = StationId> {
        (Self::MIN.0..=Self::MAX.0).map(StationId)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for StationId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.parse::<u8>()
            .ok()
            .and_then(StationId::new)
            .ok_or_else(|| {
                Error::CatalogError(format!(
                    "invalid station id {s:?}, expected {}..={}",
                    Self::MIN,
                    Self::MAX
                ))
            })
    }
}

impl<'de> Deserialize<'de> for StationId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Deserialize)]
struct RawSong {
    name: String,
    frequencies: Vec<u32>,
    durations: Vec<u32>,
}

/// A melody: frequencies in Hz (0 is a rest) paired with durations in ms.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawSong")]
pub struct Song {
    name: String,
    frequencies: Vec<u32>,
    durations: Vec<u32>,
}

impl Song {
    pub fn new(
        name: impl Into<String>,
        frequencies: Vec<u32>,
        durations: Vec<u32>,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::CatalogError("song name must not be empty".into()));
        }
        if frequencies.is_empty() {
            return Err(Error::CatalogError(format!("song {name:?} has no notes")));
        }
        if frequencies.len() != durations.len() {
            return Err(Error::CatalogError(format!(
                "song {name:?} has {} frequencies but {} durations",
                frequencies.len(),
                durations.len()
            )));
        }
        if let Some(pos) = durations.iter().position(|&d| d == 0) {
            return Err(Error::CatalogError(format!(
                "song {name:?} has a zero duration at note {pos}"
            )));
        }
        Ok(Song {
            name,
            frequencies,
            durations,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frequencies(&self) -> &[u32] {
        &self.frequencies
    }

    pub fn durations(&self) -> &[u32] {
        &self.durations
    }
}

impl TryFrom<RawSong> for Song {
    type Error = Error;

    fn try_from(raw: RawSong) -> Result<Self> {
        Song::new(raw.name, raw.frequencies, raw.durations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_ids_cover_zero_to_nine() {
        let ids: Vec<u8> = StationId::all().map(StationId::get).collect();
        assert_eq!(ids, (0..=9).collect::<Vec<_>>());
        assert!(StationId::new(10).is_none());
    }

    #[test]
    fn station_id_parses_only_in_range_keys() {
        assert_eq!("7".parse::<StationId>().unwrap().get(), 7);
        assert!("10".parse::<StationId>().is_err());
        assert!("-1".parse::<StationId>().is_err());
        assert!("seven".parse::<StationId>().is_err());
    }

    #[test]
    fn song_rejects_length_mismatch() {
        let err = Song::new("Broken", vec![262, 294], vec![500]).unwrap_err();
        assert!(err.to_string().contains("2 frequencies but 1 durations"));
    }

    #[test]
    fn song_rejects_empty_and_zero_durations() {
        assert!(Song::new("Empty", vec![], vec![]).is_err());
        assert!(Song::new("Zero", vec![262], vec![0]).is_err());
        assert!(Song::new("  ", vec![262], vec![100]).is_err());
    }

    #[test]
    fn rests_are_valid_notes() {
        let song = Song::new("Rest", vec![440, 0, 440], vec![100, 100, 100]).unwrap();
        assert_eq!(song.frequencies(), &[440, 0, 440]);
    }

    #[test]
    fn song_deserializes_through_validation() {
        let ok: Song =
            serde_json::from_str(r#"{"name":"A","frequencies":[440],"durations":[250]}"#).unwrap();
        assert_eq!(ok.name(), "A");

        let bad = serde_json::from_str::<Song>(
            r#"{"name":"A","frequencies":[440,0],"durations":[250]}"#,
        );
        assert!(bad.is_err());
    }
}
