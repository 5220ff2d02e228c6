//! Songcast - serve precomputed melodies to embedded radio clients
//!
//! Each client tunes to a station (0-9) and fetches that station's melody
//! as paired frequency/duration arrays over plain HTTP + JSON.

/// HTTP routes
pub mod api;
/// Songs, station ids and catalog sources
pub mod catalog;
/// Server configuration from flags, environment and defaults
pub mod config;
/// Error types and result aliases
pub mod errors;
/// Startup and serve loop
pub mod server;
/// Song lookup, station listing and health queries
pub mod service;

pub use catalog::{Catalog, CatalogSource, Song, StationId};
pub use service::SongCatalogService;
