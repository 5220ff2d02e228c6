use log::debug;

use crate::catalog::{Catalog, CatalogSource, Song, StationId};
use crate::errors::Result;

// (name, frequencies in Hz, durations in ms), indexed by station number
const SONGS: [(&str, &[u32], &[u32]); 10] = [
    (
        "C Major Scale",
        &[262, 294, 330, 349, 392, 440, 494, 523],
        &[500, 500, 500, 500, 500, 500, 500, 500],
    ),
    (
        "Twinkle Twinkle Little Star",
        &[262, 262, 392, 392, 440, 440, 392, 349, 349, 330, 330, 294, 294, 262],
        &[500, 500, 500, 500, 500, 500, 1000, 500, 500, 500, 500, 500, 500, 1000],
    ),
    (
        "Happy Birthday",
        &[
            262, 262, 294, 262, 349, 330, 262, 262, 294, 262, 392, 349, 262, 262, 523, 440, 349,
            330, 294,
        ],
        &[
            250, 250, 500, 500, 500, 1000, 250, 250, 500, 500, 500, 1000, 250, 250, 500, 500, 500,
            500, 1000,
        ],
    ),
    (
        "Jingle Bells",
        &[
            330, 330, 330, 330, 330, 330, 330, 392, 262, 294, 330, 349, 349, 349, 349, 349, 330,
            330, 330, 294, 294, 330, 294, 392,
        ],
        &[
            500, 500, 1000, 500, 500, 1000, 500, 500, 500, 500, 2000, 500, 500, 500, 500, 500, 500,
            500, 250, 250, 500, 500, 500, 500,
        ],
    ),
    (
        "Mario Theme",
        &[
            659, 659, 0, 659, 0, 523, 659, 0, 784, 0, 392, 0, 523, 0, 392, 0, 330, 0, 440, 0, 494,
            0, 466, 0, 392, 0, 659, 0, 784, 0, 880, 0, 698, 0, 784, 0, 659, 0, 523, 0, 587, 0, 494,
        ],
        &[
            150, 300, 150, 300, 300, 300, 300, 300, 300, 300, 300, 150, 300, 150, 300, 300, 300,
            300, 300, 150, 300, 150, 300, 300, 300, 300, 300, 300, 300, 300, 300, 300, 300, 150,
            300, 150, 300, 300, 300, 300, 300, 300, 300,
        ],
    ),
    (
        "Star Wars Theme",
        &[
            440, 440, 440, 349, 523, 440, 349, 523, 440, 659, 659, 659, 698, 523, 415, 349, 523,
            440,
        ],
        &[
            500, 500, 500, 350, 150, 500, 350, 150, 650, 500, 500, 500, 350, 150, 500, 350, 150,
            650,
        ],
    ),
    (
        "Fur Elise",
        &[
            659, 622, 659, 622, 659, 494, 587, 523, 440, 0, 262, 330, 440, 494, 0, 330, 415, 494,
            523, 0, 330, 440, 523, 587,
        ],
        &[
            200, 200, 200, 200, 200, 200, 200, 200, 400, 200, 200, 200, 200, 400, 200, 200, 200,
            200, 400, 200, 200, 200, 200, 400,
        ],
    ),
    (
        "Ode to Joy",
        &[
            392, 392, 440, 392, 523, 494, 392, 392, 440, 392, 349, 330, 392, 392, 440, 392, 523,
            494, 440, 349, 349, 330, 294, 262,
        ],
        &[
            500, 500, 500, 500, 500, 1000, 500, 500, 500, 500, 500, 1000, 500, 500, 500, 500, 500,
            1000, 500, 500, 500, 500, 500, 1000,
        ],
    ),
    (
        "Canon in D",
        &[
            294, 330, 349, 392, 440, 392, 349, 330, 294, 330, 349, 392, 440, 494, 523, 494, 440,
            392,
        ],
        &[
            600, 600, 600, 600, 600, 600, 600, 600, 1200, 600, 600, 600, 600, 600, 600, 600, 600,
            1200,
        ],
    ),
    (
        "Chromatic Scale",
        &[262, 277, 294, 311, 330, 349, 370, 392, 415, 440, 466, 494, 523],
        &[400, 400, 400, 400, 400, 400, 400, 400, 400, 400, 400, 400, 400],
    ),
];

/// The ten melodies compiled into the binary, one per station.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinCatalog;

impl CatalogSource for BuiltinCatalog {
    fn describe(&self) -> String {
        "built-in songs".to_string()
    }

    fn load(&self) -> Result<Catalog> {
        let songs = StationId::all()
            .zip(SONGS)
            .map(|(station, (name, frequencies, durations))| {
                Song::new(name, frequencies.to_vec(), durations.to_vec()).map(|s| (station, s))
            })
            .collect::<Result<Vec<_>>>()?;
        debug!("Loaded {} built-in songs", songs.len());
        Ok(Catalog::new(songs))
    }
}
