use crate::engine::Track;

use super::Catalog;

const DEMO: &[(&str, &str, &str, u32)] = &[
    ("The Beatles", "Help!", "Yesterday", 125),
    ("Pink Floyd", "The Dark Side of The Moon", "Time", 408),
    ("Led Zeppelin", "Physical Graffiti", "Kashmir", 517),
    ("Red Hot Chili Peppers", "Stadium Arcadium", "Slow Cheetah", 319),
    ("Dua Lipa", "Future Nostalgia", "Don't Start Now", 182),
    ("Arctic Monkeys", "AM", "Arabella", 209),
    ("Tame Impala", "Currents", "Let it Happen", 256),
    ("Ed Sheeran", "X", "Don't", 219),
    ("Gotye", "Making Mirrors", "Somebody That I Used to Know", 243),
    ("Queen", "Hot Space", "Under Pressure", 248),
    ("Yes", "Fragile", "Roundabout", 515),
    ("R.E.M.", "Out of Time", "Losing My Religion", 269),
    ("21 Pilots", "Stressed Out", "Stressed Out", 225),
    ("Adele", "25", "Hello", 366),
    ("Childish Gambino", "This is America", "This is America", 244),
    ("Nirvana", "Nevermind", "In Bloom", 255),
    ("Black Sabbath", "Paranoid", "Iron Man", 353),
    ("Ariana Grande", "Positions", "positions", 158),
    ("The Smiths", "The Queen is Dead", "Bigmouth Strikes Again", 191),
    ("A-ha", "Hunting High and Low", "Take on Me", 244),
    ("Eminem", "8 Mile - Soundtrack", "Love Yourself", 323),
];

impl Catalog {
    /// The demo catalog used when no catalog file is configured.
    pub fn builtin() -> Self {
        Self {
            tracks: DEMO
                .iter()
                .map(|&(artist, album, title, secs)| Track::new(artist, album, title, secs))
                .collect(),
        }
    }
}
