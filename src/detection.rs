//! Detection phase: which observatory spotted the object and what it is called.
//!
//! Designations are drawn from a small deterministic xorshift32 generator so
//! runs can be reproduced from a seed in tests; the app seeds it from the clock.

/// Tracking facilities that can report a detection.
pub const OBSERVATORIES: [&str; 4] = [
    "NETRA (Network for Space Objects Tracking)",
    "Devasthal Observatory, Uttarakhand",
    "Mount Abu Observatory, Rajasthan",
    "Indian Astronomical Observatory, Hanle, Ladakh",
];

/// Name prefixes for generated designations.
pub const NAME_PREFIXES: [&str; 8] = [
    "Ashani", "Vajra", "Agni", "Rudra", "Kaal", "Vinash", "Pralaya", "Mahakal",
];

/// Smallest catalogue number in a designation.
pub const MIN_OBJECT_ID: u32 = 1000;
/// Largest catalogue number in a designation.
pub const MAX_OBJECT_ID: u32 = 9999;

/// A freshly detected object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Detection {
    pub observatory: &'static str,
    /// `<prefix>-<NNNN>`, e.g. `Agni-4821`
    pub designation: String,
}

/// Seeded xorshift32 generator for detections.
#[derive(Clone, Debug)]
pub struct DetectionRng {
    state: u32,
}

impl DetectionRng {
    /// Seed of 0 is treated as 1 to avoid the all-zero fixed point.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Seed from the sub-second part of the system clock.
    pub fn from_clock() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
            .unwrap_or(1);
        Self::new(seed)
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform integer in `0..max`.
    pub fn next_below(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Uniform integer in `low..=high`.
    pub fn next_in(&mut self, low: u32, high: u32) -> u32 {
        low + self.next_below(high - low + 1)
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.next_below(items.len() as u32) as usize]
    }

    /// Roll a new detection.
    pub fn detect(&mut self) -> Detection {
        let observatory = *self.pick(&OBSERVATORIES);
        let prefix = *self.pick(&NAME_PREFIXES);
        let id = self.next_in(MIN_OBJECT_ID, MAX_OBJECT_ID);
        Detection {
            observatory,
            designation: format!("{prefix}-{id}"),
        }
    }
}
