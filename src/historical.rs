//! Catalogue of historical impacts and nearest-analogue lookup.

use crate::types::HISTORICAL_LOG_FLOOR_MEGATONS;

/// A known impact event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistoricalEvent {
    pub name: &'static str,
    /// Calendar year for recent events; for prehistoric events the negated
    /// number of years before present. See [`HistoricalEvent::when`].
    pub year: i64,
    /// Approximate impactor size (m).
    pub size_m: f64,
    /// Released energy (megatons TNT). Always positive.
    pub megatons: f64,
    pub description: &'static str,
}

impl HistoricalEvent {
    /// Human-readable date: `"year 2013"` or `"50000 years ago"`.
    ///
    /// Positive years are calendar years, anything else is read as years
    /// before present.
    pub fn when(&self) -> String {
        if self.year > 0 {
            format!("year {}", self.year)
        } else {
            format!("{} years ago", self.year.unsigned_abs())
        }
    }
}

/// The four reference impacts, in lookup order.
pub static HISTORICAL_EVENTS: [HistoricalEvent; 4] = [
    HistoricalEvent {
        name: "Chelyabinsk",
        year: 2013,
        size_m: 20.0,
        megatons: 0.5,
        description: "1,500 injured.",
    },
    HistoricalEvent {
        name: "Tunguska",
        year: 1908,
        size_m: 60.0,
        megatons: 10.0,
        description: "Flattened 2,000 km².",
    },
    HistoricalEvent {
        name: "Meteor Crater",
        year: -50_000,
        size_m: 50.0,
        megatons: 10.0,
        description: "Created 1.2 km crater.",
    },
    HistoricalEvent {
        name: "Chicxulub",
        year: -66_000_000,
        size_m: 10_000.0,
        megatons: 100_000_000.0,
        description: "Mass extinction.",
    },
];

/// |log10(a) - log10(b)|
pub fn log_distance(a: f64, b: f64) -> f64 {
    (a.log10() - b.log10()).abs()
}

/// Catalogue event whose energy is closest to `megatons` on a log scale.
///
/// Energies below [`HISTORICAL_LOG_FLOOR_MEGATONS`] (including 0) are raised
/// to the floor before taking the logarithm, and energies that overflowed to
/// infinity are capped at `f64::MAX`. Ties go to the earlier entry.
pub fn nearest_historical(megatons: f64) -> &'static HistoricalEvent {
    let floored = megatons.clamp(HISTORICAL_LOG_FLOOR_MEGATONS, f64::MAX);

    let mut best = &HISTORICAL_EVENTS[0];
    let mut best_distance = f64::INFINITY;
    for event in HISTORICAL_EVENTS.iter() {
        let distance = log_distance(event.megatons, floored);
        if distance < best_distance {
            best_distance = distance;
            best = event;
        }
    }
    best
}
