//! Hazard classification of impact energy.
//!
//! Four ordered tiers keyed on megatons of TNT, each covering a half-open
//! interval `[low, high)`. The tiers tile `[0, +inf)` so every non-negative
//! energy lands in exactly one of them.

use crate::physics::fireball_radius;
use crate::types::METERS_PER_KM;

/// Severity color tag shown alongside a tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Green,
    Yellow,
    Red,
    Purple,
}

impl Severity {
    /// Upper-case tag as printed in reports.
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Green => "GREEN",
            Severity::Yellow => "YELLOW",
            Severity::Red => "RED",
            Severity::Purple => "PURPLE",
        }
    }

    /// Display color as sRGB bytes.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Severity::Green => [85, 176, 85],
            Severity::Yellow => [221, 190, 70],
            Severity::Red => [224, 85, 85],
            Severity::Purple => [170, 100, 220],
        }
    }
}

/// Hazard tier, ordered from least to most severe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HazardTier {
    LocalEvent,
    RegionalThreat,
    GlobalCatastrophe,
    ExtinctionLevelEvent,
}

/// All tiers in ascending order.
pub const HAZARD_TIERS: [HazardTier; 4] = [
    HazardTier::LocalEvent,
    HazardTier::RegionalThreat,
    HazardTier::GlobalCatastrophe,
    HazardTier::ExtinctionLevelEvent,
];

impl HazardTier {
    /// Tier for an energy in megatons.
    ///
    /// Boundary values belong to the higher tier. NaN fails every threshold
    /// and ends up in the top tier.
    pub fn for_megatons(megatons: f64) -> Self {
        if megatons < 1.0 {
            HazardTier::LocalEvent
        } else if megatons < 100.0 {
            HazardTier::RegionalThreat
        } else if megatons < 10_000.0 {
            HazardTier::GlobalCatastrophe
        } else {
            HazardTier::ExtinctionLevelEvent
        }
    }

    /// Inclusive lower bound (megatons). The lowest tier starts at 0.
    pub fn lower_bound(self) -> f64 {
        match self {
            HazardTier::LocalEvent => 0.0,
            HazardTier::RegionalThreat => 1.0,
            HazardTier::GlobalCatastrophe => 100.0,
            HazardTier::ExtinctionLevelEvent => 10_000.0,
        }
    }

    /// Exclusive upper bound (megatons), `None` for the open-ended top tier.
    pub fn upper_bound(self) -> Option<f64> {
        match self {
            HazardTier::ExtinctionLevelEvent => None,
            tier => HAZARD_TIERS
                .get(tier as usize + 1)
                .map(|next| next.lower_bound()),
        }
    }

    /// Whether `megatons` lies in `[lower_bound, upper_bound)`.
    pub fn contains(self, megatons: f64) -> bool {
        megatons >= self.lower_bound() && self.upper_bound().is_none_or(|high| megatons < high)
    }

    pub fn label(self) -> &'static str {
        match self {
            HazardTier::LocalEvent => "LOCAL EVENT",
            HazardTier::RegionalThreat => "REGIONAL THREAT",
            HazardTier::GlobalCatastrophe => "GLOBAL CATASTROPHE",
            HazardTier::ExtinctionLevelEvent => "EXTINCTION LEVEL EVENT",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            HazardTier::LocalEvent => Severity::Green,
            HazardTier::RegionalThreat => Severity::Yellow,
            HazardTier::GlobalCatastrophe => Severity::Red,
            HazardTier::ExtinctionLevelEvent => Severity::Purple,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            HazardTier::LocalEvent => "Minor regional damage.",
            HazardTier::RegionalThreat => "Large city destruction likely.",
            HazardTier::GlobalCatastrophe => "Widespread devastation.",
            HazardTier::ExtinctionLevelEvent => "Biosphere collapse possible.",
        }
    }

    /// Tier-specific effect listed next to the blast radius.
    pub fn signature_effect(self) -> &'static str {
        match self {
            HazardTier::LocalEvent => "Building damage nearby",
            HazardTier::RegionalThreat => "Severe damage tens of km away",
            HazardTier::GlobalCatastrophe => "Possible impact winter",
            HazardTier::ExtinctionLevelEvent => "GAME OVER FOR MOST LIFE",
        }
    }
}

/// Result of classifying one impact energy.
///
/// Built fresh on every call; nothing is cached between classifications.
#[derive(Clone, Debug, PartialEq)]
pub struct HazardAssessment {
    pub tier: HazardTier,
    pub severity: Severity,
    pub description: &'static str,
    pub effects: Vec<String>,
}

/// Blast radius effect line, e.g. `"Blast radius: ~0.14 km"`.
pub fn blast_radius_effect(megatons: f64) -> String {
    let radius_km = fireball_radius(megatons) / METERS_PER_KM;
    format!("Blast radius: ~{radius_km:.2} km")
}

/// Classify an impact energy (megatons) into its hazard tier.
pub fn classify(megatons: f64) -> HazardAssessment {
    let tier = HazardTier::for_megatons(megatons);
    let blast = blast_radius_effect(megatons);
    let signature = tier.signature_effect().to_string();

    // The extinction tier leads with its headline effect
    let effects = match tier {
        HazardTier::ExtinctionLevelEvent => vec![signature, blast],
        _ => vec![blast, signature],
    };

    HazardAssessment {
        tier,
        severity: tier.severity(),
        description: tier.description(),
        effects,
    }
}
