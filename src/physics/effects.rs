//! Consequence estimators.
//!
//! Empirical scaling laws of impact energy in megatons. The constants and
//! exponents are reference values and must not be retuned. Each estimator
//! returns 0 for non-positive energy instead of taking a fractional power or
//! logarithm of a non-positive number.

/// Crater diameter (m): 1000·mt^(1/3).
pub fn crater_diameter(megatons: f64) -> f64 {
    if megatons > 0.0 {
        1000.0 * megatons.powf(1.0 / 3.0)
    } else {
        0.0
    }
}

/// Richter-like seismic magnitude: 0.67·log10(mt) + 5.87.
///
/// Not clamped: sub-megaton events give small (and for tiny energies,
/// negative) magnitudes.
pub fn seismic_magnitude(megatons: f64) -> f64 {
    if megatons <= 0.0 {
        return 0.0;
    }
    0.67 * megatons.log10() + 5.87
}

/// Fireball / blast radius (m): 140·mt^0.4.
pub fn fireball_radius(megatons: f64) -> f64 {
    if megatons > 0.0 {
        140.0 * megatons.powf(0.4)
    } else {
        0.0
    }
}
