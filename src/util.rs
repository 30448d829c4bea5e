use std::f64::consts::{PI, TAU};

use glam::{DVec2, dvec2};

/// Rolling `hash * 31 + code_unit` over UTF-16 code units, kept in 32-bit
/// signed arithmetic and returned as its absolute value.
pub fn hash_string(input: &str) -> u32 {
    let hash = input
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)));
    hash.unsigned_abs()
}

/// `frac(sin(seed) * 10000)`, always in `[0, 1)`.
pub fn seeded_random(seed: f64) -> f64 {
    let x = seed.sin() * 10_000.0;
    if !x.is_finite() {
        return 0.0;
    }

    let value = x - x.floor();
    // Tiny negative products round up to exactly 1.0.
    if value >= 1.0 { 0.0 } else { value }
}

pub fn polar_to_cartesian(radius: f64, angle: f64) -> DVec2 {
    dvec2(angle.cos() * radius, angle.sin() * radius)
}

pub fn cartesian_to_polar(position: DVec2) -> (f64, f64) {
    (position.length(), position.y.atan2(position.x))
}

/// Shifts `angle` by whole turns so it lands within half a turn of `reference`.
pub fn unwrap_angle_near(angle: f64, reference: f64) -> f64 {
    let mut delta = (angle - reference) % TAU;
    if delta >= PI {
        delta -= TAU;
    } else if delta < -PI {
        delta += TAU;
    }
    reference + delta
}
