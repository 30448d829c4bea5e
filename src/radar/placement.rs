use serde::Serialize;

use crate::util::{hash_string, polar_to_cartesian, seeded_random};

use super::config::RadarConfig;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BlipPosition {
    pub angle: f64,
    pub radius: f64,
    pub x_coordinate: f64,
    pub y_coordinate: f64,
}

impl BlipPosition {
    pub fn from_polar(angle: f64, radius: f64) -> Self {
        let cartesian = polar_to_cartesian(radius, angle);
        Self {
            angle,
            radius,
            x_coordinate: cartesian.x,
            y_coordinate: cartesian.y,
        }
    }
}

/// Initial position of the `index`-th of `total` skills in a quadrant span.
///
/// Skills are spread evenly across the span, with the radius driven by
/// confidence. Both coordinates get a small jitter seeded from the skill name,
/// so identical inputs always produce identical output.
pub fn calculate_blip_position(
    config: &RadarConfig,
    confidence: f64,
    start_angle: f64,
    end_angle: f64,
    index: usize,
    total: usize,
    skill_name: &str,
) -> BlipPosition {
    let seed = f64::from(hash_string(skill_name));

    let step = (end_angle - start_angle) / (total as f64 + 1.0);
    let angle_jitter = (seeded_random(seed) - 0.5) * config.angle_jitter;
    let angle = start_angle + (index as f64 + 1.0) * step + angle_jitter;

    let radius_jitter = (seeded_random(seed + 100.0) - 0.5) * config.radius_jitter;
    let radius = config.target_radius(confidence) + radius_jitter;

    BlipPosition::from_polar(angle, radius)
}
