use glam::{DVec2, dvec2};

use crate::util::{seeded_random, unwrap_angle_near};

use super::QuadrantSpan;
use super::config::RadarConfig;

const WALL_SOFTENING: f64 = 0.1;
const REPULSION_RANGE: f64 = 1.5;
const NOISE_Y_SEED_OFFSET: f64 = 1000.0;

fn radial_direction(position: DVec2) -> DVec2 {
    let angle = position.y.atan2(position.x);
    dvec2(angle.cos(), angle.sin())
}

/// Pulls the blip back towards its confidence radius.
pub fn spring_force(position: DVec2, target_radius: f64, config: &RadarConfig) -> DVec2 {
    let magnitude = (target_radius - position.length()) * config.spring_strength;
    radial_direction(position) * magnitude
}

/// Pushes a blip away from whichever quadrant walls are within
/// `wall_tolerance` radians of it.
pub fn wall_repulsion(position: DVec2, span: QuadrantSpan, config: &RadarConfig) -> DVec2 {
    let angle = unwrap_angle_near(position.y.atan2(position.x), span.mid_angle());
    let mut force = DVec2::ZERO;

    let from_start = angle - span.start_angle;
    if from_start < config.wall_tolerance {
        let distance = from_start.max(0.0);
        let magnitude = config.wall_repulsion_strength / (distance * distance + WALL_SOFTENING);
        force += dvec2(-span.start_angle.sin(), span.start_angle.cos()) * magnitude;
    }

    let to_end = span.end_angle - angle;
    if to_end < config.wall_tolerance {
        let distance = to_end.max(0.0);
        let magnitude = config.wall_repulsion_strength / (distance * distance + WALL_SOFTENING);
        force += dvec2(span.end_angle.sin(), -span.end_angle.cos()) * magnitude;
    }

    force
}

/// Sideways drift that fades with temperature; even and odd blips drift in
/// opposite directions.
pub fn tangential_drift(
    position: DVec2,
    index: usize,
    temperature: f64,
    config: &RadarConfig,
) -> DVec2 {
    let sign = if index % 2 == 0 { 1.0 } else { -1.0 };
    let radial = radial_direction(position);
    let tangent = dvec2(-radial.y, radial.x);
    tangent * (config.tangential_force * temperature * sign)
}

/// Repulsion felt by blip `index` from blip `other`, capped at `max_repulsion`.
pub fn repulsion_between(
    point: DVec2,
    other_point: DVec2,
    index: usize,
    other: usize,
    config: &RadarConfig,
) -> DVec2 {
    let delta = point - other_point;
    let distance_sq = delta.length_squared();
    if distance_sq >= (config.min_distance * REPULSION_RANGE).powi(2) {
        return DVec2::ZERO;
    }

    let distance = distance_sq.sqrt();
    let direction = if distance > 0.0001 {
        delta / distance
    } else if index < other {
        DVec2::X
    } else {
        DVec2::NEG_X
    };

    let magnitude = (config.repulsion_strength / distance_sq.max(config.epsilon))
        .min(config.max_repulsion);
    direction * magnitude
}

pub fn pairwise_repulsion(index: usize, positions: &[DVec2], config: &RadarConfig) -> DVec2 {
    let point = positions[index];
    positions
        .iter()
        .enumerate()
        .filter(|&(other, _)| other != index)
        .fold(DVec2::ZERO, |force, (other, &other_point)| {
            force + repulsion_between(point, other_point, index, other, config)
        })
}

/// Noise seed of the `index`-th of `total` blips; the same on every iteration.
pub fn noise_seed(index: usize, total: usize) -> f64 {
    (index * total + index) as f64
}

/// Seeded per-axis jitter scaled by temperature.
pub fn noise_force(seed: f64, temperature: f64, config: &RadarConfig) -> DVec2 {
    let scale = config.noise_amplitude * temperature;
    dvec2(
        (seeded_random(seed) - 0.5) * scale,
        (seeded_random(seed + NOISE_Y_SEED_OFFSET) - 0.5) * scale,
    )
}
