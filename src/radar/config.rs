use serde::{Deserialize, Serialize};

/// Simulation parameters for one radar layout.
///
/// Every field has a default, so a catalog only needs to name the values it
/// overrides.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarConfig {
    /// Radius of a confidence 1.0 skill.
    pub min_radius: f64,
    /// Radius of a confidence 0.0 skill.
    pub max_radius: f64,
    /// Full width of the initial angular jitter, in radians.
    pub angle_jitter: f64,
    /// Full width of the initial radial jitter.
    pub radius_jitter: f64,
    /// Drawn radius of a blip; blip edges never cross a quadrant wall.
    pub blip_size: f64,
    /// Extra clearance kept between a blip's edge and its quadrant walls.
    pub buffer_distance: f64,
    pub spring_strength: f64,
    pub wall_repulsion_strength: f64,
    /// Angular distance (radians) at which walls start pushing.
    pub wall_tolerance: f64,
    pub tangential_force: f64,
    pub repulsion_strength: f64,
    /// Per-pair repulsion cap.
    pub max_repulsion: f64,
    pub min_distance: f64,
    pub noise_amplitude: f64,
    pub iterations: usize,
    pub max_speed: f64,
    /// Step cap that remains once temperature has reached zero.
    pub speed_floor: f64,
    pub epsilon: f64,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            min_radius: 40.0,
            max_radius: 200.0,
            angle_jitter: 0.15,
            radius_jitter: 12.0,
            blip_size: 8.0,
            buffer_distance: 4.0,
            spring_strength: 0.05,
            wall_repulsion_strength: 0.8,
            wall_tolerance: 0.5,
            tangential_force: 0.6,
            repulsion_strength: 400.0,
            max_repulsion: 5.0,
            min_distance: 22.0,
            noise_amplitude: 0.5,
            iterations: 60,
            max_speed: 4.0,
            speed_floor: 0.1,
            epsilon: 0.01,
        }
    }
}

impl RadarConfig {
    /// Target radius for a confidence score, before jitter.
    pub fn target_radius(&self, confidence: f64) -> f64 {
        let (inner, outer) = self.radius_bounds();
        let confidence = normalize_confidence(confidence);
        inner + (1.0 - confidence) * (outer - inner)
    }

    /// `(inner, outer)` radius band; swapped bounds are put back in order.
    pub fn radius_bounds(&self) -> (f64, f64) {
        (
            self.min_radius.min(self.max_radius),
            self.min_radius.max(self.max_radius),
        )
    }

    pub fn clamp_radius(&self, radius: f64) -> f64 {
        let (inner, outer) = self.radius_bounds();
        if radius.is_finite() {
            radius.max(inner).min(outer)
        } else {
            outer
        }
    }

    /// Angle subtended at `radius` by a blip plus its wall clearance.
    pub fn angular_buffer(&self, radius: f64) -> f64 {
        (self.blip_size + self.buffer_distance).atan2(radius.max(self.epsilon))
    }
}

/// Clamps confidence into `[0, 1]`; non-finite values count as zero.
pub fn normalize_confidence(confidence: f64) -> f64 {
    if confidence.is_finite() {
        confidence.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
