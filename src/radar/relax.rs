use glam::DVec2;

use crate::util::{cartesian_to_polar, polar_to_cartesian, unwrap_angle_near};

use super::config::RadarConfig;
use super::forces::{
    noise_force, noise_seed, pairwise_repulsion, spring_force, tangential_drift, wall_repulsion,
};
use super::{Blip, QuadrantSpan};

/// Per-blip inputs that stay fixed for the whole simulation.
#[derive(Clone, Copy, Debug)]
pub struct BlipAnchor {
    pub span: QuadrantSpan,
    pub target_radius: f64,
}

struct RelaxScratch {
    current: Vec<DVec2>,
    next: Vec<DVec2>,
}

fn settle_into_sector(position: DVec2, span: QuadrantSpan, config: &RadarConfig) -> (f64, f64) {
    let (radius, raw_angle) = cartesian_to_polar(position);
    let radius = config.clamp_radius(radius);

    let buffer = config.angular_buffer(radius);
    let low = span.start_angle + buffer;
    let high = span.end_angle - buffer;
    let angle = if low > high {
        span.mid_angle()
    } else {
        let angle = unwrap_angle_near(raw_angle, span.mid_angle());
        if angle.is_finite() {
            angle.max(low).min(high)
        } else {
            span.mid_angle()
        }
    };

    (radius, angle)
}

fn step(
    scratch: &mut RelaxScratch,
    anchors: &[BlipAnchor],
    iteration: usize,
    config: &RadarConfig,
) {
    let total = anchors.len();
    let temperature = 1.0 - iteration as f64 / config.iterations as f64;
    let max_step = config.max_speed * temperature + config.speed_floor;

    let current = &scratch.current;
    for (index, (anchor, next)) in anchors.iter().zip(scratch.next.iter_mut()).enumerate() {
        let position = current[index];
        let seed = noise_seed(index, total);

        let mut force = spring_force(position, anchor.target_radius, config)
            + wall_repulsion(position, anchor.span, config)
            + tangential_drift(position, index, temperature, config)
            + pairwise_repulsion(index, current, config)
            + noise_force(seed, temperature, config);

        let magnitude = force.length();
        if magnitude > max_step {
            force *= max_step / magnitude;
        }

        *next = position + force;
    }

    for (anchor, position) in anchors.iter().zip(scratch.next.iter_mut()) {
        let (radius, angle) = settle_into_sector(*position, anchor.span, config);
        *position = polar_to_cartesian(radius, angle);
    }

    std::mem::swap(&mut scratch.current, &mut scratch.next);
}

/// Runs the fixed-length force relaxation and returns the settled blips.
///
/// Forces for an iteration are all computed from the same snapshot, written
/// into a second buffer, then the two buffers swap. `anchors` must line up
/// with `blips`.
pub fn relax(blips: &[Blip], anchors: &[BlipAnchor], config: &RadarConfig) -> Vec<Blip> {
    debug_assert_eq!(blips.len(), anchors.len());
    let count = blips.len().min(anchors.len());

    let mut scratch = RelaxScratch {
        current: blips[..count]
            .iter()
            .map(|blip| DVec2::new(blip.x_coordinate, blip.y_coordinate))
            .collect(),
        next: vec![DVec2::ZERO; count],
    };

    for iteration in 0..config.iterations {
        step(&mut scratch, &anchors[..count], iteration, config);
    }

    blips[..count]
        .iter()
        .zip(&anchors[..count])
        .zip(&scratch.current)
        .map(|((blip, anchor), &position)| {
            let (radius, angle) = settle_into_sector(position, anchor.span, config);
            blip.clone().moved_to(angle, radius)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;
    use crate::radar::Quadrant;

    fn blip_at(name: &str, angle: f64, radius: f64) -> Blip {
        Blip::new(name, Quadrant::Languages, angle, radius)
    }

    #[test]
    fn zero_iterations_only_settles() {
        let config = RadarConfig {
            iterations: 0,
            ..RadarConfig::default()
        };
        let span = QuadrantSpan::new(0.0, FRAC_PI_2);
        let blips = vec![blip_at("Far", 0.5, 500.0)];
        let anchors = vec![BlipAnchor {
            span,
            target_radius: 100.0,
        }];
        let settled = relax(&blips, &anchors, &config);
        assert_eq!(settled[0].radius, config.max_radius);
        assert!((settled[0].angle - 0.5).abs() < 1e-9);
    }

    #[test]
    fn blips_end_inside_their_sector() {
        let config = RadarConfig::default();
        let span = QuadrantSpan::new(0.0, FRAC_PI_2);
        let blips = (0..6)
            .map(|index| blip_at(&format!("skill-{index}"), 0.01, 45.0))
            .collect::<Vec<_>>();
        let anchors = vec![
            BlipAnchor {
                span,
                target_radius: 45.0,
            };
            6
        ];

        for blip in relax(&blips, &anchors, &config) {
            assert!(blip.radius >= config.min_radius && blip.radius <= config.max_radius);
            let buffer = config.angular_buffer(blip.radius);
            assert!(blip.angle >= span.start_angle + buffer - 1e-9);
            assert!(blip.angle <= span.end_angle - buffer + 1e-9);
        }
    }

    #[test]
    fn stacked_blips_spread_apart() {
        let config = RadarConfig::default();
        let span = QuadrantSpan::new(0.0, FRAC_PI_2);
        let blips = vec![blip_at("A", 0.7, 120.0), blip_at("B", 0.7, 120.0)];
        let anchors = vec![
            BlipAnchor {
                span,
                target_radius: 120.0,
            };
            2
        ];
        let settled = relax(&blips, &anchors, &config);
        let gap = DVec2::new(settled[0].x_coordinate, settled[0].y_coordinate)
            - DVec2::new(settled[1].x_coordinate, settled[1].y_coordinate);
        assert!(gap.length() > 1.0);
    }

    #[test]
    fn narrow_sector_pins_to_middle() {
        let config = RadarConfig::default();
        let span = QuadrantSpan::new(0.0, 0.01);
        let (_, angle) = settle_into_sector(polar_to_cartesian(50.0, 0.3), span, &config);
        assert_eq!(angle, span.mid_angle());
    }
}
