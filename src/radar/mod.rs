mod config;
mod forces;
mod placement;
mod relax;

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::str::FromStr;

use anyhow::{Error, anyhow};
use serde::{Deserialize, Serialize};

use crate::skills::Skill;
use crate::util::polar_to_cartesian;

pub use config::{RadarConfig, normalize_confidence};
pub use forces::{
    noise_force, noise_seed, pairwise_repulsion, repulsion_between, spring_force,
    tangential_drift, wall_repulsion,
};
pub use placement::{BlipPosition, calculate_blip_position};
pub use relax::{BlipAnchor, relax};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Quadrant {
    Languages,
    Frameworks,
    BuildTools,
    Infrastructure,
}

impl Quadrant {
    pub const ALL: [Self; 4] = [
        Self::Languages,
        Self::Frameworks,
        Self::BuildTools,
        Self::Infrastructure,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Languages => "languages",
            Self::Frameworks => "frameworks",
            Self::BuildTools => "build-tools",
            Self::Infrastructure => "infrastructure",
        }
    }

    /// Default sector; `layout_radar_with_spans` accepts others.
    pub fn span(self) -> QuadrantSpan {
        let start = match self {
            Self::Languages => 0.0,
            Self::Frameworks => FRAC_PI_2,
            Self::BuildTools => PI,
            Self::Infrastructure => PI + FRAC_PI_2,
        };
        QuadrantSpan::new(start, start + FRAC_PI_2)
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Quadrant {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|quadrant| quadrant.label() == value)
            .ok_or_else(|| anyhow!("unknown quadrant {value:?}"))
    }
}

/// Angular sector `[start_angle, end_angle)` in radians.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct QuadrantSpan {
    pub start_angle: f64,
    pub end_angle: f64,
}

impl QuadrantSpan {
    pub fn new(start_angle: f64, end_angle: f64) -> Self {
        Self {
            start_angle,
            end_angle,
        }
    }

    pub fn mid_angle(self) -> f64 {
        (self.start_angle + self.end_angle) * 0.5
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Blip {
    pub id: String,
    pub name: String,
    pub quadrant: Quadrant,
    pub angle: f64,
    pub radius: f64,
    pub x_coordinate: f64,
    pub y_coordinate: f64,
}

impl Blip {
    pub fn new(name: &str, quadrant: Quadrant, angle: f64, radius: f64) -> Self {
        let position = polar_to_cartesian(radius, angle);
        Self {
            id: format!("{quadrant}-{name}"),
            name: name.to_owned(),
            quadrant,
            angle,
            radius,
            x_coordinate: position.x,
            y_coordinate: position.y,
        }
    }

    pub fn moved_to(mut self, angle: f64, radius: f64) -> Self {
        let position = polar_to_cartesian(radius, angle);
        self.angle = angle;
        self.radius = radius;
        self.x_coordinate = position.x;
        self.y_coordinate = position.y;
        self
    }
}

pub fn default_spans() -> [QuadrantSpan; 4] {
    Quadrant::ALL.map(Quadrant::span)
}

/// Places every skill on the radar using the default quadrant sectors.
pub fn layout_radar(skills: &[Skill], config: &RadarConfig) -> Vec<Blip> {
    layout_radar_with_spans(skills, default_spans(), config)
}

/// Places every skill on the radar and relaxes the layout.
///
/// `spans` is indexed in `Quadrant::ALL` order. Index and total passed to the
/// initial placement are counted per quadrant, in input order. The result has
/// one blip per skill, in input order.
pub fn layout_radar_with_spans(
    skills: &[Skill],
    spans: [QuadrantSpan; 4],
    config: &RadarConfig,
) -> Vec<Blip> {
    let mut totals = [0usize; 4];
    for skill in skills {
        totals[skill.quadrant as usize] += 1;
    }

    let mut seen = [0usize; 4];
    let mut blips = Vec::with_capacity(skills.len());
    let mut anchors = Vec::with_capacity(skills.len());
    for skill in skills {
        let slot = skill.quadrant as usize;
        let span = spans[slot];
        let position = calculate_blip_position(
            config,
            skill.confidence,
            span.start_angle,
            span.end_angle,
            seen[slot],
            totals[slot],
            &skill.name,
        );
        seen[slot] += 1;

        blips.push(Blip::new(
            &skill.name,
            skill.quadrant,
            position.angle,
            position.radius,
        ));
        anchors.push(BlipAnchor {
            span,
            target_radius: config.target_radius(skill.confidence),
        });
    }

    log::debug!(
        "laying out {} blips ({} languages, {} frameworks, {} build tools, {} infrastructure) over {} iterations",
        blips.len(),
        totals[0],
        totals[1],
        totals[2],
        totals[3],
        config.iterations
    );

    relax(&blips, &anchors, config)
}
