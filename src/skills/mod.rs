mod catalog;
mod search;

use std::fmt;
use std::str::FromStr;

use anyhow::{Error, anyhow};
use serde::{Deserialize, Serialize};

use crate::radar::Quadrant;

pub use catalog::{SkillCatalog, load_catalog, parse_catalog};
pub use search::{SkillMatch, search_skills};

/// Context a skill may be rendered in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderArea {
    TechRadar,
    SkillsSection,
    Resume,
}

impl RenderArea {
    pub const ALL: [Self; 3] = [Self::TechRadar, Self::SkillsSection, Self::Resume];

    pub fn label(self) -> &'static str {
        match self {
            Self::TechRadar => "tech-radar",
            Self::SkillsSection => "skills-section",
            Self::Resume => "resume",
        }
    }
}

impl fmt::Display for RenderArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RenderArea {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|area| area.label() == value)
            .ok_or_else(|| anyhow!("unknown render area {value:?}"))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub quadrant: Quadrant,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub render_areas: Vec<RenderArea>,
}

impl Skill {
    pub fn new(name: impl Into<String>, quadrant: Quadrant, confidence: f64) -> Self {
        Self {
            name: name.into(),
            quadrant,
            confidence,
            render_areas: Vec::new(),
        }
    }

    pub fn with_render_areas(mut self, areas: impl IntoIterator<Item = RenderArea>) -> Self {
        self.render_areas = areas.into_iter().collect();
        self
    }
}

/// Minimum confidence for each render area.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct VisibilityThresholds {
    pub tech_radar: f64,
    pub skills_section: f64,
    pub resume: f64,
}

impl Default for VisibilityThresholds {
    fn default() -> Self {
        Self {
            tech_radar: 0.0,
            skills_section: 0.4,
            resume: 0.6,
        }
    }
}

impl VisibilityThresholds {
    pub fn threshold(&self, area: RenderArea) -> f64 {
        match area {
            RenderArea::TechRadar => self.tech_radar,
            RenderArea::SkillsSection => self.skills_section,
            RenderArea::Resume => self.resume,
        }
    }
}

pub fn should_show_skill(
    skill: &Skill,
    area: RenderArea,
    thresholds: &VisibilityThresholds,
) -> bool {
    if skill.confidence < thresholds.threshold(area) {
        return false;
    }

    skill.render_areas.is_empty() || skill.render_areas.contains(&area)
}

pub fn visible_skills<'a>(
    skills: &'a [Skill],
    area: RenderArea,
    thresholds: &'a VisibilityThresholds,
) -> impl Iterator<Item = &'a Skill> + 'a {
    skills
        .iter()
        .filter(move |skill| should_show_skill(skill, area, thresholds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_threshold_is_hidden_even_when_listed() {
        let thresholds = VisibilityThresholds::default();
        let skill = Skill::new("Perl", Quadrant::Languages, 0.3)
            .with_render_areas([RenderArea::Resume]);
        assert!(!should_show_skill(&skill, RenderArea::Resume, &thresholds));
    }

    #[test]
    fn no_allow_list_shows_everywhere_above_threshold() {
        let thresholds = VisibilityThresholds::default();
        let skill = Skill::new("Rust", Quadrant::Languages, 0.95);
        for area in RenderArea::ALL {
            assert!(should_show_skill(&skill, area, &thresholds));
        }
    }

    #[test]
    fn allow_list_restricts_areas() {
        let thresholds = VisibilityThresholds::default();
        let skill = Skill::new("Bazel", Quadrant::BuildTools, 0.8)
            .with_render_areas([RenderArea::TechRadar]);
        assert!(should_show_skill(&skill, RenderArea::TechRadar, &thresholds));
        assert!(!should_show_skill(&skill, RenderArea::SkillsSection, &thresholds));
        assert!(!should_show_skill(&skill, RenderArea::Resume, &thresholds));
    }

    #[test]
    fn tech_radar_threshold_is_the_lowest() {
        let thresholds = VisibilityThresholds::default();
        for area in RenderArea::ALL {
            assert!(thresholds.tech_radar <= thresholds.threshold(area));
        }
        let novice = Skill::new("Elm", Quadrant::Languages, 0.0);
        assert!(should_show_skill(&novice, RenderArea::TechRadar, &thresholds));
    }

    #[test]
    fn unknown_render_area_fails() {
        let error = "sidebar".parse::<RenderArea>().unwrap_err();
        assert!(error.to_string().contains("sidebar"));
        assert_eq!("resume".parse::<RenderArea>().unwrap(), RenderArea::Resume);
    }

    #[test]
    fn thresholds_deserialize_partially() {
        let thresholds: VisibilityThresholds =
            serde_json::from_str(r#"{ "resume": 0.75 }"#).unwrap();
        assert_eq!(thresholds.resume, 0.75);
        assert_eq!(thresholds.skills_section, 0.4);
    }

    #[test]
    fn visible_skills_filters_in_order() {
        let thresholds = VisibilityThresholds::default();
        let skills = vec![
            Skill::new("Rust", Quadrant::Languages, 0.9),
            Skill::new("Perl", Quadrant::Languages, 0.2),
            Skill::new("Docker", Quadrant::Infrastructure, 0.7),
        ];
        let names = visible_skills(&skills, RenderArea::Resume, &thresholds)
            .map(|skill| skill.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, ["Rust", "Docker"]);
    }
}
