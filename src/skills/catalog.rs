use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use crate::radar::{Quadrant, RadarConfig, normalize_confidence};

use super::{RenderArea, Skill, VisibilityThresholds};

#[derive(Clone, Debug, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    radar: RadarConfig,
    #[serde(default)]
    visibility: VisibilityThresholds,
    #[serde(default)]
    skills: Vec<RawSkill>,
}

#[derive(Clone, Debug, Deserialize)]
struct RawSkill {
    name: String,
    quadrant: String,
    confidence: f64,
    #[serde(default, alias = "renderAreas")]
    render_areas: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SkillCatalog {
    pub radar: RadarConfig,
    pub visibility: VisibilityThresholds,
    pub skills: Vec<Skill>,
}

pub fn load_catalog(path: &Path) -> Result<SkillCatalog> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read skill catalog {}", path.display()))?;
    parse_catalog(&raw).with_context(|| format!("invalid skill catalog {}", path.display()))
}

pub fn parse_catalog(raw: &str) -> Result<SkillCatalog> {
    let catalog: RawCatalog = serde_json::from_str(raw).context("invalid JSON in skill catalog")?;

    if catalog.radar.min_radius > catalog.radar.max_radius {
        return Err(anyhow!(
            "radar min_radius {} exceeds max_radius {}",
            catalog.radar.min_radius,
            catalog.radar.max_radius
        ));
    }

    let mut seen = HashSet::with_capacity(catalog.skills.len());
    let mut skills = Vec::with_capacity(catalog.skills.len());
    for raw_skill in catalog.skills {
        let name = raw_skill.name.trim().to_string();
        if name.is_empty() {
            return Err(anyhow!("skill with empty name"));
        }

        let quadrant = raw_skill
            .quadrant
            .parse::<Quadrant>()
            .with_context(|| format!("skill {name:?}"))?;

        if !seen.insert((quadrant, name.clone())) {
            return Err(anyhow!("duplicate skill {name:?} in {quadrant}"));
        }

        if !raw_skill.confidence.is_finite() {
            return Err(anyhow!("skill {name:?} has non-finite confidence"));
        }
        let confidence = normalize_confidence(raw_skill.confidence);
        if confidence != raw_skill.confidence {
            log::warn!(
                "clamped confidence of {name:?} from {} to {confidence}",
                raw_skill.confidence
            );
        }

        let mut render_areas = Vec::with_capacity(raw_skill.render_areas.len());
        for area in &raw_skill.render_areas {
            let area = area
                .parse::<RenderArea>()
                .with_context(|| format!("skill {name:?}"))?;
            if render_areas.contains(&area) {
                log::warn!("skill {name:?} lists render area {area} more than once");
                continue;
            }
            render_areas.push(area);
        }

        skills.push(Skill {
            name,
            quadrant,
            confidence,
            render_areas,
        });
    }

    log::debug!("loaded {} skills", skills.len());

    Ok(SkillCatalog {
        radar: catalog.radar,
        visibility: catalog.visibility,
        skills,
    })
}
