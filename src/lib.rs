//! Skill Radar - algorithms behind a portfolio site's interactive widgets
//!
//! Core modules:
//! - `radar`: Deterministic force-directed tech-radar blip layout
//! - `skills`: Skill catalog, per-context visibility and fuzzy search
//! - `calendar`: Contribution heatmap bucketing
//! - `scroll`: Wheel-driven section scroll snapping
//! - `util`: Seeded hashing/randomness and polar helpers

pub mod calendar;
pub mod radar;
pub mod scroll;
pub mod skills;
pub mod util;

pub use calendar::{ContributionCalendar, ContributionPoint, build_calendar};
pub use radar::{Blip, Quadrant, QuadrantSpan, RadarConfig, layout_radar, layout_radar_with_spans};
pub use scroll::{ScrollSnap, SnapDecision};
pub use skills::{RenderArea, Skill, SkillCatalog, VisibilityThresholds, should_show_skill};
pub use util::{hash_string, seeded_random};
