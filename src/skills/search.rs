use std::cmp::Ordering;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use serde::Serialize;

use super::Skill;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SkillMatch<'a> {
    pub skill: &'a Skill,
    pub score: i64,
}

fn fuzzy_match_score(matcher: &SkimMatcherV2, text: &str, query: &str) -> Option<i64> {
    matcher
        .fuzzy_match(text, query)
        .or_else(|| matcher.fuzzy_match(&text.to_lowercase(), &query.to_lowercase()))
}

fn by_confidence(a: &Skill, b: &Skill) -> Ordering {
    b.confidence
        .total_cmp(&a.confidence)
        .then_with(|| a.name.cmp(&b.name))
}

/// Command palette lookup: fuzzy-ranks skills by name.
///
/// An empty query lists every skill, most confident first.
pub fn search_skills<'a>(skills: &'a [Skill], query: &str, limit: usize) -> Vec<SkillMatch<'a>> {
    let query = query.trim();
    let matcher = SkimMatcherV2::default();

    let mut matches = skills
        .iter()
        .filter_map(|skill| {
            if query.is_empty() {
                return Some(SkillMatch { skill, score: 0 });
            }
            fuzzy_match_score(&matcher, &skill.name, query).map(|score| SkillMatch { skill, score })
        })
        .collect::<Vec<_>>();

    matches.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| by_confidence(a.skill, b.skill))
    });
    matches.truncate(limit);
    matches
}
