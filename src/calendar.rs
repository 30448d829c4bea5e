//! GitHub-style contribution heatmap bucketing.
//!
//! Turns a flat list of dated contribution counts into Sunday-first week
//! rows with exactly seven slots each. Days inside the grid that have no data
//! are `None`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

pub const DAYS_PER_WEEK: usize = 7;
pub const MAX_LEVEL: u8 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionPoint {
    pub date: NaiveDate,
    pub count: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub count: u32,
    pub level: u8,
}

pub type CalendarWeek = [Option<CalendarDay>; DAYS_PER_WEEK];

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContributionCalendar {
    pub weeks: Vec<CalendarWeek>,
    pub total_contributions: u64,
    pub longest_streak: usize,
}

pub fn load_contributions(path: &Path) -> Result<Vec<ContributionPoint>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read contributions {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("invalid contribution JSON in {}", path.display()))
}

/// Heatmap intensity for `count` relative to the busiest day.
pub fn contribution_level(count: u32, max_count: u32) -> u8 {
    if count == 0 || max_count == 0 {
        return 0;
    }
    let scaled = (u64::from(count) * u64::from(MAX_LEVEL)).div_ceil(u64::from(max_count));
    scaled.min(u64::from(MAX_LEVEL)) as u8
}

fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_sunday());
    date - Days::new(offset)
}

fn longest_streak(counts: &BTreeMap<NaiveDate, u32>) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<NaiveDate> = None;

    for (&date, &count) in counts {
        if count == 0 {
            current = 0;
        } else if previous.and_then(|day| day.succ_opt()) == Some(date) && current > 0 {
            current += 1;
        } else {
            current = 1;
        }
        longest = longest.max(current);
        previous = Some(date);
    }

    longest
}

pub fn build_calendar(points: &[ContributionPoint]) -> ContributionCalendar {
    let mut counts = BTreeMap::new();
    for point in points {
        let entry = counts.entry(point.date).or_insert(0u32);
        *entry = entry.saturating_add(point.count);
    }

    let (Some((&first, _)), Some((&last, _))) = (counts.first_key_value(), counts.last_key_value())
    else {
        return ContributionCalendar::default();
    };

    if counts.len() < points.len() {
        log::warn!(
            "merged {} duplicate contribution dates",
            points.len() - counts.len()
        );
    }

    let max_count = counts.values().copied().max().unwrap_or(0);
    let total_contributions = counts.values().map(|&count| u64::from(count)).sum();

    let mut weeks = Vec::new();
    let mut cursor = week_start(first);
    while cursor <= last {
        let mut week: CalendarWeek = [None; DAYS_PER_WEEK];
        for slot in week.iter_mut() {
            *slot = counts.get(&cursor).map(|&count| CalendarDay {
                date: cursor,
                count,
                level: contribution_level(count, max_count),
            });
            cursor = match cursor.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }
        weeks.push(week);
        if cursor == NaiveDate::MAX {
            break;
        }
    }

    log::debug!(
        "bucketed {} days from {first} to {last} into {} weeks",
        counts.len(),
        weeks.len()
    );

    ContributionCalendar {
        weeks,
        total_contributions,
        longest_streak: longest_streak(&counts),
    }
}
