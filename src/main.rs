use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use skill_radar::calendar::{build_calendar, load_contributions};
use skill_radar::radar::layout_radar;
use skill_radar::skills::{RenderArea, load_catalog, search_skills, visible_skills};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Lay out the tech-radar blips for a skill catalog
    Layout {
        catalog: PathBuf,
        #[arg(long)]
        iterations: Option<usize>,
    },
    /// List the skills shown in one render area
    Visible {
        catalog: PathBuf,
        #[arg(long, default_value = "tech-radar")]
        area: RenderArea,
    },
    /// Fuzzy-search skills by name
    Search {
        catalog: PathBuf,
        query: String,
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Bucket contribution counts into heatmap weeks
    Calendar { contributions: PathBuf },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).context("failed to write JSON")?;
    writeln!(stdout).context("failed to write JSON")?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Command::Layout {
            catalog,
            iterations,
        } => {
            let mut catalog = load_catalog(&catalog)?;
            if let Some(iterations) = iterations {
                catalog.radar.iterations = iterations;
            }
            let shown = visible_skills(&catalog.skills, RenderArea::TechRadar, &catalog.visibility)
                .cloned()
                .collect::<Vec<_>>();
            log::info!("{} of {} skills on the radar", shown.len(), catalog.skills.len());
            print_json(&layout_radar(&shown, &catalog.radar))
        }
        Command::Visible { catalog, area } => {
            let catalog = load_catalog(&catalog)?;
            let shown = visible_skills(&catalog.skills, area, &catalog.visibility).collect::<Vec<_>>();
            print_json(&shown)
        }
        Command::Search {
            catalog,
            query,
            limit,
        } => {
            let catalog = load_catalog(&catalog)?;
            print_json(&search_skills(&catalog.skills, &query, limit))
        }
        Command::Calendar { contributions } => {
            let points = load_contributions(&contributions)?;
            print_json(&build_calendar(&points))
        }
    }
}
