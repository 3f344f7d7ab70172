//! Skillmatch CLI - match skilled resources against task requirements.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};
use skillmatch_core::ProficiencyScale;
use skillmatch_execution::{
    write_report, AllocationEngine, ExactMatch, ReportFormat, SkillOnlyMatch, Strategy,
};
use skillmatch_storage::{RecordStore, TextFileStore, DEFAULT_RESOURCES_FILE, DEFAULT_TASKS_FILE};

#[derive(Parser)]
#[command(name = "skillmatch")]
#[command(about = "Report which resources qualify for which tasks", long_about = None)]
struct Cli {
    /// Resource records, one `name | skill:level, ...` per line
    #[arg(long, default_value = DEFAULT_RESOURCES_FILE)]
    resources: PathBuf,

    /// Task records, one `name | skill:level, ...` per line
    #[arg(long, default_value = DEFAULT_TASKS_FILE)]
    tasks: PathBuf,

    /// Matching strategy to run (repeatable; default: exact, then skill-only)
    #[arg(long = "strategy", value_enum)]
    strategies: Vec<StrategyArg>,

    /// JSON proficiency scale, e.g. {"levels": ["beginner", "intermediate", "expert"]}
    #[arg(long)]
    scale: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    format: FormatArg,

    /// Log debug details (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    /// Skill present at or above the required level
    Exact,
    /// Skill present at any level
    SkillOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let scale = match &cli.scale {
        Some(path) => load_scale(path)?,
        None => ProficiencyScale::standard(),
    };
    let strategies = build_strategies(&cli.strategies, scale);
    if let Some(scale) = exact_scale(&strategies) {
        info!("Using proficiency scale: {}", scale.levels().join(" < "));
    }

    let store = TextFileStore::new(&cli.resources, &cli.tasks);
    let engine = AllocationEngine::new(store.resources_or_empty(), store.tasks_or_empty());

    let allocations = engine.run_all(&strategies);
    info!("Completed {} matching runs", allocations.len());

    let mut stdout = std::io::stdout().lock();
    write_report(&allocations, cli.format.into(), &mut stdout)
        .context("Failed to write report")?;

    Ok(())
}

fn load_scale(path: &Path) -> Result<ProficiencyScale> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scale file {}", path.display()))?;
    let scale = ProficiencyScale::from_json(&json)
        .with_context(|| format!("Invalid scale file {}", path.display()))?;
    Ok(scale)
}

fn build_strategies(args: &[StrategyArg], scale: ProficiencyScale) -> Vec<Strategy> {
    if args.is_empty() {
        return Strategy::all(scale);
    }

    args.iter()
        .map(|arg| match arg {
            StrategyArg::Exact => Strategy::Exact(ExactMatch::new().with_scale(scale.clone())),
            StrategyArg::SkillOnly => Strategy::SkillOnly(SkillOnlyMatch),
        })
        .collect()
}

/// Scale of the first exact strategy, if any compares levels.
fn exact_scale(strategies: &[Strategy]) -> Option<&ProficiencyScale> {
    strategies.iter().find_map(|s| match s {
        Strategy::Exact(exact) => Some(exact.scale()),
        Strategy::SkillOnly(_) => None,
    })
}
