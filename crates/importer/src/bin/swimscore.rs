use chrono::Datelike;
use clap::{Parser, Subcommand};
use importer::{convert_events, parse_meet_text, ImporterError, MeetValidator};
use scoring::models::{ScoredMeet, ScoringConfig};
use scoring::{score_meet, PresetRegistry};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "swimscore")]
#[command(about = "Swim meet results parser and team scorer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a results text file and print the events as JSON
    Parse {
        file: PathBuf,

        #[arg(long)]
        validate_only: bool,
    },
    /// Parse and score a results text file
    Score {
        file: PathBuf,

        #[command(flatten)]
        rules: RulesSource,

        #[arg(long)]
        reference_year: Option<i32>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List the built-in scoring presets
    Presets,
}

/// `--config` wins over a preset from the flag or environment.
#[derive(clap::Args)]
struct RulesSource {
    #[arg(long, env = "SWIMSCORE_PRESET")]
    preset: Option<String>,

    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "swimscore={},importer={},scoring={}",
                    log_level, log_level, log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Parse {
            file,
            validate_only,
        } => {
            handle_parse(&file, validate_only).await?;
        }
        Commands::Score {
            file,
            rules,
            reference_year,
            name,
            output,
        } => {
            let config = load_scoring_config(&rules).await?;
            let reference_year = reference_year.unwrap_or_else(|| chrono::Local::now().year());
            handle_score(&file, config, reference_year, name, output).await?;
        }
        Commands::Presets => {
            list_presets();
        }
    }

    Ok(())
}

async fn handle_parse(file: &Path, validate_only: bool) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Reading results text from: {}", file.display());
    let text = tokio::fs::read_to_string(file).await?;

    let events = parse_meet_text(&text);
    if events.is_empty() {
        return Err(ImporterError::NoEventsFound.into());
    }

    if validate_only {
        tracing::info!("Validating {} parsed events...", events.len());
        let report = MeetValidator::validate(&events)?;
        report.log_warnings();
        tracing::info!("Validation successful ({} warnings)", report.warnings.len());
        return Ok(());
    }

    let (events, report) = MeetValidator::prune(events);
    report.log_warnings();
    println!("{}", serde_json::to_string_pretty(&events)?);

    Ok(())
}

async fn handle_score(
    file: &Path,
    config: ScoringConfig,
    reference_year: i32,
    name: Option<String>,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Reading results text from: {}", file.display());
    let text = tokio::fs::read_to_string(file).await?;

    let (events, report) = MeetValidator::prune(parse_meet_text(&text));
    report.log_warnings();
    if events.is_empty() {
        return Err(ImporterError::NoEventsFound.into());
    }

    let name = name.unwrap_or_else(|| {
        file.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Meet".to_string())
    });
    let meet = convert_events(name, &events);

    tracing::info!(
        "Scoring with '{}' (reference year {})",
        config.name,
        reference_year
    );
    let scored = score_meet(&meet, &config, reference_year);
    log_podium(&scored);

    let json = serde_json::to_string_pretty(&scored)?;
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(&path, json).await?;
            tracing::info!("Wrote scored meet to: {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

async fn load_scoring_config(
    rules: &RulesSource,
) -> Result<ScoringConfig, Box<dyn std::error::Error>> {
    if let Some(path) = &rules.config {
        tracing::info!("Loading scoring config from: {}", path.display());
        let json = tokio::fs::read_to_string(path).await?;
        return Ok(ScoringConfig::from_json(&json)?);
    }

    let registry = PresetRegistry::new();
    match &rules.preset {
        Some(name) => Ok(registry.get_by_name(name)?),
        None => Ok(registry.default_config()),
    }
}

fn log_podium(scored: &ScoredMeet) {
    tracing::info!("Club standings:");
    for (idx, standing) in scored.club_standings.iter().take(10).enumerate() {
        tracing::info!(
            "  {:>2}. {:<40} {} pts ({} gold, {} silver, {} bronze)",
            idx + 1,
            standing.club.name,
            standing.total_points,
            standing.gold_medals,
            standing.silver_medals,
            standing.bronze_medals
        );
    }
}

fn list_presets() {
    let registry = PresetRegistry::new();
    tracing::info!("Available scoring presets:");
    for id in registry.list_presets() {
        if let Some(config) = registry.get(id) {
            tracing::info!("  - {} ({})", id, config.name);
        }
    }
}
