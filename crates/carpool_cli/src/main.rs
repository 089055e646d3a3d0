use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use carpool_core::synthetic::{generate_dataset, GeneratorParams};
use carpool_core::{FirstFitMatcher, MatchConfig, MatchSummary, RiderAssignment};
use carpool_io::{export_groups, load_dataset, write_dataset_csv, ExportFormat};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_INPUT: &str = "data/trip_requests.csv";
const DEFAULT_OUTPUT: &str = "data/carpool_groups.csv";

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "carpool",
    version,
    about = "Match drivers and riders from a trip request CSV into carpool groups",
    long_about = "Reads a trip request dataset, groups riders under compatible drivers\n\
                  (detour distance, departure time, gender and smoking preferences),\n\
                  estimates the CO2 saved and writes one row per driver/rider pair."
)]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Form carpool groups from a dataset and export them
    Match {
        /// Trip request CSV
        #[arg(long, env = "CARPOOL_INPUT", default_value = DEFAULT_INPUT)]
        input: PathBuf,
        /// Output file (.csv or .json)
        #[arg(long, env = "CARPOOL_OUTPUT", default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
        /// JSON file with matching parameters; flags below override it
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output format (defaults to the output file extension)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
        /// Maximum departure time difference in minutes
        #[arg(long)]
        threshold_minutes: Option<u32>,
        /// kg CO2 credited per km of a matched rider's trip
        #[arg(long)]
        emission_factor: Option<f64>,
        /// Assign each rider to at most one group
        #[arg(long)]
        exclusive: bool,
        /// Compare departure times across midnight
        #[arg(long)]
        wrap_midnight: bool,
    },
    /// Write a seeded synthetic trip request dataset
    Generate {
        /// Output CSV path
        #[arg(long, default_value = DEFAULT_INPUT)]
        output: PathBuf,
        /// Number of drivers
        #[arg(long, default_value_t = 100)]
        drivers: usize,
        /// Number of riders
        #[arg(long, default_value_t = 500)]
        riders: usize,
        /// RNG seed
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Csv,
    Json,
}

impl From<FormatArg> for ExportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Json => ExportFormat::Json,
        }
    }
}

// ── helpers ────────────────────────────────────────────────────────

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn resolve_config(
    config_path: Option<&Path>,
    threshold_minutes: Option<u32>,
    emission_factor: Option<f64>,
    exclusive: bool,
    wrap_midnight: bool,
) -> Result<MatchConfig> {
    let mut config = match config_path {
        Some(path) => MatchConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => MatchConfig::default(),
    };
    if let Some(minutes) = threshold_minutes {
        config = config.with_time_threshold_minutes(minutes);
    }
    if let Some(factor) = emission_factor {
        config = config.with_emission_factor(factor);
    }
    if exclusive {
        config = config.with_rider_assignment(RiderAssignment::Exclusive);
    }
    if wrap_midnight {
        config = config.with_wrap_midnight(true);
    }
    config.validate().context("invalid matching parameters")?;
    Ok(config)
}

// ── commands ───────────────────────────────────────────────────────

fn run_match(input: &Path, output: &Path, format: Option<FormatArg>, config: MatchConfig) -> Result<()> {
    let dataset =
        load_dataset(input).with_context(|| format!("loading dataset {}", input.display()))?;
    if dataset.is_empty() {
        warn!(path = %input.display(), "dataset has no usable records");
    }

    let matcher = FirstFitMatcher::new(config);
    let outcome = matcher.form_groups(&dataset.drivers, &dataset.riders);
    let summary = MatchSummary::from_outcome(&dataset.drivers, &dataset.riders, &outcome);
    info!(
        drivers = summary.drivers_considered,
        riders = summary.riders_considered,
        groups = summary.groups_formed,
        pairs = summary.matched_pairs,
        distinct_riders = summary.distinct_riders_matched,
        shared_riders = summary.riders_in_multiple_groups,
        unmatched_drivers = summary.unmatched_drivers,
        carbon_saved_kg = summary.total_carbon_saved_kg,
        skipped_rows = dataset.skipped.len(),
        skipped_records = summary.skipped_records,
        "matching finished"
    );

    let format = format.map_or_else(|| ExportFormat::from_path(output), ExportFormat::from);
    export_groups(&outcome.groups, output, format)
        .with_context(|| format!("writing groups to {}", output.display()))?;
    Ok(())
}

fn run_generate(output: &Path, params: GeneratorParams) -> Result<()> {
    let records = generate_dataset(&params);
    write_dataset_csv(output, &records)
        .with_context(|| format!("writing dataset to {}", output.display()))?;
    info!(
        path = %output.display(),
        drivers = params.num_drivers,
        riders = params.num_riders,
        seed = params.seed,
        "synthetic dataset written"
    );
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Match {
            input,
            output,
            config,
            format,
            threshold_minutes,
            emission_factor,
            exclusive,
            wrap_midnight,
        } => {
            let config = resolve_config(
                config.as_deref(),
                threshold_minutes,
                emission_factor,
                exclusive,
                wrap_midnight,
            )?;
            run_match(&input, &output, format, config)
        }
        Commands::Generate {
            output,
            drivers,
            riders,
            seed,
        } => run_generate(
            &output,
            GeneratorParams::default().with_counts(drivers, riders).with_seed(seed),
        ),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
