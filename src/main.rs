use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use supply_gap::config::{Config, ConfigOverrides};
use supply_gap::gap::{analyze, AveragePolicy, ClassificationScheme, GapReport};
use supply_gap::logging;
use supply_gap::output::csv::{gaps_to_csv, summary_to_csv};
use supply_gap::output::json::render_json;
use supply_gap::output::table::{render_gaps_table, render_summary_table};
use supply_gap::output::OutputFormat;
use tracing::info;

#[derive(Debug, Parser)]
#[command(
    name = "supply-gap",
    about = "Analyze supply-demand gaps for contract farming"
)]
struct Cli {
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long, value_enum)]
    output: Option<OutputFormat>,
    /// banded | sign_only
    #[arg(long)]
    scheme: Option<String>,
    /// aggregate_ratio | mean_of_records
    #[arg(long)]
    average: Option<String>,
    #[arg(long = "severe-threshold")]
    severe_threshold: Option<f64>,
    #[arg(long = "moderate-threshold")]
    moderate_threshold: Option<f64>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Args, Clone)]
struct InputArgs {
    /// Comma-separated crop names
    #[arg(short, long)]
    items: String,
    /// Comma-separated forecast quantities (kg)
    #[arg(short, long, allow_hyphen_values = true)]
    forecast: String,
    /// Comma-separated actual quantities (kg)
    #[arg(short, long, allow_hyphen_values = true)]
    actual: String,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Per-item gaps followed by the summary
    Analyze {
        #[command(flatten)]
        input: InputArgs,
        /// Also write the gap records as CSV to this path
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Summary totals only
    Summary {
        #[command(flatten)]
        input: InputArgs,
    },
    Config {
        #[arg(long)]
        init: bool,
        #[arg(long)]
        show: bool,
    },
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let mut config = Config::load(Some(&config_path))?;
    config.apply_overrides(ConfigOverrides {
        scheme: cli
            .scheme
            .as_deref()
            .map(str::parse::<ClassificationScheme>)
            .transpose()?,
        severe_threshold: cli.severe_threshold,
        moderate_threshold: cli.moderate_threshold,
        average: cli
            .average
            .as_deref()
            .map(str::parse::<AveragePolicy>)
            .transpose()?,
        format: cli.output,
    });

    if let Commands::Config { init, show } = &cli.command {
        return handle_config_command(*init, *show, &config, &config_path);
    }

    let options = config.analysis_options()?;
    let format = config.output.format;

    match &cli.command {
        Commands::Analyze { input, export } => {
            let report = analyze(&input.items, &input.forecast, &input.actual, &options)?;
            if let Some(path) = export {
                export_csv(&report, path)?;
            }
            print_report(&report, format)?;
        }
        Commands::Summary { input } => {
            let report = analyze(&input.items, &input.forecast, &input.actual, &options)?;
            print_summary(&report, format)?;
        }
        Commands::Config { .. } => unreachable!("config command handled before dispatch"),
    }

    Ok(())
}

fn handle_config_command(init: bool, show: bool, config: &Config, config_path: &Path) -> Result<()> {
    if init {
        Config::write_template(config_path)?;
        println!("Wrote config template to {}", config_path.display());
    }
    if show || !init {
        println!("{}", render_json(config)?);
    }
    Ok(())
}

fn export_csv(report: &GapReport, path: &Path) -> Result<()> {
    let data = gaps_to_csv(&report.records)?;
    fs::write(path, data).with_context(|| format!("failed writing export: {}", path.display()))?;
    info!(path = %path.display(), rows = report.records.len(), "wrote CSV export");
    Ok(())
}

fn print_report(report: &GapReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            println!("{}", render_gaps_table(&report.records));
            println!("{}", render_summary_table(&report.summary));
        }
        OutputFormat::Json => println!("{}", render_json(report)?),
        OutputFormat::Csv => print!("{}", gaps_to_csv(&report.records)?),
    }
    Ok(())
}

fn print_summary(report: &GapReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", render_summary_table(&report.summary)),
        OutputFormat::Json => println!("{}", render_json(&report.summary)?),
        OutputFormat::Csv => print!("{}", summary_to_csv(&report.summary)?),
    }
    Ok(())
}
