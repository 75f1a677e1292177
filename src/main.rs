use std::path::PathBuf;

use anyhow::{Context, Result};
use bmpfx::{Limits, Pipeline, Strictness, Unstoppable, parse_filter_args};
use clap::{ArgAction, Parser, ValueEnum};
use log::{LevelFilter, debug, error, info, warn};

#[derive(Parser)]
#[command(name = "bmpfx")]
#[command(version, about = "Apply filters to a 24-bit BMP image", long_about = None)]
// Options are long-only: any `-name` after the paths is a filter.
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(after_help = "Filters run left to right:\n  \
    -crop W H        keep the bottom-left W x H region\n  \
    -gs              grayscale\n  \
    -neg             negative\n  \
    -blur SIGMA      gaussian blur\n  \
    -sharp           sharpen\n  \
    -thermo          thermal high-pass\n  \
    -edge THRESHOLD  edge detection")]
struct Cli {
    /// Input BMP file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output BMP file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Filters and their parameters, e.g. `-crop 800 600 -gs -blur 0.5`
    #[arg(
        value_name = "FILTERS",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    filters: Vec<String>,

    /// More log output (once for debug, twice for trace)
    #[arg(long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(long, conflicts_with = "verbose")]
    quiet: bool,

    /// How strictly to validate the input headers
    #[arg(long, value_enum, default_value_t = StrictnessArg::Standard)]
    strictness: StrictnessArg,

    /// Refuse inputs with more pixels than this
    #[arg(long, value_name = "N")]
    max_pixels: Option<u64>,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Print version
    #[arg(long, action = ArgAction::Version)]
    version: Option<bool>,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrictnessArg {
    Strict,
    Standard,
    Permissive,
}

impl From<StrictnessArg> for Strictness {
    fn from(arg: StrictnessArg) -> Self {
        match arg {
            StrictnessArg::Strict => Strictness::Strict,
            StrictnessArg::Standard => Strictness::Standard,
            StrictnessArg::Permissive => Strictness::Permissive,
        }
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        LevelFilter::Error
    } else {
        match cli.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env()
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let limits = Limits {
        max_pixels: cli.max_pixels,
        ..Default::default()
    };
    let mut image = bmpfx::read_file_with(
        &cli.input,
        Some(&limits),
        cli.strictness.into(),
        Unstoppable,
    )
    .context("failed to decode input")?;
    info!("File read");

    let mut specs = Vec::new();
    for parsed in parse_filter_args(&cli.filters) {
        match parsed {
            Ok(spec) => specs.push(spec),
            Err(e) => error!("{e}"),
        }
    }

    let pipeline = Pipeline::default();
    debug!(
        "available filters: {}",
        pipeline.registry().names().collect::<Vec<_>>().join(", ")
    );
    let report = pipeline.apply(&mut image, &specs, Unstoppable)?;
    if !report.all_applied() {
        warn!(
            "{} of {} filters skipped",
            report.skipped.len(),
            report.skipped.len() + report.applied.len()
        );
    }

    bmpfx::write_file(&cli.output, &image, Unstoppable).context("failed to write output")?;
    info!("The file has been created");
    info!("Image processed successfully!");
    Ok(())
}

/// Failing to read or write an image is reported but still exits 0; only
/// a usage error (from clap) exits non-zero.
fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(e) = run(&cli) {
        error!("{e:#}");
    }
}
