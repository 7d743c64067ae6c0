use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Duration;

use orbit_o_mat::animation::{Animation, InputEvent, SessionState, Timeline};
use orbit_o_mat::config::{parse_duration, Config};
use orbit_o_mat::elements_file::{self, ElementKey, ElementRow};
use orbit_o_mat::orbit::{ground_track, OrbitalElementSet, PositionSample};
use orbit_o_mat::tle::{self, CatalogReport, NamePrefix};
use orbit_o_mat::web;

#[derive(Parser)]
#[command(name = "orbit-o-mat")]
#[command(about = "Orbital elements and ground tracks from TLE catalogs")]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive a e i q Q for every record of a catalog
    Elements {
        tle: PathBuf,
        #[arg(short, long, default_value = "aeiqq_from_tle.txt")]
        output: PathBuf,
        /// Only records whose name starts with this (case-insensitive)
        #[arg(long)]
        prefix: Option<String>,
    },
    /// Strip everything but the element lines from a catalog
    Cleanup { input: PathBuf, output: PathBuf },
    /// Print ground-track samples as JSON lines
    Track {
        tle: Option<PathBuf>,
        #[arg(long)]
        prefix: Option<String>,
        /// Window length, e.g. "1h"
        #[arg(long)]
        duration: Option<String>,
        /// Sample spacing, e.g. "1m"
        #[arg(long)]
        step: Option<String>,
    },
    /// Print animation frames as JSON lines
    Animate {
        tle: Option<PathBuf>,
        #[arg(long)]
        prefix: Option<String>,
        /// Key presses to replay before rendering, e.g. "up,up,t"
        #[arg(long, value_delimiter = ',')]
        keys: Vec<String>,
    },
    /// Summarise one column of an element file
    Stats {
        file: PathBuf,
        /// a, e, i, q or Q; all columns when omitted
        key: Option<String>,
        #[arg(long)]
        min: Option<f64>,
        #[arg(long)]
        max: Option<f64>,
    },
    /// Serve the JSON API
    Serve {
        tle: Option<PathBuf>,
        #[arg(long)]
        prefix: Option<String>,
    },
}

#[derive(Serialize)]
struct TrackLine<'a> {
    name: &'a str,
    #[serde(flatten)]
    sample: PositionSample,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error reading config {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };

    match cli.command {
        Commands::Elements {
            tle,
            output,
            prefix,
        } => elements(&tle, &output, prefix.as_deref()),
        Commands::Cleanup { input, output } => cleanup(&input, &output),
        Commands::Track {
            tle,
            prefix,
            duration,
            step,
        } => track(&config, tle, prefix, duration, step),
        Commands::Animate { tle, prefix, keys } => animate(&config, tle, prefix, &keys),
        Commands::Stats { file, key, min, max } => stats(&file, key.as_deref(), min, max),
        Commands::Serve { tle, prefix } => serve(config, tle, prefix),
    }
}

fn load(path: &Path, prefix: Option<&NamePrefix>) -> Option<CatalogReport> {
    match tle::load_catalog(path, prefix) {
        Ok(report) => Some(report),
        Err(e) => {
            eprintln!("Error loading catalog: {}", e);
            None
        }
    }
}

/// Catalog from the command line, falling back to the config file.
fn load_satellites(
    config: &Config,
    tle: Option<PathBuf>,
    prefix: Option<String>,
) -> Option<Vec<OrbitalElementSet>> {
    let path = tle.unwrap_or_else(|| config.catalog.path.clone());
    let prefix = match prefix {
        Some(p) => Some(NamePrefix::new(&p)),
        None => config.catalog.prefix(),
    };
    load(&path, prefix.as_ref()).map(|r| r.satellites)
}

fn timeline(config: &Config, duration: Option<String>, step: Option<String>) -> Option<Timeline> {
    let parse = |value: Option<String>, default: Duration| match value {
        Some(s) => parse_duration(&s)
            .map_err(|e| eprintln!("Invalid duration {:?}: {}", s, e))
            .ok(),
        None => Some(default),
    };
    let duration = parse(duration, config.animation.duration)?;
    let step = parse(step, config.animation.step)?;
    Timeline::new(duration, step)
        .map_err(|e| eprintln!("Invalid timeline: {}", e))
        .ok()
}

fn elements(tle: &Path, output: &Path, prefix: Option<&str>) -> ExitCode {
    let prefix = prefix.map(NamePrefix::new);
    let Some(report) = load(tle, prefix.as_ref()) else {
        return ExitCode::FAILURE;
    };

    let rows: Vec<ElementRow> = report.satellites.iter().map(ElementRow::from).collect();
    if let Err(e) = elements_file::write_element_file(output, &rows) {
        eprintln!("Error writing {}: {}", output.display(), e);
        return ExitCode::FAILURE;
    }

    println!(
        "Wrote {} element rows to {} ({} records failed)",
        rows.len(),
        output.display(),
        report.failures.len()
    );
    ExitCode::SUCCESS
}

fn cleanup(input: &Path, output: &Path) -> ExitCode {
    match tle::clean_catalog_file(input, output) {
        Ok(kept) => {
            println!("Kept {} element lines", kept);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Cleanup failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn track(
    config: &Config,
    tle: Option<PathBuf>,
    prefix: Option<String>,
    duration: Option<String>,
    step: Option<String>,
) -> ExitCode {
    let Some(satellites) = load_satellites(config, tle, prefix) else {
        return ExitCode::FAILURE;
    };
    let Some(timeline) = timeline(config, duration, step) else {
        return ExitCode::FAILURE;
    };

    for t in timeline.times() {
        for sat in &satellites {
            match ground_track(sat, t) {
                Ok(sample) => {
                    let line = TrackLine {
                        name: sat.name(),
                        sample,
                    };
                    match serde_json::to_string(&line) {
                        Ok(json) => println!("{}", json),
                        Err(e) => log::error!("Failed to encode sample: {}", e),
                    }
                }
                Err(e) => log::warn!("{} at t={}: {}", sat.name(), t, e),
            }
        }
    }
    ExitCode::SUCCESS
}

fn animate(
    config: &Config,
    tle: Option<PathBuf>,
    prefix: Option<String>,
    keys: &[String],
) -> ExitCode {
    let Some(satellites) = load_satellites(config, tle, prefix) else {
        return ExitCode::FAILURE;
    };
    let Some(timeline) = timeline(config, None, None) else {
        return ExitCode::FAILURE;
    };

    let session = keys
        .iter()
        .filter_map(|k| {
            let event = InputEvent::from_key(k);
            if event.is_none() {
                log::warn!("Ignoring unknown key {:?}", k);
            }
            event
        })
        .fold(SessionState::default(), SessionState::apply);

    let mut animation = Animation::new(satellites, timeline, config.animation.trail_length);
    for _ in 0..animation.timeline().frame_count() {
        let frame = animation.advance(&session);
        match serde_json::to_string(&frame) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to encode frame {}: {}", frame.index, e),
        }
    }
    ExitCode::SUCCESS
}

fn stats(file: &Path, key: Option<&str>, min: Option<f64>, max: Option<f64>) -> ExitCode {
    let keys = match key {
        Some(k) => match ElementKey::from_str(k) {
            Ok(k) => vec![k],
            Err(_) => {
                eprintln!("Invalid key '{}'. Use one of: a, e, i, q, Q", k);
                return ExitCode::FAILURE;
            }
        },
        None => ElementKey::ALL.to_vec(),
    };

    let rows = match elements_file::read_element_file(file) {
        Ok(rows) => rows,
        Err(e) => {
            eprintln!("Error reading {}: {}", file.display(), e);
            return ExitCode::FAILURE;
        }
    };

    for key in keys {
        let values = elements_file::select(&rows, key, min, max);
        match elements_file::column_stats(&values) {
            Some(s) => println!(
                "{}: objects {}  min {:.7}  max {:.7}  mean {:.7}",
                key, s.count, s.min, s.max, s.mean
            ),
            None => println!("{}: no objects in range", key),
        }
    }
    ExitCode::SUCCESS
}

fn serve(config: Config, tle: Option<PathBuf>, prefix: Option<String>) -> ExitCode {
    let Some(satellites) = load_satellites(&config, tle, prefix) else {
        return ExitCode::FAILURE;
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to start runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(web::run_server(config, satellites)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}
