//! Handling the lensbench CLI
//!
//! This module handles the command line parsing as well as the textual report printed after tracing.
use crate::{
    bench::OpticalBench,
    config::BenchConfig,
    error::{BenchError, BenchResult},
    lens::LensPassage,
    ray::Ray,
};
use clap::Parser;
use log::LevelFilter;
use std::{
    fmt::Display,
    path::{Path, PathBuf},
};
use uom::si::length::millimeter;

/// Raw command line arguments as parsed by `clap`.
#[derive(Parser, Debug)]
#[command(author, version, about = "Paraxial ray tracing through a stack of spherical lenses", long_about = None)]
pub struct PartialArgs {
    /// path of the bench description (YAML) to read in
    #[arg(short, long)]
    config: String,

    /// also print the outline path of each lens
    #[arg(short, long)]
    outline: bool,

    /// print debug information of each surface interaction
    #[arg(short, long)]
    verbose: bool,
}

/// Validated command line arguments of the lensbench application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// file path of the bench description
    pub config_path: PathBuf,
    /// print lens outlines
    pub outline: bool,
    /// default log level (may be overridden by `RUST_LOG`)
    pub log_level: LevelFilter,
}

/// Checks if the passed file path points to an existing YAML file.
fn file_path_is_valid(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| ext == "yaml" || ext == "yml")
}

impl TryFrom<PartialArgs> for Args {
    type Error = BenchError;

    fn try_from(part_args: PartialArgs) -> BenchResult<Self> {
        let config_path = PathBuf::from(&part_args.config);
        if !file_path_is_valid(&config_path) {
            return Err(BenchError::Console(format!(
                "invalid bench description file: {} (expected an existing .yaml / .yml file)",
                config_path.display()
            )));
        }
        let log_level = if part_args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        Ok(Self {
            config_path,
            outline: part_args.outline,
            log_level,
        })
    }
}

/// Build the bench described by `config`, trace all rays through it and return a textual report.
///
/// # Errors
///
/// This function will return an error if the bench description is invalid. Rays which cannot be traced
/// are reported in the output and do not abort the run.
pub fn trace_report(config: &BenchConfig, outline: bool) -> BenchResult<String> {
    let (bench, mut rays) = config.build()?;
    let results = bench.trace_rays(&mut rays);
    let report = TraceReport {
        bench: &bench,
        rays: &rays,
        results: &results,
        outline,
    };
    Ok(report.to_string())
}

struct TraceReport<'a> {
    bench: &'a OpticalBench,
    rays: &'a [Ray],
    results: &'a [BenchResult<Vec<LensPassage>>],
    outline: bool,
}
impl Display for TraceReport<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Lenses:")?;
        write!(f, "{}", self.bench)?;
        for (idx, lens) in self.bench.lenses().iter().enumerate() {
            if let Some(focal_length) = lens.focal_length() {
                writeln!(
                    f,
                    "#{idx}: effective focal length: {:.3} mm",
                    focal_length.get::<millimeter>()
                )?;
            }
        }
        if self.outline {
            writeln!(f, "\nOutlines:")?;
            for (idx, path) in self.bench.outlines().iter().enumerate() {
                writeln!(f, "#{idx}:")?;
                for cmd in path {
                    writeln!(f, "  {cmd}")?;
                }
            }
        }
        writeln!(f, "\nRays:")?;
        for (idx, (ray, result)) in self.rays.iter().zip(self.results).enumerate() {
            match result {
                Ok(passages) => {
                    let passages: Vec<String> = passages.iter().map(ToString::to_string).collect();
                    writeln!(f, "ray #{idx}: [{}]", passages.join(", "))?;
                    write!(f, "{ray}")?;
                }
                Err(e) => writeln!(f, "ray #{idx}: tracing failed: {e}")?,
            }
        }
        Ok(())
    }
}
