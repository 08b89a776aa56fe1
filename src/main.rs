// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use tracing::{info, Level};

use artset::music::note_name;
use artset::{ArticulationExporter, ProfileTable, TableFile, DEFAULT_OUTPUT_DIR};

fn print_usage() {
    println!("ARTSET - Articulation Set Generator");
    println!();
    println!("Usage: artset [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --output <DIR>      Output directory (default: {})", DEFAULT_OUTPUT_DIR);
    println!("  --config <FILE>     Load profiles from a YAML or TOML table file");
    println!("  --profile <NAME>    Only generate the named profile (repeatable)");
    println!("  --clean             Remove the output directory first (only if every profile is valid)");
    println!("  --verify            Read every generated file back and check it");
    println!("  --list              List profiles and their keyswitches");
    println!("  --verbose           Enable debug logging");
    println!("  --help              Show this help message");
}

/// Parsed command line
#[derive(Debug, Default)]
struct Options {
    output_dir: Option<PathBuf>,
    config: Option<PathBuf>,
    profiles: Vec<String>,
    clean: bool,
    verify: bool,
    list: bool,
    verbose: bool,
    help: bool,
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options::default();
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        let arg = arg.as_str();
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| anyhow!("{} requires a value", flag))
        };

        match arg {
            "--output" | "-o" => options.output_dir = Some(PathBuf::from(value(arg)?)),
            "--config" | "-c" => options.config = Some(PathBuf::from(value(arg)?)),
            "--profile" | "-p" => options.profiles.push(value(arg)?),
            "--clean" => options.clean = true,
            "--verify" => options.verify = true,
            "--list" => options.list = true,
            "--verbose" | "-v" => options.verbose = true,
            "--help" | "-h" => options.help = true,
            other => bail!("Unknown option: {}", other),
        }
    }

    Ok(options)
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn list_profiles(table: &ProfileTable) {
    for definition in table.definitions() {
        println!("{}", definition.display_name());
        match definition.validate() {
            Ok(profile) => {
                for entry in profile.entries() {
                    println!("  {:>3} {:<5} {}", entry.note, note_name(entry.note), entry.label);
                }
            }
            Err(e) => println!("  (invalid: {})", e),
        }
    }
}

/// Generate all selected profiles. Returns false if any profile failed.
fn run(options: Options) -> Result<bool> {
    let (table, configured_dir) = match options.config {
        Some(ref path) => {
            let file = TableFile::load(path)
                .with_context(|| format!("Failed to load profile table {:?}", path))?;
            let dir = file.output_dir.clone();
            (file.into_table(), dir)
        }
        None => (ProfileTable::builtin(), None),
    };

    let table = if options.profiles.is_empty() {
        table
    } else {
        table.select(&options.profiles)?
    };

    if options.list {
        list_profiles(&table);
        return Ok(true);
    }

    let output_dir = options
        .output_dir
        .or(configured_dir)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    let exporter = ArticulationExporter::new(output_dir)
        .with_verify(options.verify)
        .with_clean(options.clean);

    info!("Generating {} articulation set(s)", table.len());
    let report = exporter.export_all(&table);

    info!(
        "{} written, {} failed",
        report.written.len(),
        report.failure_count()
    );
    for (name, e) in &report.failures {
        eprintln!("Error: {}: {}", name, e);
    }

    Ok(report.is_success())
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage();
            std::process::exit(1);
        }
    };

    if options.help {
        print_usage();
        return Ok(());
    }

    init_logging(options.verbose);

    if !run(options)? {
        std::process::exit(1);
    }

    Ok(())
}
