//! drift - Configuration drift CLI tool
//!
//! Compares a template/baseline configuration file against the actual one
//! and reports which named entries under a section were added, removed, or
//! modified.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use config_drift::{diff_yaml, value, SectionSummary};

#[derive(Debug, Parser)]
#[command(name = "drift", version, about = "Detect drift between two nested configuration files")]
struct Cli {
    /// Template/baseline file
    #[arg(default_value = "docker-compose.yml.template")]
    template: PathBuf,

    /// Actual file to compare against the template
    #[arg(default_value = "docker-compose.yml")]
    actual: PathBuf,

    /// Top-level section whose named entries are summarized
    #[arg(short, long, default_value = "services")]
    section: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum Format {
    /// Human-readable section summary
    Text,
    /// Flat diff list as JSON
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let template = load_map(&cli.template)?;
    let actual = load_map(&cli.actual)?;

    let result = diff_yaml(&template, &actual);

    match cli.format {
        Format::Text => {
            let summary = SectionSummary::for_section(&result, &cli.section);
            println!("{}", summary);
        }
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(result.diffs())?);
        }
    }

    Ok(())
}

fn load_map(file: &Path) -> Result<config_drift::Map, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(file)
        .map_err(|e| format!("Failed to read file {:?}: {}", file, e))?;
    let map = match file.extension().and_then(|e| e.to_str()) {
        Some("json") => value::from_json_map(&content),
        _ => value::from_yaml_map(&content),
    }
    .map_err(|e| format!("Failed to parse file {:?}: {}", file, e))?;
    Ok(map)
}
