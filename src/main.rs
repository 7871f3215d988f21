use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use release_gate::cli::{run_gate, GateArgs};
use release_gate::config;
use release_gate::observability;
use release_gate::output::OutputSink;
use release_gate::ui;

#[derive(clap::Parser)]
#[command(
    name = "release-gate",
    version,
    about = "Validate a requested semantic-version bump against the published version"
)]
struct Args {
    #[arg(long, env = "VERSION", help = "Requested bump: major, minor, patch, premajor, preminor, prepatch or prerelease")]
    version_type: String,

    #[arg(long, env = "PRERELEASE_ID", default_value = "none", help = "Prerelease identifier: alpha, beta, rc or none")]
    prerelease_id: String,

    #[arg(long, help = "Current version; skips reading the manifest")]
    current: Option<String>,

    #[arg(short, long, help = "Manifest to read the current version from (package.json or Cargo.toml)")]
    manifest: Option<PathBuf>,

    #[arg(long, env = "GITHUB_OUTPUT", help = "File to append step outputs to; stdout when unset")]
    github_output: Option<PathBuf>,

    #[arg(short, long, env = "RELEASE_GATE_CONFIG", help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Print the outcome as JSON on stdout")]
    json: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "More logging (-v debug, -vv trace)")]
    verbose: u8,

    #[arg(short, long, help = "Only log errors")]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    observability::init_logging(observability::env_filter(args.quiet, args.verbose, "warn"));

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<bool> {
    let config = config::load_config(args.config.as_deref()).context("loading configuration")?;

    // In JSON mode stdout carries the outcome, so step outputs only go to a file.
    let output = if args.json && args.github_output.is_none() {
        None
    } else {
        Some(OutputSink::new(args.github_output))
    };

    let gate = GateArgs {
        version_type: args.version_type,
        prerelease_id: args.prerelease_id,
        current_version: args.current,
        manifest_path: args.manifest,
        output,
    };

    if gate.current_version.is_none() && !args.json {
        let path = gate
            .manifest_path
            .as_ref()
            .unwrap_or(&config.manifest.path);
        ui::display_status(&format!("Reading version from {}", path.display()));
    }

    let report = run_gate(&gate, &config)?;

    if args.json {
        println!("{}", serde_json::to_string(&report.outcome)?);
    } else {
        ui::display_inputs(&report.current_version, &gate.version_type, &gate.prerelease_id);
        ui::display_outcome(&report.outcome);
    }

    Ok(report.approved())
}
