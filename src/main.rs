use anyhow::Context;
use clap::Parser;
use route_analyzer::io::{load_track, to_json_pretty, write_report};
use route_analyzer::{AnalysisParameters, RouteError, analyze};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Semicolon-delimited `timestamp;latitude;longitude` records
    #[arg(short, long, default_value = "evaluation/waypoints.csv")]
    waypoints: PathBuf,

    /// Analysis parameters, `.yml`, `.toml` or `.json`
    #[arg(short, long, default_value = "evaluation/custom-parameters.yml")]
    params: PathBuf,

    #[arg(short, long, default_value = "evaluation/output.json")]
    output: PathBuf,

    /// Print the document instead of writing it to `--output`
    #[arg(long)]
    stdout: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let track = load_track(&args.waypoints)
        .with_context(|| format!("reading waypoints from {}", args.waypoints.display()))?;
    let params = AnalysisParameters::load(&args.params)
        .with_context(|| format!("reading parameters from {}", args.params.display()))?;

    let report = match analyze(&track, params.as_ref()) {
        Ok(report) => report,
        Err(RouteError::EmptyTrack | RouteError::MissingParameters) => {
            println!("No valid waypoints found.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if args.stdout {
        println!("{}", to_json_pretty(&report)?);
    } else {
        write_report(&args.output, &report)
            .with_context(|| format!("writing report to {}", args.output.display()))?;
    }

    Ok(())
}
