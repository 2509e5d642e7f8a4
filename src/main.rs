//! docjob - CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use docjob::api::{API_BASE_URL, JobClient};
use docjob::context::EventContext;
use docjob::inputs::{RawInputs, parse_inputs};
use docjob::outputs::{ActionOutputs, OUTPUT_ENV_VAR, workflow_error};
use docjob::request::build_request;

/// Submit a documentation job to doc.holiday.
///
/// Every option can also be supplied as a GitHub Action input
/// (`INPUT_<NAME>` environment variable).
#[derive(Parser, Debug)]
#[command(name = "docjob")]
#[command(about = "Submit a documentation job to doc.holiday")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    inputs: RawInputs,

    /// API base URL
    #[arg(long, env = "DOCJOB_API_URL", default_value = API_BASE_URL)]
    api_url: String,

    /// File to append step outputs to
    #[arg(long, env = OUTPUT_ENV_VAR)]
    output_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{}", workflow_error(&format!("{:#}", e)));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("DOCJOB_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    info!("Starting doc.holiday job submission...");

    // Step 1: Parse inputs
    let inputs = parse_inputs(&cli.inputs).context("Invalid inputs")?;
    info!("Inputs parsed and validated successfully");

    // Step 2: Load event context and build the request
    let context = EventContext::from_env().context("Failed to load GitHub event context")?;
    let request = build_request(&inputs, &context)?;
    info!("API request constructed");

    // Step 3: Create job
    let client = JobClient::with_base_url(&cli.api_url)?;
    let record = client.create_job(&inputs.api_token, &request).await?;

    // Step 4: Report outputs
    let outputs = ActionOutputs::from_record(&record);
    match cli.output_file {
        Some(path) => outputs.write_to(&path)?,
        None => {
            for (name, value) in outputs.pairs() {
                println!("{}={}", name, value);
            }
        }
    }

    info!("✓ Job submitted");
    info!("Job ID: {}", outputs.job_id);
    info!("Job State: {}", outputs.job_state);
    info!("View job: {}", outputs.job_url);

    Ok(())
}
