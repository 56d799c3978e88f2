use std::path::PathBuf;

use clap::Parser;
use cwe_sns_lambda::config::{load_service, load_template, write_template, SynthesisOptions};
use cwe_sns_lambda::lifecycle::{setup_tracing, TemplateMutator};
use tracing::{error, info};

/// Adds CloudWatch Events → SNS → Lambda resources to a compiled CloudFormation template.
#[derive(Debug, Parser)]
#[command(name = "cwe-sns-lambda", version, about)]
struct Cli {
    /// Service definition (serverless.yml, or .json).
    #[arg(long)]
    service: PathBuf,

    /// Compiled CloudFormation template (JSON).
    #[arg(long)]
    template: PathBuf,

    /// Where to write the updated template. Defaults to stdout.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Stage name, overriding `provider.stage`.
    #[arg(long)]
    stage: Option<String>,

    /// Log every event and synthesis step.
    #[arg(long, short)]
    verbose: bool,

    /// Roll the template back when an event fails midway.
    #[arg(long)]
    atomic: bool,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let service = load_service(&cli.service).await.map_err(|e| e.to_string())?;
    let mut template = load_template(&cli.template).await.map_err(|e| e.to_string())?;

    let options = SynthesisOptions { atomic: cli.atomic };
    let applied = TemplateMutator::with_options(&mut template, options)
        .apply_service(&service, cli.stage.as_deref())
        .map_err(|e| {
            error!(error = %e, "Synthesis failed");
            e.to_string()
        })?;

    match &cli.output {
        Some(path) => write_template(path, &template).await.map_err(|e| e.to_string())?,
        None => println!("{}", template.to_json_pretty().map_err(|e| e.to_string())?),
    }

    info!(events = applied, "Done");
    Ok(())
}
