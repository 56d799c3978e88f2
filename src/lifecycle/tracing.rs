//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Log lines go to stderr in a compact format without module paths, so the
//! synthesized template written to stdout stays machine-readable.
//!
//! - `RUST_LOG` wins when set.
//! - Otherwise `--verbose` selects `debug`, and the default is `info`.
//!
//! ```bash
//! # One line per cweSns event
//! RUST_LOG=info cwe-sns-lambda --service serverless.yml --template template.json
//!
//! # Raw configs, normalized configs and every synthesis step
//! cwe-sns-lambda --verbose --service serverless.yml --template template.json
//!
//! # Only the synthesizers
//! RUST_LOG=cwe_sns_lambda::synthesizers=debug cwe-sns-lambda ...
//! ```
//!
//! ## What Gets Traced
//!
//! - **Loading**: service definition and template, with function and resource counts
//! - **Events**: one `cwe_sns_event` span per event, carrying the function name
//! - **Steps**: each synthesizer, with the logical IDs it wrote or extended
//! - **Errors**: the failing step and the error, plus any rollback
//!
//! With `--verbose`:
//!
//! ```text
//! DEBUG cwe_sns_event: Raw cweSns config config=RawEventConfig { rule_resource_name: Some("OrderPlacedRule"), .. }
//!  INFO cwe_sns_event: Adding cweSns event handler rule=OrderPlacedRule topic=OrderPlacedRuleToProcessEventTopic
//! DEBUG cwe_sns_event:synthesize: Topic written logical_id=OrderPlacedRuleToProcessEventTopic replaced=false
//! DEBUG cwe_sns_event:synthesize: Applied step="topic" resources=2
//! ```
use tracing_subscriber::EnvFilter;

pub fn setup_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
