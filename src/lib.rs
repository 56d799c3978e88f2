//! # cwe-sns-lambda
//!
//! > **CloudWatch Events → SNS → Lambda wiring, synthesized into CloudFormation.**
//!
//! For every `cweSns` event of a serverless function, this crate adds a cluster of
//! resources to the compiled CloudFormation template: an SNS topic, a dead-letter
//! queue, a topic policy, a queue policy, a target on an existing event rule, an SNS
//! subscription for the function and an invoke permission. Several events can share
//! the DLQ and the policies, and those shared resources are extended rather than
//! clobbered.
//!
//! ## 🏗️ Design
//!
//! ### A typed template graph
//! The template is a map from logical ID to [`Resource`](model::Resource). Kinds we
//! synthesize are typed structs; anything else (the user's event rule, the lambda
//! functions) is carried through verbatim.
//!
//! ### One trait, seven steps
//! Each step implements [`Synthesizer`](framework::Synthesizer) and the fixed order
//! lives in [`SYNTHESIS_ORDER`](synthesizers::SYNTHESIS_ORDER). The topic comes first
//! because every other step references it.
//!
//! ### Fail fast
//! Errors are [`SynthesisError`](framework::SynthesisError) values:
//! a missing `ruleResourceName`, a rule without `Properties.Targets`, a rule that
//! already has 5 targets, a shared logical ID held by a resource of another kind, or
//! a shared policy too malformed to extend.
//! The first error stops the build.
//!
//! ### Observability
//! `tracing` spans per event and debug events per step. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: template, resources, references and policy documents.
//! - [`naming`]: naming conventions (PascalCase, derived logical IDs, prefixes).
//! - [`config`]: raw and normalized event configs, service definitions, file loading.
//! - [`framework`]: the `Synthesizer` trait, the `Pipeline` and the error type.
//! - [`synthesizers`]: the seven steps.
//! - [`lifecycle`]: [`TemplateMutator`](lifecycle::TemplateMutator) and tracing setup.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! cwe-sns-lambda --service serverless.yml --template .serverless/cloudformation-template-update-stack.json
//! ```
//!
//! ```rust,ignore
//! use cwe_sns_lambda::config::{EventRequest, RawEventConfig};
//! use cwe_sns_lambda::lifecycle::TemplateMutator;
//!
//! let request = EventRequest {
//!     function_name: "processEvent".into(),
//!     stage: "dev".into(),
//!     service_name: "orders".into(),
//!     config: RawEventConfig::for_rule("OrderPlacedRule"),
//! };
//! TemplateMutator::new(&mut template).add_event(&request)?;
//! ```

pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod naming;
pub mod synthesizers;
