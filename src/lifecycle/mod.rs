//! Orchestration of a synthesis run.
//!
//! # Main Components
//!
//! - [`TemplateMutator`] - Applies the synthesis pipeline to each requested event, in order
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod template_mutator;
pub mod tracing;

pub use template_mutator::*;
pub use self::tracing::*;
