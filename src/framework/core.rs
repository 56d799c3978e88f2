//! # Core Synthesis Framework
//!
//! This module defines the generic building blocks of the synthesis engine.
//!
//! ## Key Types
//!
//! - [`Synthesizer`]: The trait every transformation step implements.
//! - [`Pipeline`]: Runs an ordered list of synthesizers against one template.

use std::fmt;

use tracing::{debug, debug_span, warn};

use super::SynthesisError;
use crate::config::NormalizedConfig;
use crate::model::Template;

/// One transformation step: reads a normalized event config and mutates the template.
///
/// # Architecture Note
/// Each resource kind (or shared-resource extension) gets its own unit struct
/// implementing this trait. The [`Pipeline`] only knows about the trait, so the
/// ordering lives in one place and each step can be tested on its own.
///
/// Implementations must be deterministic: the same template and config always
/// produce the same mutation.
pub trait Synthesizer: Sync {
    /// Stable, kebab-case name used in logs and ordering checks.
    fn name(&self) -> &'static str;

    /// Applies this step to `template`.
    ///
    /// A step that fails must not have written anything itself. Writes made by
    /// earlier steps are the caller's concern.
    fn synthesize(
        &self,
        template: &mut Template,
        config: &NormalizedConfig,
    ) -> Result<(), SynthesisError>;
}

impl fmt::Debug for dyn Synthesizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered, fail-fast sequence of synthesizers.
///
/// The first failing step stops the run. Nothing is rolled back here; see
/// [`TemplateMutator`](crate::lifecycle::TemplateMutator) for per-event atomicity.
#[derive(Debug, Clone, Copy)]
pub struct Pipeline {
    steps: &'static [&'static dyn Synthesizer],
}

impl Pipeline {
    pub const fn new(steps: &'static [&'static dyn Synthesizer]) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &'static [&'static dyn Synthesizer] {
        self.steps
    }

    /// Step names in execution order.
    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|step| step.name()).collect()
    }

    pub fn run(&self, template: &mut Template, config: &NormalizedConfig) -> Result<(), SynthesisError> {
        let span = debug_span!("synthesize", topic = %config.topic_resource_name);
        let _guard = span.enter();

        for step in self.steps {
            if let Err(e) = step.synthesize(template, config) {
                warn!(step = step.name(), error = %e, "Synthesis step failed");
                return Err(e);
            }
            debug!(step = step.name(), resources = template.len(), "Applied");
        }
        Ok(())
    }
}
