use tracing::{debug, info, info_span, warn};

use crate::config::{normalize, EventRequest, ServiceDefinition, SynthesisOptions};
use crate::framework::{Pipeline, SynthesisError};
use crate::model::Template;
use crate::synthesizers::PIPELINE;

/// Drives synthesis for a sequence of `cweSns` events against one template.
///
/// `TemplateMutator` is responsible for:
/// - **Normalization**: turning each raw event config into a [`NormalizedConfig`](crate::config::NormalizedConfig)
/// - **Ordering**: running [`PIPELINE`] once per event, events strictly in sequence
/// - **Failure policy**: fail-fast by default, or per-event rollback with
///   [`SynthesisOptions::atomic`]
///
/// Events are processed in the order given. Later events see, and extend, the
/// shared resources created by earlier ones, so reordering the input changes the
/// output (which event creates the DLQ, which event takes the last rule slot).
///
/// # Example
///
/// ```ignore
/// let mut template = Template::from_json_str(&compiled)?;
/// let mut mutator = TemplateMutator::new(&mut template);
/// mutator.apply_service(&service, None)?;
/// ```
pub struct TemplateMutator<'a> {
    template: &'a mut Template,
    pipeline: Pipeline,
    options: SynthesisOptions,
}

impl<'a> TemplateMutator<'a> {
    pub fn new(template: &'a mut Template) -> Self {
        Self::with_options(template, SynthesisOptions::default())
    }

    pub fn with_options(template: &'a mut Template, options: SynthesisOptions) -> Self {
        Self {
            template,
            pipeline: PIPELINE,
            options,
        }
    }

    /// Normalizes one event and runs every synthesis step for it.
    ///
    /// # Errors
    ///
    /// Returns the first [`SynthesisError`]. A configuration error never touches the
    /// template. For later failures, resources written by earlier steps of the same
    /// event stay in place unless the mutator is atomic, in which case the template
    /// is restored to its state before the event.
    pub fn add_event(&mut self, request: &EventRequest) -> Result<(), SynthesisError> {
        let span = info_span!("cwe_sns_event", function = %request.function_name);
        let _guard = span.enter();

        debug!(config = ?request.config, "Raw cweSns config");
        let config = normalize(
            &request.function_name,
            &request.stage,
            &request.service_name,
            &request.config,
        )?;
        info!(
            rule = %config.rule_resource_name,
            topic = %config.topic_resource_name,
            "Adding cweSns event handler"
        );

        let snapshot = self.options.atomic.then(|| self.template.clone());
        let result = self.pipeline.run(self.template, &config);
        if let (Err(e), Some(snapshot)) = (&result, snapshot) {
            warn!(error = %e, "Restoring template after failed event");
            *self.template = snapshot;
        }
        result
    }

    /// Processes `requests` in order, stopping at the first failure.
    ///
    /// Returns the number of events synthesized.
    pub fn apply_all<'r, I>(&mut self, requests: I) -> Result<usize, SynthesisError>
    where
        I: IntoIterator<Item = &'r EventRequest>,
    {
        let mut applied = 0;
        for request in requests {
            self.add_event(request)?;
            applied += 1;
        }
        Ok(applied)
    }

    /// Synthesizes every `cweSns` event declared in `service`.
    pub fn apply_service(
        &mut self,
        service: &ServiceDefinition,
        stage_override: Option<&str>,
    ) -> Result<usize, SynthesisError> {
        let requests = service.event_requests(stage_override);
        let applied = self.apply_all(&requests)?;
        info!(service = %service.service, events = applied, resources = self.template.len(), "Template updated");
        Ok(applied)
    }

    pub fn template(&self) -> &Template {
        self.template
    }
}
