use std::fs;
use std::path::PathBuf;

use log::info;
use rand::Rng;

use crate::core::locate::ReferenceLocator;
use crate::core::naming::ArtifactNamer;
use crate::core::process::ExternalProcess;
use crate::core::runner::{ErrorEvaluationRunner, ReductionRunner};
use crate::types::config::Config;
use crate::types::{AppError, AppResult, Directive};

/// Sequences one directive: reduction first, then error evaluation over
/// whatever reduction produced (or over the directive's own inputs when no
/// reduction was requested). Fully sequential; the only parallelism is
/// inside the external tool, steered by the directive's worker count.
pub struct BatchOrchestrator<'a, R: Rng> {
    config: &'a Config,
    handler: PathBuf,
    process: &'a dyn ExternalProcess,
    locator: &'a dyn ReferenceLocator,
    namer: ArtifactNamer<R>,
}

impl<'a, R: Rng> BatchOrchestrator<'a, R> {
    pub fn new(
        config: &'a Config,
        handler: PathBuf,
        process: &'a dyn ExternalProcess,
        locator: &'a dyn ReferenceLocator,
        namer: ArtifactNamer<R>,
    ) -> Self {
        Self {
            config,
            handler,
            process,
            locator,
            namer,
        }
    }

    pub fn execute(&mut self, directive: &Directive) -> AppResult<()> {
        if directive.is_noop() {
            info!("directive requests neither --reduce nor --error, nothing to do");
            return Ok(());
        }

        let mut targets = directive.inputs.clone();

        if directive.do_reduce {
            // validate() guarantees this, but the invariant belongs to the
            // directive, not to this call site.
            let state_labels = directive.state_labels.as_deref().ok_or_else(|| {
                AppError::Configuration("state frequencies are not specified".to_string())
            })?;

            fs::create_dir_all(self.config.reduced_dir())?;
            let runner =
                ReductionRunner::new(&self.handler, self.process, self.config.reduced_dir());
            targets = runner.run(
                &mut self.namer,
                &directive.inputs,
                &directive.ratios,
                directive.kind,
                state_labels,
            )?;
            info!("reduction produced {} artifact(s)", targets.len());
        }

        if directive.do_error {
            let runner = ErrorEvaluationRunner::new(&self.handler, self.process, self.locator);
            runner.run(
                &targets,
                self.config.reference_dir(),
                &directive.pcaps,
                directive.nworkers,
            )?;
        }

        Ok(())
    }
}
