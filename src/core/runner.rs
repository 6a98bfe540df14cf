use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use log::{error, info, warn};
use rand::Rng;

use crate::core::locate::ReferenceLocator;
use crate::core::naming::{ArtifactNamer, core_name};
use crate::core::process::{ExternalProcess, render_argv};
use crate::types::{AppError, AppResult, ReductionKind};

/// Log the command line, run it, and surface a non-zero exit without
/// aborting. The batch keeps going; the artifact of a failed run may be
/// missing or malformed, which later stages report per item.
fn invoke_logged(process: &dyn ExternalProcess, argv: &[String]) {
    info!("{}", render_argv(argv));
    match process.invoke(argv) {
        Ok(Some(0)) => {}
        Ok(Some(status)) => warn!("{} exited with status {status}", argv[0]),
        Ok(None) => warn!("{} terminated by signal", argv[0]),
        Err(e) => error!("failed to run {}: {e}", argv[0]),
    }
}

/// Drives the external reduction tool across the (input × ratio) matrix.
pub struct ReductionRunner<'a> {
    handler: &'a Path,
    process: &'a dyn ExternalProcess,
    output_dir: &'a Path,
}

impl<'a> ReductionRunner<'a> {
    pub fn new(handler: &'a Path, process: &'a dyn ExternalProcess, output_dir: &'a Path) -> Self {
        Self {
            handler,
            process,
            output_dir,
        }
    }

    /// One invocation per (input, ratio) pair, input-major. Returns every
    /// reserved output path in invocation order, whether or not the tool
    /// succeeded in producing it.
    pub fn run<R: Rng>(
        &self,
        namer: &mut ArtifactNamer<R>,
        inputs: &[PathBuf],
        ratios: &[f64],
        kind: ReductionKind,
        state_labels: &Path,
    ) -> AppResult<Vec<PathBuf>> {
        let mut artifacts = Vec::with_capacity(inputs.len() * ratios.len());
        for input in inputs {
            let core = core_name(input);
            for ratio in ratios {
                let output = namer.generate(self.output_dir, core, &format!(".r{ratio}.fa"))?;
                let argv = vec![
                    self.handler.to_string_lossy().into_owned(),
                    "-t".to_string(),
                    kind.to_string(),
                    "-r".to_string(),
                    input.to_string_lossy().into_owned(),
                    "-p".to_string(),
                    ratio.to_string(),
                    "-o".to_string(),
                    output.to_string_lossy().into_owned(),
                    state_labels.to_string_lossy().into_owned(),
                ];
                invoke_logged(self.process, &argv);
                artifacts.push(output);
            }
        }
        Ok(artifacts)
    }
}

/// Expand pcap glob patterns into one deduplicated sample set. Overlapping
/// patterns collapse; the result is sorted so command lines are stable.
pub fn expand_samples(patterns: &[String]) -> AppResult<Vec<PathBuf>> {
    let mut samples = BTreeSet::new();
    for pattern in patterns {
        for entry in glob::glob(pattern)? {
            samples.insert(entry?);
        }
    }
    Ok(samples.into_iter().collect())
}

/// Drives the external error-measurement tool once per reduced automaton
/// that has a resolvable reference.
pub struct ErrorEvaluationRunner<'a> {
    handler: &'a Path,
    process: &'a dyn ExternalProcess,
    locator: &'a dyn ReferenceLocator,
}

impl<'a> ErrorEvaluationRunner<'a> {
    pub fn new(
        handler: &'a Path,
        process: &'a dyn ExternalProcess,
        locator: &'a dyn ReferenceLocator,
    ) -> Self {
        Self {
            handler,
            process,
            locator,
        }
    }

    /// A reduced automaton with no reference is logged and skipped; the
    /// remaining items still run.
    pub fn run(
        &self,
        reduced: &[PathBuf],
        reference_dir: &Path,
        sample_patterns: &[String],
        nworkers: u32,
    ) -> AppResult<()> {
        let samples = expand_samples(sample_patterns)?;
        if samples.is_empty() {
            warn!("no pcap samples matched {sample_patterns:?}");
        }

        for path in reduced {
            let reference = match self.locator.locate(path, reference_dir) {
                Ok(reference) => reference,
                Err(err @ AppError::Lookup(_)) => {
                    error!("{err}");
                    continue;
                }
                Err(other) => return Err(other),
            };

            let mut argv = vec![
                self.handler.to_string_lossy().into_owned(),
                reference.to_string_lossy().into_owned(),
                path.to_string_lossy().into_owned(),
                "-s".to_string(),
                "-n".to_string(),
                nworkers.to_string(),
            ];
            argv.extend(samples.iter().map(|s| s.to_string_lossy().into_owned()));
            invoke_logged(self.process, &argv);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn overlapping_patterns_collapse_to_one_sample() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("x.pcap"), b"").unwrap();
        fs::write(dir.path().join("y.pcap"), b"").unwrap();

        let base = dir.path().to_string_lossy();
        let samples = expand_samples(&[
            format!("{base}/*.pcap"),
            format!("{base}/x.pcap"),
        ])
        .unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].file_name().unwrap(), "x.pcap");
    }
}
