use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;

use crate::types::{AppError, AppResult};

/// Reduction algorithm implemented by the external handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReductionKind {
    /// Pruning guided by state significance labels
    Prune,
    /// Genetic algorithm
    Ga,
    /// Automata reduction by model checking
    Armc,
}

impl ReductionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReductionKind::Prune => "prune",
            ReductionKind::Ga => "ga",
            ReductionKind::Armc => "armc",
        }
    }
}

impl fmt::Display for ReductionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validated unit of batch work. Constructed by the batch parser and
/// never mutated afterwards; all argument resolution happens up front so
/// that validation errors surface before any external invocation.
#[derive(Debug, Clone)]
pub struct Directive {
    pub do_reduce: bool,
    pub do_error: bool,
    pub inputs: Vec<PathBuf>,
    pub pcaps: Vec<String>,
    pub kind: ReductionKind,
    pub ratios: Vec<f64>,
    pub state_labels: Option<PathBuf>,
    pub nworkers: u32,
}

impl Directive {
    /// Check the cross-field invariants that the flag grammar cannot express.
    pub fn validate(&self) -> AppResult<()> {
        if self.do_reduce && self.state_labels.is_none() {
            return Err(AppError::Configuration(
                "state frequencies are not specified (--reduce requires --state-labels)"
                    .to_string(),
            ));
        }
        if (self.do_reduce || self.do_error) && self.inputs.is_empty() {
            return Err(AppError::Configuration(
                "no input automata specified".to_string(),
            ));
        }
        if self.do_error && self.pcaps.is_empty() {
            return Err(AppError::Configuration(
                "error evaluation requires at least one --pcaps pattern".to_string(),
            ));
        }
        if self.nworkers == 0 {
            return Err(AppError::Configuration(
                "--nworkers must be positive".to_string(),
            ));
        }
        for ratio in &self.ratios {
            if !(*ratio > 0.0 && *ratio <= 1.0) {
                return Err(AppError::Configuration(format!(
                    "reduction ratio {ratio} is outside (0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// A directive that requests neither operation is a recognized no-op.
    pub fn is_noop(&self) -> bool {
        !self.do_reduce && !self.do_error
    }
}
