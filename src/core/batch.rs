use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::types::{AppError, AppResult, Directive, ReductionKind};

/// Flag grammar shared by the interactive surface and batch files. A batch
/// file is semantically one long command line: `#` comments are stripped per
/// line and the remaining tokens from all lines are parsed as a single
/// argument list.
#[derive(Parser, Debug)]
#[command(name = "batch", no_binary_name = true)]
pub struct BatchArgs {
    /// Input NFA file(s)
    #[arg(short, long, num_args = 1..)]
    pub input: Vec<PathBuf>,

    /// Number of cores the external error tool may use
    #[arg(short, long, default_value_t = 1)]
    pub nworkers: u32,

    /// Pcap sample glob pattern(s)
    #[arg(short, long, num_args = 1..)]
    pub pcaps: Vec<String>,

    /// Compute error of reduced automata against references
    #[arg(long)]
    pub error: bool,

    /// Reduce the input automata
    #[arg(long)]
    pub reduce: bool,

    /// Reduction algorithm
    #[arg(short = 't', long = "reduction-type", value_enum, default_value_t = ReductionKind::Prune)]
    pub reduction_type: ReductionKind,

    /// Target size ratio(s), fraction of states to keep
    #[arg(short = 'r', long = "reduce-to", num_args = 1..,
          default_values_t = [0.1, 0.12, 0.14, 0.16, 0.18, 0.2])]
    pub reduce_to: Vec<f64>,

    /// Labeled NFA states (significance weights guiding reduction)
    #[arg(short = 'l', long = "state-labels")]
    pub state_labels: Option<PathBuf>,
}

impl From<BatchArgs> for Directive {
    fn from(args: BatchArgs) -> Self {
        Directive {
            do_reduce: args.reduce,
            do_error: args.error,
            inputs: args.input,
            pcaps: args.pcaps,
            kind: args.reduction_type,
            ratios: args.reduce_to,
            state_labels: args.state_labels,
            nworkers: args.nworkers,
        }
    }
}

/// Parse a batch file into validated directives. An all-comment or empty
/// file yields no directives (a recognized no-op).
pub fn parse(path: &Path) -> AppResult<Vec<Directive>> {
    let contents = fs::read_to_string(path)?;
    let tokens = tokenize(&contents);
    if tokens.is_empty() {
        return Ok(Vec::new());
    }

    let args = BatchArgs::try_parse_from(&tokens)
        .map_err(|e| AppError::Configuration(e.to_string()))?;
    let directive = Directive::from(args);
    directive.validate()?;
    Ok(vec![directive])
}

/// Truncate each line at the first `#` (even mid-token) and split the rest
/// on whitespace.
fn tokenize(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(|line| line.split('#').next().unwrap_or(""))
        .flat_map(str::split_whitespace)
        .map(str::to_string)
        .collect()
}
