use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Config file to use instead of the nearest rebat.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Logging level (overrides config). One of: trace, debug, info, warn, error
    #[arg(long = "log.level", global = true)]
    pub log_level: Option<String>,

    /// Logging color control: "on" to force colors, "off" to disable; omit for auto
    #[arg(long = "log.color", global = true)]
    pub log_color: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Execute a batch file of reduction / error-measurement runs
    Batch(BatchCmdArgs),

    /// Ranked distribution report from a state-metric file
    Stats(StatsArgs),

    /// Export a significance labeling file computed from packet frequencies
    Label(LabelArgs),
}

/// Arguments for the batch command
#[derive(Parser, Debug)]
pub struct BatchCmdArgs {
    /// Batch file: `#`-commented lines of the interactive flag grammar
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Arguments for the stats command
#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// State-metric file (`<state> <value>` per line)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Show top N value groups
    #[arg(short = 't', long, value_name = "N", default_value_t = 5)]
    pub topn: usize,

    /// Output file, if not specified output is printed to stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write the raw-value histogram buffer here, one value per line
    #[arg(long, value_name = "FILE")]
    pub hist: Option<PathBuf>,

    /// Output format: "table" (default) or "json"
    #[arg(long, default_value = "table")]
    pub format: String,

    /// Metric name used in the report header (e.g. packets, depth, neighbors)
    #[arg(long, default_value = "value")]
    pub metric: String,
}

/// Arguments for the label command
#[derive(Parser, Debug)]
pub struct LabelArgs {
    /// Packet-frequency file (`<state> <frequency>` per line)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Labeling file to write
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// File whose first line holds the total processed-sample count
    #[arg(short = 'c', long = "sample-count", value_name = "FILE")]
    pub sample_count: PathBuf,
}
