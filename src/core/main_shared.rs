use clap::Parser;

use crate::core::cli::{Args, Commands};
use crate::core::cmds;
use crate::core::logging::init_logging;
use crate::types::AppResult;
use crate::types::config::{self, CliOverrides};

pub fn run_main() -> AppResult<()> {
    let args = Args::parse();

    // Configuration (file, then CLI overrides) before logging, so level and
    // color are applied from the start.
    let overrides = CliOverrides {
        config_path: args.config.clone(),
        log_level: args.log_level.clone(),
        log_color: args.log_color.clone(),
    };
    let config = config::load(&overrides)?;
    init_logging(&config);

    match args.command {
        Commands::Batch(batch_args) => cmds::execute_batch(batch_args, &config),
        Commands::Stats(stats_args) => cmds::execute_stats(stats_args),
        Commands::Label(label_args) => cmds::execute_label(label_args),
    }
}
