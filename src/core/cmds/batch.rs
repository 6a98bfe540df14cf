use log::info;

use crate::core::batch;
use crate::core::cli::BatchCmdArgs;
use crate::core::locate::GlobLocator;
use crate::core::naming::ArtifactNamer;
use crate::core::orchestrator::BatchOrchestrator;
use crate::core::process::{SystemProcess, locate_tool};
use crate::types::AppResult;
use crate::types::config::Config;

pub fn execute_batch(args: BatchCmdArgs, config: &Config) -> AppResult<()> {
    info!("executing batch file {}", args.file.display());

    let directives = batch::parse(&args.file)?;
    if directives.iter().all(|d| d.is_noop()) {
        info!("batch file requests no work");
        return Ok(());
    }

    // Resolve the handler once, before any artifact name is reserved.
    let handler = locate_tool(config.handler())?;
    info!("using external handler {}", handler.display());

    let process = SystemProcess;
    let locator = GlobLocator;
    let mut orchestrator = BatchOrchestrator::new(
        config,
        handler,
        &process,
        &locator,
        ArtifactNamer::from_entropy(),
    );
    for directive in &directives {
        orchestrator.execute(directive)?;
    }
    Ok(())
}
