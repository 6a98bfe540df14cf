pub mod batch;
pub mod cli;
pub mod cmds;
pub mod distribution;
pub mod labeling;
pub mod locate;
pub mod logging;
pub mod main_shared;
pub mod naming;
pub mod orchestrator;
pub mod process;
pub mod runner;
pub mod types;
