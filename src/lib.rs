pub mod core;

// Re-export key items for easy importing in this crate
pub use self::core::types;

// Re-export key items for easy importing in other crates
pub use self::core::batch;
pub use self::core::distribution::{FrequencyMap, RankedReport, aggregate};
pub use self::core::labeling;
pub use self::core::locate::{GlobLocator, ReferenceLocator};
pub use self::core::main_shared::run_main;
pub use self::core::naming::ArtifactNamer;
pub use self::core::orchestrator::BatchOrchestrator;
pub use self::core::process::{ExternalProcess, SystemProcess};
pub use self::core::runner::{ErrorEvaluationRunner, ReductionRunner, expand_samples};
