pub mod cli;
pub mod core;
pub mod engine;
pub mod services;
pub mod sync;

pub use crate::core::{
    SandboxError, SandboxResult, ScenarioConfig, ScenarioKind, ScenarioOutcome, ScenarioReporter,
    ScenarioState,
};
pub use engine::{goroutine, ScenarioRunner};
pub use services::{
    ConsoleScenarioReporter, DefaultScenarioConfig, MemoryScenarioReporter, NoOpScenarioReporter,
};
