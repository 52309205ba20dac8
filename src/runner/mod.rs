//! Setup run orchestration.

pub mod setup;

pub use setup::{
    generate_projects, run_setup, update_submodules, GenerationOutcome, SetupOutcome, SetupReport,
};
