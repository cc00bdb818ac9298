pub mod api;
pub mod errors;
pub mod logging_config;
pub mod materialize;
pub mod plan;
pub mod spec;

pub use api::{build_project, ScaffyError};
