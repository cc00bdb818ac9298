use crate::{
    logging_config::{self, LoggingTarget},
    materialize, plan,
    spec::{self, ProjectSpec},
};
use colored::Colorize;
use std::path::Path;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ScaffyError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Materialize(#[from] materialize::MaterializeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    LoggingConfig(#[from] logging_config::LoggingConfigError),
}

fn print_summary(spec: &ProjectSpec) {
    println!("{}", "Successfully loaded configuration:".bold());
    println!("{}", "-".repeat(30));
    println!("Project name: {}", spec.project.name);
    println!("Project version: {}", spec.project.version);
    println!("Project description: {}", spec.project.description);
}

/// Builds the project skeleton described at `spec_path` under `root`.
///
/// The tree is materialized first so that the logging configuration can land in a
/// `configs/logging` directory declared by the same document. A document that cannot be
/// found or parsed is reported and nothing is created.
///
/// # Errors
///
/// Returns a [`ScaffyError`] if:
///
/// - A directory or marker file cannot be created.
/// - The document has a `logging` section and the logging template cannot be read.
/// - The rendered logging configuration cannot be written.
pub fn build_project(spec_path: &Path, root: &Path) -> Result<(), ScaffyError> {
    let Some(spec) = spec::read(spec_path) else {
        return Ok(());
    };

    print_summary(&spec);

    let ProjectSpec {
        directories,
        logging,
        ..
    } = spec;

    let plan = plan::flatten(directories);

    log::debug!("planned {} entries under {}", plan.entries.len(), root.display());

    materialize::apply(plan, root)?;

    if let Some(settings) = logging {
        logging_config::emit(&settings, &LoggingTarget::under(root))?;
    } else {
        log::debug!("no logging section, skipping logging configuration");
    }

    Ok(())
}
