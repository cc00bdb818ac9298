use crate::{
    errors::{FileOperation, IoError},
    spec::LoggingSettings,
};
use colored::Colorize;
use miette::Diagnostic;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

const LOG_FILE_PATH_TOKEN: &str = "${LOG_FILE_PATH}";
const ROOT_LOG_LEVEL_TOKEN: &str = "${ROOT_LOG_LEVEL}";

#[derive(Debug, Error, Diagnostic)]
pub enum LoggingConfigError {
    #[error("Unable to read logging template at '{path}'")]
    #[diagnostic(
        code(scaffy::logging_config::template_missing),
        help("Place a logging_config_template.json next to where scaffy runs")
    )]
    TemplateMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error within logging config domain")]
    #[diagnostic(code(scaffy::logging_config::io))]
    Io(#[from] IoError),
}

/// Where the template is read from and where the rendered configuration goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingTarget {
    pub template: PathBuf,
    pub directory: PathBuf,
    pub file_name: String,
}
impl Default for LoggingTarget {
    fn default() -> Self {
        Self {
            template: PathBuf::from("logging_config_template.json"),
            directory: PathBuf::from("configs/logging"),
            file_name: "logging_config.json".to_string(),
        }
    }
}
impl LoggingTarget {
    /// The default target with every relative path resolved under `root`.
    pub fn under(root: &Path) -> Self {
        let defaults = Self::default();

        Self {
            template: root.join(defaults.template),
            directory: root.join(defaults.directory),
            file_name: defaults.file_name,
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

/// Replaces both placeholder tokens literally, leaving everything else untouched.
pub fn render(template: &str, settings: &LoggingSettings) -> String {
    template
        .replace(LOG_FILE_PATH_TOKEN, &settings.log_file_path)
        .replace(ROOT_LOG_LEVEL_TOKEN, &settings.root_log_level)
}

/// Renders the logging template and writes it into the target directory.
///
/// Returns `Ok(None)` without writing anything when the target directory does not exist.
///
/// # Errors
///
/// [`LoggingConfigError::TemplateMissing`] when the template cannot be read, which is checked
/// before the target directory. [`LoggingConfigError::Io`] when the output cannot be written.
pub fn emit(
    settings: &LoggingSettings,
    target: &LoggingTarget,
) -> Result<Option<PathBuf>, LoggingConfigError> {
    let template = fs::read_to_string(&target.template).map_err(|error| {
        LoggingConfigError::TemplateMissing {
            path: target.template.clone(),
            source: error,
        }
    })?;

    log::debug!("read logging template from {}", target.template.display());

    let rendered = render(&template, settings);

    if !target.directory.is_dir() {
        log::debug!(
            "{} does not exist, skipping logging configuration",
            target.directory.display()
        );

        return Ok(None);
    }

    let output = target.output_path();

    fs::write(&output, rendered)
        .map_err(|error| IoError::new(FileOperation::Write, output.clone(), error))?;

    println!(
        "{} {}",
        "logging configuration saved at".green(),
        output.display()
    );

    Ok(Some(output))
}
