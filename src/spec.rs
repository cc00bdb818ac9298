use crate::errors::{FileFormat, FileOperation, IoError};
use miette::Diagnostic;
use serde::{Deserialize, Deserializer};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum SpecError {
    #[error("The file '{path}' was not found")]
    #[diagnostic(
        code(scaffy::spec::not_found),
        help("Pass the path of an existing project structure document")
    )]
    NotFound { path: PathBuf },

    #[error("I/O error within spec domain")]
    #[diagnostic(code(scaffy::spec::io))]
    Io(#[from] IoError),

    #[error("Unable to parse {format} file at '{path}': {source}")]
    #[diagnostic(
        code(scaffy::spec::parse),
        help("The document needs `project` (name, version, description) and `directories`")
    )]
    Parse {
        path: PathBuf,
        format: FileFormat,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Top level of a project structure document.
#[derive(Debug, Deserialize, Clone)]
pub struct ProjectSpec {
    pub project: ProjectInfo,
    pub directories: Vec<Node>,
    #[serde(default)]
    pub logging: Option<LoggingSettings>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProjectInfo {
    pub name: String,
    #[serde(deserialize_with = "version_as_text")]
    pub version: String,
    pub description: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    pub root_log_level: String,
    pub log_file_path: String,
}

/// One declared entry of the tree.
///
/// `name` is a single segment as written in the document and becomes a root-relative
/// path once [`crate::plan::flatten`] has expanded its parent.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub children: Option<Vec<Node>>,
}

/// Unrecognized kinds deserialize to `Other` and are skipped when the tree is applied.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Directory,
    File,
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawVersion {
    Text(String),
    Integer(i64),
    Float(f64),
}

// `version: 0.1` is as common as `version: "0.1.0"`, keep both as text.
fn version_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawVersion::deserialize(deserializer)? {
        RawVersion::Text(text) => text,
        RawVersion::Integer(number) => number.to_string(),
        RawVersion::Float(number) if number.fract() == 0.0 => format!("{:.1}", number),
        RawVersion::Float(number) => number.to_string(),
    })
}

impl ProjectSpec {
    /// Parses a document already held in memory.
    pub fn parse(
        content: &str,
        format: FileFormat,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let parsed: ProjectSpec = match format {
            FileFormat::Yaml => serde_yaml::from_str(content)?,
            FileFormat::Toml => toml::from_str(content)?,
        };

        Ok(parsed)
    }
}

/// Loads and parses the project structure document at `path`.
///
/// # Errors
///
/// Returns [`SpecError::NotFound`] when nothing exists at `path`, [`SpecError::Io`] for any
/// other read failure and [`SpecError::Parse`] when the content is not a valid document.
pub fn load(path: &Path) -> Result<ProjectSpec, SpecError> {
    let content = fs::read_to_string(path).map_err(|error| {
        if error.kind() == std::io::ErrorKind::NotFound {
            SpecError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::new(FileOperation::Read, path.to_path_buf(), error).into()
        }
    })?;

    let format = FileFormat::from_path(path);

    log::debug!("parsing {} as {}", path.display(), format);

    ProjectSpec::parse(&content, format).map_err(|source| SpecError::Parse {
        path: path.to_path_buf(),
        format,
        source,
    })
}

/// Same as [`load`], but reports a failure to the operator and returns `None` instead.
pub fn read(path: &Path) -> Option<ProjectSpec> {
    match load(path) {
        Ok(spec) => Some(spec),
        Err(error) => {
            eprintln!("{:?}", miette::Report::new(error));
            None
        }
    }
}
