//! Invocation inputs and their structural validation.

use std::path::PathBuf;

use super::AppError;

/// Optional values written over the spec document before publishing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldOverrides {
    pub name: Option<String>,
    pub project: Option<String>,
    pub namespace: Option<String>,
    pub version: Option<String>,
}

/// Configuration record read once at start of a run.
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    pub spec_file: Option<PathBuf>,
    pub artifact_path: Option<PathBuf>,
    pub overrides: FieldOverrides,
    pub api_key: String,
}

/// Where the working spec document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecSource {
    /// An existing spec document on disk.
    SpecFile(PathBuf),
    /// An artifact (chart or manifests) for which a spec is synthesised.
    Artifact(PathBuf),
}

impl Inputs {
    /// Resolve the spec source, enforcing that exactly one of the two inputs is set.
    pub fn source(&self) -> Result<SpecSource, AppError> {
        let spec_file = self.spec_file.as_ref().filter(|p| !p.as_os_str().is_empty());
        let artifact = self.artifact_path.as_ref().filter(|p| !p.as_os_str().is_empty());

        match (spec_file, artifact) {
            (Some(spec), None) => Ok(SpecSource::SpecFile(spec.clone())),
            (None, Some(artifact)) => Ok(SpecSource::Artifact(artifact.clone())),
            (Some(_), Some(_)) => Err(AppError::config_error(
                "SPEC_FILE and ARTIFACT_PATH are mutually exclusive; set only one of them",
            )),
            (None, None) => {
                Err(AppError::config_error("One of SPEC_FILE or ARTIFACT_PATH must be set"))
            }
        }
    }
}

/// Treat empty or whitespace-only values as absent.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
