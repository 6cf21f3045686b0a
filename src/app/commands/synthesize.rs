//! Obtain the working spec document: load an existing one or synthesise it from an artifact.

use std::fs;
use std::path::{Path, PathBuf};

use crate::app::logging;
use crate::domain::artifact::{artifact_stem, to_file_ref};
use crate::domain::{AppError, ArtifactKind, SpecDocument, SpecSource};

/// Suffix of a synthesised spec, appended to the artifact's parent directory name.
pub const SPEC_SUFFIX: &str = "-addon.yaml";

pub fn prepare_spec(source: &SpecSource) -> Result<SpecDocument, AppError> {
    match source {
        SpecSource::SpecFile(path) => load_existing(path),
        SpecSource::Artifact(path) => synthesize(path),
    }
}

pub fn load_existing(path: &Path) -> Result<SpecDocument, AppError> {
    if !path.is_file() {
        return Err(AppError::not_found("Spec file", path));
    }
    logging::info(&format!("Using spec file {}", path.display()));
    SpecDocument::load(path)
}

/// Location of the spec synthesised for `artifact`: a sibling named after its parent directory.
pub fn synthesized_spec_path(artifact: &Path) -> Result<PathBuf, AppError> {
    let parent = artifact.parent().ok_or_else(|| {
        AppError::config_error(format!(
            "Artifact path has no parent directory: {}",
            artifact.display()
        ))
    })?;
    let parent_name = parent
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "addon".into());
    Ok(parent.join(format!("{parent_name}{SPEC_SUFFIX}")))
}

pub fn synthesize(artifact: &Path) -> Result<SpecDocument, AppError> {
    if !artifact.exists() {
        return Err(AppError::not_found("Artifact path", artifact));
    }
    let artifact = fs::canonicalize(artifact)?;
    let spec_path = synthesized_spec_path(&artifact)?;
    let file_name = artifact
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| AppError::config_error("Artifact path has no file name"))?;

    let kind = ArtifactKind::classify(&artifact);
    let spec = SpecDocument::synthesize(
        spec_path,
        kind,
        artifact_stem(&artifact),
        to_file_ref(&file_name),
    )?;
    spec.save()?;

    logging::info(&format!(
        "Generated {} addon spec {} for {}",
        kind,
        spec.path().display(),
        artifact.display()
    ));
    Ok(spec)
}
