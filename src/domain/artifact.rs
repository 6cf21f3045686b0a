//! Artifact classification and `file://` reference handling.

use std::path::{Path, PathBuf};

/// Descriptor file that marks a directory as a Helm chart.
pub const CHART_DESCRIPTOR: &str = "Chart.yaml";

/// Scheme prefix for local file references inside a spec document.
pub const FILE_SCHEME: &str = "file://";

const CHART_ARCHIVE_SUFFIXES: [&str; 2] = [".tgz", ".tar.gz"];
const MANIFEST_SUFFIXES: [&str; 2] = [".yaml", ".yml"];

/// Artifact type recorded in `spec.artifact.type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Helm,
    Yaml,
}

impl ArtifactKind {
    /// Classify an on-disk artifact by its shape.
    ///
    /// A directory holding a chart descriptor, or a chart archive, is a Helm
    /// source. Anything else is treated as plain manifests.
    pub fn classify(path: &Path) -> Self {
        let chart_dir = path.is_dir() && path.join(CHART_DESCRIPTOR).is_file();
        if chart_dir || is_chart_archive(path) { ArtifactKind::Helm } else { ArtifactKind::Yaml }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Helm => "Helm",
            ArtifactKind::Yaml => "Yaml",
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_chart_archive(path: &Path) -> bool {
    let name = file_name(path);
    CHART_ARCHIVE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

fn file_name(path: &Path) -> String {
    path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default()
}

/// Artifact file name without archive or manifest suffixes.
pub fn artifact_stem(path: &Path) -> String {
    let name = file_name(path);
    CHART_ARCHIVE_SUFFIXES
        .iter()
        .chain(MANIFEST_SUFFIXES.iter())
        .find_map(|suffix| name.strip_suffix(suffix))
        .map(str::to_string)
        .unwrap_or(name)
}

/// True for `*.yaml` / `*.yml` files.
pub fn is_manifest_file(path: &Path) -> bool {
    let name = file_name(path);
    MANIFEST_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// Render a spec-relative path as a local file reference.
pub fn to_file_ref(relative: &str) -> String {
    format!("{FILE_SCHEME}{relative}")
}

/// Resolve a reference from the spec against the spec document's directory.
///
/// Accepts `file://` references as well as bare relative or absolute paths.
pub fn resolve_file_ref(reference: &str, base: &Path) -> PathBuf {
    let raw = reference.strip_prefix(FILE_SCHEME).unwrap_or(reference);
    let path = Path::new(raw);
    if path.is_absolute() { path.to_path_buf() } else { base.join(path) }
}
