//! The addon spec document: a YAML mapping queried and patched by dotted paths.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_yaml::{Mapping, Value};

use super::AppError;
use super::artifact::ArtifactKind;

pub const API_VERSION: &str = "infra.k8smgmt.io/v3";
pub const KIND: &str = "Addon";

/// Dotted paths of the fields this tool reads or writes.
pub mod fields {
    pub const NAME: &str = "metadata.name";
    pub const PROJECT: &str = "metadata.project";
    pub const NAMESPACE: &str = "spec.namespace";
    pub const VERSION: &str = "spec.version";
    pub const ARTIFACT_TYPE: &str = "spec.artifact.type";
    pub const CHART_PATH: &str = "spec.artifact.artifact.chartPath.name";
    pub const PATHS: &str = "spec.artifact.artifact.paths";
    pub const REPOSITORY: &str = "spec.artifact.artifact.repository";
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddonSkeleton {
    api_version: &'static str,
    kind: &'static str,
    metadata: SkeletonMetadata,
    spec: SkeletonSpec,
}

#[derive(Serialize)]
struct SkeletonMetadata {
    name: String,
}

#[derive(Serialize)]
struct SkeletonSpec {
    artifact: SkeletonArtifact,
}

#[derive(Serialize)]
struct SkeletonArtifact {
    #[serde(rename = "type")]
    kind: &'static str,
    artifact: SkeletonSource,
}

#[derive(Serialize)]
#[serde(untagged)]
enum SkeletonSource {
    Chart {
        #[serde(rename = "chartPath")]
        chart_path: NamedRef,
    },
    Manifests {
        paths: Vec<NamedRef>,
    },
}

#[derive(Serialize)]
struct NamedRef {
    name: String,
}

/// Working spec document bound to its location on disk.
#[derive(Debug, Clone)]
pub struct SpecDocument {
    path: PathBuf,
    root: Value,
}

impl SpecDocument {
    /// Wrap an existing value; the root must be a mapping.
    pub fn new(path: PathBuf, root: Value) -> Result<Self, AppError> {
        if !root.is_mapping() {
            return Err(AppError::InvalidSpec(format!(
                "{} does not contain a YAML mapping",
                path.display()
            )));
        }
        Ok(Self { path, root })
    }

    /// Load a spec document from disk.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)?;
        let root: Value = serde_yaml::from_str(&content)?;
        Self::new(path.to_path_buf(), root)
    }

    /// Build a minimal spec document for a local artifact.
    ///
    /// `reference` is the artifact's `file://` reference relative to `path`.
    pub fn synthesize(
        path: PathBuf,
        kind: ArtifactKind,
        name: String,
        reference: String,
    ) -> Result<Self, AppError> {
        let artifact = match kind {
            ArtifactKind::Helm => {
                SkeletonSource::Chart { chart_path: NamedRef { name: reference } }
            }
            ArtifactKind::Yaml => {
                SkeletonSource::Manifests { paths: vec![NamedRef { name: reference }] }
            }
        };
        let skeleton = AddonSkeleton {
            api_version: API_VERSION,
            kind: KIND,
            metadata: SkeletonMetadata { name },
            spec: SkeletonSpec { artifact: SkeletonArtifact { kind: kind.as_str(), artifact } },
        };
        Self::new(path, serde_yaml::to_value(skeleton)?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory that relative references in the document resolve against.
    pub fn base_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn get(&self, path: &str) -> Option<&Value> {
        path.split('.').try_fold(&self.root, |value, segment| value.get(segment))
    }

    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(Value::as_str)
    }

    /// Set a value, creating intermediate mappings as needed.
    pub fn set_value(&mut self, path: &str, value: Value) -> Result<(), AppError> {
        let mut segments = path.split('.').peekable();
        let mut current = &mut self.root;

        while let Some(segment) = segments.next() {
            if current.is_null() {
                *current = Value::Mapping(Mapping::new());
            }
            let map = current.as_mapping_mut().ok_or_else(|| {
                AppError::InvalidSpec(format!(
                    "cannot set '{path}': parent of '{segment}' is not a mapping"
                ))
            })?;
            if segments.peek().is_none() {
                map.insert(Value::String(segment.to_string()), value);
                return Ok(());
            }
            current = map.entry(Value::String(segment.to_string())).or_insert(Value::Null);
        }
        Ok(())
    }

    pub fn set_str(&mut self, path: &str, value: &str) -> Result<(), AppError> {
        self.set_value(path, Value::String(value.to_string()))
    }

    /// Whether the artifact is pulled from a remote repository.
    pub fn is_remote(&self) -> bool {
        self.get(fields::REPOSITORY).is_some_and(|v| !v.is_null())
    }

    pub fn chart_path(&self) -> Option<&str> {
        self.get_str(fields::CHART_PATH).filter(|s| !s.is_empty())
    }

    /// Ordered `name` references from the YAML path list.
    pub fn yaml_paths(&self) -> Result<Vec<String>, AppError> {
        let entries = match self.get(fields::PATHS) {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::Sequence(entries)) => entries,
            Some(_) => {
                return Err(AppError::InvalidSpec(format!("'{}' must be a list", fields::PATHS)));
            }
        };

        entries
            .iter()
            .map(|entry| {
                entry.get("name").and_then(Value::as_str).map(str::to_string).ok_or_else(|| {
                    AppError::InvalidSpec(format!(
                        "every entry of '{}' needs a string 'name'",
                        fields::PATHS
                    ))
                })
            })
            .collect()
    }

    /// Replace the YAML path list with the given references.
    pub fn set_yaml_paths(&mut self, references: &[String]) -> Result<(), AppError> {
        let entries = references
            .iter()
            .map(|reference| {
                let mut entry = Mapping::new();
                entry.insert(Value::String("name".into()), Value::String(reference.clone()));
                Value::Mapping(entry)
            })
            .collect();
        self.set_value(fields::PATHS, Value::Sequence(entries))
    }

    pub fn to_yaml_string(&self) -> Result<String, AppError> {
        Ok(serde_yaml::to_string(&self.root)?)
    }

    /// Write the document back to its path.
    pub fn save(&self) -> Result<(), AppError> {
        fs::write(&self.path, self.to_yaml_string()?)?;
        Ok(())
    }
}
