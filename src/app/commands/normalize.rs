//! Turn local artifacts into single uploadable files referenced by the spec.
//!
//! A local chart directory is packaged into an archive and a list of YAML
//! files and directories is concatenated into one combined manifest. Both
//! land next to the spec under fixed names, and the spec is rewritten to
//! reference them. Remote repository artifacts are left alone.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::app::logging;
use crate::app::scratch::ScratchDir;
use crate::domain::artifact::{is_manifest_file, resolve_file_ref, to_file_ref};
use crate::domain::spec_document::fields;
use crate::domain::{AppError, SpecDocument};
use crate::ports::ChartPackagerPort;

pub const PACKAGED_CHART_NAME: &str = "addon-chart.tgz";
pub const COMBINED_MANIFEST_NAME: &str = "addon-manifests.yaml";

#[derive(Debug, Default)]
pub struct NormalizeOutcome {
    pub packaged_chart: Option<PathBuf>,
    pub combined_manifest: Option<PathBuf>,
}

impl NormalizeOutcome {
    pub fn changed(&self) -> bool {
        self.packaged_chart.is_some() || self.combined_manifest.is_some()
    }
}

pub fn execute<C: ChartPackagerPort>(
    spec: &mut SpecDocument,
    packager: &C,
    scratch: &ScratchDir,
) -> Result<NormalizeOutcome, AppError> {
    if spec.is_remote() {
        logging::info("Artifact comes from a remote repository; skipping local packaging");
        return Ok(NormalizeOutcome::default());
    }

    let packaged_chart = package_chart(spec, packager, scratch)?;
    let combined_manifest = merge_manifests(spec, scratch)?;
    Ok(NormalizeOutcome { packaged_chart, combined_manifest })
}

fn package_chart<C: ChartPackagerPort>(
    spec: &mut SpecDocument,
    packager: &C,
    scratch: &ScratchDir,
) -> Result<Option<PathBuf>, AppError> {
    let Some(reference) = spec.chart_path() else {
        return Ok(None);
    };
    let chart_dir = resolve_file_ref(reference, spec.base_dir());
    if !chart_dir.is_dir() {
        return Ok(None);
    }

    logging::info(&format!("Packaging chart {}", chart_dir.display()));
    let packaged = packager.package(&chart_dir, &scratch.subdir("chart")?)?;
    logging::relay(&packaged.output);

    let target = spec.base_dir().join(PACKAGED_CHART_NAME);
    fs::copy(&packaged.archive, &target)?;
    spec.set_str(fields::CHART_PATH, &to_file_ref(PACKAGED_CHART_NAME))?;

    logging::info(&format!("Chart packaged to {}", target.display()));
    Ok(Some(target))
}

fn merge_manifests(
    spec: &mut SpecDocument,
    scratch: &ScratchDir,
) -> Result<Option<PathBuf>, AppError> {
    let references = spec.yaml_paths()?;
    if references.is_empty() {
        return Ok(None);
    }

    let base = spec.base_dir().to_path_buf();
    let mut combined = String::new();
    let mut merged = 0usize;

    for reference in &references {
        let path = resolve_file_ref(reference, &base);
        if path.is_file() {
            append_manifest(&mut combined, &base, &path)?;
            merged += 1;
        } else if path.is_dir() {
            for file in discover_manifests(&path)? {
                append_manifest(&mut combined, &base, &file)?;
                merged += 1;
            }
        } else {
            return Err(AppError::not_found("YAML path", &path));
        }
    }

    let staged = scratch.path().join(COMBINED_MANIFEST_NAME);
    fs::write(&staged, &combined)?;
    let target = base.join(COMBINED_MANIFEST_NAME);
    fs::copy(&staged, &target)?;
    spec.set_yaml_paths(&[to_file_ref(COMBINED_MANIFEST_NAME)])?;

    logging::info(&format!("Merged {} manifest file(s) into {}", merged, target.display()));
    Ok(Some(target))
}

/// All `*.yaml` / `*.yml` files under `dir`, ordered byte-wise by full path.
///
/// `PathBuf`'s own ordering compares components, which would put `b/x.yaml` before `b-c.yaml`.
pub fn discover_manifests(dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry.map_err(io::Error::from)?;
        if entry.file_type().is_file() && is_manifest_file(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    Ok(files)
}

fn append_manifest(combined: &mut String, base: &Path, path: &Path) -> Result<(), AppError> {
    let content = fs::read_to_string(path)?;
    let label = path.strip_prefix(base).unwrap_or(path);

    combined.push_str(&format!("--- # Source: {}\n", label.display()));
    combined.push_str(&content);
    if !content.is_empty() && !content.ends_with('\n') {
        combined.push('\n');
    }
    Ok(())
}
