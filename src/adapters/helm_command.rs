use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::domain::AppError;
use crate::ports::{ChartPackagerPort, PackagedChart};

use super::combined_output;

/// Packages charts by shelling out to `helm package`.
#[derive(Debug, Clone)]
pub struct HelmCommandAdapter {
    program: String,
}

impl Default for HelmCommandAdapter {
    fn default() -> Self {
        Self::new("helm")
    }
}

impl HelmCommandAdapter {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    fn find_archive(&self, destination: &Path) -> Result<PathBuf, AppError> {
        let mut archives = Vec::new();
        for entry in fs::read_dir(destination)? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "tgz") {
                archives.push(path);
            }
        }

        match archives.len() {
            1 => Ok(archives.remove(0)),
            0 => Err(AppError::ExternalToolError {
                tool: self.program.clone(),
                error: format!("no chart archive produced in {}", destination.display()),
                output: String::new(),
            }),
            n => Err(AppError::ExternalToolError {
                tool: self.program.clone(),
                error: format!(
                    "expected one chart archive in {}, found {}",
                    destination.display(),
                    n
                ),
                output: String::new(),
            }),
        }
    }
}

impl ChartPackagerPort for HelmCommandAdapter {
    fn package(&self, chart_dir: &Path, destination: &Path) -> Result<PackagedChart, AppError> {
        fs::create_dir_all(destination)?;

        let mut cmd = Command::new(&self.program);
        cmd.arg("package")
            .arg(chart_dir)
            .arg("--dependency-update")
            .arg("--destination")
            .arg(destination);

        let output = cmd.output().map_err(|e| AppError::ExternalToolError {
            tool: self.program.clone(),
            error: format!("Failed to execute {}: {}", self.program, e),
            output: String::new(),
        })?;
        let text = combined_output(&output);

        if !output.status.success() {
            return Err(AppError::ExternalToolError {
                tool: self.program.clone(),
                error: format!("packaging {} exited with {}", chart_dir.display(), output.status),
                output: text,
            });
        }

        let archive = self.find_archive(destination)?;
        Ok(PackagedChart { archive, output: text })
    }
}
