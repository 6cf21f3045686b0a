use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{ChartPackagerPort, PackagedChart};

/// Writes a placeholder archive instead of running helm.
#[derive(Default)]
pub struct FakeChartPackager {
    pub packaged_dirs: Mutex<Vec<PathBuf>>,
    pub fail_with: Option<String>,
}

impl FakeChartPackager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self { fail_with: Some(message.to_string()), ..Self::default() }
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        self.packaged_dirs.lock().unwrap().clone()
    }
}

impl ChartPackagerPort for FakeChartPackager {
    fn package(&self, chart_dir: &Path, destination: &Path) -> Result<PackagedChart, AppError> {
        self.packaged_dirs.lock().unwrap().push(chart_dir.to_path_buf());
        if let Some(message) = &self.fail_with {
            return Err(AppError::ExternalToolError {
                tool: "helm".into(),
                error: "exit status: 1".into(),
                output: message.clone(),
            });
        }

        let name = chart_dir.file_name().unwrap().to_string_lossy().into_owned();
        let archive = destination.join(format!("{name}-0.1.0.tgz"));
        fs::write(&archive, format!("archive of {name}"))?;
        Ok(PackagedChart { archive, output: format!("Successfully packaged chart {name}") })
    }
}
