use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Result of packaging a chart directory.
#[derive(Debug, Clone)]
pub struct PackagedChart {
    /// The single archive produced in the destination directory.
    pub archive: PathBuf,
    /// Output produced by the packaging tool.
    pub output: String,
}

/// Port for turning a chart directory into a chart archive.
pub trait ChartPackagerPort {
    /// Package `chart_dir` into `destination`, resolving chart dependencies.
    fn package(&self, chart_dir: &Path, destination: &Path) -> Result<PackagedChart, AppError>;
}
