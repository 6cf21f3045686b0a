//! CLI Adapter.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::app::commands::publish::{PublishOptions, PublishOutcome};
use crate::app::{logging, scratch};
use crate::domain::{AppError, FieldOverrides, Inputs, non_empty};

#[derive(Parser, Debug)]
#[command(name = "addon-publish")]
#[command(version)]
#[command(
    about = "Package a Helm chart or YAML manifests into an addon spec and publish it",
    long_about = None
)]
struct Cli {
    /// Existing addon spec document (mutually exclusive with --artifact-path)
    #[arg(long, env = "SPEC_FILE")]
    spec_file: Option<String>,
    /// Chart directory, chart archive, or YAML file/directory to publish
    #[arg(long, env = "ARTIFACT_PATH")]
    artifact_path: Option<String>,
    /// Override metadata.name
    #[arg(long, env = "NAME")]
    name: Option<String>,
    /// Override metadata.project
    #[arg(long, env = "PROJECT")]
    project: Option<String>,
    /// Override spec.namespace
    #[arg(long, env = "NAMESPACE")]
    namespace: Option<String>,
    /// Override spec.version
    #[arg(long = "addon-version", env = "VERSION")]
    addon_version: Option<String>,
    /// Deployment API key
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    /// Deployment API endpoint (client default when unset)
    #[arg(long, env = "API_ENDPOINT")]
    api_endpoint: Option<String>,
    /// Prepare the spec but do not publish it
    #[arg(long, env = "DRY_RUN", num_args = 0..=1, default_missing_value = "true")]
    dry_run: Option<String>,
    /// helm executable used for chart packaging
    #[arg(long, env = "HELM_BIN", default_value = "helm")]
    helm_bin: String,
    /// rctl executable used for publishing
    #[arg(long, env = "RCTL_BIN", default_value = "rctl")]
    rctl_bin: String,
    /// File that receives step outputs (set by GitHub Actions)
    #[arg(long, env = "GITHUB_OUTPUT", hide = true)]
    github_output: Option<PathBuf>,
}

impl Cli {
    fn into_request(self) -> (Inputs, PublishOptions, Option<PathBuf>) {
        let inputs = Inputs {
            spec_file: non_empty(self.spec_file).map(PathBuf::from),
            artifact_path: non_empty(self.artifact_path).map(PathBuf::from),
            overrides: FieldOverrides {
                name: non_empty(self.name),
                project: non_empty(self.project),
                namespace: non_empty(self.namespace),
                version: non_empty(self.addon_version),
            },
            api_key: self.api_key.unwrap_or_default(),
        };
        let options = PublishOptions {
            dry_run: self.dry_run.as_deref().is_some_and(is_truthy),
            api_endpoint: non_empty(self.api_endpoint),
            helm_bin: self.helm_bin,
            rctl_bin: self.rctl_bin,
        };
        let github_output = self.github_output.filter(|p| !p.as_os_str().is_empty());
        (inputs, options, github_output)
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    scratch::install_interrupt_cleanup();

    let (inputs, options, github_output) = cli.into_request();
    let result = crate::publish(inputs, options)
        .and_then(|outcome| record_outputs(&outcome, github_output.as_deref()));

    if let Err(e) = result {
        logging::error(&format!("Error: {}", e));
        if let Some(output) = e.tool_output() {
            logging::relay_error(output);
        }
        std::process::exit(1);
    }
}

fn record_outputs(outcome: &PublishOutcome, github_output: Option<&Path>) -> Result<(), AppError> {
    let Some(path) = github_output else {
        return Ok(());
    };
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "spec-file={}", outcome.spec_path.display())?;
    Ok(())
}
