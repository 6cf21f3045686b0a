use std::path::Path;
use std::process::Command;

use crate::domain::AppError;
use crate::ports::{AddonPublisherPort, PublishCredentials};

use super::combined_output;

pub const API_KEY_ENV: &str = "RCTL_API_KEY";
pub const API_SECRET_ENV: &str = "RCTL_API_SECRET";
pub const ENDPOINT_ENV: &str = "RCTL_REST_ENDPOINT";

/// Publishes spec documents with `rctl apply -f <spec>`.
#[derive(Debug, Clone)]
pub struct RctlCommandAdapter {
    program: String,
}

impl Default for RctlCommandAdapter {
    fn default() -> Self {
        Self::new("rctl")
    }
}

impl RctlCommandAdapter {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }
}

impl AddonPublisherPort for RctlCommandAdapter {
    fn publish(
        &self,
        spec_path: &Path,
        credentials: &PublishCredentials,
    ) -> Result<String, AppError> {
        let mut cmd = Command::new(&self.program);
        cmd.arg("apply")
            .arg("-f")
            .arg(spec_path)
            .env(API_KEY_ENV, &credentials.api_key)
            .env(API_SECRET_ENV, &credentials.api_secret);
        if let Some(endpoint) = &credentials.endpoint {
            cmd.env(ENDPOINT_ENV, endpoint);
        }

        let output = cmd.output().map_err(|e| AppError::ExternalToolError {
            tool: self.program.clone(),
            error: format!("Failed to execute {}: {}", self.program, e),
            output: String::new(),
        })?;
        let text = combined_output(&output);

        if !output.status.success() {
            return Err(AppError::ExternalToolError {
                tool: self.program.clone(),
                error: format!("apply exited with {}", output.status),
                output: text,
            });
        }

        Ok(text)
    }
}
