use std::path::Path;

use crate::domain::AppError;

/// Credentials handed to the deployment API client.
#[derive(Debug, Clone, Default)]
pub struct PublishCredentials {
    pub api_key: String,
    pub api_secret: String,
    /// Alternate API endpoint; the client default applies when absent.
    pub endpoint: Option<String>,
}

impl PublishCredentials {
    /// The deployment API takes the same key in both the key and secret slots.
    pub fn from_api_key(api_key: &str, endpoint: Option<String>) -> Self {
        Self { api_key: api_key.to_string(), api_secret: api_key.to_string(), endpoint }
    }
}

/// Port for submitting a finished spec document to the deployment API.
pub trait AddonPublisherPort {
    /// Submit the spec at `spec_path`. Returns the client's output.
    fn publish(&self, spec_path: &Path, credentials: &PublishCredentials)
    -> Result<String, AppError>;
}
