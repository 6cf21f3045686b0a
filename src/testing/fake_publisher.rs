use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{AddonPublisherPort, PublishCredentials};

/// A publish call as seen by the fake, with the spec contents at call time.
#[derive(Debug, Clone)]
pub struct PublishedSpec {
    pub spec_path: PathBuf,
    pub content: String,
    pub credentials: PublishCredentials,
}

#[derive(Default)]
pub struct FakePublisher {
    pub published: Mutex<Vec<PublishedSpec>>,
    pub fail_with: Option<String>,
}

impl FakePublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self { fail_with: Some(message.to_string()), ..Self::default() }
    }

    pub fn calls(&self) -> Vec<PublishedSpec> {
        self.published.lock().unwrap().clone()
    }
}

impl AddonPublisherPort for FakePublisher {
    fn publish(
        &self,
        spec_path: &Path,
        credentials: &PublishCredentials,
    ) -> Result<String, AppError> {
        let content = fs::read_to_string(spec_path)?;
        self.published.lock().unwrap().push(PublishedSpec {
            spec_path: spec_path.to_path_buf(),
            content,
            credentials: credentials.clone(),
        });
        match &self.fail_with {
            Some(message) => Err(AppError::ExternalToolError {
                tool: "rctl".into(),
                error: "exit status: 1".into(),
                output: message.clone(),
            }),
            None => Ok("addon applied".into()),
        }
    }
}
