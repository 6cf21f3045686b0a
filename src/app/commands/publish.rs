//! The full run: validate, prepare the spec, normalise artifacts, override fields, publish.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::app::logging;
use crate::app::scratch::ScratchDir;
use crate::domain::{AppError, Inputs};
use crate::ports::{AddonPublisherPort, ChartPackagerPort, PublishCredentials};

use super::{normalize, overrides, synthesize};

/// Run-level switches that are not part of the addon inputs.
#[derive(Debug, Clone)]
pub struct PublishOptions {
    /// Prepare everything but skip the publish call.
    pub dry_run: bool,
    /// Alternate deployment API endpoint.
    pub api_endpoint: Option<String>,
    pub helm_bin: String,
    pub rctl_bin: String,
}

impl Default for PublishOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            api_endpoint: None,
            helm_bin: "helm".into(),
            rctl_bin: "rctl".into(),
        }
    }
}

#[derive(Debug)]
pub struct PublishOutcome {
    /// Final spec document handed to the publisher.
    pub spec_path: PathBuf,
    pub packaged_chart: Option<PathBuf>,
    pub combined_manifest: Option<PathBuf>,
    pub overridden: Vec<&'static str>,
    pub published: bool,
}

pub fn execute<C, P>(
    ctx: &AppContext<C, P>,
    inputs: Inputs,
    options: &PublishOptions,
) -> Result<PublishOutcome, AppError>
where
    C: ChartPackagerPort,
    P: AddonPublisherPort,
{
    let source = inputs.source()?;
    let scratch = ScratchDir::new()?;

    let mut spec = synthesize::prepare_spec(&source)?;
    let normalized = normalize::execute(&mut spec, ctx.packager(), &scratch)?;
    let overridden = overrides::apply(&mut spec, &inputs.overrides)?;
    if normalized.changed() || !overridden.is_empty() {
        spec.save()?;
    }

    let published = if options.dry_run {
        logging::info(&format!("Dry run: not publishing {}", spec.path().display()));
        logging::relay(&spec.to_yaml_string()?);
        false
    } else {
        let credentials =
            PublishCredentials::from_api_key(&inputs.api_key, options.api_endpoint.clone());
        logging::info(&format!("Publishing {}", spec.path().display()));
        let output = ctx.publisher().publish(spec.path(), &credentials)?;
        logging::relay(&output);
        logging::info("Addon published");
        true
    };

    Ok(PublishOutcome {
        spec_path: spec.path().to_path_buf(),
        packaged_chart: normalized.packaged_chart,
        combined_manifest: normalized.combined_manifest,
        overridden,
        published,
    })
}
