//! addon-publish: package a Helm chart or YAML manifests into an addon spec and publish it.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use adapters::{HelmCommandAdapter, RctlCommandAdapter};
use app::AppContext;

pub use app::commands::publish::{PublishOptions, PublishOutcome};
pub use domain::{AppError, FieldOverrides, Inputs};

/// Build, normalise and publish an addon spec using `helm` and `rctl`.
///
/// Fails with `AppError::Configuration` unless exactly one of `inputs.spec_file`
/// and `inputs.artifact_path` is set. The scratch directory used for packaging
/// is removed before this returns.
pub fn publish(inputs: Inputs, options: PublishOptions) -> Result<PublishOutcome, AppError> {
    let ctx = AppContext::new(
        HelmCommandAdapter::new(options.helm_bin.clone()),
        RctlCommandAdapter::new(options.rctl_bin.clone()),
    );
    app::commands::publish::execute(&ctx, inputs, &options)
}
