mod addon_publisher;
mod chart_packager;

pub use addon_publisher::{AddonPublisherPort, PublishCredentials};
pub use chart_packager::{ChartPackagerPort, PackagedChart};
