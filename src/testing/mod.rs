mod fake_chart_packager;
mod fake_publisher;

pub use fake_chart_packager::FakeChartPackager;
pub use fake_publisher::FakePublisher;
