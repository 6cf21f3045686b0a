use crate::ports::{AddonPublisherPort, ChartPackagerPort};

/// Application context holding the external collaborators for a run.
pub struct AppContext<C: ChartPackagerPort, P: AddonPublisherPort> {
    packager: C,
    publisher: P,
}

impl<C: ChartPackagerPort, P: AddonPublisherPort> AppContext<C, P> {
    /// Create a new application context.
    pub fn new(packager: C, publisher: P) -> Self {
        Self { packager, publisher }
    }

    /// Get a reference to the chart packager.
    pub fn packager(&self) -> &C {
        &self.packager
    }

    /// Get a reference to the spec publisher.
    pub fn publisher(&self) -> &P {
        &self.publisher
    }
}
