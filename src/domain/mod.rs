pub mod artifact;
pub mod error;
pub mod inputs;
pub mod spec_document;

pub use artifact::ArtifactKind;
pub use error::AppError;
pub use inputs::{FieldOverrides, Inputs, SpecSource, non_empty};
pub use spec_document::SpecDocument;
