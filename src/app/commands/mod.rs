pub mod normalize;
pub mod overrides;
pub mod publish;
pub mod synthesize;
