pub mod cli;
pub mod commands;
mod context;
pub mod logging;
pub mod scratch;

pub use context::AppContext;
