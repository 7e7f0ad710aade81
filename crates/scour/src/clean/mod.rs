//! Configurable cleaning transforms.

mod config;
mod pipeline;

pub use config::{CleanConfig, FillStrategy};
pub use pipeline::clean;
