//! nuget-auth: write a NuGet.config carrying credentials for one package feed.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{ConfigureOptions, ConfigureOutcome, configure};
pub use app::config::ActionEnvironment;
pub use domain::AppError;
