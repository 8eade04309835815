//! portfolio-ai
//!
//! CLI-side pieces of the portfolio: configuration, the generation client
//! and logging setup. Directory, filtering and view state live in
//! `portfolio-common`.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod suggestion;

#[cfg(test)]
pub(crate) mod test_support;
