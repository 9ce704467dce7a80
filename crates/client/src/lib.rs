//! VIN lookup client library.
//!
//! ## Structure
//!
//! - `infrastructure/` - Service ports, the HTTP adapter, endpoint configuration
//! - `use_cases/` - The decode → recall lookup orchestration
//! - `page/` - Page state, transitions and renderers
//! - `cli` - Argument parsing for the binary
//! - `app` - Application composition

pub mod app;
pub mod cli;
pub mod infrastructure;
pub mod page;
pub mod use_cases;

/// End-to-end tests against stub services over real HTTP.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
