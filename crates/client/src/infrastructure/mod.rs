//! Infrastructure implementations.
//!
//! Contains port traits, their HTTP implementation, and endpoint configuration.

pub mod config;
pub mod http;
pub mod ports;
