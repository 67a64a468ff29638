//! core
//!
//! Core domain types and configuration.
//!
//! # Modules
//!
//! - [`types`] - Target file and line-number parsing
//! - [`config`] - User configuration file loading

pub mod config;
pub mod types;
