//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//!
//! # Design
//!
//! All stdout/stderr writes outside of clap's own messages go through this
//! module so that debug tracing and error formatting stay consistent.

pub mod output;
