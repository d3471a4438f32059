//! CLI utilities for djsession
//!
//! Provides shared CLI functionality:
//! - Status and error messages
//! - Session rendering in JSON, pretty JSON, or flattened text

#![warn(missing_docs)]

pub mod output;
pub mod render;

pub use render::{flatten_session, render_session, OutputFormat};
