//! zlib handling for Django session payloads.
//!
//! Django compresses a session payload with `zlib.compress` when that saves
//! space, and marks the data segment with a leading `.`. This crate provides
//! the matching inflate step and, for tests and tooling, the deflate step.

mod error;
mod zlib;

pub use error::{CompressionError, Result};
pub use zlib::{zlib_compress, zlib_decompress, zlib_decompress_limited, DEFAULT_LEVEL, MAX_OUTPUT_SIZE};
