//! zlib (RFC 1950) inflate and deflate.

use crate::{CompressionError, Result};
use flate2::write::ZlibEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};
use std::io::Write;

/// Level used by Python's `zlib.compress` when none is given.
pub const DEFAULT_LEVEL: u32 = 6;

/// Largest payload [`zlib_decompress`] will produce.
pub const MAX_OUTPUT_SIZE: usize = 4 * 1024 * 1024;

const CHUNK_SIZE: usize = 4096;

/// Compress data into a zlib stream.
///
/// # Arguments
/// * `data` - Data to compress
/// * `level` - Compression level (0-9)
pub fn zlib_compress(data: &[u8], level: u32) -> Result<Vec<u8>> {
    let level = Compression::new(level.min(9));
    let mut encoder = ZlibEncoder::new(Vec::new(), level);
    encoder
        .write_all(data)
        .map_err(|e| CompressionError::CompressionFailed(e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| CompressionError::CompressionFailed(e.to_string()))
}

/// Decompress a complete zlib stream.
///
/// Unlike a plain `read_to_end` over a decoder, a stream that stops before
/// its end marker is an error rather than a short result. Bytes after the
/// end marker are ignored. Output is capped at [`MAX_OUTPUT_SIZE`].
pub fn zlib_decompress(data: &[u8]) -> Result<Vec<u8>> {
    zlib_decompress_limited(data, MAX_OUTPUT_SIZE)
}

/// Decompress a complete zlib stream of at most `max_output` bytes.
pub fn zlib_decompress_limited(data: &[u8], max_output: usize) -> Result<Vec<u8>> {
    let mut inflater = Decompress::new(true);
    // one spare byte lets an oversized stream show itself
    let limit = max_output.saturating_add(1);
    let initial = data.len().saturating_mul(4).clamp(CHUNK_SIZE.min(limit), limit);
    let mut output = Vec::with_capacity(initial);

    loop {
        if output.len() == output.capacity() {
            output.reserve_exact((limit - output.len()).min(output.len().max(CHUNK_SIZE)));
        }

        let (before_in, before_out) = (inflater.total_in(), inflater.total_out());
        let consumed = usize::try_from(before_in)
            .map_err(|e| CompressionError::DecompressionFailed(e.to_string()))?;

        let status = inflater
            .decompress_vec(&data[consumed..], &mut output, FlushDecompress::None)
            .map_err(|e| CompressionError::DecompressionFailed(e.to_string()))?;

        if output.len() > max_output {
            return Err(CompressionError::DecompressionFailed(format!(
                "decompressed payload exceeds {max_output} bytes"
            )));
        }

        if status == Status::StreamEnd {
            return Ok(output);
        }

        let stalled = inflater.total_in() == before_in && inflater.total_out() == before_out;
        if stalled && output.len() < output.capacity() {
            return Err(CompressionError::DecompressionFailed(
                "truncated zlib stream".to_string(),
            ));
        }
    }
}
