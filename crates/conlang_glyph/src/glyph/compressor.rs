//! Glyph compressor
//!
//! Full grid <-> compressed glyph string:
//! 1. every row becomes a row token (`row_codec`)
//! 2. the token list is run-length collapsed (`run_length`)
//! 3. the resulting text is raw-deflated and base64 encoded with the URL-safe
//!    alphabet, without padding
//!
//! The result only contains `A-Z a-z 0-9 - _` so it survives JSON strings and
//! query strings unchanged.

use std::io::{Read, Write};

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use flate2::{read::DeflateDecoder, write::DeflateEncoder, Compression};

use super::grid::validate_resolution;
use super::row_codec::{decode_row, encode_row};
use super::run_length;
use super::Grid;
use crate::{GlyphError, Result, MAX_RESOLUTION};

/// Upper bound of an inflated token stream (largest grid, every row mixed, no runs)
const MAX_STREAM_LEN: usize = MAX_RESOLUTION * (MAX_RESOLUTION / 4 + 2);

/// Compress a grid into its persisted string form
pub fn compress(grid: &Grid) -> Result<String> {
    pack_text(&token_stream(grid))
}

/// Decompress a glyph string into a `resolution × resolution` grid
///
/// Decoding is all-or-nothing: any malformed layer rejects the whole string.
pub fn decompress(input: &str, resolution: usize) -> Result<Grid> {
    validate_resolution(resolution)?;
    let input = input.trim();
    if input.is_empty() {
        return Err(GlyphError::InvalidGlyphSize {
            expected: resolution * resolution,
            actual: 0,
        });
    }
    let stream = unpack_text(input, MAX_STREAM_LEN)?;
    grid_from_token_stream(&stream, resolution)
}

/// The run-length token stream of a grid, before the text compression pass
pub fn token_stream(grid: &Grid) -> String {
    let tokens: Vec<String> = grid.rows().map(encode_row).collect();
    run_length::encode(&tokens)
}

/// Parse a run-length token stream into a grid
pub fn grid_from_token_stream(stream: &str, resolution: usize) -> Result<Grid> {
    validate_resolution(resolution)?;
    let expected = resolution * resolution;

    let tokens = run_length::decode_limited(stream, resolution).map_err(|err| match err {
        GlyphError::InvalidGlyphSize { actual, .. } => GlyphError::InvalidGlyphSize {
            expected,
            actual: actual.saturating_mul(resolution),
        },
        other => other,
    })?;

    if tokens.len() != resolution {
        return Err(GlyphError::InvalidGlyphSize {
            expected,
            actual: tokens.len() * resolution,
        });
    }

    let mut cells = Vec::with_capacity(expected);
    for token in &tokens {
        cells.extend(decode_row(token, resolution)?);
    }
    Grid::from_cells(resolution, cells)
}

/// Generic reversible text pass: raw deflate + URL-safe base64
pub fn pack_text(text: &str) -> Result<String> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(text.as_bytes())?;
    let bytes = encoder.finish()?;
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

/// Inverse of `pack_text`, refusing output longer than `limit` bytes
pub fn unpack_text(input: &str, limit: usize) -> Result<String> {
    let bytes = URL_SAFE_NO_PAD.decode(input).map_err(GlyphError::payload)?;
    let mut text = String::new();
    DeflateDecoder::new(bytes.as_slice())
        .take(limit as u64 + 1)
        .read_to_string(&mut text)
        .map_err(GlyphError::payload)?;
    if text.len() > limit {
        return Err(GlyphError::payload(format!("token stream exceeds {limit} bytes")));
    }
    Ok(text)
}
