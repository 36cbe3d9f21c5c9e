//! Glyph grid model and its compact text encoding
//!
//! - `grid` - the boolean pixel grid
//! - `row_codec` - one row <-> one token
//! - `run_length` - token list <-> run-length collapsed text
//! - `compressor` - grid <-> compressed glyph string
//! - `ascii` - grid <-> ASCII art (for tests and the command line)

mod ascii;
pub mod compressor;
mod grid;
pub mod row_codec;
pub mod run_length;

pub use compressor::{compress, decompress};
pub use grid::Grid;
pub(crate) use grid::validate_resolution;
