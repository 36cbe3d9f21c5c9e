#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions, clippy::missing_errors_doc, clippy::struct_excessive_bools)]
//! Glyph grid editing for constructed-language scripts.
//!
//! Provides the model layer for hand-drawn glyphs:
//! - `Grid` - a fixed-resolution boolean pixel grid
//! - A compact, URL-safe text encoding for grids (row tokens, run-length, deflate + base64)
//! - `HistoryStack` - linear undo/redo over full snapshots
//! - `GridEditor` - the interactive editing surface, independent of any renderer
//! - `ConlangDocument` - the document store the glyph-bearing panels write into
//! - Phonetic feature to IPA symbol matching

mod error;
pub use error::*;

pub mod document;
pub mod editor;
pub mod glyph;
pub mod history;
pub mod phonetics;

pub use document::{ConlangDocument, GlyphSlot, GlyphSlotEditor, SharedDocument};
pub use editor::{DrawTool, GlyphCanvas, GlyphSessionState, GlyphUndoState, GridEditor, GridEditorOptions, NullCanvas};
pub use glyph::{compress, decompress, Grid};
pub use history::HistoryStack;

/// Default grid side length
pub const DEFAULT_RESOLUTION: usize = 64;

/// Largest accepted grid side length
pub const MAX_RESOLUTION: usize = 1024;
