//! Grid Editor State
//!
//! The editing surface used by the phoneme and script panels. It owns one
//! `Grid`, a `HistoryStack` of full snapshots and the current compressed
//! output string.
//!
//! # Snapshots
//!
//! A snapshot is pushed:
//! - at construction (the blank grid, the oldest undo state)
//! - at the end of each pointer stroke
//! - after `clear()`
//! - after a successful `load_glyph()`
//!
//! Undo/redo move through the history without pushing.
//!
//! # Output
//!
//! The compressed string is recomputed on every change. The canvas sees it
//! live (while output is visible); the change callback only fires after a
//! committed change.

use crate::glyph::{compress, decompress, Grid};
use crate::history::HistoryStack;
use crate::Result;

use super::{DrawTool, GlyphCanvas, GridEditorOptions, PointerState};

/// Callback receiving the compressed glyph after each committed change
pub type ChangeCallback = Box<dyn FnMut(&str)>;

/// Interactive glyph grid editor
pub struct GridEditor {
    pub(crate) grid: Grid,
    pub(crate) history: HistoryStack<Grid>,
    pub(crate) history_limit: Option<usize>,

    pub(crate) editable: bool,
    pub(crate) output_visible: bool,
    pub(crate) tool: DrawTool,
    pub(crate) pointer: PointerState,

    /// Compressed form of `grid`
    pub(crate) output: String,

    pub(crate) canvas: Box<dyn GlyphCanvas>,
    pub(crate) on_change: Option<ChangeCallback>,
}

impl GridEditor {
    /// Create an editor with a blank grid
    pub fn new(canvas: impl GlyphCanvas + 'static, options: GridEditorOptions) -> Result<Self> {
        options.validate()?;
        let grid = options.blank_grid()?;
        let output = compress(&grid)?;

        let mut editor = Self {
            history: HistoryStack::with_limit(grid.clone(), options.history_limit),
            history_limit: options.history_limit,
            grid,
            editable: options.editable,
            output_visible: options.output_visible,
            tool: DrawTool::default(),
            pointer: PointerState::Idle,
            output,
            canvas: Box::new(canvas),
            on_change: None,
        };
        editor.canvas.set_editable(editor.editable);
        editor.render();
        Ok(editor)
    }

    /// Create an editor with its change callback already registered
    ///
    /// The callback is not called for the initial blank grid.
    pub fn with_on_change(
        canvas: impl GlyphCanvas + 'static,
        options: GridEditorOptions,
        callback: impl FnMut(&str) + 'static,
    ) -> Result<Self> {
        let mut editor = Self::new(canvas, options)?;
        editor.set_on_change(callback);
        Ok(editor)
    }

    /// Create an editor without a canvas
    pub fn headless(options: GridEditorOptions) -> Result<Self> {
        Self::new(super::NullCanvas, options)
    }

    /// Register the change callback, replacing any previous one
    pub fn set_on_change(&mut self, callback: impl FnMut(&str) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Getters
    // ═══════════════════════════════════════════════════════════════════════

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn resolution(&self) -> usize {
        self.grid.resolution()
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    pub fn is_output_visible(&self) -> bool {
        self.output_visible
    }

    pub fn tool(&self) -> DrawTool {
        self.tool
    }

    pub fn pointer_state(&self) -> PointerState {
        self.pointer
    }

    pub fn history(&self) -> &HistoryStack<Grid> {
        &self.history
    }

    /// The compressed form of the current grid
    pub fn get_compressed(&self) -> &str {
        &self.output
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Setters (no history, no change notification)
    // ═══════════════════════════════════════════════════════════════════════

    /// Toggle whether pointer input draws
    ///
    /// A stroke already in progress still commits on pointer-up.
    pub fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
        self.canvas.set_editable(editable);
    }

    pub fn set_output_visible(&mut self, visible: bool) {
        self.output_visible = visible;
        if visible {
            self.canvas.show_output(&self.output);
        }
    }

    pub fn set_tool(&mut self, tool: DrawTool) {
        self.tool = tool;
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Committed operations
    // ═══════════════════════════════════════════════════════════════════════

    /// Blank the grid
    pub fn clear(&mut self) -> Result<()> {
        self.pointer = PointerState::Idle;
        self.grid.clear();
        self.commit()
    }

    /// Replace the grid with a compressed glyph
    ///
    /// On error the grid, history and editability are left untouched.
    pub fn load_glyph(&mut self, compressed: &str, editable: Option<bool>) -> Result<()> {
        let grid = match decompress(compressed, self.resolution()) {
            Ok(grid) => grid,
            Err(err) => {
                log::warn!("Rejected glyph ({} chars): {err}", compressed.len());
                return Err(err);
            }
        };

        self.grid = grid;
        self.pointer = PointerState::Idle;
        if let Some(editable) = editable {
            self.set_editable(editable);
        }
        log::debug!("Loaded glyph with {} inked cells", self.grid.ink_count());
        self.commit()
    }

    /// Push the current grid as a snapshot and publish it
    pub(crate) fn commit(&mut self) -> Result<()> {
        self.history.push(self.grid.clone());
        log::debug!("Committed snapshot {} of {}", self.history.cursor() + 1, self.history.len());
        self.publish()
    }

    /// Recompress, redraw and notify
    pub(crate) fn publish(&mut self) -> Result<()> {
        self.output = compress(&self.grid)?;
        self.render();
        if let Some(callback) = self.on_change.as_mut() {
            callback(&self.output);
        }
        Ok(())
    }

    fn render(&mut self) {
        self.canvas.redraw(&self.grid);
        if self.output_visible {
            self.canvas.show_output(&self.output);
        }
    }
}

impl std::fmt::Debug for GridEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridEditor")
            .field("resolution", &self.resolution())
            .field("editable", &self.editable)
            .field("output_visible", &self.output_visible)
            .field("tool", &self.tool)
            .field("pointer", &self.pointer)
            .field("history_len", &self.history.len())
            .field("output", &self.output)
            .finish_non_exhaustive()
    }
}
