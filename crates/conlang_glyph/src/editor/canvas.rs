use crate::Grid;

/// Rendering target of a `GridEditor`
///
/// The editor never draws itself; it tells the canvas what changed. Only
/// `redraw` is required, a canvas that repaints everything on every change
/// can ignore the rest.
pub trait GlyphCanvas {
    /// Repaint the whole grid
    fn redraw(&mut self, grid: &Grid);

    /// Repaint a single cell changed by a stroke in progress
    fn paint_cell(&mut self, _row: usize, _col: usize, _on: bool) {}

    /// Show the compressed glyph string (only called while output is visible)
    fn show_output(&mut self, _compressed: &str) {}

    /// Editability changed (e.g. to switch the cursor)
    fn set_editable(&mut self, _editable: bool) {}
}

/// Canvas that renders nothing, for headless use
#[derive(Clone, Copy, Debug, Default)]
pub struct NullCanvas;

impl GlyphCanvas for NullCanvas {
    fn redraw(&mut self, _grid: &Grid) {}
}
