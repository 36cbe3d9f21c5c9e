//! Pointer gesture handling
//!
//! ```text
//! Idle --pointer_down(cell)--> Drawing --pointer_enter(cell)--> Drawing
//!                                 |
//!                            pointer_up --> commit one snapshot --> Idle
//! ```
//!
//! Only editable editors start strokes. Cells outside the grid are ignored.

use serde::{Deserialize, Serialize};

use crate::Result;

use super::GridEditor;

/// Gesture state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerState {
    #[default]
    Idle,
    Drawing,
}

/// What a stroke writes into the cells it touches
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawTool {
    /// Ink cells
    #[default]
    Pen,
    /// Blank cells
    Eraser,
}

impl DrawTool {
    pub fn value(self) -> bool {
        matches!(self, DrawTool::Pen)
    }
}

impl GridEditor {
    /// Start a stroke on a cell
    pub fn on_pointer_down(&mut self, row: usize, col: usize) -> Result<()> {
        if !self.editable || !self.grid.contains(row, col) {
            return Ok(());
        }
        log::trace!("stroke start at ({row}, {col})");
        self.pointer = PointerState::Drawing;
        self.paint(row, col)
    }

    /// Continue a stroke into a cell
    pub fn on_pointer_enter(&mut self, row: usize, col: usize) -> Result<()> {
        if !self.editable || self.pointer != PointerState::Drawing {
            return Ok(());
        }
        self.paint(row, col)
    }

    /// End the stroke, committing it as one undo step
    pub fn on_pointer_up(&mut self) -> Result<()> {
        if self.pointer != PointerState::Drawing {
            return Ok(());
        }
        log::trace!("stroke end");
        self.pointer = PointerState::Idle;
        self.commit()
    }

    pub fn is_drawing(&self) -> bool {
        self.pointer == PointerState::Drawing
    }

    fn paint(&mut self, row: usize, col: usize) -> Result<()> {
        let value = self.tool.value();
        if !self.grid.set(row, col, value) {
            return Ok(());
        }
        self.canvas.paint_cell(row, col, value);
        self.output = crate::glyph::compress(&self.grid)?;
        if self.output_visible {
            self.canvas.show_output(&self.output);
        }
        Ok(())
    }
}
