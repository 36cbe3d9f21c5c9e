//! Undo/Redo for the grid editor
//!
//! Undo and redo restore full snapshots from the history; they never push.
//! A stroke in progress is abandoned.

use crate::Result;

use super::{GridEditor, PointerState};

/// Trait for editors that support undo/redo
pub trait GlyphUndoState {
    /// Check if undo is available
    fn can_undo(&self) -> bool;

    /// Step back one snapshot, returns false if there was nothing to undo
    fn undo(&mut self) -> Result<bool>;

    /// Check if redo is available
    fn can_redo(&self) -> bool;

    /// Step forward one snapshot, returns false if there was nothing to redo
    fn redo(&mut self) -> Result<bool>;
}

impl GridEditor {
    /// Number of steps that can be undone
    pub fn undo_stack_len(&self) -> usize {
        self.history.undo_len()
    }

    /// Number of steps that can be redone
    pub fn redo_stack_len(&self) -> usize {
        self.history.redo_len()
    }
}

impl GlyphUndoState for GridEditor {
    fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    fn undo(&mut self) -> Result<bool> {
        let Some(snapshot) = self.history.undo() else {
            return Ok(false);
        };
        self.grid = snapshot.clone();
        self.pointer = PointerState::Idle;
        self.publish()?;
        Ok(true)
    }

    fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn redo(&mut self) -> Result<bool> {
        let Some(snapshot) = self.history.redo() else {
            return Ok(false);
        };
        self.grid = snapshot.clone();
        self.pointer = PointerState::Idle;
        self.publish()?;
        Ok(true)
    }
}
