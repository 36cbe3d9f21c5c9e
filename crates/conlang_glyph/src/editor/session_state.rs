//! Session state for the Grid Editor
//!
//! Contains everything needed to restore an editing session:
//! - the snapshot history, each entry as a compressed glyph string
//! - the history cursor (the entry currently shown)
//! - editability

use serde::{Deserialize, Serialize};

use crate::glyph::{compress, decompress};
use crate::history::HistoryStack;
use crate::{GlyphError, Result};

use super::{GridEditor, PointerState};

/// Session state for the grid editor
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphSessionState {
    /// Version for future compatibility
    #[serde(default = "default_version")]
    pub version: u32,

    /// Grid side length
    pub resolution: usize,

    /// Whether the editor accepted pointer input
    #[serde(default = "default_true")]
    pub editable: bool,

    /// Snapshot history, oldest first
    pub history: Vec<String>,

    /// Index of the current snapshot in `history`
    #[serde(default)]
    pub cursor: usize,
}

fn default_version() -> u32 {
    1
}
fn default_true() -> bool {
    true
}

impl GlyphSessionState {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

impl GridEditor {
    /// Capture the session
    pub fn session_state(&self) -> Result<GlyphSessionState> {
        let history = self.history.entries().iter().map(compress).collect::<Result<Vec<_>>>()?;
        Ok(GlyphSessionState {
            version: default_version(),
            resolution: self.resolution(),
            editable: self.editable,
            history,
            cursor: self.history.cursor(),
        })
    }

    /// Restore a captured session
    ///
    /// Every snapshot is decoded before anything is replaced; on error the
    /// editor is unchanged.
    pub fn restore_session(&mut self, state: &GlyphSessionState) -> Result<()> {
        let resolution = self.resolution();
        if state.resolution != resolution {
            return Err(GlyphError::InvalidGlyphSize {
                expected: resolution * resolution,
                actual: state.resolution.saturating_mul(state.resolution),
            });
        }

        let entries = state.history.iter().map(|glyph| decompress(glyph, resolution)).collect::<Result<Vec<_>>>()?;
        let history = HistoryStack::from_entries(entries, state.cursor, self.history_limit).ok_or_else(|| {
            GlyphError::payload(format!("session cursor {} outside history of {}", state.cursor, state.history.len()))
        })?;

        self.grid = history.current().clone();
        self.history = history;
        self.pointer = PointerState::Idle;
        self.set_editable(state.editable);
        log::debug!("Restored session with {} snapshots", self.history.len());
        self.publish()
    }
}
