//! Grid editor
//!
//! The stateful editing surface around a `Grid`. Split into:
//! - `options.rs` - construction options, loadable from TOML
//! - `canvas.rs` - the rendering seam (`GlyphCanvas`)
//! - `state.rs` - struct definition, constructor, getters, clear/load
//! - `pointer.rs` - pointer gesture state machine
//! - `undo.rs` - undo/redo through the snapshot history
//! - `session_state.rs` - serializable editing session

mod canvas;
mod options;
mod pointer;
mod session_state;
mod state;
mod undo;

pub use canvas::{GlyphCanvas, NullCanvas};
pub use options::GridEditorOptions;
pub use pointer::{DrawTool, PointerState};
pub use session_state::GlyphSessionState;
pub use state::{ChangeCallback, GridEditor};
pub use undo::GlyphUndoState;
