//! Grid editor tests
//!
//! These tests verify that:
//! 1. Strokes, clear and load each push exactly one snapshot
//! 2. Undo/redo walk the snapshots without pushing
//! 3. A rejected load leaves the editor untouched

use std::cell::RefCell;
use std::rc::Rc;

use conlang_glyph::glyph::compressor::pack_text;
use conlang_glyph::{compress, DrawTool, GlyphCanvas, GlyphError, GlyphUndoState, Grid, GridEditor, GridEditorOptions};

fn editor(resolution: usize) -> GridEditor {
    GridEditor::headless(GridEditorOptions::with_resolution(resolution)).unwrap()
}

fn stroke(editor: &mut GridEditor, cells: &[(usize, usize)]) {
    let (first, rest) = cells.split_first().unwrap();
    editor.on_pointer_down(first.0, first.1).unwrap();
    for &(row, col) in rest {
        editor.on_pointer_enter(row, col).unwrap();
    }
    editor.on_pointer_up().unwrap();
}

#[derive(Debug, Clone, PartialEq)]
enum CanvasEvent {
    Redraw(usize),
    Cell(usize, usize, bool),
    Output(String),
    Editable(bool),
}

#[derive(Clone, Default)]
struct RecordingCanvas {
    events: Rc<RefCell<Vec<CanvasEvent>>>,
}

impl GlyphCanvas for RecordingCanvas {
    fn redraw(&mut self, grid: &Grid) {
        self.events.borrow_mut().push(CanvasEvent::Redraw(grid.ink_count()));
    }

    fn paint_cell(&mut self, row: usize, col: usize, on: bool) {
        self.events.borrow_mut().push(CanvasEvent::Cell(row, col, on));
    }

    fn show_output(&mut self, compressed: &str) {
        self.events.borrow_mut().push(CanvasEvent::Output(compressed.to_string()));
    }

    fn set_editable(&mut self, editable: bool) {
        self.events.borrow_mut().push(CanvasEvent::Editable(editable));
    }
}

#[test]
fn test_fresh_editor_cannot_undo() {
    let mut editor = editor(8);
    assert_eq!(editor.history().len(), 1);
    assert!(!editor.can_undo());
    assert!(!editor.undo().unwrap());
    assert!(editor.grid().is_blank());
    assert_eq!(editor.history().len(), 1);
}

#[test]
fn test_default_resolution() {
    let editor = GridEditor::headless(GridEditorOptions::default()).unwrap();
    assert_eq!(editor.resolution(), 64);
    assert_eq!(editor.grid().cells().len(), 64 * 64);
}

#[test]
fn test_invalid_resolution_rejected() {
    let result = GridEditor::headless(GridEditorOptions::with_resolution(0));
    assert!(matches!(result, Err(GlyphError::InvalidResolution { resolution: 0 })));
}

#[test]
fn test_stroke_pushes_one_snapshot() {
    let mut editor = editor(8);
    stroke(&mut editor, &[(0, 0), (0, 1), (1, 1), (2, 2)]);

    assert_eq!(editor.history().len(), 2);
    assert_eq!(editor.grid().ink_count(), 4);
    assert!(!editor.is_drawing());
}

#[test]
fn test_clear_stroke_undo_returns_to_cleared_state() {
    let mut editor = editor(8);
    editor.clear().unwrap();
    stroke(&mut editor, &[(3, 3), (3, 4)]);

    assert!(editor.undo().unwrap());
    assert!(editor.grid().is_blank());

    // back at the cleared snapshot, the seeded one is still below it
    assert!(editor.undo().unwrap());
    assert!(!editor.undo().unwrap());
    assert!(editor.grid().is_blank());
}

#[test]
fn test_undo_never_passes_seed() {
    let mut editor = editor(4);
    stroke(&mut editor, &[(0, 0)]);
    assert!(editor.undo().unwrap());
    assert!(!editor.undo().unwrap());
    assert_eq!(editor.history().cursor(), 0);
}

#[test]
fn test_redo_restores_stroke() {
    let mut editor = editor(4);
    stroke(&mut editor, &[(1, 1)]);
    let drawn = editor.grid().clone();

    editor.undo().unwrap();
    assert!(editor.can_redo());
    assert!(editor.redo().unwrap());
    assert_eq!(editor.grid(), &drawn);
    assert!(!editor.redo().unwrap());
}

#[test]
fn test_new_stroke_discards_redo_branch() {
    let mut editor = editor(4);
    stroke(&mut editor, &[(0, 0)]);
    stroke(&mut editor, &[(1, 1)]);

    editor.undo().unwrap();
    stroke(&mut editor, &[(2, 2)]);

    assert!(!editor.can_redo());
    assert!(!editor.redo().unwrap());
    assert!(editor.grid().get(0, 0));
    assert!(!editor.grid().get(1, 1));
    assert!(editor.grid().get(2, 2));
}

#[test]
fn test_undo_and_redo_do_not_push() {
    let mut editor = editor(4);
    stroke(&mut editor, &[(0, 0)]);
    stroke(&mut editor, &[(1, 1)]);
    assert_eq!(editor.history().len(), 3);

    editor.undo().unwrap();
    editor.undo().unwrap();
    editor.redo().unwrap();
    assert_eq!(editor.history().len(), 3);
    assert_eq!(editor.undo_stack_len(), 1);
    assert_eq!(editor.redo_stack_len(), 1);
}

#[test]
fn test_pointer_ignored_when_not_editable() {
    let mut options = GridEditorOptions::with_resolution(4);
    options.editable = false;
    let mut editor = GridEditor::headless(options).unwrap();

    stroke(&mut editor, &[(0, 0), (1, 1)]);
    assert!(editor.grid().is_blank());
    assert_eq!(editor.history().len(), 1);
}

#[test]
fn test_enter_without_down_does_nothing() {
    let mut editor = editor(4);
    editor.on_pointer_enter(1, 1).unwrap();
    editor.on_pointer_up().unwrap();
    assert!(editor.grid().is_blank());
    assert_eq!(editor.history().len(), 1);
}

#[test]
fn test_out_of_range_cells_ignored() {
    let mut editor = editor(4);
    editor.on_pointer_down(4, 0).unwrap();
    assert!(!editor.is_drawing());

    editor.on_pointer_down(0, 0).unwrap();
    editor.on_pointer_enter(0, 9).unwrap();
    editor.on_pointer_up().unwrap();
    assert_eq!(editor.grid().ink_count(), 1);
}

#[test]
fn test_set_editable_keeps_grid_and_history() {
    let mut editor = editor(4);
    stroke(&mut editor, &[(0, 0)]);
    let before = editor.grid().clone();

    editor.set_editable(false);
    assert!(!editor.is_editable());
    assert_eq!(editor.grid(), &before);
    assert_eq!(editor.history().len(), 2);

    stroke(&mut editor, &[(3, 3)]);
    assert_eq!(editor.grid(), &before);
}

#[test]
fn test_eraser_clears_cells() {
    let mut editor = editor(4);
    stroke(&mut editor, &[(0, 0), (0, 1), (0, 2)]);

    editor.set_tool(DrawTool::Eraser);
    stroke(&mut editor, &[(0, 1)]);
    assert!(editor.grid().get(0, 0));
    assert!(!editor.grid().get(0, 1));
    assert!(editor.grid().get(0, 2));
}

#[test]
fn test_undo_during_stroke_abandons_it() {
    let mut editor = editor(4);
    stroke(&mut editor, &[(0, 0)]);

    editor.on_pointer_down(2, 2).unwrap();
    assert!(editor.undo().unwrap());
    assert!(!editor.is_drawing());
    assert!(editor.grid().is_blank());

    // the abandoned stroke's pointer-up commits nothing
    editor.on_pointer_up().unwrap();
    assert_eq!(editor.history().len(), 2);
}

#[test]
fn test_scenario_top_left_cell() {
    let mut editor = editor(4);
    stroke(&mut editor, &[(0, 0)]);

    assert_eq!(editor.grid().row(0), Some(&[true, false, false, false][..]));
    for row in 1..4 {
        assert!(editor.grid().row(row).unwrap().iter().all(|&c| !c));
    }

    let restored = conlang_glyph::decompress(editor.get_compressed(), 4).unwrap();
    assert_eq!(&restored, editor.grid());
}

#[test]
fn test_load_glyph_pushes_snapshot_and_applies_editability() {
    let mut source = Grid::new(8).unwrap();
    source.set(4, 4, true);
    let glyph = compress(&source).unwrap();

    let mut editor = editor(8);
    editor.load_glyph(&glyph, Some(false)).unwrap();

    assert_eq!(editor.grid(), &source);
    assert!(!editor.is_editable());
    assert_eq!(editor.history().len(), 2);
    assert_eq!(editor.get_compressed(), glyph);

    editor.undo().unwrap();
    assert!(editor.grid().is_blank());
}

#[test]
fn test_load_glyph_wrong_size_is_atomic() {
    let mut editor = editor(8);
    stroke(&mut editor, &[(1, 2)]);
    let grid_before = editor.grid().clone();
    let output_before = editor.get_compressed().to_string();

    let glyph = compress(&Grid::new(4).unwrap()).unwrap();
    let result = editor.load_glyph(&glyph, Some(false));

    assert!(matches!(result, Err(GlyphError::InvalidGlyphSize { expected: 64, .. })));
    assert_eq!(editor.grid(), &grid_before);
    assert_eq!(editor.get_compressed(), output_before);
    assert_eq!(editor.history().len(), 2);
    assert!(editor.is_editable());
}

#[test]
fn test_load_glyph_truncated_hex_is_atomic() {
    let mut editor = editor(8);
    stroke(&mut editor, &[(5, 5)]);
    let grid_before = editor.grid().clone();

    let corrupt = pack_text("Haa,Ha,6*W").unwrap();
    let result = editor.load_glyph(&corrupt, None);

    assert!(matches!(result, Err(GlyphError::InvalidRowToken { .. })));
    assert_eq!(editor.grid(), &grid_before);
    assert_eq!(editor.history().len(), 2);
    assert_eq!(editor.history().cursor(), 1);
}

#[test]
fn test_on_change_fires_only_on_commits() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut editor = editor(4);
    let sink = Rc::clone(&seen);
    editor.set_on_change(move |compressed| sink.borrow_mut().push(compressed.to_string()));

    editor.on_pointer_down(0, 0).unwrap();
    editor.on_pointer_enter(0, 1).unwrap();
    assert!(seen.borrow().is_empty());

    editor.on_pointer_up().unwrap();
    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(seen.borrow()[0], editor.get_compressed());

    editor.undo().unwrap();
    editor.redo().unwrap();
    editor.clear().unwrap();
    assert_eq!(seen.borrow().len(), 4);

    editor.set_editable(false);
    assert_eq!(seen.borrow().len(), 4);
}

#[test]
fn test_on_change_given_at_construction() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut editor = GridEditor::with_on_change(
        conlang_glyph::NullCanvas,
        GridEditorOptions::with_resolution(4),
        move |compressed| sink.borrow_mut().push(compressed.to_string()),
    )
    .unwrap();
    assert!(seen.borrow().is_empty());

    stroke(&mut editor, &[(1, 1)]);
    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(seen.borrow()[0], editor.get_compressed());
}

#[test]
fn test_output_tracks_stroke_live() {
    let mut editor = editor(4);
    let blank = editor.get_compressed().to_string();

    editor.on_pointer_down(0, 0).unwrap();
    assert_ne!(editor.get_compressed(), blank);
    editor.on_pointer_up().unwrap();

    let mut expected = Grid::new(4).unwrap();
    expected.set(0, 0, true);
    assert_eq!(editor.get_compressed(), compress(&expected).unwrap());
}

#[test]
fn test_canvas_sees_cells_and_output() {
    let canvas = RecordingCanvas::default();
    let events = Rc::clone(&canvas.events);
    let mut editor = GridEditor::new(canvas, GridEditorOptions::with_resolution(4)).unwrap();
    events.borrow_mut().clear();

    editor.on_pointer_down(1, 2).unwrap();
    editor.on_pointer_enter(1, 2).unwrap();
    editor.on_pointer_up().unwrap();

    let events = events.borrow();
    let cells: Vec<_> = events.iter().filter(|e| matches!(e, CanvasEvent::Cell(..))).collect();
    assert_eq!(cells, vec![&CanvasEvent::Cell(1, 2, true)]);
    assert!(events.contains(&CanvasEvent::Redraw(1)));
    assert_eq!(events.last(), Some(&CanvasEvent::Output(editor.get_compressed().to_string())));
}

#[test]
fn test_hidden_output_not_shown() {
    let canvas = RecordingCanvas::default();
    let events = Rc::clone(&canvas.events);
    let mut options = GridEditorOptions::with_resolution(4);
    options.output_visible = false;
    let mut editor = GridEditor::new(canvas, options).unwrap();

    stroke(&mut editor, &[(0, 0)]);
    editor.clear().unwrap();
    assert!(!events.borrow().iter().any(|e| matches!(e, CanvasEvent::Output(_))));

    editor.set_output_visible(true);
    assert_eq!(events.borrow().last(), Some(&CanvasEvent::Output(editor.get_compressed().to_string())));
}

#[test]
fn test_canvas_told_about_editability() {
    let canvas = RecordingCanvas::default();
    let events = Rc::clone(&canvas.events);
    let mut editor = GridEditor::new(canvas, GridEditorOptions::with_resolution(4)).unwrap();

    assert_eq!(events.borrow().first(), Some(&CanvasEvent::Editable(true)));
    editor.set_editable(false);
    assert_eq!(events.borrow().last(), Some(&CanvasEvent::Editable(false)));
}

#[test]
fn test_history_limit_bounds_undo() {
    let mut options = GridEditorOptions::with_resolution(4);
    options.history_limit = Some(3);
    let mut editor = GridEditor::headless(options).unwrap();

    for col in 0..4 {
        stroke(&mut editor, &[(0, col)]);
    }
    assert_eq!(editor.history().len(), 3);

    assert!(editor.undo().unwrap());
    assert!(editor.undo().unwrap());
    assert!(!editor.undo().unwrap());
    assert_eq!(editor.grid().ink_count(), 2);
}
