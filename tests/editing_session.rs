use dna_sketch::{Editor, ElementKind, Mode, PointerEvent, Viewport};
use dna_sketch::settings::parse_settings;
use eframe::egui::{Pos2, pos2};
use std::path::Path;

// Places `kind` at a device position the way the canvas does: pick tool, click.
fn place(editor: &mut Editor, kind: ElementKind, at: Pos2) {
    editor.select_tool(kind);
    editor.handle_pointer(PointerEvent::Click(at));
}

fn kinds(editor: &Editor) -> Vec<ElementKind> {
    editor.elements().iter().map(|e| e.kind).collect()
}

#[test]
fn test_place_undo_redo_clear_walkthrough() {
    let mut editor = Editor::default();

    place(&mut editor, ElementKind::Adenine, pos2(100.0, 100.0));
    assert_eq!(editor.mode(), Mode::Idle);
    place(&mut editor, ElementKind::Thymine, pos2(200.0, 100.0));
    assert_eq!(kinds(&editor), vec![ElementKind::Adenine, ElementKind::Thymine]);
    assert_eq!(editor.elements()[1].pos.to_pos2(), pos2(200.0, 100.0));

    assert!(editor.undo());
    assert_eq!(kinds(&editor), vec![ElementKind::Adenine]);
    assert!(editor.redo());
    assert_eq!(kinds(&editor), vec![ElementKind::Adenine, ElementKind::Thymine]);

    editor.clear();
    assert!(editor.elements().is_empty());
    assert_eq!(editor.history().len(), 3);
    assert!(!editor.can_redo());

    assert!(editor.undo());
    assert_eq!(kinds(&editor), vec![ElementKind::Adenine, ElementKind::Thymine]);
}

#[test]
fn test_undo_past_first_entry_is_refused() {
    let mut editor = Editor::default();
    place(&mut editor, ElementKind::Phosphate, pos2(50.0, 50.0));

    // The first recorded snapshot already holds the phosphate.
    assert!(!editor.can_undo());
    assert!(!editor.undo());
    assert_eq!(editor.elements().len(), 1);
}

#[test]
fn test_new_edit_after_undo_discards_redo_branch() {
    let mut editor = Editor::default();
    place(&mut editor, ElementKind::Guanine, pos2(100.0, 100.0));
    place(&mut editor, ElementKind::Cytosine, pos2(200.0, 100.0));
    place(&mut editor, ElementKind::Adenine, pos2(300.0, 100.0));

    editor.undo();
    editor.undo();
    place(&mut editor, ElementKind::Thymine, pos2(100.0, 300.0));

    assert!(!editor.can_redo());
    assert_eq!(editor.history().len(), 2);
    assert_eq!(kinds(&editor), vec![ElementKind::Guanine, ElementKind::Thymine]);
}

#[test]
fn test_drag_moves_topmost_and_is_not_undoable() {
    let mut editor = Editor::default();
    place(&mut editor, ElementKind::Deoxyribose, pos2(100.0, 100.0));
    place(&mut editor, ElementKind::Phosphate, pos2(110.0, 100.0));

    editor.handle_pointer(PointerEvent::Press(pos2(110.0, 100.0)));
    let phosphate = editor.elements()[1].id;
    assert_eq!(editor.dragged(), Some(phosphate));

    editor.handle_pointer(PointerEvent::Move(pos2(160.0, 150.0)));
    editor.handle_pointer(PointerEvent::Release);
    assert_eq!(editor.mode(), Mode::Idle);
    assert_eq!(editor.elements()[1].pos.to_pos2(), pos2(160.0, 150.0));
    assert_eq!(editor.elements()[0].pos.to_pos2(), pos2(100.0, 100.0));
    assert_eq!(editor.history().len(), 2);

    // Undo reverts to the snapshot taken at placement, dropping the move.
    place(&mut editor, ElementKind::Adenine, pos2(400.0, 400.0));
    editor.undo();
    assert_eq!(editor.elements()[1].pos.to_pos2(), pos2(110.0, 100.0));
}

#[test]
fn test_drag_keeps_grab_offset() {
    let mut editor = Editor::default();
    place(&mut editor, ElementKind::Deoxyribose, pos2(100.0, 100.0));

    editor.handle_pointer(PointerEvent::Press(pos2(120.0, 90.0)));
    editor.handle_pointer(PointerEvent::Move(pos2(220.0, 190.0)));
    assert_eq!(editor.elements()[0].pos.to_pos2(), pos2(200.0, 200.0));
}

#[test]
fn test_leaving_canvas_ends_drag() {
    let mut editor = Editor::default();
    place(&mut editor, ElementKind::Adenine, pos2(100.0, 100.0));

    editor.handle_pointer(PointerEvent::Press(pos2(100.0, 100.0)));
    assert!(editor.dragged().is_some());
    editor.handle_pointer(PointerEvent::Leave);
    assert_eq!(editor.mode(), Mode::Idle);

    editor.handle_pointer(PointerEvent::Move(pos2(300.0, 300.0)));
    assert_eq!(editor.elements()[0].pos.to_pos2(), pos2(100.0, 100.0));
}

#[test]
fn test_press_with_tool_selected_does_not_drag() {
    let mut editor = Editor::default();
    place(&mut editor, ElementKind::Adenine, pos2(100.0, 100.0));

    editor.select_tool(ElementKind::Thymine);
    editor.handle_pointer(PointerEvent::Press(pos2(100.0, 100.0)));
    assert_eq!(editor.mode(), Mode::ToolSelected(ElementKind::Thymine));

    // Clicking on top of an existing element still places.
    editor.handle_pointer(PointerEvent::Click(pos2(100.0, 100.0)));
    assert_eq!(kinds(&editor), vec![ElementKind::Adenine, ElementKind::Thymine]);
}

#[test]
fn test_four_double_clicks_restore_rotation() {
    let mut editor = Editor::default();
    place(&mut editor, ElementKind::PhosphodiesterBent, pos2(200.0, 200.0));
    let at = pos2(200.0, 240.0);

    editor.handle_pointer(PointerEvent::DoubleClick(at));
    assert_eq!(editor.elements()[0].rotation, 180.0);

    // After a half turn the bent bond's corner sits at (200, 160).
    let flipped = pos2(200.0, 160.0);
    editor.handle_pointer(PointerEvent::DoubleClick(flipped));
    assert_eq!(editor.elements()[0].rotation, 0.0);
    editor.handle_pointer(PointerEvent::DoubleClick(at));
    editor.handle_pointer(PointerEvent::DoubleClick(flipped));
    assert_eq!(editor.elements()[0].rotation, 0.0);
    assert_eq!(editor.history().len(), 1);
}

#[test]
fn test_context_click_deletes_topmost_only() {
    let mut editor = Editor::default();
    place(&mut editor, ElementKind::Deoxyribose, pos2(100.0, 100.0));
    place(&mut editor, ElementKind::Phosphate, pos2(100.0, 100.0));

    editor.handle_pointer(PointerEvent::ContextClick(pos2(100.0, 100.0)));
    assert_eq!(kinds(&editor), vec![ElementKind::Deoxyribose]);
    assert_eq!(editor.history().len(), 3);

    editor.handle_pointer(PointerEvent::ContextClick(pos2(500.0, 500.0)));
    assert_eq!(editor.history().len(), 3);
}

#[test]
fn test_clicks_follow_zoom() {
    let mut editor = Editor::new(Viewport::with_zoom(2.0));
    place(&mut editor, ElementKind::Adenine, pos2(200.0, 100.0));
    assert_eq!(editor.elements()[0].pos.to_pos2(), pos2(100.0, 50.0));

    // Device (120, 100) is model (60, 50): 40 units left of the centre, a miss.
    editor.handle_pointer(PointerEvent::Move(pos2(120.0, 100.0)));
    assert_eq!(editor.hovered(), None);
    editor.handle_pointer(PointerEvent::Move(pos2(140.0, 100.0)));
    assert_eq!(editor.hovered(), Some(editor.elements()[0].id));
}

#[test]
fn test_zoom_steps_are_clamped() {
    let mut editor = Editor::default();
    for _ in 0..20 {
        editor.zoom_in();
    }
    assert_eq!(editor.view().zoom(), 2.0);
    assert!(!editor.view().can_zoom_in());
    for _ in 0..20 {
        editor.zoom_out();
    }
    assert_eq!(editor.view().zoom(), 0.5);
    assert_eq!(editor.view().zoom_percent(), 50);
}

#[test]
fn test_undo_restores_deleted_element_and_redo_removes_it() {
    let mut editor = Editor::default();
    place(&mut editor, ElementKind::Adenine, pos2(100.0, 100.0));
    place(&mut editor, ElementKind::Thymine, pos2(300.0, 100.0));
    let before = editor.elements().to_vec();

    editor.handle_pointer(PointerEvent::ContextClick(pos2(100.0, 100.0)));
    assert_eq!(kinds(&editor), vec![ElementKind::Thymine]);
    let after = editor.elements().to_vec();

    assert!(editor.undo());
    assert_eq!(editor.elements(), before.as_slice());
    assert!(editor.can_redo());

    assert!(editor.redo());
    assert_eq!(editor.elements(), after.as_slice());
    assert!(!editor.can_redo());
}

#[test]
fn test_non_finite_initial_zoom_falls_back_to_default() {
    let settings = parse_settings(Path::new("settings.toml"), "initial_zoom = nan\n").unwrap();
    assert!(settings.initial_zoom.is_nan());

    let mut editor = Editor::new(Viewport::with_zoom(settings.initial_zoom));
    assert_eq!(editor.view().zoom(), 1.0);
    editor.zoom_in();
    assert!((0.5..=2.0).contains(&editor.view().zoom()));

    place(&mut editor, ElementKind::Adenine, pos2(110.0, 110.0));
    let pos = editor.elements()[0].pos.to_pos2();
    assert!((pos.x - 100.0).abs() < 1e-4 && (pos.y - 100.0).abs() < 1e-4);
}
