//! Editing session: the element store, its undo history, the viewport and the
//! pointer interaction state, driven by [`PointerEvent`]s.
//!
//! Only structural edits (place, delete, clear) record history. Dragging and
//! double-click rotation change the store in place and are never undoable.

use eframe::egui;

use crate::geometry;
use crate::history::History;
use crate::model::{Element, ElementId, ElementKind, Point};
use crate::store::{ElementPatch, ElementStore};
use crate::view::Viewport;

/// Pointer input in device coordinates relative to the canvas top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Click(egui::Pos2),
    Press(egui::Pos2),
    Move(egui::Pos2),
    Release,
    Leave,
    DoubleClick(egui::Pos2),
    ContextClick(egui::Pos2),
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Mode {
    #[default]
    Idle,
    ToolSelected(ElementKind),
    Dragging {
        id: ElementId,
        /// Pointer minus element origin at drag start, in model space.
        offset: egui::Vec2,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cursor {
    Default,
    Crosshair,
    Grab,
    Grabbing,
}

#[derive(Debug)]
pub struct Editor {
    store: ElementStore,
    history: History,
    view: Viewport,
    mode: Mode,
    hovered: Option<ElementId>,
    next_id: u64,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl Editor {
    pub fn new(view: Viewport) -> Self {
        Self {
            store: ElementStore::new(),
            history: History::new(),
            view,
            mode: Mode::Idle,
            hovered: None,
            next_id: 1,
        }
    }

    pub fn elements(&self) -> &[Element] {
        self.store.list()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn view(&self) -> &Viewport {
        &self.view
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn selected_tool(&self) -> Option<ElementKind> {
        match self.mode {
            Mode::ToolSelected(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn hovered(&self) -> Option<ElementId> {
        self.hovered
    }

    pub fn dragged(&self) -> Option<ElementId> {
        match self.mode {
            Mode::Dragging { id, .. } => Some(id),
            _ => None,
        }
    }

    pub fn cursor(&self) -> Cursor {
        match self.mode {
            Mode::Dragging { .. } => Cursor::Grabbing,
            _ if self.hovered.is_some() => Cursor::Grab,
            Mode::ToolSelected(_) => Cursor::Crosshair,
            Mode::Idle => Cursor::Default,
        }
    }

    /// Always selects, even when `kind` is already the active tool.
    pub fn select_tool(&mut self, kind: ElementKind) {
        log::debug!("tool selected: {kind}");
        self.mode = Mode::ToolSelected(kind);
    }

    pub fn deselect_tool(&mut self) {
        if matches!(self.mode, Mode::ToolSelected(_)) {
            self.mode = Mode::Idle;
        }
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Click(device) => {
                if let Mode::ToolSelected(kind) = self.mode {
                    let pos = self.view.device_to_model(device);
                    self.place(kind, pos);
                    self.mode = Mode::Idle;
                }
            }
            PointerEvent::Press(device) => {
                if matches!(self.mode, Mode::ToolSelected(_)) {
                    return;
                }
                let pos = self.view.device_to_model(device);
                let hit = self
                    .topmost_at(pos)
                    .map(|e| (e.id, pos - e.pos.to_pos2(), e.display_name()));
                if let Some((id, offset, name)) = hit {
                    log::debug!("drag start: {name}");
                    self.mode = Mode::Dragging { id, offset };
                }
            }
            PointerEvent::Move(device) => {
                let pos = self.view.device_to_model(device);
                if let Mode::Dragging { id, offset } = self.mode {
                    let target = Point::from_pos2(pos - offset);
                    self.store.update(id, ElementPatch::position(target));
                } else {
                    self.hovered = self.topmost_at(pos).map(|e| e.id);
                }
            }
            PointerEvent::Release | PointerEvent::Leave => {
                if let Mode::Dragging { id, .. } = self.mode {
                    log::debug!("drag end: {id}");
                    self.mode = Mode::Idle;
                }
            }
            PointerEvent::DoubleClick(device) => {
                let pos = self.view.device_to_model(device);
                self.rotate_at(pos);
            }
            PointerEvent::ContextClick(device) => {
                let pos = self.view.device_to_model(device);
                self.delete_at(pos);
            }
        }
    }

    pub fn topmost_at(&self, model: egui::Pos2) -> Option<&Element> {
        let elements = self.store.list();
        geometry::topmost_hit(elements, model).map(|idx| &elements[idx])
    }

    /// Places a new element at a model position and records an undo point.
    pub fn place(&mut self, kind: ElementKind, model: egui::Pos2) -> ElementId {
        let id = self.allocate_id();
        let element = Element::new(id, kind, Point::from_pos2(model));
        log::debug!(
            "add {} at ({:.1}, {:.1})",
            element.display_name(),
            model.x,
            model.y
        );
        if let Err(err) = self.store.add(element) {
            log::warn!("placement skipped: {err}");
            return id;
        }
        self.history.record(self.store.list());
        id
    }

    pub fn delete_at(&mut self, model: egui::Pos2) -> Option<ElementId> {
        let id = self.topmost_at(model)?.id;
        self.store.delete(id)?;
        log::debug!("delete {id}");
        if self.hovered == Some(id) {
            self.hovered = None;
        }
        self.history.record(self.store.list());
        Some(id)
    }

    pub fn rotate_at(&mut self, model: egui::Pos2) -> Option<ElementId> {
        let element = self.topmost_at(model)?;
        let id = element.id;
        let rotation = (element.rotation + 180.0).rem_euclid(360.0);
        self.store.update(id, ElementPatch::rotation(rotation));
        Some(id)
    }

    pub fn clear(&mut self) {
        log::debug!("clear {} element(s)", self.store.len());
        self.store.clear();
        self.hovered = None;
        self.history.record(self.store.list());
    }

    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        self.store.replace_all(snapshot.to_vec());
        log::debug!("undo -> entry {:?}", self.history.cursor());
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        self.store.replace_all(snapshot.to_vec());
        log::debug!("redo -> entry {:?}", self.history.cursor());
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn zoom_in(&mut self) {
        self.view.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.view.zoom_out();
    }

    pub fn resize(&mut self, size: egui::Vec2) {
        if self.view.resize(size) {
            log::debug!("canvas resized to {:.0}x{:.0}", size.x, size.y);
        }
    }

    fn allocate_id(&mut self) -> ElementId {
        let id = self.next_id;
        self.next_id += 1;
        ElementId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_follows_mode() {
        let mut editor = Editor::default();
        assert_eq!(editor.cursor(), Cursor::Default);
        editor.select_tool(ElementKind::Phosphate);
        assert_eq!(editor.cursor(), Cursor::Crosshair);
        editor.handle_pointer(PointerEvent::Click(egui::pos2(100.0, 100.0)));
        editor.handle_pointer(PointerEvent::Move(egui::pos2(100.0, 100.0)));
        assert_eq!(editor.cursor(), Cursor::Grab);
        editor.handle_pointer(PointerEvent::Press(egui::pos2(100.0, 100.0)));
        assert_eq!(editor.cursor(), Cursor::Grabbing);
    }

    #[test]
    fn ids_are_never_reused_after_undo() {
        let mut editor = Editor::default();
        let first = editor.place(ElementKind::Adenine, egui::pos2(0.0, 0.0));
        let second = editor.place(ElementKind::Adenine, egui::pos2(0.0, 0.0));
        assert!(editor.undo());
        let third = editor.place(ElementKind::Adenine, egui::pos2(0.0, 0.0));
        assert_ne!(first, second);
        assert_ne!(second, third);
        assert_ne!(first, third);
    }

    #[test]
    fn escape_only_drops_tool_selection() {
        let mut editor = Editor::default();
        editor.deselect_tool();
        assert_eq!(editor.mode(), Mode::Idle);
        editor.select_tool(ElementKind::Thymine);
        editor.select_tool(ElementKind::Thymine);
        assert_eq!(editor.selected_tool(), Some(ElementKind::Thymine));
        editor.deselect_tool();
        assert_eq!(editor.mode(), Mode::Idle);
    }
}
