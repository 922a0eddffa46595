//! Editing core of a DNA-component diagram editor: element model, per-shape
//! hit-testing, snapshot undo history, viewport and the pointer state machine.

pub mod editor;
pub mod error;
pub mod export;
pub mod geometry;
pub mod history;
pub mod model;
pub mod settings;
pub mod store;
pub mod view;

pub use editor::{Cursor, Editor, Mode, PointerEvent};
pub use history::History;
pub use model::{Element, ElementId, ElementKind, Language, Point};
pub use store::{ElementPatch, ElementStore};
pub use view::Viewport;
