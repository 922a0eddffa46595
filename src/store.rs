use crate::error::StoreError;
use crate::model::{Element, ElementId, Point};

/// Fields an update may overwrite; `None` leaves the field untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementPatch {
    pub pos: Option<Point>,
    pub rotation: Option<f32>,
    pub scale: Option<f32>,
}

impl ElementPatch {
    pub fn position(pos: Point) -> Self {
        Self {
            pos: Some(pos),
            ..Self::default()
        }
    }

    pub fn rotation(rotation: f32) -> Self {
        Self {
            rotation: Some(rotation),
            ..Self::default()
        }
    }
}

/// Everything currently on the canvas, bottom-most first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementStore {
    elements: Vec<Element>,
}

impl ElementStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, element: Element) -> Result<(), StoreError> {
        if self.contains(element.id) {
            log::warn!("rejecting duplicate element id {}", element.id);
            return Err(StoreError::DuplicateId(element.id));
        }
        self.elements.push(element);
        Ok(())
    }

    /// Returns whether an element was patched.
    pub fn update(&mut self, id: ElementId, patch: ElementPatch) -> bool {
        let Some(element) = self.elements.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        if let Some(pos) = patch.pos {
            element.pos = pos;
        }
        if let Some(rotation) = patch.rotation {
            element.rotation = rotation;
        }
        if let Some(scale) = patch.scale {
            element.scale = Some(scale);
        }
        true
    }

    pub fn delete(&mut self, id: ElementId) -> Option<Element> {
        let idx = self.index_of(id)?;
        Some(self.elements.remove(idx))
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id == id)
    }

    pub fn list(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Swaps in a snapshot wholesale, as undo/redo does.
    pub fn replace_all(&mut self, elements: Vec<Element>) {
        self.elements = elements;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementKind;

    fn element(id: u64, kind: ElementKind) -> Element {
        Element::new(ElementId(id), kind, Point::new(id as f32 * 10.0, 0.0))
    }

    #[test]
    fn add_appends_in_order() {
        let mut store = ElementStore::new();
        store.add(element(1, ElementKind::Adenine)).unwrap();
        store.add(element(2, ElementKind::Thymine)).unwrap();
        let ids: Vec<_> = store.list().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![ElementId(1), ElementId(2)]);
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut store = ElementStore::new();
        store.add(element(1, ElementKind::Adenine)).unwrap();
        let err = store.add(element(1, ElementKind::Guanine)).unwrap_err();
        assert_eq!(err, StoreError::DuplicateId(ElementId(1)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].kind, ElementKind::Adenine);
    }

    #[test]
    fn update_merges_only_given_fields() {
        let mut store = ElementStore::new();
        store.add(element(1, ElementKind::Phosphate)).unwrap();
        assert!(store.update(ElementId(1), ElementPatch::rotation(90.0)));
        let e = store.get(ElementId(1)).unwrap();
        assert_eq!(e.rotation, 90.0);
        assert_eq!(e.pos, Point::new(10.0, 0.0));
        assert_eq!(e.scale, Some(1.0));
    }

    #[test]
    fn missing_ids_are_no_ops() {
        let mut store = ElementStore::new();
        store.add(element(1, ElementKind::Phosphate)).unwrap();
        let before = store.clone();
        assert!(!store.update(ElementId(9), ElementPatch::position(Point::new(1.0, 1.0))));
        assert!(store.delete(ElementId(9)).is_none());
        assert_eq!(store, before);
    }

    #[test]
    fn delete_keeps_remaining_order() {
        let mut store = ElementStore::new();
        for id in 1..=3 {
            store.add(element(id, ElementKind::ChemicalBond)).unwrap();
        }
        let removed = store.delete(ElementId(2)).unwrap();
        assert_eq!(removed.id, ElementId(2));
        let ids: Vec<_> = store.list().iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![1, 3]);
        store.clear();
        assert!(store.is_empty());
    }
}
