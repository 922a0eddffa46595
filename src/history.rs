use crate::model::Element;

/// Linear undo stack of whole-canvas snapshots.
///
/// `cursor` is `None` before the first structural edit; the initial empty
/// canvas is never itself an entry, so undo stops at entry 0.
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: Vec<Vec<Element>>,
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops any redoable entries and appends an owned copy of `elements`.
    pub fn record(&mut self, elements: &[Element]) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        self.entries.truncate(keep);
        self.entries.push(elements.to_vec());
        self.cursor = Some(self.entries.len() - 1);
    }

    pub fn undo(&mut self) -> Option<&[Element]> {
        let cursor = self.cursor.filter(|&c| c > 0)? - 1;
        self.cursor = Some(cursor);
        Some(&self.entries[cursor])
    }

    pub fn redo(&mut self) -> Option<&[Element]> {
        let next = self.cursor.map_or(0, |c| c + 1);
        if next >= self.entries.len() {
            return None;
        }
        self.cursor = Some(next);
        Some(&self.entries[next])
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.cursor.map_or(0, |c| c + 1) < self.entries.len()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn current(&self) -> Option<&[Element]> {
        self.cursor.map(|c| self.entries[c].as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ElementId, ElementKind, Point};

    fn snapshot(ids: &[u64]) -> Vec<Element> {
        ids.iter()
            .map(|&id| Element::new(ElementId(id), ElementKind::Guanine, Point::new(0.0, 0.0)))
            .collect()
    }

    #[test]
    fn starts_without_cursor() {
        let mut history = History::new();
        assert_eq!(history.cursor(), None);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());
    }

    #[test]
    fn single_entry_cannot_be_undone() {
        let mut history = History::new();
        history.record(&snapshot(&[1]));
        assert_eq!(history.cursor(), Some(0));
        assert!(history.undo().is_none());
        assert_eq!(history.cursor(), Some(0));
    }

    #[test]
    fn recorded_snapshot_is_independent_of_caller() {
        let mut history = History::new();
        let mut live = snapshot(&[1]);
        history.record(&live);
        live[0].rotation = 180.0;
        assert_eq!(history.current().unwrap()[0].rotation, 0.0);
    }
}
