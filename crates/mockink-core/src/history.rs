//! Bounded snapshot-based undo/redo.

use crate::element::Element;

/// Default maximum number of undo states to keep.
pub const MAX_UNDO_HISTORY: usize = 50;

/// A full-value copy of the scene's element sequence.
pub type Snapshot = Vec<Element>;

/// Linear undo/redo history over committed element sequences.
///
/// The top of the undo stack is always the most recently committed state,
/// so undoing needs at least two entries: the current state and the one
/// before it. Selection and zoom are never part of a snapshot.
#[derive(Debug, Clone)]
pub struct History {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(MAX_UNDO_HISTORY)
    }
}

impl History {
    /// Create an empty history holding at most `capacity` undo states.
    pub fn new(capacity: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Push a deep snapshot of `elements`, evicting the oldest entry on overflow.
    /// Clears the redo stack.
    pub fn record(&mut self, elements: &[Element]) {
        self.undo_stack.push(elements.to_vec());
        self.redo_stack.clear();

        if self.undo_stack.len() > self.capacity {
            self.undo_stack.remove(0);
        }
        log::debug!(
            "History commit: {} undo, {} elements",
            self.undo_stack.len(),
            elements.len()
        );
    }

    /// Step back one committed state.
    /// Returns the state to restore, or `None` if there is nothing to undo.
    pub fn undo(&mut self) -> Option<Snapshot> {
        if self.undo_stack.len() < 2 {
            return None;
        }
        let current = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        self.undo_stack.last().cloned()
    }

    /// Step forward one undone state.
    /// Returns the state to restore, or `None` if there is nothing to redo.
    pub fn redo(&mut self) -> Option<Snapshot> {
        let snapshot = self.redo_stack.pop()?;
        self.undo_stack.push(snapshot.clone());
        if self.undo_stack.len() > self.capacity {
            self.undo_stack.remove(0);
        }
        Some(snapshot)
    }

    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() >= 2
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of committed states on the undo stack.
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The most recently committed state.
    pub fn current(&self) -> Option<&Snapshot> {
        self.undo_stack.last()
    }

    /// Oldest state still retained.
    pub fn oldest(&self) -> Option<&Snapshot> {
        self.undo_stack.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_template;
    use crate::element::ElementKind;
    use kurbo::Point;

    fn element_at(x: f64) -> Element {
        Element::from_template(&builtin_template(ElementKind::Box), Point::new(x, 0.0), 20.0)
    }

    #[test]
    fn test_undo_restores_prior_state() {
        let mut history = History::default();
        let a = element_at(0.0);
        let b = element_at(40.0);

        history.record(&[]);
        history.record(&[a.clone()]);
        history.record(&[a.clone(), b.clone()]);

        assert_eq!(history.undo(), Some(vec![a.clone()]));
        assert_eq!(history.undo(), Some(vec![]));
        assert!(!history.can_undo());
        assert_eq!(history.undo(), None);

        assert_eq!(history.redo(), Some(vec![a.clone()]));
        assert_eq!(history.redo(), Some(vec![a, b]));
        assert_eq!(history.redo(), None);
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = History::default();
        history.record(&[]);
        history.record(&[element_at(0.0)]);
        assert!(history.undo().is_some());
        assert!(history.can_redo());

        history.record(&[element_at(20.0)]);
        assert!(!history.can_redo());
        assert_eq!(history.redo_len(), 0);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = History::default();
        for i in 0..MAX_UNDO_HISTORY {
            history.record(&[element_at(i as f64)]);
        }
        assert_eq!(history.undo_len(), MAX_UNDO_HISTORY);

        let second = history.undo_stack[1].clone();
        history.record(&[element_at(999.0)]);
        assert_eq!(history.undo_len(), MAX_UNDO_HISTORY);
        assert_eq!(history.oldest(), Some(&second));
    }

    #[test]
    fn test_empty_history_is_noop() {
        let mut history = History::new(3);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());

        history.record(&[]);
        assert!(history.undo().is_none());
        assert_eq!(history.undo_len(), 1);
    }

    #[test]
    fn test_zero_capacity_keeps_current_state() {
        let mut history = History::new(0);
        history.record(&[]);
        history.record(&[element_at(0.0)]);
        assert_eq!(history.capacity(), 1);
        assert_eq!(history.undo_len(), 1);
        assert_eq!(history.current().map(Vec::len), Some(1));
    }
}
