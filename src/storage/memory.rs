use super::{ReaderState, StateStore, StoreError};
use std::cell::{Cell, RefCell};

/// In-memory store, used when nothing should touch the disk
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    state: RefCell<ReaderState>,
    saves: Cell<usize>,
}

impl MemoryStateStore {
    pub fn new(state: ReaderState) -> Self {
        Self {
            state: RefCell::new(state),
            saves: Cell::new(0),
        }
    }

    /// Current contents of the store.
    pub fn snapshot(&self) -> ReaderState {
        self.state.borrow().clone()
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl StateStore for MemoryStateStore {
    fn load(&self) -> ReaderState {
        self.snapshot()
    }

    fn save(&self, state: &ReaderState) -> Result<(), StoreError> {
        *self.state.borrow_mut() = state.clone();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStateStore::default();
        assert!(store.load().is_empty());

        let mut state = store.load();
        state.insert("book.fb2".to_string(), 4);
        store.save(&state).unwrap();

        assert_eq!(store.load().get("book.fb2"), Some(&4));
        assert_eq!(store.save_count(), 1);
    }
}
