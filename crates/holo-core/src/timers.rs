//! Bookkeeping for host timer handles.

use crate::document::TimerId;
use fnv::FnvHashMap;
use std::cell::{Cell, RefCell};

/// Live timer handles keyed by [`TimerId`].
///
/// A host scheduler reserves an id, stores whatever keeps its timer alive, and
/// takes the handle back out when the timer fires or is cancelled. Only timers
/// that are still pending stay in the table.
#[derive(Debug)]
pub struct TimerTable<H> {
    next_id: Cell<u32>,
    entries: RefCell<FnvHashMap<TimerId, H>>,
}

impl<H> TimerTable<H> {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(1),
            entries: RefCell::new(FnvHashMap::default()),
        }
    }

    /// Hand out the next id without storing anything yet.
    pub fn reserve(&self) -> TimerId {
        let id = TimerId(self.next_id.get());
        self.next_id.set(id.0.wrapping_add(1));
        id
    }

    pub fn insert(&self, id: TimerId, handle: H) {
        self.entries.borrow_mut().insert(id, handle);
    }

    /// Remove the handle for `id`; `None` once it fired or was cancelled.
    pub fn take(&self, id: TimerId) -> Option<H> {
        self.entries.borrow_mut().remove(&id)
    }

    #[inline]
    pub fn contains(&self, id: TimerId) -> bool {
        self.entries.borrow().contains_key(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl<H> Default for TimerTable<H> {
    fn default() -> Self {
        Self::new()
    }
}
