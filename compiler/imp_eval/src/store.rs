//! Address-indexed memory with stack-discipline reclamation.
//!
//! Allocation hands out `next` and bumps it. Leaving a block moves `next`
//! back to where it was on entry, so the block's addresses are reused by
//! later allocations; their old contents stay in place until overwritten.
//!
//! A checkpoint records enough to undo everything a top-level command did:
//! the cursor, the number of cells, and the first old value of every
//! pre-existing cell written since.

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::errors::{stale_address, unallocated_address};
use crate::{Address, EvalError, Value};

#[derive(Debug)]
struct Journal {
    next: usize,
    len: usize,
    saved: FxHashMap<usize, Value>,
}

#[derive(Debug, Default)]
pub struct Store {
    cells: Vec<Value>,
    next: usize,
    journal: Option<Journal>,
}

impl Store {
    pub fn new() -> Self {
        Store::default()
    }

    /// Write `value` at the next free address and return it.
    pub fn allocate(&mut self, value: Value) -> Address {
        let index = self.next;
        if index < self.cells.len() {
            self.overwrite(index, value);
        } else {
            self.cells.push(value);
        }
        self.next = self.next.saturating_add(1);
        trace!(address = index, %value, "allocate");
        Address::new(index)
    }

    /// Overwrite an allocated cell.
    pub fn update(&mut self, address: Address, value: Value) -> Result<(), EvalError> {
        let index = address.index();
        if index >= self.cells.len() {
            return Err(unallocated_address(address));
        }
        self.overwrite(index, value);
        Ok(())
    }

    /// Read a cell, stale or not.
    pub fn access(&self, address: Address) -> Result<Value, EvalError> {
        self.cells
            .get(address.index())
            .copied()
            .ok_or_else(|| unallocated_address(address))
    }

    /// Read a cell, rejecting addresses at or past the cursor.
    pub fn access_live(&self, address: Address) -> Result<Value, EvalError> {
        if !self.is_live(address) && address.index() < self.cells.len() {
            return Err(stale_address(address, self.next_address()));
        }
        self.access(address)
    }

    #[inline]
    pub fn is_live(&self, address: Address) -> bool {
        address.index() < self.next
    }

    /// The address the next `allocate` will return.
    #[inline]
    pub fn next_address(&self) -> Address {
        Address::new(self.next)
    }

    /// Move the cursor back to `mark`, reclaiming every address allocated
    /// since. Contents are left as they are.
    pub fn reset_cursor(&mut self, mark: Address) {
        debug_assert!(mark.index() <= self.next, "cursor can only move back");
        self.next = mark.index().min(self.next);
    }

    /// Number of cells ever written, live or stale.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Start recording changes so they can be undone with `rollback`.
    /// Replaces any checkpoint still open.
    pub fn checkpoint(&mut self) {
        self.journal = Some(Journal {
            next: self.next,
            len: self.cells.len(),
            saved: FxHashMap::default(),
        });
    }

    /// Keep every change since the last checkpoint.
    pub fn commit(&mut self) {
        self.journal = None;
    }

    /// Undo every change since the last checkpoint. No-op without one.
    pub fn rollback(&mut self) {
        let Some(journal) = self.journal.take() else {
            return;
        };
        self.cells.truncate(journal.len);
        for (index, value) in journal.saved {
            if let Some(cell) = self.cells.get_mut(index) {
                *cell = value;
            }
        }
        self.next = journal.next;
    }

    fn overwrite(&mut self, index: usize, value: Value) {
        let Some(cell) = self.cells.get_mut(index) else {
            return;
        };
        if let Some(journal) = &mut self.journal {
            if index < journal.len {
                journal.saved.entry(index).or_insert(*cell);
            }
        }
        *cell = value;
    }
}

#[cfg(test)]
mod tests;
