/*!
 * List Cursors
 * Forward-only views over a BlockList
 */

use super::{BlockList, CellId};
use crate::memory::types::Block;
use std::iter::FusedIterator;

/// Forward cursor over the blocks of a list
///
/// Holds a shared borrow, so the list cannot change while the cursor lives.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    list: &'a BlockList,
    current: Option<CellId>,
}

impl<'a> Cursor<'a> {
    pub(super) fn new(list: &'a BlockList, start: Option<CellId>) -> Self {
        Self {
            list,
            current: start,
        }
    }

    /// Cell the next call to `next` will yield
    pub fn cell(&self) -> Option<CellId> {
        self.current
    }

    pub fn has_next(&self) -> bool {
        self.current.is_some()
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = &'a Block;

    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.list.cell(self.current?)?;
        self.current = cell.next;
        Some(&cell.block)
    }
}

impl FusedIterator for Cursor<'_> {}

/// `(CellId, &Block)` pairs in list order
#[derive(Debug, Clone)]
pub struct Cells<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Cells<'a> {
    pub(super) fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }
}

impl<'a> Iterator for Cells<'a> {
    type Item = (CellId, &'a Block);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor.cell()?;
        self.cursor.next().map(|block| (id, block))
    }
}

impl FusedIterator for Cells<'_> {}
