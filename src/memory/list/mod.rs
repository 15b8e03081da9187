/*!
 * Ordered Block List
 *
 * Singly-linked list of memory blocks, stored in a slot arena.
 *
 * ## Layout
 *
 * Cells live in a `Vec` of generation-tagged slots and link to each other by
 * [`CellId`]. Removed slots are recycled; bumping the slot generation on
 * release makes stale handles fail lookup instead of aliasing a new cell.
 *
 * ## Complexity
 *
 * - Head/tail insertion: O(1)
 * - Positional lookup, insertion and removal: O(index)
 * - Removing the tail: O(len), there is no back-pointer to the predecessor
 *
 * ## Bounds
 *
 * - `node_at` and `insert_at` accept `0..=len`. `node_at(len)` yields `None`,
 *   `insert_at(len, _)` appends.
 * - `block_at`, `block_at_mut` and `remove_at` accept `0..len`.
 */

mod cursor;

pub use cursor::{Cells, Cursor};

use super::types::{Block, MemoryError, MemoryResult};
use crate::core::types::Size;
use std::fmt;

/// Handle to a cell of a [`BlockList`]
///
/// Only meaningful for the list that returned it, and only until that cell is
/// removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId {
    index: usize,
    generation: u32,
}

#[derive(Debug, Clone)]
struct Cell {
    block: Block,
    next: Option<CellId>,
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    cell: Option<Cell>,
}

/// Ordered list of blocks with O(1) head/tail insertion
#[derive(Debug, Clone, Default)]
pub struct BlockList {
    slots: Vec<Slot>,
    vacant: Vec<usize>,
    head: Option<CellId>,
    tail: Option<CellId>,
    len: usize,
}

impl BlockList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn first(&self) -> Option<CellId> {
        self.head
    }

    pub fn last(&self) -> Option<CellId> {
        self.tail
    }

    /// Cell at `index`, walking from the head
    ///
    /// `index == len` is accepted and yields `None`.
    pub fn node_at(&self, index: usize) -> MemoryResult<Option<CellId>> {
        if index > self.len {
            return Err(MemoryError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        let mut current = self.head;
        for _ in 0..index {
            current = current.and_then(|id| self.next_of(id));
        }
        Ok(current)
    }

    pub fn get(&self, id: CellId) -> Option<&Block> {
        self.cell(id).map(|cell| &cell.block)
    }

    pub fn get_mut(&mut self, id: CellId) -> Option<&mut Block> {
        self.cell_mut(id).map(|cell| &mut cell.block)
    }

    /// Successor of `id` in list order
    pub fn next_of(&self, id: CellId) -> Option<CellId> {
        self.cell(id).and_then(|cell| cell.next)
    }

    /// Insert `block` so that it ends up at position `index`
    pub fn insert_at(&mut self, index: usize, block: Block) -> MemoryResult<CellId> {
        if index > self.len {
            return Err(MemoryError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        if index == 0 {
            return Ok(self.insert_first(block));
        }
        if index == self.len {
            return Ok(self.insert_last(block));
        }

        let prev = self.node_at(index - 1)?.ok_or(MemoryError::IndexOutOfRange {
            index,
            len: self.len,
        })?;
        let next = self.next_of(prev);
        let id = self.occupy(Cell { block, next });
        if let Some(cell) = self.cell_mut(prev) {
            cell.next = Some(id);
        }
        self.len += 1;
        Ok(id)
    }

    pub fn insert_first(&mut self, block: Block) -> CellId {
        let id = self.occupy(Cell {
            block,
            next: self.head,
        });
        self.head = Some(id);
        if self.tail.is_none() {
            self.tail = Some(id);
        }
        self.len += 1;
        id
    }

    pub fn insert_last(&mut self, block: Block) -> CellId {
        let id = self.occupy(Cell { block, next: None });
        match self.tail {
            Some(tail) => {
                if let Some(cell) = self.cell_mut(tail) {
                    cell.next = Some(id);
                }
            }
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
        id
    }

    /// Block stored at `index`, which must be below `len`
    pub fn block_at(&self, index: usize) -> MemoryResult<&Block> {
        let id = self.live_node_at(index)?;
        self.get(id).ok_or(MemoryError::InvalidCell(id))
    }

    pub fn block_at_mut(&mut self, index: usize) -> MemoryResult<&mut Block> {
        let id = self.live_node_at(index)?;
        self.get_mut(id).ok_or(MemoryError::InvalidCell(id))
    }

    /// Position of the first block equal to `block`
    pub fn index_of(&self, block: &Block) -> Option<usize> {
        self.iter().position(|candidate| candidate == block)
    }

    pub fn contains(&self, block: &Block) -> bool {
        self.index_of(block).is_some()
    }

    /// Unlink `id` and hand its block back to the caller
    pub fn remove_cell(&mut self, id: CellId) -> MemoryResult<Block> {
        let next = match self.cell(id) {
            Some(cell) => cell.next,
            None => return Err(MemoryError::InvalidCell(id)),
        };

        if self.head == Some(id) {
            self.head = next;
        } else {
            // Covers both the tail and interior cells
            let prev = self.predecessor(id).ok_or(MemoryError::InvalidCell(id))?;
            if let Some(cell) = self.cell_mut(prev) {
                cell.next = next;
            }
            if self.tail == Some(id) {
                self.tail = Some(prev);
            }
        }

        let cell = self.vacate(id).ok_or(MemoryError::InvalidCell(id))?;
        self.len -= 1;
        if self.len == 0 {
            self.head = None;
            self.tail = None;
        }
        Ok(cell.block)
    }

    pub fn remove_at(&mut self, index: usize) -> MemoryResult<Block> {
        let id = self.live_node_at(index)?;
        self.remove_cell(id)
    }

    /// Remove the first block equal to `block`
    pub fn remove_block(&mut self, block: &Block) -> MemoryResult<Block> {
        let id = self
            .cells()
            .find(|(_, candidate)| *candidate == block)
            .map(|(id, _)| id)
            .ok_or_else(|| MemoryError::NotFound(block.clone()))?;
        self.remove_cell(id)
    }

    /// Forward cursor starting at the head
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self, self.head)
    }

    pub fn iter(&self) -> Cursor<'_> {
        self.cursor()
    }

    /// `(CellId, &Block)` pairs in list order
    pub fn cells(&self) -> Cells<'_> {
        Cells::new(self.cursor())
    }

    /// Owned copy of the blocks in list order
    pub fn blocks(&self) -> Vec<Block> {
        self.iter().cloned().collect()
    }

    pub fn total_length(&self) -> Size {
        self.iter().map(|block| block.length).sum()
    }

    fn live_node_at(&self, index: usize) -> MemoryResult<CellId> {
        if index >= self.len {
            return Err(MemoryError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.node_at(index)?.ok_or(MemoryError::IndexOutOfRange {
            index,
            len: self.len,
        })
    }

    fn predecessor(&self, id: CellId) -> Option<CellId> {
        let mut current = self.head;
        while let Some(candidate) = current {
            let next = self.next_of(candidate);
            if next == Some(id) {
                return Some(candidate);
            }
            current = next;
        }
        None
    }

    fn cell(&self, id: CellId) -> Option<&Cell> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.cell.as_ref())
    }

    fn cell_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.cell.as_mut())
    }

    fn occupy(&mut self, cell: Cell) -> CellId {
        if let Some(index) = self.vacant.pop() {
            if let Some(slot) = self.slots.get_mut(index) {
                slot.cell = Some(cell);
                return CellId {
                    index,
                    generation: slot.generation,
                };
            }
        }
        self.slots.push(Slot {
            generation: 0,
            cell: Some(cell),
        });
        CellId {
            index: self.slots.len() - 1,
            generation: 0,
        }
    }

    fn vacate(&mut self, id: CellId) -> Option<Cell> {
        let slot = self
            .slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)?;
        let cell = slot.cell.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.vacant.push(id.index);
        Some(cell)
    }
}

impl fmt::Display for BlockList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, block) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", block)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a BlockList {
    type Item = &'a Block;
    type IntoIter = Cursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}

impl FromIterator<Block> for BlockList {
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        let mut list = BlockList::new();
        list.extend(iter);
        list
    }
}

impl Extend<Block> for BlockList {
    fn extend<I: IntoIterator<Item = Block>>(&mut self, iter: I) {
        for block in iter {
            self.insert_last(block);
        }
    }
}
