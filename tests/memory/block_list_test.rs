/*!
 * Block List Tests
 * Public list contract: bounds, removal policies and cursors
 */

use memspace_sim::{Block, BlockList, MemoryError};
use pretty_assertions::assert_eq;

fn list_of(pairs: &[(usize, usize)]) -> BlockList {
    pairs
        .iter()
        .map(|&(base, length)| Block::new(base, length))
        .collect()
}

#[test]
fn test_rendering_uses_comma_space() {
    let list = list_of(&[(1, 2), (3, 4), (0, 1)]);
    assert_eq!(list.to_string(), "(1,2), (3,4), (0,1)");
    assert_eq!(list_of(&[(7, 7)]).to_string(), "(7,7)");
}

#[test]
fn test_insert_at_len_appends() {
    let mut list = list_of(&[(0, 1), (1, 1)]);
    let id = list.insert_at(2, Block::new(2, 1)).unwrap();
    assert_eq!(list.last(), Some(id));
    assert_eq!(list.len(), 3);
}

#[test]
fn test_insert_at_on_empty_list() {
    let mut list = BlockList::new();
    let id = list.insert_at(0, Block::new(4, 4)).unwrap();
    assert_eq!(list.first(), Some(id));
    assert_eq!(list.last(), Some(id));
    assert_eq!(
        list.insert_at(2, Block::new(0, 0)),
        Err(MemoryError::IndexOutOfRange { index: 2, len: 1 })
    );
}

#[test]
fn test_bounds_are_consistent() {
    let list = list_of(&[(0, 1), (1, 1), (2, 1)]);
    let len = list.len();

    assert!(list.node_at(len).unwrap().is_none());
    assert!(list.node_at(len + 1).is_err());
    assert!(list.block_at(len - 1).is_ok());
    assert_eq!(
        list.block_at(len),
        Err(MemoryError::IndexOutOfRange { index: 3, len: 3 })
    );

    let mut list = list;
    assert_eq!(
        list.remove_at(len),
        Err(MemoryError::IndexOutOfRange { index: 3, len: 3 })
    );
}

#[test]
fn test_removal_policy_is_strict_at_list_level() {
    let mut list = list_of(&[(0, 5)]);
    let missing = Block::new(5, 5);
    assert_eq!(
        list.remove_block(&missing),
        Err(MemoryError::NotFound(missing.clone()))
    );
    assert_eq!(list.len(), 1);
}

#[test]
fn test_remove_block_takes_first_equal() {
    let mut list = list_of(&[(1, 1), (2, 2), (1, 1)]);
    assert_eq!(list.remove_block(&Block::new(1, 1)), Ok(Block::new(1, 1)));
    assert_eq!(list.to_string(), "(2,2), (1,1)");
}

#[test]
fn test_removing_every_cell_resets_head_and_tail() {
    let mut list = list_of(&[(0, 1), (1, 1), (2, 1)]);
    while !list.is_empty() {
        let tail = list.last().unwrap();
        list.remove_cell(tail).unwrap();
    }
    assert!(list.first().is_none());
    assert!(list.last().is_none());

    // List is reusable after draining
    list.insert_first(Block::new(9, 1));
    assert_eq!(list.to_string(), "(9,1)");
}

#[test]
fn test_cursor_and_cells() {
    let list = list_of(&[(0, 3), (3, 3)]);

    let bases: Vec<usize> = (&list).into_iter().map(|b| b.base_address).collect();
    assert_eq!(bases, vec![0, 3]);

    let ids: Vec<_> = list.cells().map(|(id, _)| id).collect();
    assert_eq!(ids.first().copied(), list.first());
    assert_eq!(ids.last().copied(), list.last());
    assert_eq!(list.next_of(ids[0]), Some(ids[1]));

    let mut cursor = list.cursor();
    assert!(cursor.has_next());
    assert_eq!(cursor.cell(), Some(ids[0]));
    cursor.next();
    assert_eq!(cursor.cell(), Some(ids[1]));
    cursor.next();
    assert!(!cursor.has_next());
    assert_eq!(cursor.next(), None);
}

#[test]
fn test_mutation_through_cell_handle() {
    let mut list = list_of(&[(0, 3), (3, 3)]);
    let id = list.last().unwrap();
    if let Some(block) = list.get_mut(id) {
        block.base_address = 10;
    }
    assert_eq!(list.block_at(1), Ok(&Block::new(10, 3)));
    assert_eq!(list.index_of(&Block::new(10, 3)), Some(1));
}
