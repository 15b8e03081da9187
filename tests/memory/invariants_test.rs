/*!
 * Memory Space Property Tests
 * Capacity conservation, disjointness and first-fit checks over random op sequences
 */

use memspace_sim::{Block, MemorySpace};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Malloc(usize),
    Free(usize),
    Defrag,
}

fn ops() -> impl Strategy<Value = (usize, Vec<Op>)> {
    (1usize..256).prop_flat_map(|capacity| {
        let op = prop_oneof![
            4 => (0..=capacity / 2).prop_map(Op::Malloc),
            3 => any::<usize>().prop_map(Op::Free),
            1 => Just(Op::Defrag),
        ];
        (Just(capacity), prop::collection::vec(op, 0..64))
    })
}

fn assert_disjoint(blocks: &[&Block]) {
    for (i, a) in blocks.iter().enumerate() {
        for b in &blocks[i + 1..] {
            assert!(!a.overlaps(b), "{} overlaps {}", a, b);
        }
    }
}

fn assert_invariants(space: &MemorySpace) {
    let free = space.free_list().total_length();
    let allocated = space.allocated_list().total_length();
    assert_eq!(free + allocated, space.capacity());
    assert_eq!(space.info(), (space.capacity(), allocated, free));

    let all: Vec<&Block> = space
        .free_list()
        .iter()
        .chain(space.allocated_list().iter())
        .collect();
    assert_disjoint(&all);

    for block in &all {
        assert!(block.end().is_some_and(|end| end <= space.capacity()));
    }
}

proptest! {
    #[test]
    fn check_invariants_hold((capacity, ops) in ops()) {
        let mut space = MemorySpace::with_capacity(capacity);
        // Addresses handed out and not yet freed
        let mut live: Vec<usize> = Vec::new();

        for op in ops {
            match op {
                Op::Malloc(length) => {
                    let expected = space
                        .free_list()
                        .iter()
                        .find(|block| block.length >= length)
                        .map(|block| block.base_address);
                    let free_before = space.free_list().len();

                    let result = space.malloc(length);
                    prop_assert_eq!(result, expected);

                    if let Some(addr) = result {
                        live.push(addr);
                        prop_assert!(space.free_list().len() <= free_before);
                        prop_assert!(free_before - space.free_list().len() <= 1);
                    }
                }
                Op::Free(pick) => {
                    if !live.is_empty() {
                        let addr = live.swap_remove(pick % live.len());
                        prop_assert!(space.free(addr));
                    }
                }
                Op::Defrag => {
                    let allocated_before = space.allocated_list().blocks();
                    let free_total = space.free_list().total_length();

                    space.defrag();
                    let once = space.snapshot();
                    prop_assert_eq!(space.defrag(), 0);

                    prop_assert_eq!(space.snapshot(), once);
                    prop_assert_eq!(space.allocated_list().blocks(), allocated_before);
                    prop_assert_eq!(space.free_list().total_length(), free_total);
                }
            }
            assert_invariants(&space);
        }

        for addr in live {
            prop_assert!(space.free(addr));
        }
        prop_assert!(space.allocated_list().is_empty());
        prop_assert_eq!(space.free_list().total_length(), capacity);
    }
}
