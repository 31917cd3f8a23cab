//! Operation-sequence model for property and fuzz testing.
//!
//! Runs a sequence of tree operations against a sorted `Vec` reference. The
//! reference is a multiset rather than a set because the tree keeps duplicate
//! insertions. Every step re-checks the red-black invariants.

use arbitrary::Arbitrary;
use proptest::strategy::{Just, Strategy};

use crate::RbTree;

#[derive(Copy, Clone, Debug, Arbitrary)]
pub enum ItemValue {
    /// Picks a value already in the tree (by index into the sorted contents),
    /// so lookups hit occupied values often enough to be interesting.
    Index(usize),
    Random(u32),
}

proptest::prop_compose! {
    fn index_strategy()(
        index in 0usize..1000,
    ) -> ItemValue {
        ItemValue::Index(index)
    }
}

proptest::prop_compose! {
    fn random_strategy()(
        random in 0u32..1000,
    ) -> ItemValue {
        ItemValue::Random(random)
    }
}

fn value_strategy() -> impl Strategy<Value = ItemValue> {
    proptest::prop_oneof![index_strategy(), random_strategy()]
}

#[derive(Copy, Clone, Debug, Arbitrary)]
pub enum Op {
    Insert(ItemValue),
    Get(ItemValue),
    First,
    Last,
    Count,
}

impl Op {
    fn finalize(self, sorted: &[u32]) -> FinalOp {
        fn get_value(v: &[u32], i: ItemValue) -> u32 {
            match i {
                ItemValue::Index(idx) => {
                    if v.is_empty() {
                        idx as u32
                    } else {
                        v[idx % v.len()]
                    }
                }
                ItemValue::Random(v) => v,
            }
        }

        match self {
            Op::Insert(item) => FinalOp::Insert(get_value(sorted, item)),
            Op::Get(item) => FinalOp::Get(get_value(sorted, item)),
            Op::First => FinalOp::First,
            Op::Last => FinalOp::Last,
            Op::Count => FinalOp::Count,
        }
    }
}

#[derive(Copy, Clone, Debug)]
enum FinalOp {
    Insert(u32),
    Get(u32),
    First,
    Last,
    Count,
}

pub fn op_strategy() -> impl Strategy<Value = Op> {
    proptest::prop_oneof![
        value_strategy().prop_map(Op::Insert),
        value_strategy().prop_map(Op::Get),
        Just(Op::First),
        Just(Op::Last),
        Just(Op::Count),
    ]
}

pub fn run_reference_equivalence(ops: Vec<Op>) {
    let mut reference: Vec<u32> = Vec::with_capacity(ops.len());
    let mut tree: RbTree<u32> = RbTree::new();

    // Keeps duplicates, matching the tree's behavior.
    fn insert_sorted(v: &mut Vec<u32>, value: u32) {
        let idx = v.partition_point(|&x| x <= value);
        v.insert(idx, value);
    }

    for (op_id, op) in ops.into_iter().enumerate() {
        let final_op = op.finalize(&reference);

        match final_op {
            FinalOp::Insert(value) => {
                insert_sorted(&mut reference, value);
                tree.insert(value);
            }

            FinalOp::Get(value) => {
                let from_reference = reference.binary_search(&value).ok().map(|_| &value);
                let from_tree = tree.get(&value);

                assert_eq!(from_reference, from_tree, "FinalOp #{op_id}: {op:?}");
            }

            FinalOp::First => {
                assert_eq!(reference.first(), tree.first(), "FinalOp #{op_id}: {op:?}");
            }

            FinalOp::Last => {
                assert_eq!(reference.last(), tree.last(), "FinalOp #{op_id}: {op:?}");
            }

            FinalOp::Count => {
                assert_eq!(reference.len(), tree.len(), "FinalOp #{op_id}: {op:?}");
            }
        }

        tree.assert_invariants();
        assert_eq!(reference.len(), tree.len());
        assert!(reference.iter().zip(tree.iter()).all(|(&a, &b)| a == b));
    }
}
