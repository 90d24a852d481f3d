use quickcheck::{quickcheck, Arbitrary, Gen, TestResult};
use super::Node;
use crate::Tree;

/// An operation on a `Tree`.
#[derive(Clone, Debug)]
enum Op<T> where T: Clone + Ord {
    /// Insert a key into the tree.
    Insert(T),
    /// Remove the key at index `n % tree.len()` from the tree.
    Remove(usize),
    /// Remove a key that may or may not be in the tree.
    RemoveAny(T),
    /// Rebuild the tree.
    Rebalance,
}

impl<T> Arbitrary for Op<T> where T: Arbitrary + Ord {
    fn arbitrary(gen: &mut Gen) -> Op<T> {
        match u8::arbitrary(gen) % 8 {
            0..=3 => Op::Insert(T::arbitrary(gen)),
            4..=5 => Op::Remove(usize::arbitrary(gen)),
            6 => Op::RemoveAny(T::arbitrary(gen)),
            _ => Op::Rebalance,
        }
    }
}

impl<T> Op<T> where T: Clone + Ord {
    /// Perform the operation on the given tree.
    fn exec(self, tree: &mut Tree<T>) {
        match self {
            Op::Insert(key) => { tree.insert(key); }
            Op::Remove(index) => if !tree.is_empty() {
                let key = tree.iter().nth(index % tree.len()).cloned();
                if let Some(key) = key { assert!(tree.remove(&key)); }
            },
            Op::RemoveAny(key) => { tree.remove(&key); }
            Op::Rebalance => tree.rebalance(),
        }
    }
}

// Checks ordering at every node and returns the number of nodes.
fn assert_search_tree<T>(tree: &Tree<T>) -> usize where T: Ord {
    fn check<T>(node: Option<&Node<T>>, lower: Option<&T>, upper: Option<&T>) -> usize
        where T: Ord {

        match node {
            None => 0,
            Some(node) => {
                if let Some(lower) = lower { assert!(node.key > *lower); }
                if let Some(upper) = upper { assert!(node.key < *upper); }
                1 + check(node.left.as_deref(), lower, Some(&node.key)) +
                    check(node.right.as_deref(), Some(&node.key), upper)
            }
        }
    }

    check(tree.root(), None, None)
}

fn keys<T>(tree: &Tree<T>) -> Vec<T> where T: Clone + Ord { tree.iter().cloned().collect() }

#[test]
fn test_search_tree() {
    fn check(ops: Vec<Op<u8>>) -> TestResult {
        let mut tree = Tree::new();
        for op in ops {
            op.exec(&mut tree);
            assert_eq!(assert_search_tree(&tree), tree.len());
        }
        TestResult::passed()
    }

    quickcheck(check as fn(_) -> _);
}

#[test]
fn test_in_order_ascending() {
    fn check(init: Vec<i32>, ops: Vec<Op<i32>>) -> bool {
        let mut tree = Tree::build(init);
        for op in ops { op.exec(&mut tree); }
        let keys = keys(&tree);
        keys.windows(2).all(|w| w[0] < w[1]) && keys.len() == tree.len()
    }

    quickcheck(check as fn(_, _) -> _);
}

#[test]
fn test_rebalance_after_ops() {
    fn check(ops: Vec<Op<i16>>) -> bool {
        let mut tree = Tree::new();
        for op in ops { op.exec(&mut tree); }
        let before = keys(&tree);
        tree.rebalance();
        tree.is_balanced() && keys(&tree) == before && assert_search_tree(&tree) == before.len()
    }

    quickcheck(check as fn(_) -> _);
}

#[test]
fn test_build_shape() {
    let tree = Tree::build(vec![5, 3, 8, 3, 1]);
    let root = tree.root().unwrap();
    assert_eq!(root.key, 5);
    assert_eq!(root.left.as_ref().unwrap().key, 3);
    assert_eq!(root.left.as_ref().unwrap().left.as_ref().unwrap().key, 1);
    assert!(root.left.as_ref().unwrap().right.is_none());
    assert_eq!(root.right.as_ref().unwrap().key, 8);
    assert_eq!(tree.len(), 4);
}

#[test]
fn test_build_empty() {
    let tree = Tree::<i32>::build(vec![]);
    assert!(tree.root().is_none());
    assert!(tree.is_empty());
    assert!(tree.is_balanced());
    assert_eq!(tree.height(), -1);
}

#[test]
fn test_remove_leaf_and_single_child() {
    //     4
    //    / \
    //   2   6
    //  /     \
    // 1       7
    let mut tree = Tree::new();
    for key in [4, 2, 6, 1, 7] { tree.insert(key); }

    assert!(tree.remove(&1));
    assert!(tree.root().unwrap().left.as_ref().unwrap().left.is_none());

    assert!(tree.remove(&6));
    assert_eq!(tree.root().unwrap().right.as_ref().unwrap().key, 7);

    assert!(tree.remove(&4));
    assert_eq!(tree.root().unwrap().key, 7);
    assert_eq!(keys(&tree), [2, 7]);
}

#[test]
fn test_remove_two_children_deep_successor() {
    //   2
    //  / \
    // 1   6
    //    / \
    //   4   7
    //    \
    //     5
    let mut tree = Tree::new();
    for key in [2, 1, 6, 4, 7, 5] { tree.insert(key); }

    assert!(tree.remove(&2));
    let root = tree.root().unwrap();
    assert_eq!(root.key, 4);
    assert_eq!(root.right.as_ref().unwrap().left.as_ref().unwrap().key, 5);
    assert_eq!(keys(&tree), [1, 4, 5, 6, 7]);
    assert_eq!(tree.len(), 5);
}

#[test]
fn test_remove_absent_is_noop() {
    let mut tree = Tree::build(1..10);
    let old = tree.clone();
    assert!(!tree.remove(&42));
    assert!(tree == old);

    let mut empty = Tree::<i32>::new();
    assert!(!empty.remove(&1));
    assert!(empty.is_empty());
}

#[test]
fn test_insert_duplicate_is_noop() {
    let mut tree = Tree::build(vec![1, 2, 3]);
    let old = tree.clone();
    assert!(!tree.insert(2));
    assert!(tree == old);
    assert_eq!(tree.len(), 3);
}

#[test]
fn test_height_and_balance() {
    let mut tree = Tree::new();
    assert_eq!(tree.height(), -1);

    tree.insert(1);
    assert_eq!(tree.height(), 0);
    assert!(tree.is_balanced());

    tree.insert(2);
    assert_eq!(tree.height(), 1);
    assert!(tree.is_balanced());

    tree.insert(3);
    assert_eq!(tree.height(), 2);
    assert!(!tree.is_balanced());
}

#[test]
fn test_unbalanced_below_root() {
    // Equal subtree heights at the root, but both children lean two deep.
    //        8
    //      /   \
    //     4     12
    //    /        \
    //   2          14
    //  /             \
    // 1               15
    let mut tree = Tree::new();
    for key in [8, 4, 12, 2, 14, 1, 15] { tree.insert(key); }

    let root: &Node<i32> = tree.root().unwrap();
    assert_eq!(root.left().unwrap().height(), root.right().unwrap().height());
    assert!(!tree.is_balanced());
}

#[test]
fn test_depth() {
    let mut tree = Tree::build(1..8);
    assert_eq!(tree.depth(&4), Some(0));
    assert_eq!(tree.depth(&6), Some(1));
    assert_eq!(tree.depth(&7), Some(2));
    assert_eq!(tree.depth(&0), None);

    tree.insert(8);
    assert_eq!(tree.depth(&8), Some(3));
}
