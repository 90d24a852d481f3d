//! Median-split construction and the height-based balance check.

use std::cmp;
use super::node::{Link, Node};

/// Returns the height of a subtree: `-1` for an empty subtree, `0` for a single leaf, and
/// otherwise one more than the height of its taller child.
///
/// # Examples
///
/// ```
/// let tree = bst::Tree::build(vec![5, 3, 8, 1]);
///
/// assert_eq!(bst::height::<i32>(None), -1);
/// assert_eq!(bst::height(tree.root()), 2);
/// assert_eq!(bst::height(tree.find(&8)), 0);
/// ```
pub fn height<T>(node: Option<&Node<T>>) -> isize {
    match node {
        None => -1,
        Some(node) => 1 + cmp::max(height(node.left()), height(node.right())),
    }
}

/// Checks that, at every node of the subtree, the heights of the left and right subtrees differ
/// by at most one. An empty subtree is balanced.
///
/// # Examples
///
/// ```
/// let mut tree = bst::Tree::build(vec![1, 2, 3]);
/// assert!(bst::is_balanced(tree.root()));
///
/// tree.insert(4);
/// tree.insert(5);
/// assert!(!bst::is_balanced(tree.root()));
/// ```
pub fn is_balanced<T>(node: Option<&Node<T>>) -> bool { balanced_height(node).is_some() }

// Height of the subtree, or `None` as soon as some node in it is out of balance.
fn balanced_height<T>(node: Option<&Node<T>>) -> Option<isize> {
    match node {
        None => Some(-1),
        Some(node) => {
            let left = balanced_height(node.left())?;
            let right = balanced_height(node.right())?;
            if (left - right).abs() > 1 { return None; }
            Some(1 + cmp::max(left, right))
        }
    }
}

/// Builds a subtree out of the next `len` keys, which must be unique and ascending.
///
/// The middle key (the upper one for an even count) becomes the root, the keys before it form
/// the left subtree and the keys after it the right subtree, so the result is balanced.
pub fn build<T, I>(keys: &mut I, len: usize) -> Link<T> where I: Iterator<Item = T> {
    if len == 0 { return None; }

    let mid = len / 2;
    let left = build(keys, mid);
    let key = keys.next()?;
    let right = build(keys, len - mid - 1);
    Some(Box::new(Node::with_children(left, key, right)))
}
