pub mod iter;

#[cfg(test)]
mod test;

use compare::Compare;
use std::cmp::Ordering::*;
use std::mem;
use super::balance;

pub type Link<T> = Option<Box<Node<T>>>;

/// A single key stored in a [`Tree`](struct.Tree.html), together with the subtrees it owns.
///
/// Every key in the left subtree is less than the node's key and every key in the right subtree
/// is greater.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node<T> {
    left: Link<T>,
    right: Link<T>,
    key: T,
}

impl<T> Node<T> {
    pub(crate) fn new(key: T) -> Self { Node { left: None, right: None, key } }

    pub(crate) fn with_children(left: Link<T>, key: T, right: Link<T>) -> Self {
        Node { left, right, key }
    }

    /// Returns a reference to the node's key.
    pub fn key(&self) -> &T { &self.key }

    /// Returns a reference to the node's left child, if any.
    pub fn left(&self) -> Option<&Node<T>> { self.left.as_deref() }

    /// Returns a reference to the node's right child, if any.
    pub fn right(&self) -> Option<&Node<T>> { self.right.as_deref() }

    /// Returns the number of edges on the longest path from this node down to a leaf.
    ///
    /// # Examples
    ///
    /// ```
    /// let tree = bst::Tree::build(vec![1, 2, 3, 4]);
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.height(), 2);
    /// assert_eq!(root.right().unwrap().height(), 0);
    /// ```
    pub fn height(&self) -> isize { balance::height(Some(self)) }

    /// Checks that the left and right subtree heights differ by at most one at this node and at
    /// every node below it.
    pub fn is_balanced(&self) -> bool { balance::is_balanced(Some(self)) }
}

/// Inserts `key` below `link`, returning `false` if an equal key is already present.
pub fn insert<T, C>(link: &mut Link<T>, cmp: &C, key: T) -> bool where C: Compare<T> {
    match *link {
        None => {
            *link = Some(Box::new(Node::new(key)));
            true
        }
        Some(ref mut node) => match cmp.compare(&key, &node.key) {
            Equal => false,
            Less => insert(&mut node.left, cmp, key),
            Greater => insert(&mut node.right, cmp, key),
        },
    }
}

/// Removes the node holding `key` from below `link` and returns its key.
pub fn remove<T, C>(link: &mut Link<T>, cmp: &C, key: &T) -> Option<T> where C: Compare<T> {
    let node = match *link {
        None => return None,
        Some(ref mut node) => node,
    };

    match cmp.compare(key, &node.key) {
        Less => remove(&mut node.left, cmp, key),
        Greater => remove(&mut node.right, cmp, key),
        Equal => unlink(link),
    }
}

// Splice the node at `link` out of the tree. A node with two children takes over the key of its
// in-order successor, which is unlinked from the right subtree instead.
fn unlink<T>(link: &mut Link<T>) -> Option<T> {
    let mut node = link.take()?;

    match (node.left.take(), node.right.take()) {
        (None, right) => *link = right,
        (left, None) => *link = left,
        (left, Some(right)) => {
            let (successor, right) = take_min(right);
            let key = mem::replace(&mut node.key, successor);
            node.left = left;
            node.right = right;
            *link = Some(node);
            return Some(key);
        }
    }

    let Node { key, .. } = *node;
    Some(key)
}

// Detach the leftmost node of the subtree, returning its key and what remains of the subtree.
fn take_min<T>(mut node: Box<Node<T>>) -> (T, Link<T>) {
    match node.left.take() {
        None => {
            let Node { key, right, .. } = *node;
            (key, right)
        }
        Some(left) => {
            let (min, rest) = take_min(left);
            node.left = rest;
            (min, Some(node))
        }
    }
}

pub fn get<'a, T, C>(mut link: &'a Link<T>, cmp: &C, key: &T) -> Option<&'a Node<T>>
    where C: Compare<T> {

    while let Some(ref node) = *link {
        match cmp.compare(key, &node.key) {
            Equal => return Some(&**node),
            Less => link = &node.left,
            Greater => link = &node.right,
        }
    }

    None
}

/// Returns the number of edges between `link` and the node holding `key`.
pub fn depth<T, C>(mut link: &Link<T>, cmp: &C, key: &T) -> Option<usize> where C: Compare<T> {
    let mut depth = 0;

    while let Some(ref node) = *link {
        match cmp.compare(key, &node.key) {
            Equal => return Some(depth),
            Less => link = &node.left,
            Greater => link = &node.right,
        }

        depth += 1;
    }

    None
}
