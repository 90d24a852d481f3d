//! A binary search tree over unique keys.

use compare::{self, Compare};
use log::{debug, trace};
use std::fmt::{self, Debug};
use super::balance;
use super::node::{self, iter, Link, Node};
use super::pretty::Pretty;

/// A binary search tree over unique keys.
///
/// The tree is balanced right after it is built or rebalanced. Insertions and removals do not
/// restore balance; call [`rebalance`](#method.rebalance) for that.
///
/// The behavior of this tree is undefined if a key's ordering relative to any other key changes
/// while the key is in the tree. This is normally only possible through `Cell`, `RefCell`, or
/// unsafe code.
#[derive(Clone, PartialEq, Eq)]
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Tree<T> where T: Ord {
    /// Creates an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// let tree = bst::Tree::<i32>::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.height(), -1);
    /// ```
    pub fn new() -> Self { Tree { root: None, len: 0 } }

    /// Builds a balanced tree holding each distinct key of `keys` exactly once.
    ///
    /// The keys are sorted and the middle key of every sorted range becomes the root of that
    /// range's subtree, so the shape depends only on the set of distinct keys.
    ///
    /// # Examples
    ///
    /// ```
    /// let tree = bst::Tree::build(vec![5, 3, 8, 3, 1]);
    ///
    /// assert_eq!(tree.len(), 4);
    /// assert_eq!(tree.root().map(|root| *root.key()), Some(5));
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&1, &3, &5, &8]);
    /// assert!(tree.is_balanced());
    /// ```
    pub fn build<I>(keys: I) -> Self where I: IntoIterator<Item = T> {
        let cmp = compare::natural::<T>();
        let mut keys: Vec<T> = keys.into_iter().collect();
        keys.sort_by(|l, r| cmp.compare(l, r));
        keys.dedup_by(|r, l| cmp.compares_eq(r, l));

        let len = keys.len();
        let root = balance::build(&mut keys.into_iter(), len);
        debug!("built tree of {} keys with height {}", len, balance::height(root.as_deref()));
        Tree { root, len }
    }

    /// Inserts a key into the tree, returning `true` if the tree did not already contain it.
    ///
    /// An existing equal key is left in place. The tree is not rebalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = bst::Tree::new();
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        let inserted = node::insert(&mut self.root, &compare::natural(), key);
        if inserted { self.len += 1; }
        trace!("insert: added = {}, len = {}", inserted, self.len);
        inserted
    }

    /// Removes a key from the tree, returning `true` if the tree contained it.
    ///
    /// A node with two children is replaced by its in-order successor. The tree is not
    /// rebalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = bst::Tree::build(vec![5, 3, 8, 3, 1]);
    ///
    /// assert!(tree.remove(&5));
    /// assert_eq!(tree.root().map(|root| *root.key()), Some(8));
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&1, &3, &8]);
    ///
    /// assert!(!tree.remove(&5));
    /// ```
    pub fn remove(&mut self, key: &T) -> bool {
        let removed = node::remove(&mut self.root, &compare::natural(), key).is_some();
        if removed { self.len -= 1; }
        trace!("remove: removed = {}, len = {}", removed, self.len);
        removed
    }

    /// Returns the node holding the given key, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// let tree = bst::Tree::build(vec![1, 2, 3]);
    ///
    /// let node = tree.find(&2).unwrap();
    /// assert_eq!(node.key(), &2);
    /// assert_eq!(node.left().map(|node| *node.key()), Some(1));
    ///
    /// assert!(tree.find(&4).is_none());
    /// ```
    pub fn find(&self, key: &T) -> Option<&Node<T>> {
        node::get(&self.root, &compare::natural(), key)
    }

    /// Checks if the tree contains the given key.
    pub fn contains(&self, key: &T) -> bool { self.find(key).is_some() }

    /// Returns the number of edges between the root and the node holding the given key, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// let tree = bst::Tree::build(vec![5, 3, 8, 1]);
    ///
    /// assert_eq!(tree.depth(&5), Some(0));
    /// assert_eq!(tree.depth(&3), Some(1));
    /// assert_eq!(tree.depth(&1), Some(2));
    /// assert_eq!(tree.depth(&4), None);
    /// ```
    pub fn depth(&self, key: &T) -> Option<usize> {
        node::depth(&self.root, &compare::natural(), key)
    }

    /// Rebuilds the tree from its keys in ascending order, which leaves it balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = bst::Tree::build(vec![1, 2, 3]);
    /// for key in [101, 150, 120, 170, 200] { tree.insert(key); }
    /// assert!(!tree.is_balanced());
    ///
    /// tree.rebalance();
    /// assert!(tree.is_balanced());
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 101, 120, 150, 170, 200]);
    /// ```
    pub fn rebalance(&mut self) {
        let before = balance::height(self.root.as_deref());
        let mut keys = iter::InOrder::new(self.root.take(), self.len);
        self.root = balance::build(&mut keys, self.len);
        debug!("rebalanced {} keys, height {} -> {}", self.len, before, self.height());
    }
}

impl<T> Tree<T> {
    /// Checks if the tree is empty.
    pub fn is_empty(&self) -> bool { self.root.is_none() }

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize { self.len }

    /// Removes all keys from the tree.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Returns the root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node<T>> { self.root.as_deref() }

    /// Returns the height of the tree: `-1` if it is empty, `0` if it holds a single key.
    pub fn height(&self) -> isize { balance::height(self.root()) }

    /// Checks that the subtree heights differ by at most one at every node of the tree.
    pub fn is_balanced(&self) -> bool { balance::is_balanced(self.root()) }

    /// Returns an iterator over the tree's keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = bst::Tree::new();
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// let mut it = tree.iter();
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<T> { Iter(iter::InOrder::new(self.root(), self.len)) }

    /// Returns an iterator over the tree's nodes, level by level from the root and left to right
    /// within each level.
    ///
    /// # Examples
    ///
    /// ```
    /// let tree = bst::Tree::build(1..8);
    /// let keys: Vec<_> = tree.level_order_nodes().map(|node| *node.key()).collect();
    /// assert_eq!(keys, [4, 2, 6, 1, 3, 5, 7]);
    /// ```
    pub fn level_order_nodes(&self) -> LevelOrder<T> {
        LevelOrder(iter::LevelOrder::new(self.root(), self.len))
    }

    /// Returns an iterator over the tree's nodes in ascending key order.
    pub fn in_order_nodes(&self) -> InOrder<T> {
        InOrder(iter::InOrder::new(self.root(), self.len))
    }

    /// Returns an iterator over the tree's nodes, visiting each node before its left subtree and
    /// its left subtree before its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// let tree = bst::Tree::build(1..8);
    /// let keys: Vec<_> = tree.pre_order_nodes().map(|node| *node.key()).collect();
    /// assert_eq!(keys, [4, 2, 1, 3, 6, 5, 7]);
    /// ```
    pub fn pre_order_nodes(&self) -> PreOrder<T> {
        PreOrder(iter::PreOrder::new(self.root(), self.len))
    }

    /// Returns an iterator over the tree's nodes, visiting each node after its left and then its
    /// right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// let tree = bst::Tree::build(1..8);
    /// let keys: Vec<_> = tree.post_order_nodes().map(|node| *node.key()).collect();
    /// assert_eq!(keys, [1, 3, 2, 5, 7, 6, 4]);
    /// ```
    pub fn post_order_nodes(&self) -> PostOrder<T> {
        PostOrder(iter::PostOrder::new(self.root(), self.len))
    }

    /// Calls `f` on every node, level by level.
    ///
    /// # Examples
    ///
    /// ```
    /// let tree = bst::Tree::build(vec![5, 3, 8, 1]);
    ///
    /// let mut keys = vec![];
    /// tree.level_order(|node| keys.push(*node.key()));
    /// assert_eq!(keys, [5, 3, 8, 1]);
    /// ```
    pub fn level_order<F>(&self, f: F) where F: FnMut(&Node<T>) { self.level_order_nodes().for_each(f) }

    /// Calls `f` on every node in ascending key order.
    pub fn in_order<F>(&self, f: F) where F: FnMut(&Node<T>) { self.in_order_nodes().for_each(f) }

    /// Calls `f` on every node before its subtrees.
    pub fn pre_order<F>(&self, f: F) where F: FnMut(&Node<T>) { self.pre_order_nodes().for_each(f) }

    /// Calls `f` on every node after its subtrees.
    pub fn post_order<F>(&self, f: F) where F: FnMut(&Node<T>) { self.post_order_nodes().for_each(f) }

    /// Returns a value that renders the tree sideways, with the root at the left margin and
    /// the right subtree above the left one.
    ///
    /// # Examples
    ///
    /// ```
    /// let tree = bst::Tree::build(vec![1, 2, 3]);
    ///
    /// let lines = ["│   ┌── 3", "└── 2", "    └── 1"];
    /// assert_eq!(tree.pretty().to_string().lines().collect::<Vec<_>>(), lines);
    /// ```
    pub fn pretty(&self) -> Pretty<T> { Pretty::new(self.root()) }
}

impl<T> Debug for Tree<T> where T: Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.debug_set().entries(self.iter()).finish() }
}

impl<T> Default for Tree<T> where T: Ord {
    fn default() -> Self { Tree::new() }
}

impl<T> Extend<T> for Tree<T> where T: Ord {
    fn extend<I: IntoIterator<Item = T>>(&mut self, it: I) {
        for key in it { self.insert(key); }
    }
}

impl<T> FromIterator<T> for Tree<T> where T: Ord {
    fn from_iter<I: IntoIterator<Item = T>>(it: I) -> Self { Tree::build(it) }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(mut self) -> IntoIter<T> { IntoIter(iter::InOrder::new(self.root.take(), self.len)) }
}

/// An iterator that consumes the tree, yielding its keys in ascending order.
///
/// # Examples
///
/// ```
/// let tree: bst::Tree<_> = vec![2, 1, 3].into_iter().collect();
/// assert_eq!(tree.into_iter().collect::<Vec<_>>(), [1, 2, 3]);
/// ```
#[derive(Clone)]
pub struct IntoIter<T>(iter::InOrder<Box<Node<T>>>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

/// An iterator over the tree's keys in ascending order.
///
/// Acquire through [`Tree::iter`](struct.Tree.html#method.iter) or the `IntoIterator` trait.
pub struct Iter<'a, T: 'a>(iter::InOrder<&'a Node<T>>);

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Iter<'a, T> { Iter(self.0.clone()) }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> { self.0.next().map(Node::key) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

macro_rules! node_iter {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        pub struct $name<'a, T: 'a>(iter::$name<&'a Node<T>>);

        impl<'a, T> Clone for $name<'a, T> {
            fn clone(&self) -> $name<'a, T> { $name(self.0.clone()) }
        }

        impl<'a, T> Iterator for $name<'a, T> {
            type Item = &'a Node<T>;
            fn next(&mut self) -> Option<&'a Node<T>> { self.0.next() }
            fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
        }

        impl<'a, T> ExactSizeIterator for $name<'a, T> {}
    }
}

node_iter! {
    /// An iterator over the tree's nodes in level order.
    ///
    /// Acquire through [`Tree::level_order_nodes`](struct.Tree.html#method.level_order_nodes).
    LevelOrder
}

node_iter! {
    /// An iterator over the tree's nodes in ascending key order.
    ///
    /// Acquire through [`Tree::in_order_nodes`](struct.Tree.html#method.in_order_nodes).
    InOrder
}

node_iter! {
    /// An iterator over the tree's nodes in pre-order.
    ///
    /// Acquire through [`Tree::pre_order_nodes`](struct.Tree.html#method.pre_order_nodes).
    PreOrder
}

node_iter! {
    /// An iterator over the tree's nodes in post-order.
    ///
    /// Acquire through [`Tree::post_order_nodes`](struct.Tree.html#method.post_order_nodes).
    PostOrder
}
