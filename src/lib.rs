//! A binary search tree over unique keys.
//!
//! A [`Tree`](struct.Tree.html) is built balanced from any collection of keys, dropping
//! duplicates. Keys can then be inserted and removed one at a time; neither operation restores
//! balance, which only an explicit [`rebalance`](struct.Tree.html#method.rebalance) does.
//!
//! # Examples
//!
//! ```
//! let mut tree = bst::Tree::build(vec![5, 3, 8, 3, 1]);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 5, 8]);
//!
//! for key in [9, 10, 11] { tree.insert(key); }
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//!
//! let mut keys = vec![];
//! tree.pre_order(|node| keys.push(*node.key()));
//! assert_eq!(keys, [8, 3, 1, 5, 10, 9, 11]);
//! ```

#![deny(missing_docs)]

mod balance;
mod node;
mod pretty;
mod tree;

#[cfg(feature = "ordered_iter")]
mod ordered_iter;

#[cfg(feature = "quickcheck")]
mod quickcheck;

pub use balance::{height, is_balanced};
pub use node::Node;
pub use pretty::Pretty;
pub use tree::{InOrder, IntoIter, Iter, LevelOrder, PostOrder, PreOrder, Tree};
