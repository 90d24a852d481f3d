use std::fmt::{self, Display};
use super::node::Node;

/// Renders a tree sideways, one key per line.
///
/// The right subtree is drawn above its parent and the left subtree below it, so reading the
/// output top to bottom gives the keys in descending order. Acquire through
/// [`Tree::pretty`](struct.Tree.html#method.pretty).
pub struct Pretty<'a, T: 'a> {
    root: Option<&'a Node<T>>,
}

impl<'a, T> Pretty<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self { Pretty { root } }
}

impl<'a, T> Display for Pretty<'a, T> where T: Display {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.root {
            None => Ok(()),
            Some(root) => write_node(f, root, "", true),
        }
    }
}

fn write_node<T>(f: &mut fmt::Formatter, node: &Node<T>, prefix: &str, is_left: bool)
    -> fmt::Result where T: Display {

    if let Some(right) = node.right() {
        let prefix = format!("{}{}", prefix, if is_left { "│   " } else { "    " });
        write_node(f, right, &prefix, false)?;
    }

    writeln!(f, "{}{}{}", prefix, if is_left { "└── " } else { "┌── " }, node.key())?;

    if let Some(left) = node.left() {
        let prefix = format!("{}{}", prefix, if is_left { "    " } else { "│   " });
        write_node(f, left, &prefix, true)?;
    }

    Ok(())
}
