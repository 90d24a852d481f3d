use std::collections::VecDeque;
use super::{Link, Node};

/// A handle on a node that can hand out handles on its children.
///
/// Implemented by shared references, which leave the tree intact, and by boxes, which take the
/// children out of the node so the tree is consumed as it is walked.
pub trait NodeRef: Sized {
    type Item;
    fn left(&mut self) -> Option<Self>;
    fn right(&mut self) -> Option<Self>;
    fn item(self) -> Self::Item;
}

impl<'a, T> NodeRef for &'a Node<T> {
    type Item = &'a Node<T>;

    fn left(&mut self) -> Option<&'a Node<T>> { let node: &'a Node<T> = *self; node.left.as_deref() }
    fn right(&mut self) -> Option<&'a Node<T>> { let node: &'a Node<T> = *self; node.right.as_deref() }
    fn item(self) -> &'a Node<T> { self }
}

impl<T> NodeRef for Box<Node<T>> {
    type Item = T;

    fn left(&mut self) -> Link<T> { self.left.take() }
    fn right(&mut self) -> Link<T> { self.right.take() }
    fn item(self) -> T { let Node { key, .. } = *self; key }
}

/// Left subtree, node, right subtree.
#[derive(Clone)]
pub struct InOrder<N> where N: NodeRef {
    stack: Vec<N>,
    size: usize,
}

impl<N> InOrder<N> where N: NodeRef {
    pub fn new(root: Option<N>, size: usize) -> Self {
        let mut it = InOrder { stack: vec![], size };
        it.descend(root);
        it
    }

    // Push the left spine of the subtree.
    fn descend(&mut self, mut link: Option<N>) {
        while let Some(mut node) = link {
            link = node.left();
            self.stack.push(node);
        }
    }
}

impl<N> Iterator for InOrder<N> where N: NodeRef {
    type Item = N::Item;

    fn next(&mut self) -> Option<N::Item> {
        let mut node = self.stack.pop()?;
        let right = node.right();
        self.descend(right);
        self.size -= 1;
        Some(node.item())
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

impl<N> ExactSizeIterator for InOrder<N> where N: NodeRef {}

/// Node, left subtree, right subtree.
#[derive(Clone)]
pub struct PreOrder<N> where N: NodeRef {
    stack: Vec<N>,
    size: usize,
}

impl<N> PreOrder<N> where N: NodeRef {
    pub fn new(root: Option<N>, size: usize) -> Self {
        PreOrder { stack: root.into_iter().collect(), size }
    }
}

impl<N> Iterator for PreOrder<N> where N: NodeRef {
    type Item = N::Item;

    fn next(&mut self) -> Option<N::Item> {
        let mut node = self.stack.pop()?;
        let (left, right) = (node.left(), node.right());
        self.stack.extend(right);
        self.stack.extend(left);
        self.size -= 1;
        Some(node.item())
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

impl<N> ExactSizeIterator for PreOrder<N> where N: NodeRef {}

/// Left subtree, right subtree, node.
#[derive(Clone)]
pub struct PostOrder<N> where N: NodeRef {
    // `true` once the node's children have been pushed above it
    stack: Vec<(N, bool)>,
    size: usize,
}

impl<N> PostOrder<N> where N: NodeRef {
    pub fn new(root: Option<N>, size: usize) -> Self {
        PostOrder { stack: root.into_iter().map(|node| (node, false)).collect(), size }
    }
}

impl<N> Iterator for PostOrder<N> where N: NodeRef {
    type Item = N::Item;

    fn next(&mut self) -> Option<N::Item> {
        loop {
            let (mut node, expanded) = self.stack.pop()?;

            if expanded {
                self.size -= 1;
                return Some(node.item());
            }

            let (left, right) = (node.left(), node.right());
            self.stack.push((node, true));
            self.stack.extend(right.map(|node| (node, false)));
            self.stack.extend(left.map(|node| (node, false)));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

impl<N> ExactSizeIterator for PostOrder<N> where N: NodeRef {}

/// Breadth first, left to right within each level.
#[derive(Clone)]
pub struct LevelOrder<N> where N: NodeRef {
    queue: VecDeque<N>,
    size: usize,
}

impl<N> LevelOrder<N> where N: NodeRef {
    pub fn new(root: Option<N>, size: usize) -> Self {
        LevelOrder { queue: root.into_iter().collect(), size }
    }
}

impl<N> Iterator for LevelOrder<N> where N: NodeRef {
    type Item = N::Item;

    fn next(&mut self) -> Option<N::Item> {
        let mut node = self.queue.pop_front()?;
        let (left, right) = (node.left(), node.right());
        self.queue.extend(left);
        self.queue.extend(right);
        self.size -= 1;
        Some(node.item())
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

impl<N> ExactSizeIterator for LevelOrder<N> where N: NodeRef {}
