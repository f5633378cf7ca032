//! In-order key iterator.

use std::iter::FusedIterator;

use super::node::Node;

/// Lazy in-order walk over every key in a [`BTree`](super::BTree).
///
/// Keeps an explicit stack of `(node, next key index)` frames, one per
/// level, so the walk never recurses and never allocates beyond the
/// tree height. Duplicates are yielded as separate entries.
///
/// Cloning the iterator forks the walk at its current position.
pub struct Iter<'a, K> {
    stack: Vec<(&'a Node<K>, usize)>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(root: &'a Node<K>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.descend_leftmost(root);
        iter
    }

    /// Push `node` and its leftmost descendants down to a leaf.
    fn descend_leftmost(&mut self, mut node: &'a Node<K>) {
        loop {
            self.stack.push((node, 0));
            match node.children().first() {
                Some(child) => node = child,
                None => break,
            }
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        loop {
            let (node, index) = self.stack.last_mut()?;
            let node: &'a Node<K> = *node;

            if *index < node.keys().len() {
                let key = &node.keys()[*index];
                *index += 1;
                let next_child = *index;

                // Keys after this one start in the child to its right.
                if let Some(child) = node.children().get(next_child) {
                    self.descend_leftmost(child);
                }

                self.remaining = self.remaining.saturating_sub(1);
                return Some(key);
            }

            self.stack.pop();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}
