use super::node::{Node, NodeHandle};
use std::rc::Rc;

/// Ascending traversal over the leaf chain.
pub struct TreeIter<K, V> {
    current_leaf: Option<NodeHandle<K, V>>,
    current_idx: usize,
}

impl<K: Ord + Clone, V: Clone> TreeIter<K, V> {
    pub(super) fn new(root: &NodeHandle<K, V>) -> Self {
        TreeIter {
            current_leaf: Some(find_leftmost_leaf(root)),
            current_idx: 0,
        }
    }
}

impl<K: Ord + Clone, V: Clone> Iterator for TreeIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let leaf_node = self.current_leaf.as_ref()?;
            let leaf = leaf_node.as_leaf()?;

            let keys = leaf.keys.borrow();
            if self.current_idx < keys.len() {
                let item = (
                    keys[self.current_idx].clone(),
                    leaf.values.borrow()[self.current_idx].clone(),
                );
                self.current_idx += 1;
                return Some(item);
            }
            drop(keys);

            let next = leaf.next_leaf().upgrade();
            self.current_leaf = next;
            self.current_idx = 0;
        }
    }
}

/// Ascending traversal over the inclusive interval `[start, end]`.
/// Restartable: every call to `BPlusTree::range` re-descends from the root.
pub struct RangeIter<K, V> {
    current_leaf: Option<NodeHandle<K, V>>,
    current_idx: usize,
    end: K,
}

impl<K: Ord + Clone, V: Clone> RangeIter<K, V> {
    pub(super) fn new(root: &NodeHandle<K, V>, start: &K, end: &K) -> Self {
        let (current_leaf, current_idx) = find_start_position(root, start);
        RangeIter {
            current_leaf,
            current_idx,
            end: end.clone(),
        }
    }
}

impl<K: Ord + Clone, V: Clone> Iterator for RangeIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let leaf_node = self.current_leaf.as_ref()?;
            let leaf = leaf_node.as_leaf()?;

            let keys = leaf.keys.borrow();
            if self.current_idx < keys.len() {
                let key = &keys[self.current_idx];
                if *key > self.end {
                    return None;
                }
                let item = (
                    key.clone(),
                    leaf.values.borrow()[self.current_idx].clone(),
                );
                self.current_idx += 1;
                return Some(item);
            }
            drop(keys);

            let next = leaf.next_leaf().upgrade();
            self.current_leaf = next;
            self.current_idx = 0;
        }
    }
}

/// Lazy pre-order walk emitting `(depth, keys)` per node, left to right.
pub struct DumpIter<K, V> {
    stack: Vec<(NodeHandle<K, V>, usize)>,
}

impl<K: Ord + Clone, V: Clone> DumpIter<K, V> {
    pub(super) fn new(root: &NodeHandle<K, V>) -> Self {
        DumpIter {
            stack: vec![(Rc::clone(root), 0)],
        }
    }
}

impl<K: Ord + Clone, V: Clone> Iterator for DumpIter<K, V> {
    type Item = (usize, Vec<K>);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        let keys = match node.as_ref() {
            Node::Leaf(leaf) => leaf.keys.borrow().clone(),
            Node::Internal(internal) => {
                let children = internal.children.borrow();
                for child in children.iter().rev() {
                    self.stack.push((Rc::clone(child), depth + 1));
                }
                internal.keys.borrow().clone()
            }
        };
        Some((depth, keys))
    }
}

fn find_leftmost_leaf<K: Ord + Clone, V: Clone>(node: &NodeHandle<K, V>) -> NodeHandle<K, V> {
    let mut current = Rc::clone(node);
    loop {
        match current.as_ref() {
            Node::Leaf(_) => return current,
            Node::Internal(internal) => {
                let first = internal.child(0);
                current = first;
            }
        }
    }
}

fn find_start_position<K: Ord + Clone, V: Clone>(
    node: &NodeHandle<K, V>,
    start: &K,
) -> (Option<NodeHandle<K, V>>, usize) {
    let mut current = Rc::clone(node);
    loop {
        match current.as_ref() {
            Node::Leaf(leaf) => {
                let keys = leaf.keys.borrow();
                let idx = match keys.binary_search(start) {
                    Ok(i) => i,
                    Err(i) => i,
                };
                drop(keys);
                return (Some(current), idx);
            }
            Node::Internal(internal) => {
                let next = internal.child(internal.child_index(start));
                current = next;
            }
        }
    }
}
