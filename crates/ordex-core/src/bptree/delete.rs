use super::internal::InternalNode;
use super::node::{Node, NodeHandle};
use super::BPlusTree;
use std::rc::Rc;
use tracing::debug;

impl<K: Ord + Clone, V: Clone> BPlusTree<K, V> {
    /// Remove a key, returning its value slot, or None when the key is
    /// absent. Underfull nodes are repaired on the way back up the descent
    /// path: borrow from a richer sibling first, merge otherwise.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let root = Rc::clone(&self.root);
        let removed = self.remove_recursive(&root, key);
        if removed.is_some() {
            self.len -= 1;
            self.collapse_root();
        }
        removed
    }

    fn remove_recursive(&self, node: &NodeHandle<K, V>, key: &K) -> Option<V> {
        match node.as_ref() {
            Node::Leaf(leaf) => leaf.remove(key),
            Node::Internal(internal) => {
                let idx = internal.child_index(key);
                let child = internal.child(idx);

                let removed = self.remove_recursive(&child, key)?;

                // The recursion stack stands in for parent pointers: each
                // frame repairs its own child after the removal returns.
                if child.key_count() < self.min_keys() {
                    self.rebalance_child(internal, idx);
                }
                Some(removed)
            }
        }
    }

    fn rebalance_child(&self, parent: &InternalNode<K, V>, idx: usize) {
        let min_keys = self.min_keys();

        if idx > 0 && parent.child(idx - 1).key_count() > min_keys {
            Self::borrow_from_left(parent, idx);
        } else if idx + 1 < parent.child_count() && parent.child(idx + 1).key_count() > min_keys {
            Self::borrow_from_right(parent, idx);
        } else if idx > 0 {
            Self::merge_children(parent, idx - 1);
        } else {
            Self::merge_children(parent, idx);
        }
    }

    /// Shift the left sibling's last entry into the underfull child at
    /// `idx`, refreshing the separator between them.
    fn borrow_from_left(parent: &InternalNode<K, V>, idx: usize) {
        let left = parent.child(idx - 1);
        let node = parent.child(idx);
        debug!(idx, "borrowing from left sibling");

        match (left.as_ref(), node.as_ref()) {
            (Node::Leaf(left), Node::Leaf(node)) => {
                let (key, value) = left.steal_last();
                node.push_front(key.clone(), value);
                parent.set_separator(idx - 1, key);
            }
            (Node::Internal(left), Node::Internal(node)) => {
                // The key rotates through the parent so the separator keeps
                // partitioning both subtrees.
                let moved_key = left.keys.borrow_mut().pop();
                let moved_child = left.children.borrow_mut().pop();
                if let (Some(moved_key), Some(moved_child)) = (moved_key, moved_child) {
                    let separator = parent.replace_separator(idx - 1, moved_key);
                    node.keys.borrow_mut().insert(0, separator);
                    node.children.borrow_mut().insert(0, moved_child);
                }
            }
            _ => {}
        }
    }

    /// Mirror of `borrow_from_left` for the right sibling's first entry.
    fn borrow_from_right(parent: &InternalNode<K, V>, idx: usize) {
        let node = parent.child(idx);
        let right = parent.child(idx + 1);
        debug!(idx, "borrowing from right sibling");

        match (node.as_ref(), right.as_ref()) {
            (Node::Leaf(node), Node::Leaf(right)) => {
                let (key, value) = right.steal_first();
                node.push_back(key, value);
                parent.set_separator(idx, right.first_key());
            }
            (Node::Internal(node), Node::Internal(right)) => {
                let moved_key = right.keys.borrow_mut().remove(0);
                let moved_child = right.children.borrow_mut().remove(0);
                let separator = parent.replace_separator(idx, moved_key);
                node.keys.borrow_mut().push(separator);
                node.children.borrow_mut().push(moved_child);
            }
            _ => {}
        }
    }

    /// Fold the child at `idx + 1` into the one at `idx` and drop the
    /// separator between them. The combined node cannot overflow: both
    /// sides were at or below minimum occupancy.
    fn merge_children(parent: &InternalNode<K, V>, idx: usize) {
        let left = parent.child(idx);
        let right = parent.child(idx + 1);
        debug!(idx, "merging with sibling");

        match (left.as_ref(), right.as_ref()) {
            (Node::Leaf(left), Node::Leaf(right)) => {
                left.absorb(right);
            }
            (Node::Internal(left), Node::Internal(right)) => {
                left.keys.borrow_mut().push(parent.separator(idx));
                left.keys.borrow_mut().append(&mut right.keys.borrow_mut());
                left.children
                    .borrow_mut()
                    .append(&mut right.children.borrow_mut());
            }
            _ => {}
        }

        parent.remove_merged(idx);
    }

    /// An internal root drained of separators has a single child left;
    /// that child becomes the root. Bounded by tree height.
    fn collapse_root(&mut self) {
        loop {
            let next = match self.root.as_internal() {
                Some(internal) if internal.len() == 0 => internal.child(0),
                _ => return,
            };
            debug!("root collapsed, tree height shrinks");
            self.root = next;
        }
    }
}
