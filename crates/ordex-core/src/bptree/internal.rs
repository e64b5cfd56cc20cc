use super::node::{Node, NodeHandle};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

pub struct InternalNode<K, V> {
    pub(super) keys: RefCell<Vec<K>>,
    pub(super) children: RefCell<Vec<NodeHandle<K, V>>>,
}

impl<K: Ord + Clone, V: Clone> InternalNode<K, V> {
    pub fn new() -> Self {
        InternalNode {
            keys: RefCell::new(Vec::new()),
            children: RefCell::new(Vec::new()),
        }
    }

    /// Branch index for `key`: the number of separators <= key, so a key
    /// equal to a separator routes to the right child.
    pub fn child_index(&self, key: &K) -> usize {
        match self.keys.borrow().binary_search(key) {
            Ok(i) => i + 1,
            Err(i) => i,
        }
    }

    pub fn child(&self, idx: usize) -> NodeHandle<K, V> {
        Rc::clone(&self.children.borrow()[idx])
    }

    pub fn search(&self, key: &K) -> Option<V> {
        let idx = self.child_index(key);
        let child = {
            let children = self.children.borrow();
            Rc::clone(children.get(idx)?)
        };
        child.search(key)
    }

    /// Receive a separator and the new right sibling produced by a child
    /// split, keeping keys and children aligned.
    pub fn insert_split(&self, key: K, child: NodeHandle<K, V>) {
        let mut keys = self.keys.borrow_mut();
        let mut children = self.children.borrow_mut();

        let idx = match keys.binary_search(&key) {
            Ok(i) => i + 1,
            Err(i) => i,
        };
        keys.insert(idx, key);
        children.insert(idx + 1, child);
    }

    pub fn len(&self) -> usize {
        self.keys.borrow().len()
    }

    pub fn child_count(&self) -> usize {
        self.children.borrow().len()
    }

    pub fn is_full(&self, order: usize) -> bool {
        self.keys.borrow().len() >= order
    }

    /// Split around the middle key, which moves up to the parent; the new
    /// right sibling takes the keys and children above it.
    pub fn split(&self) -> (K, NodeHandle<K, V>) {
        let mut keys = self.keys.borrow_mut();
        let mut children = self.children.borrow_mut();

        let mid = keys.len() / 2;
        let separator = keys.remove(mid);
        let right_keys = keys.split_off(mid);
        let right_children = children.split_off(mid + 1);
        debug!(mid, "splitting internal node");

        let right = InternalNode {
            keys: RefCell::new(right_keys),
            children: RefCell::new(right_children),
        };

        (separator, Rc::new(Node::Internal(right)))
    }

    pub(super) fn separator(&self, idx: usize) -> K {
        self.keys.borrow()[idx].clone()
    }

    pub(super) fn set_separator(&self, idx: usize, key: K) {
        self.keys.borrow_mut()[idx] = key;
    }

    pub(super) fn replace_separator(&self, idx: usize, key: K) -> K {
        std::mem::replace(&mut self.keys.borrow_mut()[idx], key)
    }

    /// Drop the separator at `idx` and the right-hand child it used to
    /// guard, after that child was merged into its left sibling.
    pub(super) fn remove_merged(&self, idx: usize) {
        self.keys.borrow_mut().remove(idx);
        self.children.borrow_mut().remove(idx + 1);
    }
}
