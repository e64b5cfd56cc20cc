use super::node::{Node, NodeHandle, NodeWeak};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::debug;

pub struct LeafNode<K, V> {
    pub(super) keys: RefCell<Vec<K>>,
    pub(super) values: RefCell<Vec<V>>,
    next: RefCell<NodeWeak<K, V>>,
}

impl<K: Ord + Clone, V: Clone> LeafNode<K, V> {
    pub fn new() -> Self {
        LeafNode {
            keys: RefCell::new(Vec::new()),
            values: RefCell::new(Vec::new()),
            next: RefCell::new(Weak::new()),
        }
    }

    pub fn search(&self, key: &K) -> Option<V> {
        let keys = self.keys.borrow();
        keys.binary_search(key)
            .ok()
            .map(|idx| self.values.borrow()[idx].clone())
    }

    /// Sorted insert. Returns false and leaves the leaf untouched when the
    /// key is already present.
    pub fn insert(&self, key: K, value: V) -> bool {
        let mut keys = self.keys.borrow_mut();
        match keys.binary_search(&key) {
            Ok(_) => false,
            Err(idx) => {
                keys.insert(idx, key);
                self.values.borrow_mut().insert(idx, value);
                true
            }
        }
    }

    pub fn remove(&self, key: &K) -> Option<V> {
        let mut keys = self.keys.borrow_mut();
        match keys.binary_search(key) {
            Ok(idx) => {
                keys.remove(idx);
                let mut values = self.values.borrow_mut();
                Some(values.remove(idx))
            }
            Err(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.keys.borrow().len()
    }

    pub fn is_full(&self, order: usize) -> bool {
        self.keys.borrow().len() >= order
    }

    /// Split off the upper half into a new right sibling, re-linking the
    /// leaf chain. The promoted separator is a copy of the sibling's first
    /// key; the sibling keeps it.
    pub fn split(&self) -> (K, NodeHandle<K, V>) {
        let mut keys = self.keys.borrow_mut();
        let mut values = self.values.borrow_mut();

        let mid = keys.len() / 2;
        let right_keys = keys.split_off(mid);
        let right_values = values.split_off(mid);
        let separator = right_keys[0].clone();
        debug!(mid, "splitting leaf");

        let right = LeafNode {
            keys: RefCell::new(right_keys),
            values: RefCell::new(right_values),
            next: RefCell::new(self.next.borrow().clone()),
        };

        let right = Rc::new(Node::Leaf(right));
        *self.next.borrow_mut() = Rc::downgrade(&right);

        (separator, right)
    }

    pub(super) fn next_leaf(&self) -> NodeWeak<K, V> {
        self.next.borrow().clone()
    }

    pub(super) fn first_key(&self) -> K {
        self.keys.borrow()[0].clone()
    }

    /// Detach our last entry. Caller ensures the leaf has surplus occupancy.
    pub(super) fn steal_last(&self) -> (K, V) {
        let mut keys = self.keys.borrow_mut();
        let mut values = self.values.borrow_mut();
        let last = keys.len() - 1;
        (keys.remove(last), values.remove(last))
    }

    /// Detach our first entry. Caller ensures the leaf has surplus occupancy.
    pub(super) fn steal_first(&self) -> (K, V) {
        (
            self.keys.borrow_mut().remove(0),
            self.values.borrow_mut().remove(0),
        )
    }

    pub(super) fn push_front(&self, key: K, value: V) {
        self.keys.borrow_mut().insert(0, key);
        self.values.borrow_mut().insert(0, value);
    }

    pub(super) fn push_back(&self, key: K, value: V) {
        self.keys.borrow_mut().push(key);
        self.values.borrow_mut().push(value);
    }

    /// Take over a right sibling's entries and chain link ahead of its
    /// removal from the parent.
    pub(super) fn absorb(&self, right: &LeafNode<K, V>) {
        self.keys.borrow_mut().append(&mut right.keys.borrow_mut());
        self.values.borrow_mut().append(&mut right.values.borrow_mut());
        *self.next.borrow_mut() = right.next.borrow().clone();
    }
}
