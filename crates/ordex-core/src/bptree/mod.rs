mod delete;
mod internal;
mod iter;
mod leaf;
mod node;

pub use internal::InternalNode;
pub use iter::{DumpIter, RangeIter, TreeIter};
pub use leaf::LeafNode;
pub use node::{Node, NodeHandle, NodeWeak};

use crate::error::{Error, Result};
use std::rc::Rc;
use tracing::debug;

/// Outcome of an insert under set semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertResult {
    Inserted,
    DuplicateIgnored,
}

/// In-memory B+ tree: ordered keys live in a chained leaf level, internal
/// nodes hold separator copies for routing only. `order` is the key count
/// at which a node splits; non-root nodes keep at least `(order - 1) / 2`
/// keys across deletions.
pub struct BPlusTree<K, V> {
    root: NodeHandle<K, V>,
    order: usize,
    len: usize,
}

impl<K: Ord + Clone, V: Clone> BPlusTree<K, V> {
    pub fn new(order: usize) -> Result<Self> {
        if order < 3 {
            return Err(Error::InvalidOrder(order));
        }
        Ok(BPlusTree {
            root: Node::new_leaf(),
            order,
            len: 0,
        })
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn min_keys(&self) -> usize {
        (self.order - 1) / 2
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.root.search(key)
    }

    /// Insert a key with its value slot. A key that is already present
    /// leaves the tree untouched.
    pub fn insert(&mut self, key: K, value: V) -> InsertResult {
        let root = Rc::clone(&self.root);
        let (split, outcome) = self.insert_recursive(&root, key, value);
        if outcome == InsertResult::Inserted {
            self.len += 1;
        }

        if let Some((separator, right)) = split {
            debug!("root split, tree height grows");
            let new_root = Node::new_internal();
            if let Some(internal) = new_root.as_internal() {
                internal.children.borrow_mut().push(Rc::clone(&self.root));
                internal.children.borrow_mut().push(right);
                internal.keys.borrow_mut().push(separator);
            }
            self.root = new_root;
        }
        outcome
    }

    fn insert_recursive(
        &self,
        node: &NodeHandle<K, V>,
        key: K,
        value: V,
    ) -> (Option<(K, NodeHandle<K, V>)>, InsertResult) {
        match node.as_ref() {
            Node::Leaf(leaf) => {
                if !leaf.insert(key, value) {
                    return (None, InsertResult::DuplicateIgnored);
                }
                if leaf.is_full(self.order) {
                    (Some(leaf.split()), InsertResult::Inserted)
                } else {
                    (None, InsertResult::Inserted)
                }
            }
            Node::Internal(internal) => {
                let idx = internal.child_index(&key);
                let child = internal.child(idx);

                let (split, outcome) = self.insert_recursive(&child, key, value);

                if let Some((separator, right)) = split {
                    internal.insert_split(separator, right);

                    if internal.is_full(self.order) {
                        return (Some(internal.split()), outcome);
                    }
                }

                (None, outcome)
            }
        }
    }

    pub fn iter(&self) -> TreeIter<K, V> {
        TreeIter::new(&self.root)
    }

    /// Ascending scan over the inclusive interval `[start, end]`. A
    /// reversed interval yields nothing.
    pub fn range(&self, start: &K, end: &K) -> RangeIter<K, V> {
        RangeIter::new(&self.root, start, end)
    }

    /// Pre-order `(depth, keys)` traversal. Diagnostic only.
    pub fn dump(&self) -> DumpIter<K, V> {
        DumpIter::new(&self.root)
    }
}
