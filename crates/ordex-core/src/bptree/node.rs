use super::{InternalNode, LeafNode};
use std::rc::{Rc, Weak};

pub type NodeHandle<K, V> = Rc<Node<K, V>>;
pub type NodeWeak<K, V> = Weak<Node<K, V>>;

pub enum Node<K, V> {
    Leaf(LeafNode<K, V>),
    Internal(InternalNode<K, V>),
}

impl<K: Ord + Clone, V: Clone> Node<K, V> {
    pub fn new_leaf() -> NodeHandle<K, V> {
        Rc::new(Node::Leaf(LeafNode::new()))
    }

    pub fn new_internal() -> NodeHandle<K, V> {
        Rc::new(Node::Internal(InternalNode::new()))
    }

    pub fn search(&self, key: &K) -> Option<V> {
        match self {
            Node::Leaf(leaf) => leaf.search(key),
            Node::Internal(internal) => internal.search(key),
        }
    }

    pub fn key_count(&self) -> usize {
        match self {
            Node::Leaf(leaf) => leaf.len(),
            Node::Internal(internal) => internal.len(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn as_leaf(&self) -> Option<&LeafNode<K, V>> {
        match self {
            Node::Leaf(leaf) => Some(leaf),
            _ => None,
        }
    }

    pub fn as_internal(&self) -> Option<&InternalNode<K, V>> {
        match self {
            Node::Internal(internal) => Some(internal),
            _ => None,
        }
    }
}
