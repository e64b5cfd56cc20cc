pub mod bptree;
pub mod error;

pub use bptree::{BPlusTree, DumpIter, InsertResult, RangeIter, TreeIter};
pub use error::{Error, Result};
