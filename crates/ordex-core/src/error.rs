use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Orders below 3 cannot keep non-root nodes above minimum occupancy
    /// after a split.
    #[error("invalid order {0}: must be at least 3")]
    InvalidOrder(usize),
}
