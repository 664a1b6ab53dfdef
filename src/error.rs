use thiserror::Error;

/// Failures reported by the index-based mutations of a `LinkedList`.
///
/// A rejected operation never touches the list.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    #[error("invalid index {index} for list of size {size}")]
    InvalidIndex { index: usize, size: usize },
}
