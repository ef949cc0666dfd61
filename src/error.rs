use std::fmt;

use thiserror::Error;

/// Error enumerates over all possible errors that this package
/// shall return. Every variant is a fatal case, reported by
/// [`Rbt::validate`](crate::Rbt::validate) when the tree breaks one of
/// the red-black rules.
#[derive(Debug, PartialEq, Error)]
pub enum Error<K>
where
    K: fmt::Debug,
{
    /// A red node has a red child.
    #[error("consecutive red nodes")]
    ConsecutiveReds,
    /// Black height differs between left and right subtree. The String
    /// component of this variant can be used for debugging.
    #[error("unbalanced blacks, {0}")]
    UnbalancedBlacks(String),
    /// Index entries are not in sort-order.
    #[error("sort error, {0:?} before {1:?}")]
    SortError(K, K),
    /// Root or sentinel is colored red.
    #[error("root or sentinel is red")]
    RedRoot,
    /// Parent link does not agree with child link.
    #[error("broken link, {0}")]
    BrokenLink(String),
}
