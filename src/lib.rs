mod depth;
mod error;
mod rbt;

pub use crate::depth::Depth;
pub use crate::error::Error;
pub use crate::rbt::{Color, Iter, Node, Range, Rbt, Reverse, Stats};
