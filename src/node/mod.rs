pub mod kind;
pub mod tree;

pub use kind::*;
pub use tree::*;
