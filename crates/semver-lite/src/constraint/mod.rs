//! Comparison patterns and their operators

mod operator;
mod pattern;

pub use operator::Operator;
pub use pattern::{matches, Pattern};
