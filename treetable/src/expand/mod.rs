//! Expansion engine: the expanded-id set and the visibility walk.

mod rows;
mod set;

pub use rows::*;
pub use set::*;
