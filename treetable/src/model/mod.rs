//! Row tree model

mod row;
mod row_id;
mod value;

pub use row::*;
pub use row_id::*;
pub use value::*;
