//! Error types

mod config;
mod row_id;

pub use config::*;
pub use row_id::*;
