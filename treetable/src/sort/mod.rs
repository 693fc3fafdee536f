//! Sort engine: the toggle state machine, comparator resolution and the
//! stable recursive multi-key sort.

mod order;
mod registry;
mod spec;
mod toggle;
pub mod types;

pub use order::*;
pub use registry::*;
pub use spec::*;
pub use toggle::*;
