//! Live-resource export and the adopt workflow.

mod export;
mod live;

pub use export::*;
pub use live::*;
