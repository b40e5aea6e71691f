//! Resource matching, field patching, and the patch pipeline.

mod descriptor;
mod orchestrator;
mod patcher;


pub use descriptor::*;
pub use orchestrator::*;
pub use patcher::*;
