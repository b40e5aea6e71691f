//! Release records, the backing-store contract, and revision selection.

mod file;
mod memory;
mod record;
mod selector;
mod store;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use record::{ReleaseInfo, ReleaseRecord, Status};
pub use selector::select_revision;
pub use store::{ReleaseStore, StoreError};
