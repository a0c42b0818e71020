mod file_store;
mod memory_store;
mod write_queue;

pub use file_store::FileKeyValueStore;
pub use memory_store::InMemoryKeyValueStore;
pub use write_queue::{PendingOp, WriteQueue};
