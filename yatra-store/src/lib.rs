pub mod app_config;
pub mod file;
pub mod memory;
pub mod record_store;
pub mod storage;

pub use app_config::Config;
pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use record_store::RecordStore;
pub use storage::{Storage, StorageError};
