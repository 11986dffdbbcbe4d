pub mod memory;
pub mod mysql;

pub use memory::InMemoryRepository;
pub use mysql::MySqlRepository;
pub use tinylink_core::repository::{LinkRecord, ReadRepository, Repository};
pub use tinylink_core::StorageError;
