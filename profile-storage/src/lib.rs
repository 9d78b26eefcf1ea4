pub mod base_storage;
pub mod file_storage;
pub mod utils;

pub use base_storage::BaseStorage;
pub use file_storage::FileStorage;
pub use utils::load_or_empty;

/// Storage file used when none is configured
pub const DEFAULT_STORAGE_FILE: &str = "users.txt";

/// Number of whitespace-separated tokens in one persisted record
pub const FIELD_COUNT: usize = 5;
