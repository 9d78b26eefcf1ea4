//! In-memory directory of user profiles and who they follow, kept in an
//! ordered index and persisted to a plaintext file.
//!
//! The pieces live in their own crates and are re-exported here:
//! - [`ProfileIndex`] and [`AdjacencyList`] from `profile-index`
//! - [`FileStorage`] and the [`BaseStorage`] trait from `profile-storage`
//! - [`DirectoryError`] from `data-error`

pub use data_error::{DirectoryError, Result};
pub use profile_index::{
    AdjacencyList, InOrder, ProfileEntry, ProfileIndex, UserId, UserProfile,
};
pub use profile_storage::{
    load_or_empty, BaseStorage, FileStorage, DEFAULT_STORAGE_FILE,
};
