use data_error::Result;
use profile_index::ProfileIndex;

pub trait BaseStorage {
    /// Scan the persisted records and rebuild an index from them.
    ///
    /// Follow lists are not persisted, so every restored entry starts
    /// with an empty list and the follow count it was saved with.
    fn read_fs(&self) -> Result<ProfileIndex>;

    /// Overwrite the persisted records with the full in-order
    /// contents of the index.
    fn write_fs(&self, index: &ProfileIndex) -> Result<()>;

    /// Remove all persisted data
    /// by pre-configured location in the file-system.
    fn erase(&self) -> Result<()>;
}
