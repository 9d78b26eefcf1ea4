use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use data_error::{DirectoryError, Result};
use profile_index::ProfileIndex;

use crate::base_storage::BaseStorage;
use crate::utils::{format_record, parse_records};

/*
Note on the `FileStorage` format:

Each profile is written as one line of five space-separated tokens in
ascending identifier order. Follow lists are not part of the format; only
the follow count survives a save. Writes truncate the file in place, so an
interrupted write can leave a partial file behind.
*/

/// Represents a plaintext file holding the profiles of a [`ProfileIndex`].
pub struct FileStorage {
    label: String,
    path: PathBuf,
}

impl FileStorage {
    /// Create a new file storage with a diagnostic label and file path
    pub fn new(label: String, path: &Path) -> Self {
        Self {
            label,
            path: PathBuf::from(path),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BaseStorage for FileStorage {
    /// Read the profiles from the storage file
    fn read_fs(&self) -> Result<ProfileIndex> {
        if !self.path.exists() {
            return Err(DirectoryError::Storage(
                self.label.clone(),
                "File does not exist".to_owned(),
            ));
        }

        // Tokens are plain bytes; undecodable ones become U+FFFD
        let bytes = fs::read(&self.path).map_err(|err| {
            DirectoryError::Storage(self.label.clone(), err.to_string())
        })?;
        let content = String::from_utf8_lossy(&bytes);
        let index: ProfileIndex = parse_records(&content).into_iter().collect();

        log::info!("{} {} entries have been read", self.label, index.len());
        Ok(index)
    }

    /// Write the profiles to the storage file
    fn write_fs(&self, index: &ProfileIndex) -> Result<()> {
        let file = File::create(&self.path).map_err(|err| {
            DirectoryError::Storage(self.label.clone(), err.to_string())
        })?;
        let mut writer = BufWriter::new(file);

        for entry in index.traverse_in_order() {
            writeln!(writer, "{}", format_record(entry.profile()))?;
        }
        writer.flush()?;

        log::info!(
            "{} {} entries have been written",
            self.label,
            index.len()
        );
        Ok(())
    }

    /// Erase the storage file from disk
    fn erase(&self) -> Result<()> {
        fs::remove_file(&self.path).map_err(|err| {
            DirectoryError::Storage(self.label.clone(), err.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use profile_index::{ProfileIndex, UserProfile};
    use tempdir::TempDir;

    use crate::{base_storage::BaseStorage, file_storage::FileStorage};

    fn snapshot(index: &ProfileIndex) -> Vec<UserProfile> {
        index
            .traverse_in_order()
            .map(|entry| entry.profile().clone())
            .collect()
    }

    #[test]
    fn test_file_storage_write_read() {
        let temp_dir =
            TempDir::new("tmp").expect("Failed to create temporary directory");
        let storage_path = temp_dir.path().join("users.txt");
        let storage = FileStorage::new("TestStorage".to_string(), &storage_path);

        let index: ProfileIndex = vec![
            UserProfile::new(1, "A", "a@x", "p1"),
            UserProfile::new(5, "B", "b@x", "p2"),
            UserProfile::new(3, "C", "c@x", "p3"),
        ]
        .into_iter()
        .collect();

        storage.write_fs(&index).expect("Failed to write data to disk");
        let data_read = storage.read_fs().expect("Failed to read data from disk");

        assert_eq!(snapshot(&data_read), snapshot(&index));
        assert_eq!(
            std::fs::read_to_string(&storage_path).unwrap(),
            "1 A a@x p1 0\n3 C c@x p3 0\n5 B b@x p2 0\n"
        );
    }

    #[test]
    fn test_file_storage_keeps_count_but_not_follows() {
        let temp_dir =
            TempDir::new("tmp").expect("Failed to create temporary directory");
        let storage_path = temp_dir.path().join("users.txt");
        let storage = FileStorage::new("TestStorage".to_string(), &storage_path);

        let mut index = ProfileIndex::new();
        index.insert(UserProfile::new(1, "A", "a@x", "p1"));
        index.follow(1, 2).unwrap();
        index.follow(1, 3).unwrap();
        storage.write_fs(&index).unwrap();

        let mut reloaded = storage.read_fs().unwrap();
        let entry = reloaded.search(1).unwrap();
        assert_eq!(entry.profile().follow_count(), 2);
        assert!(entry.follows().is_empty());

        // the restored count cannot be walked back through unfollow
        assert!(reloaded.unfollow(1, 2).is_err());
        assert_eq!(reloaded.search(1).unwrap().profile().follow_count(), 2);
    }

    #[test]
    fn test_file_storage_overwrites_previous_content() {
        let temp_dir =
            TempDir::new("tmp").expect("Failed to create temporary directory");
        let storage_path = temp_dir.path().join("users.txt");
        let storage = FileStorage::new("TestStorage".to_string(), &storage_path);

        let mut index: ProfileIndex =
            vec![UserProfile::new(1, "A", "a@x", "p1")].into_iter().collect();
        index.insert(UserProfile::new(2, "B", "b@x", "p2"));
        storage.write_fs(&index).unwrap();

        index.delete(1).unwrap();
        storage.write_fs(&index).unwrap();

        let reloaded = storage.read_fs().unwrap();
        assert_eq!(reloaded.len(), 1);
        assert!(reloaded.search(1).is_err());
    }

    #[test]
    fn test_file_storage_reads_past_invalid_utf8() {
        let temp_dir =
            TempDir::new("tmp").expect("Failed to create temporary directory");
        let storage_path = temp_dir.path().join("users.txt");
        let storage = FileStorage::new("TestStorage".to_string(), &storage_path);

        std::fs::write(
            &storage_path,
            b"1 Al al@x al.png 0\n2 Bo bo@x bo.png 0\n3 J\xf6rg j@x j.png 0\n",
        )
        .unwrap();

        let index = storage.read_fs().expect("Latin-1 byte rejected the file");
        assert_eq!(index.search(1).unwrap().profile().name(), "Al");
        assert_eq!(index.search(2).unwrap().profile().name(), "Bo");
        assert_eq!(index.search(3).unwrap().profile().name(), "J\u{FFFD}rg");

        // saving the reloaded index keeps the earlier records
        storage.write_fs(&index).unwrap();
        let content = std::fs::read_to_string(&storage_path).unwrap();
        assert!(content.starts_with("1 Al al@x al.png 0\n2 Bo bo@x bo.png 0\n"));
    }

    #[test]
    fn test_file_storage_missing_file() {
        let temp_dir =
            TempDir::new("tmp").expect("Failed to create temporary directory");
        let storage = FileStorage::new(
            "TestStorage".to_string(),
            &temp_dir.path().join("absent.txt"),
        );

        assert!(storage.read_fs().is_err());
    }

    #[test]
    fn test_file_storage_unwritable_target() {
        let temp_dir =
            TempDir::new("tmp").expect("Failed to create temporary directory");
        let storage_path = temp_dir.path().join("missing").join("users.txt");
        let storage = FileStorage::new("TestStorage".to_string(), &storage_path);

        let mut index = ProfileIndex::new();
        index.insert(UserProfile::new(1, "A", "a@x", "p1"));

        assert!(storage.write_fs(&index).is_err());
        assert!(!storage_path.exists());
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_file_storage_erase() {
        let temp_dir =
            TempDir::new("tmp").expect("Failed to create temporary directory");
        let storage_path = temp_dir.path().join("users.txt");
        let storage = FileStorage::new("TestStorage".to_string(), &storage_path);

        storage.write_fs(&ProfileIndex::new()).unwrap();
        assert!(storage_path.exists());
        assert_eq!(storage.path(), storage_path.as_path());

        if let Err(err) = storage.erase() {
            panic!("Failed to delete file: {:?}", err);
        }
        assert!(!storage_path.exists());
        assert!(storage.erase().is_err());
    }
}
