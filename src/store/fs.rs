use std::io;
use std::path::{Path, PathBuf};

use crate::store::error::StoreError;
use crate::store::traits::CollectionBacking;

/// Filesystem backing: one `<name>.json` document per collection under a
/// single data directory.
///
/// Writes land in a dot-prefixed temp file first and are renamed into place;
/// rename within one directory is atomic on the target filesystems, so a
/// reader never observes a partially written document.
#[derive(Debug, Clone)]
pub struct FsBacking {
    root: PathBuf,
}

impl FsBacking {
    /// Open (creating if needed) the data directory.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn document_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.json"))
    }

    fn staging_path(&self, name: &str) -> PathBuf {
        self.root.join(format!(".{name}.json.tmp"))
    }
}

#[async_trait::async_trait]
impl CollectionBacking for FsBacking {
    async fn read(&self, name: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match tokio::fs::read(self.document_path(name)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("collection `{name}` has no durable document yet");
                Ok(None)
            }
            Err(e) => Err(StoreError::Persistence(e)),
        }
    }

    async fn write(&self, name: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let staging = self.staging_path(name);
        tokio::fs::write(&staging, bytes).await?;
        tokio::fs::rename(&staging, self.document_path(name)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn absent_document_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let backing = FsBacking::new(dir.path()).unwrap();
        assert!(backing.read("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn write_then_read_returns_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let backing = FsBacking::new(dir.path()).unwrap();

        backing.write("sample", b"[1,2,3]").await.unwrap();
        let bytes = backing.read("sample").await.unwrap().unwrap();
        assert_eq!(bytes, b"[1,2,3]");
    }

    #[tokio::test]
    async fn overwrite_leaves_no_staging_file() {
        let dir = tempfile::tempdir().unwrap();
        let backing = FsBacking::new(dir.path()).unwrap();

        backing.write("sample", b"first").await.unwrap();
        backing.write("sample", b"second").await.unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(entries, vec!["sample.json".to_string()]);

        let bytes = backing.read("sample").await.unwrap().unwrap();
        assert_eq!(bytes, b"second");
    }

    #[tokio::test]
    async fn creates_missing_data_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data").join("collections");
        let backing = FsBacking::new(&nested).unwrap();
        backing.write("sample", b"{}").await.unwrap();
        assert!(nested.join("sample.json").exists());
    }
}
