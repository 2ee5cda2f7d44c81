//! File Storage - 文件系统音频 Blob 存储实现
//!
//! 实现 AudioStoragePort trait。
//!
//! 每个 Blob 以 `{uuid}{原始扩展名}` 落盘，互不覆盖，
//! 并发写入永不冲突；检索由静态文件挂载直接提供。

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

use crate::application::ports::{AudioStorageError, AudioStoragePort, StoredBlob};
use crate::domain::card::AudioRef;

/// 文件系统音频存储
pub struct FileAudioStorage {
    /// 存储根目录
    base_dir: PathBuf,
}

impl FileAudioStorage {
    /// 创建新的文件存储
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self, AudioStorageError> {
        let base_dir = base_dir.as_ref().to_path_buf();

        fs::create_dir_all(&base_dir)
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))?;

        Ok(Self { base_dir })
    }

    /// 获取存储根目录
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn blob_path(&self, filename: &str) -> PathBuf {
        self.base_dir.join(filename)
    }
}

#[async_trait]
impl AudioStoragePort for FileAudioStorage {
    async fn store(
        &self,
        data: &[u8],
        original_filename: &str,
    ) -> Result<StoredBlob, AudioStorageError> {
        let filename = format!(
            "{}{}",
            Uuid::new_v4(),
            AudioRef::extension_of(original_filename)
        );
        let path = self.blob_path(&filename);

        fs::write(&path, data)
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))?;

        tracing::debug!(
            filename = %filename,
            size = data.len(),
            "Audio blob stored"
        );

        Ok(StoredBlob { filename })
    }

    async fn read(&self, filename: &str) -> Result<Vec<u8>, AudioStorageError> {
        let path = self.blob_path(filename);

        if !path.exists() {
            return Err(AudioStorageError::FileNotFound(filename.to_string()));
        }

        fs::read(&path)
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))
    }

    async fn remove(&self, filename: &str) -> Result<(), AudioStorageError> {
        let path = self.blob_path(filename);

        if path.exists() {
            fs::remove_file(&path)
                .await
                .map_err(|e| AudioStorageError::IoError(e.to_string()))?;

            tracing::debug!(filename = %filename, "Audio blob deleted");
        }

        Ok(())
    }

    async fn exists(&self, filename: &str) -> bool {
        self.blob_path(filename).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_store_and_read_blob() {
        let temp_dir = tempdir().unwrap();
        let storage = FileAudioStorage::new(temp_dir.path()).await.unwrap();

        let data = b"fake webm data";
        let blob = storage.store(data, "audio.webm").await.unwrap();

        assert!(blob.filename.ends_with(".webm"));
        assert_eq!(storage.read(&blob.filename).await.unwrap(), data);
        assert!(storage.exists(&blob.filename).await);
    }

    #[tokio::test]
    async fn test_generated_names_are_unique() {
        let temp_dir = tempdir().unwrap();
        let storage = FileAudioStorage::new(temp_dir.path()).await.unwrap();

        let a = storage.store(b"a", "audio.webm").await.unwrap();
        let b = storage.store(b"b", "audio.webm").await.unwrap();

        assert_ne!(a.filename, b.filename);
        assert_eq!(storage.read(&a.filename).await.unwrap(), b"a");
        assert_eq!(storage.read(&b.filename).await.unwrap(), b"b");
    }

    #[tokio::test]
    async fn test_missing_extension_is_allowed() {
        let temp_dir = tempdir().unwrap();
        let storage = FileAudioStorage::new(temp_dir.path()).await.unwrap();

        let blob = storage.store(b"raw", "noext").await.unwrap();
        assert!(!blob.filename.contains('.'));
        assert_eq!(storage.read(&blob.filename).await.unwrap(), b"raw");
    }

    #[tokio::test]
    async fn test_read_missing_blob_is_not_found() {
        let temp_dir = tempdir().unwrap();
        let storage = FileAudioStorage::new(temp_dir.path()).await.unwrap();

        let err = storage.read("missing.webm").await.unwrap_err();
        assert!(matches!(err, AudioStorageError::FileNotFound(_)));
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let temp_dir = tempdir().unwrap();
        let storage = FileAudioStorage::new(temp_dir.path()).await.unwrap();

        let blob = storage.store(b"bytes", "a.webm").await.unwrap();
        storage.remove(&blob.filename).await.unwrap();
        assert!(!storage.exists(&blob.filename).await);

        // 再删一次不报错
        storage.remove(&blob.filename).await.unwrap();
    }
}
