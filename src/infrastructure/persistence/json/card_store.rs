//! JSON Card Store - 单 JSON 文档卡片存储
//!
//! 实现 CardRepositoryPort trait。
//!
//! 整个卡片数组序列化在一个 JSON 文档里（`{"cards": [...]}`），
//! 每次写操作对整个文档做 read-modify-write，返回前同步落盘。
//! 进程内用异步互斥锁串行化；跨进程写者仍然是 last-write-wins，
//! 单用户部署下可接受。

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::application::ports::{CardRecord, CardRepositoryPort, RepositoryError};
use crate::domain::card::AudioRef;

/// 持久化文档根
#[derive(Debug, Default, Serialize, Deserialize)]
struct CardDocument {
    cards: Vec<StoredCard>,
}

/// 文档内的卡片形态（字段名与对外 JSON 保持一致）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredCard {
    id: Uuid,
    text: String,
    audio_url: String,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

impl From<&CardRecord> for StoredCard {
    fn from(record: &CardRecord) -> Self {
        Self {
            id: record.id,
            text: record.text.clone(),
            audio_url: record.audio.as_str().to_string(),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

impl From<StoredCard> for CardRecord {
    fn from(stored: StoredCard) -> Self {
        Self {
            id: stored.id,
            text: stored.text,
            audio: AudioRef::from_url_path(stored.audio_url),
            created_at: stored.created_at,
            updated_at: stored.updated_at,
        }
    }
}

/// JSON 文档卡片存储
pub struct JsonCardStore {
    path: PathBuf,
    /// 串行化本进程内的 read-modify-write
    lock: Mutex<()>,
}

impl JsonCardStore {
    /// 创建存储；文档不存在时初始化为空文档
    pub async fn new(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| RepositoryError::IoError(e.to_string()))?;
        }

        let store = Self {
            path,
            lock: Mutex::new(()),
        };

        if fs::metadata(&store.path).await.is_err() {
            store.persist(&CardDocument::default()).await?;
        }

        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 读取整个文档；损坏的文档对当前请求是致命的
    async fn load(&self) -> Result<CardDocument, RepositoryError> {
        let bytes = fs::read(&self.path)
            .await
            .map_err(|e| RepositoryError::IoError(e.to_string()))?;

        serde_json::from_slice(&bytes)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))
    }

    /// 整个文档落盘（写完成后才返回）
    async fn persist(&self, doc: &CardDocument) -> Result<(), RepositoryError> {
        let bytes = serde_json::to_vec_pretty(doc)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        fs::write(&self.path, bytes)
            .await
            .map_err(|e| RepositoryError::IoError(e.to_string()))
    }
}

#[async_trait]
impl CardRepositoryPort for JsonCardStore {
    async fn find_all(&self) -> Result<Vec<CardRecord>, RepositoryError> {
        let _guard = self.lock.lock().await;
        let doc = self.load().await?;
        Ok(doc.cards.into_iter().map(CardRecord::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<CardRecord>, RepositoryError> {
        let _guard = self.lock.lock().await;
        let doc = self.load().await?;
        Ok(doc
            .cards
            .into_iter()
            .find(|c| c.id == id)
            .map(CardRecord::from))
    }

    async fn insert(&self, card: &CardRecord) -> Result<(), RepositoryError> {
        let _guard = self.lock.lock().await;
        let mut doc = self.load().await?;

        if doc.cards.iter().any(|c| c.id == card.id) {
            return Err(RepositoryError::Duplicate(card.id.to_string()));
        }

        doc.cards.push(StoredCard::from(card));
        self.persist(&doc).await?;

        tracing::debug!(card_id = %card.id, total = doc.cards.len(), "Card persisted");
        Ok(())
    }

    async fn update(&self, card: &CardRecord) -> Result<(), RepositoryError> {
        let _guard = self.lock.lock().await;
        let mut doc = self.load().await?;

        let slot = doc
            .cards
            .iter_mut()
            .find(|c| c.id == card.id)
            .ok_or_else(|| RepositoryError::NotFound(card.id.to_string()))?;

        *slot = StoredCard::from(card);
        self.persist(&doc).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let _guard = self.lock.lock().await;
        let mut doc = self.load().await?;

        let before = doc.cards.len();
        doc.cards.retain(|c| c.id != id);
        if doc.cards.len() == before {
            return Err(RepositoryError::NotFound(id.to_string()));
        }

        self.persist(&doc).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn record(text: &str) -> CardRecord {
        CardRecord {
            id: Uuid::new_v4(),
            text: text.to_string(),
            audio: AudioRef::from_filename("clip.webm"),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_new_store_starts_empty() {
        let dir = tempdir().unwrap();
        let store = JsonCardStore::new(dir.path().join("cards.json")).await.unwrap();
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_then_find_all_preserves_order() {
        let dir = tempdir().unwrap();
        let store = JsonCardStore::new(dir.path().join("cards.json")).await.unwrap();

        let first = record("un");
        let second = record("deux");
        store.insert(&first).await.unwrap();
        store.insert(&second).await.unwrap();

        let cards = store.find_all().await.unwrap();
        assert_eq!(cards, vec![first, second]);
    }

    #[tokio::test]
    async fn test_duplicate_id_is_rejected() {
        let dir = tempdir().unwrap();
        let store = JsonCardStore::new(dir.path().join("cards.json")).await.unwrap();

        let card = record("un");
        store.insert(&card).await.unwrap();
        let err = store.insert(&card).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_update_replaces_in_place() {
        let dir = tempdir().unwrap();
        let store = JsonCardStore::new(dir.path().join("cards.json")).await.unwrap();

        let mut card = record("un");
        store.insert(&card).await.unwrap();

        card.text = "UN".to_string();
        card.updated_at = Some(Utc::now());
        store.update(&card).await.unwrap();

        let found = store.find_by_id(card.id).await.unwrap().unwrap();
        assert_eq!(found.text, "UN");
        assert!(found.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let dir = tempdir().unwrap();
        let store = JsonCardStore::new(dir.path().join("cards.json")).await.unwrap();
        let err = store.update(&record("rien")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let dir = tempdir().unwrap();
        let store = JsonCardStore::new(dir.path().join("cards.json")).await.unwrap();

        let card = record("un");
        store.insert(&card).await.unwrap();
        store.delete(card.id).await.unwrap();

        assert!(store.find_all().await.unwrap().is_empty());
        let err = store.delete(card.id).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_document_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cards.json");

        let card = record("persisté");
        {
            let store = JsonCardStore::new(&path).await.unwrap();
            store.insert(&card).await.unwrap();
        }

        let reopened = JsonCardStore::new(&path).await.unwrap();
        assert_eq!(reopened.find_all().await.unwrap(), vec![card]);
    }

    #[tokio::test]
    async fn test_document_uses_camel_case_field_names() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cards.json");
        let store = JsonCardStore::new(&path).await.unwrap();
        store.insert(&record("un")).await.unwrap();

        let raw: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        let card = &raw["cards"][0];
        assert!(card.get("audioUrl").is_some());
        assert!(card.get("createdAt").is_some());
        assert!(card.get("updatedAt").is_none());
    }

    #[tokio::test]
    async fn test_corrupt_document_is_fatal_for_request() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cards.json");
        let store = JsonCardStore::new(&path).await.unwrap();

        std::fs::write(&path, b"not json").unwrap();
        let err = store.find_all().await.unwrap_err();
        assert!(matches!(err, RepositoryError::SerializationError(_)));
    }
}
