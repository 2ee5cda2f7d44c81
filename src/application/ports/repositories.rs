//! Repository Ports - 出站端口
//!
//! 定义卡片持久化的抽象接口
//! 具体实现在 infrastructure 层（JSON 文档存储）

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::card::AudioRef;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// 卡片实体（用于持久化）
///
/// 不变量:
/// - `id` 生成后不可变，全库唯一
/// - `text` 总是存在（允许为空串）
/// - `audio` 至多指向一个 Blob
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRecord {
    pub id: Uuid,
    pub text: String,
    pub audio: AudioRef,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Card Repository Port
///
/// 所有写操作对整个底层文档做 read-modify-write，
/// 返回前同步落盘；list 按插入（创建）顺序返回
#[async_trait]
pub trait CardRepositoryPort: Send + Sync {
    /// 获取所有卡片（创建顺序）
    async fn find_all(&self) -> Result<Vec<CardRecord>, RepositoryError>;

    /// 根据 ID 查找卡片
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CardRecord>, RepositoryError>;

    /// 追加新卡片
    async fn insert(&self, card: &CardRecord) -> Result<(), RepositoryError>;

    /// 原位更新卡片，不存在时返回 NotFound
    async fn update(&self, card: &CardRecord) -> Result<(), RepositoryError>;

    /// 删除卡片，不存在时返回 NotFound
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
