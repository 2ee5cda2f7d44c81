//! Audio Storage Port - 出站端口
//!
//! 定义音频 Blob 存储的抽象接口。Blob 以生成的唯一名落盘，
//! 检索走静态文件挂载而非 JSON API。

use async_trait::async_trait;
use thiserror::Error;

/// 音频存储错误
#[derive(Debug, Error)]
pub enum AudioStorageError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// 已存储的 Blob 引用
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredBlob {
    /// 生成的唯一文件名（保留原始扩展名）
    pub filename: String,
}

/// Audio Storage Port - 出站端口
///
/// 不做去重、不限制大小、不校验内容类型（调用方声明为准）
#[async_trait]
pub trait AudioStoragePort: Send + Sync {
    /// 保存音频数据，返回生成的 Blob 引用
    async fn store(
        &self,
        data: &[u8],
        original_filename: &str,
    ) -> Result<StoredBlob, AudioStorageError>;

    /// 读取音频数据，不存在时返回 FileNotFound
    async fn read(&self, filename: &str) -> Result<Vec<u8>, AudioStorageError>;

    /// 删除音频文件（不存在时静默成功）
    async fn remove(&self, filename: &str) -> Result<(), AudioStorageError>;

    /// 检查音频是否存在
    async fn exists(&self, filename: &str) -> bool;
}
