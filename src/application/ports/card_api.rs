//! Card API Port - 客户端出站端口
//!
//! 客户端通过该端口驱动服务端的卡片 CRUD。
//! HTTP 实现在 infrastructure 层（reqwest）。

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::session::{CardView, RecordedClip};

/// 客户端 API 错误
///
/// 每个失败只向调用方暴露一次，任何一层都不重试
#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Server returned {code}: {message}")]
    Status { code: u16, message: String },

    #[error("Failed to decode response: {0}")]
    DecodeError(String),
}

/// Card API Port - 出站端口
#[async_trait]
pub trait CardApiPort: Send + Sync {
    /// 获取完整卡片列表
    async fn fetch_cards(&self) -> Result<Vec<CardView>, ApiClientError>;

    /// 创建卡片（multipart: text + 可选音频）
    async fn create_card(
        &self,
        text: &str,
        audio: Option<&RecordedClip>,
    ) -> Result<CardView, ApiClientError>;

    /// 更新卡片；不带音频时服务端保留原有 audioUrl
    async fn update_card(
        &self,
        id: &str,
        text: &str,
        audio: Option<&RecordedClip>,
    ) -> Result<CardView, ApiClientError>;

    /// 删除卡片
    async fn delete_card(&self, id: &str) -> Result<(), ApiClientError>;
}
