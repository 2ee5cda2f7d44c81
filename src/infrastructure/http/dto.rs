//! Data Transfer Objects

use serde::Serialize;
use uuid::Uuid;

use crate::application::ports::CardRecord;

/// 卡片响应
///
/// `audio_url` 已重写为公开可访问的 URL（空引用保持为空）
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardResponse {
    pub id: Uuid,
    pub text: String,
    pub audio_url: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl CardResponse {
    pub fn from_record(record: CardRecord, public_base_url: &str) -> Self {
        Self {
            id: record.id,
            text: record.text,
            audio_url: record.audio.public_url(public_base_url),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.map(|t| t.to_rfc3339()),
        }
    }
}
