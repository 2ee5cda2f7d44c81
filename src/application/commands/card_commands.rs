//! Card Commands

use uuid::Uuid;

/// 上传的音频负载（multipart 的 audio 字段）
#[derive(Debug, Clone)]
pub struct AudioUpload {
    pub data: Vec<u8>,
    /// 调用方声明的原始文件名，仅用于保留扩展名
    pub original_filename: String,
}

/// 创建卡片命令
#[derive(Debug, Clone)]
pub struct CreateCard {
    pub text: String,
    pub audio: Option<AudioUpload>,
}

/// 更新卡片命令
///
/// audio 为 None 时保留原有音频引用
#[derive(Debug, Clone)]
pub struct UpdateCard {
    pub card_id: Uuid,
    pub text: String,
    pub audio: Option<AudioUpload>,
}

/// 删除卡片命令
#[derive(Debug, Clone)]
pub struct DeleteCard {
    pub card_id: Uuid,
}
