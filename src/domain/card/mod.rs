//! Card Context - 卡片限界上下文
//!
//! 职责:
//! - 卡片文本与音频引用建模
//! - 音频 Blob 相对路径 <-> 公开 URL 换算

mod value_objects;

pub use value_objects::{AudioRef, UPLOADS_MOUNT};
