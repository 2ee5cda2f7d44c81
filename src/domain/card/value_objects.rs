//! Card Context - Value Objects

use serde::{Deserialize, Serialize};
use std::path::Path;

/// 音频 Blob 的静态文件挂载路径
pub const UPLOADS_MOUNT: &str = "/uploads";

/// 音频引用 - 卡片持有的音频 Blob 相对路径
///
/// 不变量:
/// - 要么为空（卡片无音频），要么为挂载路径下的相对 URL（如 `/uploads/xxx.webm`）
/// - 同一引用至多指向一个 Blob；替换音频会遗留旧 Blob，由调用方负责清理
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioRef(String);

impl AudioRef {
    /// 空引用（无音频）
    pub fn none() -> Self {
        Self(String::new())
    }

    /// 根据 Blob 文件名构造引用
    pub fn from_filename(filename: &str) -> Self {
        Self(format!("{}/{}", UPLOADS_MOUNT, filename))
    }

    /// 从已存储的相对路径构造引用
    pub fn from_url_path(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 提取 Blob 文件名（空引用或挂载路径外的引用返回 None）
    pub fn filename(&self) -> Option<&str> {
        self.0
            .strip_prefix(UPLOADS_MOUNT)
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|name| !name.is_empty() && !name.contains('/'))
    }

    /// 换算为公开可访问的 URL；空引用保持为空
    pub fn public_url(&self, base_url: &str) -> String {
        if self.is_none() {
            String::new()
        } else {
            format!("{}{}", base_url.trim_end_matches('/'), self.0)
        }
    }

    /// 从原始文件名提取扩展名（保留点号），无扩展名时为空串
    pub fn extension_of(original_filename: &str) -> String {
        Path::new(original_filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e))
            .unwrap_or_default()
    }
}

impl std::fmt::Display for AudioRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_filename() {
        let audio = AudioRef::from_filename("abc.webm");
        assert_eq!(audio.as_str(), "/uploads/abc.webm");
        assert_eq!(audio.filename(), Some("abc.webm"));
        assert!(!audio.is_none());
    }

    #[test]
    fn test_none_ref() {
        let audio = AudioRef::none();
        assert!(audio.is_none());
        assert_eq!(audio.filename(), None);
        assert_eq!(audio.public_url("http://localhost:3000"), "");
    }

    #[test]
    fn test_public_url() {
        let audio = AudioRef::from_filename("abc.webm");
        assert_eq!(
            audio.public_url("http://localhost:3000"),
            "http://localhost:3000/uploads/abc.webm"
        );
        // 末尾斜杠不产生双斜杠
        assert_eq!(
            audio.public_url("http://localhost:3000/"),
            "http://localhost:3000/uploads/abc.webm"
        );
    }

    #[test]
    fn test_filename_rejects_foreign_paths() {
        assert_eq!(AudioRef::from_url_path("/elsewhere/a.webm").filename(), None);
        assert_eq!(AudioRef::from_url_path("/uploads/a/b.webm").filename(), None);
    }

    #[test]
    fn test_extension_preserved() {
        assert_eq!(AudioRef::extension_of("audio.webm"), ".webm");
        assert_eq!(AudioRef::extension_of("voice.OGG"), ".OGG");
        assert_eq!(AudioRef::extension_of("noext"), "");
    }
}
