//! Microphone Port - 客户端出站端口
//!
//! 录音开始前的麦克风访问申请。被拒绝时录音机保持 idle，
//! 错误向用户报告一次。

use async_trait::async_trait;
use thiserror::Error;

/// 麦克风访问错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MicrophoneError {
    #[error("Microphone permission denied")]
    PermissionDenied,

    #[error("Microphone device unavailable: {0}")]
    DeviceUnavailable(String),
}

/// Microphone Port - 出站端口
#[async_trait]
pub trait MicrophonePort: Send + Sync {
    /// 申请麦克风访问
    async fn acquire(&self) -> Result<(), MicrophoneError>;
}
