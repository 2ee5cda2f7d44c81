//! Session Context - 录音机状态机
//!
//! idle -> recording -> idle，一次性、无暂停。由外部命令驱动：
//! start / push_chunk（字节块到达事件）/ stop（用户同步动作）。
//! 与具体平台的采集 API 无关；麦克风权限在进入 recording 之前
//! 由调用方通过 MicrophonePort 申请，被拒绝时状态保持 idle。

use super::errors::RecorderError;

/// 默认采集 MIME 类型
pub const DEFAULT_MIME_TYPE: &str = "audio/webm;codecs=opus";

/// 录音机状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecorderState {
    /// 空闲
    Idle,
    /// 录音中
    Recording,
}

impl RecorderState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecorderState::Idle => "idle",
            RecorderState::Recording => "recording",
        }
    }
}

/// 录音产物 - 单个完整的音频对象
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedClip {
    pub data: Vec<u8>,
    pub mime_type: String,
}

impl RecordedClip {
    /// 上传时使用的文件名（扩展名决定 Blob 存储名的后缀）
    pub fn upload_filename(&self) -> &'static str {
        "audio.webm"
    }
}

/// 录音机
///
/// 每个卡片/新增表单至多存活一个实例；重复 start 由状态机拒绝
#[derive(Debug)]
pub struct Recorder {
    state: RecorderState,
    chunks: Vec<u8>,
    mime_type: String,
}

impl Recorder {
    pub fn new() -> Self {
        Self::with_mime_type(DEFAULT_MIME_TYPE)
    }

    pub fn with_mime_type(mime_type: impl Into<String>) -> Self {
        Self {
            state: RecorderState::Idle,
            chunks: Vec::new(),
            mime_type: mime_type.into(),
        }
    }

    pub fn state(&self) -> RecorderState {
        self.state
    }

    pub fn is_recording(&self) -> bool {
        self.state == RecorderState::Recording
    }

    /// 开始录音
    pub fn start(&mut self) -> Result<(), RecorderError> {
        if self.state == RecorderState::Recording {
            return Err(RecorderError::AlreadyRecording);
        }
        self.chunks.clear();
        self.state = RecorderState::Recording;
        Ok(())
    }

    /// 字节块到达（空块忽略）
    pub fn push_chunk(&mut self, data: &[u8]) -> Result<(), RecorderError> {
        if self.state != RecorderState::Recording {
            return Err(RecorderError::NotRecording);
        }
        if !data.is_empty() {
            self.chunks.extend_from_slice(data);
        }
        Ok(())
    }

    /// 停止录音，产出单个音频对象并回到 idle
    pub fn stop(&mut self) -> Result<RecordedClip, RecorderError> {
        if self.state != RecorderState::Recording {
            return Err(RecorderError::NotRecording);
        }
        self.state = RecorderState::Idle;
        Ok(RecordedClip {
            data: std::mem::take(&mut self.chunks),
            mime_type: self.mime_type.clone(),
        })
    }
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}
