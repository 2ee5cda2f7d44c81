//! Session Context - 客户端会话限界上下文
//!
//! 职责:
//! - 口令门：键盘序列滑动窗口匹配，控制编辑入口显隐
//! - 录音机：idle -> recording -> idle 一次性状态机
//! - 会话状态：加载阶段 + 本地卡片列表

mod app;
mod errors;
mod gate;
mod recorder;

pub use app::{AppSession, CardView, SessionPhase};
pub use errors::RecorderError;
pub use gate::PasswordGate;
pub use recorder::{RecordedClip, Recorder, RecorderState, DEFAULT_MIME_TYPE};
