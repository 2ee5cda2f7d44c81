//! Fake Microphone - 可控的麦克风访问适配器
//!
//! 实现 MicrophonePort trait。真实的采集设备在浏览器/平台侧，
//! 本适配器用于本地驱动与测试：授权结果可切换，便于模拟
//! 用户拒绝授权的路径。

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::application::ports::{MicrophoneError, MicrophonePort};

/// 可控麦克风
pub struct FakeMicrophone {
    granted: AtomicBool,
}

impl FakeMicrophone {
    /// 始终授权
    pub fn granting() -> Self {
        Self {
            granted: AtomicBool::new(true),
        }
    }

    /// 始终拒绝
    pub fn denying() -> Self {
        Self {
            granted: AtomicBool::new(false),
        }
    }

    /// 切换授权结果
    pub fn set_granted(&self, granted: bool) {
        self.granted.store(granted, Ordering::SeqCst);
    }
}

#[async_trait]
impl MicrophonePort for FakeMicrophone {
    async fn acquire(&self) -> Result<(), MicrophoneError> {
        if self.granted.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(MicrophoneError::PermissionDenied)
        }
    }
}
