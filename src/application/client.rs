//! 客户端应用服务
//!
//! 驱动 CardApiPort + AppSession：挂载时加载一次列表，
//! 任何突变都在 API 成功返回后才写入本地状态，失败只向调用方
//! 暴露一次（无重试、无乐观回滚）。录音走麦克风端口 + 录音机
//! 状态机，停止录音立即进入创建/更新流程。

use std::sync::Arc;
use thiserror::Error;

use crate::application::ports::{ApiClientError, CardApiPort, MicrophoneError, MicrophonePort};
use crate::domain::session::{AppSession, CardView, Recorder, RecorderError};

/// 客户端错误
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Api(#[from] ApiClientError),

    #[error(transparent)]
    Microphone(#[from] MicrophoneError),

    #[error(transparent)]
    Recorder(#[from] RecorderError),
}

/// 客户端应用
pub struct ClientApp {
    api: Arc<dyn CardApiPort>,
    microphone: Arc<dyn MicrophonePort>,
    session: AppSession,
    recorder: Recorder,
}

impl ClientApp {
    pub fn new(
        api: Arc<dyn CardApiPort>,
        microphone: Arc<dyn MicrophonePort>,
        password: impl AsRef<str>,
    ) -> Self {
        Self {
            api,
            microphone,
            session: AppSession::new(password),
            recorder: Recorder::new(),
        }
    }

    pub fn session(&self) -> &AppSession {
        &self.session
    }

    pub fn is_recording(&self) -> bool {
        self.recorder.is_recording()
    }

    // ========== 口令门 ==========

    pub fn key_pressed(&mut self, key: char) -> bool {
        self.session.key_pressed(key)
    }

    pub fn lock(&mut self) {
        self.session.lock();
    }

    // ========== 加载 ==========

    /// 挂载时调用一次；失败进入 error 阶段（行内展示）
    pub async fn load(&mut self) {
        match self.api.fetch_cards().await {
            Ok(cards) => self.session.loaded(cards),
            Err(e) => {
                tracing::error!(error = %e, "Failed to load cards");
                self.session.load_failed(e.to_string());
            }
        }
    }

    // ========== 录音 ==========

    /// 开始录音：先申请麦克风，被拒绝时保持 idle
    pub async fn start_recording(&mut self) -> Result<(), ClientError> {
        self.microphone.acquire().await?;
        self.recorder.start()?;
        Ok(())
    }

    /// 字节块到达事件
    pub fn capture_chunk(&mut self, data: &[u8]) -> Result<(), ClientError> {
        self.recorder.push_chunk(data)?;
        Ok(())
    }

    /// 停止录音并立即创建新卡片
    pub async fn stop_and_create(&mut self, text: &str) -> Result<CardView, ClientError> {
        let clip = self.recorder.stop()?;
        let card = self.api.create_card(text, Some(&clip)).await?;
        self.session.apply_created(card.clone());
        Ok(card)
    }

    /// 停止录音并立即更新已有卡片（替换文本与音频）
    pub async fn stop_and_update(&mut self, id: &str, text: &str) -> Result<(), ClientError> {
        let clip = self.recorder.stop()?;
        let card = self.api.update_card(id, text, Some(&clip)).await?;
        self.session.apply_updated(card);
        Ok(())
    }

    // ========== 无音频突变 ==========

    /// 只更新文本，服务端保留原有音频
    pub async fn update_text(&mut self, id: &str, text: &str) -> Result<(), ClientError> {
        let card = self.api.update_card(id, text, None).await?;
        self.session.apply_updated(card);
        Ok(())
    }

    /// 删除卡片
    pub async fn delete_card(&mut self, id: &str) -> Result<(), ClientError> {
        self.api.delete_card(id).await?;
        self.session.apply_deleted(id);
        Ok(())
    }
}
