//! HTTP Card Client - 调用卡片服务端 API
//!
//! 实现 CardApiPort trait，通过 HTTP 访问服务端:
//! GET    {base}/cards       列表
//! POST   {base}/cards       创建（multipart: text + 可选 audio）
//! PUT    {base}/cards/{id}  更新
//! DELETE {base}/cards/{id}  删除

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::application::ports::{ApiClientError, CardApiPort};
use crate::domain::session::{CardView, RecordedClip};

/// 服务端错误响应体
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP 卡片客户端配置
#[derive(Debug, Clone)]
pub struct HttpCardClientConfig {
    /// API Base URL（含 /api 前缀）
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpCardClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api".to_string(),
            timeout_secs: 30,
        }
    }
}

impl HttpCardClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP 卡片客户端
pub struct HttpCardClient {
    client: Client,
    config: HttpCardClientConfig,
}

impl HttpCardClient {
    /// 创建新的 HTTP 卡片客户端
    pub fn new(config: HttpCardClientConfig) -> Result<Self, ApiClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiClientError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 使用默认配置创建客户端
    pub fn with_default_config() -> Result<Self, ApiClientError> {
        Self::new(HttpCardClientConfig::default())
    }

    fn cards_url(&self) -> String {
        format!("{}/cards", self.config.base_url.trim_end_matches('/'))
    }

    fn card_url(&self, id: &str) -> String {
        format!("{}/{}", self.cards_url(), id)
    }

    /// 构造 multipart 表单（text 必填，audio 可选）
    fn card_form(text: &str, audio: Option<&RecordedClip>) -> Result<Form, ApiClientError> {
        let mut form = Form::new().text("text", text.to_string());

        if let Some(clip) = audio {
            let part = Part::bytes(clip.data.clone())
                .file_name(clip.upload_filename())
                .mime_str(&clip.mime_type)
                .map_err(|e| ApiClientError::DecodeError(e.to_string()))?;
            form = form.part("audio", part);
        }

        Ok(form)
    }

    fn map_send_error(e: reqwest::Error) -> ApiClientError {
        if e.is_timeout() {
            ApiClientError::Timeout
        } else {
            ApiClientError::NetworkError(e.to_string())
        }
    }

    /// 非 2xx 响应换算为 Status 错误（带服务端错误消息）
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
        };

        Err(ApiClientError::Status {
            code: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl CardApiPort for HttpCardClient {
    async fn fetch_cards(&self) -> Result<Vec<CardView>, ApiClientError> {
        let response = self
            .client
            .get(self.cards_url())
            .send()
            .await
            .map_err(Self::map_send_error)?;

        Self::check_status(response)
            .await?
            .json::<Vec<CardView>>()
            .await
            .map_err(|e| ApiClientError::DecodeError(e.to_string()))
    }

    async fn create_card(
        &self,
        text: &str,
        audio: Option<&RecordedClip>,
    ) -> Result<CardView, ApiClientError> {
        let form = Self::card_form(text, audio)?;

        let response = self
            .client
            .post(self.cards_url())
            .multipart(form)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        Self::check_status(response)
            .await?
            .json::<CardView>()
            .await
            .map_err(|e| ApiClientError::DecodeError(e.to_string()))
    }

    async fn update_card(
        &self,
        id: &str,
        text: &str,
        audio: Option<&RecordedClip>,
    ) -> Result<CardView, ApiClientError> {
        let form = Self::card_form(text, audio)?;

        let response = self
            .client
            .put(self.card_url(id))
            .multipart(form)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        Self::check_status(response)
            .await?
            .json::<CardView>()
            .await
            .map_err(|e| ApiClientError::DecodeError(e.to_string()))
    }

    async fn delete_card(&self, id: &str) -> Result<(), ApiClientError> {
        let response = self
            .client
            .delete(self.card_url(id))
            .send()
            .await
            .map_err(Self::map_send_error)?;

        Self::check_status(response).await?;
        Ok(())
    }
}
