//! Card Command Handlers

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::{AudioUpload, CreateCard, DeleteCard, UpdateCard};
use crate::application::error::ApplicationError;
use crate::application::ports::{AudioStoragePort, CardRecord, CardRepositoryPort};
use crate::domain::card::AudioRef;

// ============================================================================
// CreateCard
// ============================================================================

/// CreateCard Handler
pub struct CreateCardHandler {
    card_repo: Arc<dyn CardRepositoryPort>,
    audio_storage: Arc<dyn AudioStoragePort>,
}

impl CreateCardHandler {
    pub fn new(
        card_repo: Arc<dyn CardRepositoryPort>,
        audio_storage: Arc<dyn AudioStoragePort>,
    ) -> Self {
        Self {
            card_repo,
            audio_storage,
        }
    }

    pub async fn handle(&self, command: CreateCard) -> Result<CardRecord, ApplicationError> {
        let audio = store_audio(&*self.audio_storage, command.audio.as_ref()).await?;

        let card = CardRecord {
            id: Uuid::new_v4(),
            text: command.text,
            audio: audio.unwrap_or_else(AudioRef::none),
            created_at: Utc::now(),
            updated_at: None,
        };

        self.card_repo.insert(&card).await?;

        tracing::info!(
            card_id = %card.id,
            has_audio = !card.audio.is_none(),
            "Card created"
        );

        Ok(card)
    }
}

// ============================================================================
// UpdateCard
// ============================================================================

/// UpdateCard Handler
pub struct UpdateCardHandler {
    card_repo: Arc<dyn CardRepositoryPort>,
    audio_storage: Arc<dyn AudioStoragePort>,
}

impl UpdateCardHandler {
    pub fn new(
        card_repo: Arc<dyn CardRepositoryPort>,
        audio_storage: Arc<dyn AudioStoragePort>,
    ) -> Self {
        Self {
            card_repo,
            audio_storage,
        }
    }

    pub async fn handle(&self, command: UpdateCard) -> Result<CardRecord, ApplicationError> {
        let mut card = self
            .card_repo
            .find_by_id(command.card_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Card", command.card_id))?;

        let previous_audio = card.audio.clone();
        let new_audio = store_audio(&*self.audio_storage, command.audio.as_ref()).await?;

        card.text = command.text;
        if let Some(audio) = new_audio {
            card.audio = audio;
        }
        card.updated_at = Some(Utc::now());

        self.card_repo.update(&card).await?;

        // 替换音频后旧 Blob 成为孤儿，尽力清理，失败不影响请求
        if card.audio != previous_audio {
            remove_blob(&*self.audio_storage, &previous_audio).await;
        }

        tracing::info!(
            card_id = %card.id,
            audio_replaced = card.audio != previous_audio,
            "Card updated"
        );

        Ok(card)
    }
}

// ============================================================================
// DeleteCard
// ============================================================================

/// DeleteCard Handler
pub struct DeleteCardHandler {
    card_repo: Arc<dyn CardRepositoryPort>,
    audio_storage: Arc<dyn AudioStoragePort>,
}

impl DeleteCardHandler {
    pub fn new(
        card_repo: Arc<dyn CardRepositoryPort>,
        audio_storage: Arc<dyn AudioStoragePort>,
    ) -> Self {
        Self {
            card_repo,
            audio_storage,
        }
    }

    pub async fn handle(&self, command: DeleteCard) -> Result<(), ApplicationError> {
        let card = self
            .card_repo
            .find_by_id(command.card_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Card", command.card_id))?;

        self.card_repo.delete(card.id).await?;

        // 记录已删除，关联 Blob 尽力清理
        remove_blob(&*self.audio_storage, &card.audio).await;

        tracing::info!(card_id = %card.id, "Card deleted");

        Ok(())
    }
}

// ============================================================================
// 内部工具
// ============================================================================

/// 保存上传的音频并换算为音频引用
async fn store_audio(
    storage: &dyn AudioStoragePort,
    upload: Option<&AudioUpload>,
) -> Result<Option<AudioRef>, ApplicationError> {
    match upload {
        Some(upload) => {
            let blob = storage.store(&upload.data, &upload.original_filename).await?;
            Ok(Some(AudioRef::from_filename(&blob.filename)))
        }
        None => Ok(None),
    }
}

/// 尽力删除引用的 Blob，失败仅告警
async fn remove_blob(storage: &dyn AudioStoragePort, audio: &AudioRef) {
    if let Some(filename) = audio.filename() {
        if let Err(e) = storage.remove(filename).await {
            tracing::warn!(filename = %filename, error = %e, "Failed to delete audio blob");
        }
    }
}
