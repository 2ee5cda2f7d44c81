//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateCardHandler, DeleteCardHandler, UpdateCardHandler,
    // Query handlers
    ListCardsHandler,
    // Ports
    AudioStoragePort, CardRepositoryPort,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub card_repo: Arc<dyn CardRepositoryPort>,
    pub audio_storage: Arc<dyn AudioStoragePort>,

    // ========== Command Handlers ==========
    pub create_card_handler: CreateCardHandler,
    pub update_card_handler: UpdateCardHandler,
    pub delete_card_handler: DeleteCardHandler,

    // ========== Query Handlers ==========
    pub list_cards_handler: ListCardsHandler,

    /// 音频 URL 重写时使用的公开 Base URL
    pub public_base_url: String,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        card_repo: Arc<dyn CardRepositoryPort>,
        audio_storage: Arc<dyn AudioStoragePort>,
        public_base_url: impl Into<String>,
    ) -> Self {
        Self {
            // Ports
            card_repo: card_repo.clone(),
            audio_storage: audio_storage.clone(),

            // Command handlers
            create_card_handler: CreateCardHandler::new(card_repo.clone(), audio_storage.clone()),
            update_card_handler: UpdateCardHandler::new(card_repo.clone(), audio_storage.clone()),
            delete_card_handler: DeleteCardHandler::new(card_repo.clone(), audio_storage.clone()),

            // Query handlers
            list_cards_handler: ListCardsHandler::new(card_repo),

            public_base_url: public_base_url.into(),
        }
    }
}
