//! Card Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{CardRecord, CardRepositoryPort};
use crate::application::queries::ListCards;

/// ListCards Handler
///
/// 无中间突变时重复查询返回完全一致的有序结果
pub struct ListCardsHandler {
    card_repo: Arc<dyn CardRepositoryPort>,
}

impl ListCardsHandler {
    pub fn new(card_repo: Arc<dyn CardRepositoryPort>) -> Self {
        Self { card_repo }
    }

    pub async fn handle(&self, _query: ListCards) -> Result<Vec<CardRecord>, ApplicationError> {
        Ok(self.card_repo.find_all().await?)
    }
}
