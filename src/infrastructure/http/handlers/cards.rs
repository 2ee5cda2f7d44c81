//! Card HTTP Handlers

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{AudioUpload, CreateCard, DeleteCard, ListCards, UpdateCard};
use crate::infrastructure::http::dto::CardResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// multipart 表单内容（text 必填，audio 可选）
struct CardForm {
    text: String,
    audio: Option<AudioUpload>,
}

/// 读取卡片 multipart 表单
///
/// 无关字段忽略；text 字段缺失（空串合法）报 400
async fn read_card_form(mut multipart: Multipart) -> Result<CardForm, ApiError> {
    let mut text: Option<String> = None;
    let mut audio: Option<AudioUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let field_name = field.name().unwrap_or_default().to_string();

        match field_name.as_str() {
            "text" => {
                text = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ApiError::BadRequest(format!("Failed to read text: {}", e)))?,
                );
            }
            "audio" => {
                let original_filename = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read audio: {}", e)))?
                    .to_vec();

                audio = Some(AudioUpload {
                    data,
                    original_filename,
                });
            }
            _ => {}
        }
    }

    let text = text.ok_or_else(|| ApiError::BadRequest("Text is required".to_string()))?;

    Ok(CardForm { text, audio })
}

/// 获取卡片列表
pub async fn list_cards(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CardResponse>>, ApiError> {
    let cards = state.list_cards_handler.handle(ListCards).await?;

    let responses: Vec<CardResponse> = cards
        .into_iter()
        .map(|c| CardResponse::from_record(c, &state.public_base_url))
        .collect();

    Ok(Json(responses))
}

/// 创建卡片
pub async fn create_card(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<CardResponse>, ApiError> {
    let form = read_card_form(multipart).await?;

    let command = CreateCard {
        text: form.text,
        audio: form.audio,
    };

    let card = state.create_card_handler.handle(command).await?;

    Ok(Json(CardResponse::from_record(card, &state.public_base_url)))
}

/// 更新卡片
pub async fn update_card(
    State(state): State<Arc<AppState>>,
    Path(card_id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<CardResponse>, ApiError> {
    let form = read_card_form(multipart).await?;

    let command = UpdateCard {
        card_id,
        text: form.text,
        audio: form.audio,
    };

    let card = state.update_card_handler.handle(command).await?;

    Ok(Json(CardResponse::from_record(card, &state.public_base_url)))
}

/// 删除卡片
pub async fn delete_card(
    State(state): State<Arc<AppState>>,
    Path(card_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state
        .delete_card_handler
        .handle(DeleteCard { card_id })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
