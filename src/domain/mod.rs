//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Card Context: 卡片管理
//! - Session Context: 客户端会话（口令门、录音机、卡片列表状态）

pub mod card;
pub mod session;
