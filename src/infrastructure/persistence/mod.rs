//! Persistence Layer - 数据持久化
//!
//! 单 JSON 文档存储实现

pub mod json;

pub use self::json::JsonCardStore;
