//! Vocard - 语音抽认卡系统
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Card Context: 卡片管理上下文
//! - Session Context: 客户端会话上下文（口令门、录音机、列表状态）
//!
//! 应用层 (application/):
//! - Ports: 端口定义（CardRepository, AudioStorage, CardApi, Microphone）
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//! - Client: 客户端应用服务
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API + 音频静态文件挂载
//! - Persistence: 单 JSON 文档卡片存储
//! - Adapters: 文件系统 Blob 存储、HTTP 卡片客户端、麦克风

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
