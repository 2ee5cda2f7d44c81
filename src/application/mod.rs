//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（Repository、AudioStorage、CardApi、Microphone）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - client: 客户端应用服务（会话 + 录音 + API 驱动）
//! - error: 应用层错误定义

pub mod client;
pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Card commands
    AudioUpload,
    CreateCard,
    DeleteCard,
    UpdateCard,
    // Handlers
    handlers::{CreateCardHandler, DeleteCardHandler, UpdateCardHandler},
};

pub use client::{ClientApp, ClientError};

pub use error::ApplicationError;

pub use ports::{
    // Audio storage
    AudioStorageError,
    AudioStoragePort,
    StoredBlob,
    // Card API (client side)
    ApiClientError,
    CardApiPort,
    // Microphone
    MicrophoneError,
    MicrophonePort,
    // Repositories
    CardRecord,
    CardRepositoryPort,
    RepositoryError,
};

pub use queries::{
    // Card queries
    ListCards,
    // Handlers
    handlers::ListCardsHandler,
};
