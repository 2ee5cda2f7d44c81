//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod audio_storage;
mod card_api;
mod microphone;
mod repositories;

pub use audio_storage::{AudioStorageError, AudioStoragePort, StoredBlob};
pub use card_api::{ApiClientError, CardApiPort};
pub use microphone::{MicrophoneError, MicrophonePort};
pub use repositories::{CardRecord, CardRepositoryPort, RepositoryError};
