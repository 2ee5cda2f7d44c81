//! Session Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecorderError {
    #[error("录音已在进行中")]
    AlreadyRecording,

    #[error("当前未在录音")]
    NotRecording,
}
