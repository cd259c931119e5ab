//! Voice Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VoiceError {
    #[error("音色不存在: {0}")]
    NotFound(String),

    #[error("语言不存在: {0}")]
    LanguageNotFound(String),
}
