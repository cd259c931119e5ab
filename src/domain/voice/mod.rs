//! Voice Context - 音色目录上下文
//!
//! 职责:
//! - 按语言分组的音色目录
//! - 扁平化派生（带口音的显示标签）
//! - 按 value 查找音色

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::{flatten, VoiceCatalog};
pub use errors::VoiceError;
pub use value_objects::{FlattenedVoiceEntry, LanguageEntry, VoiceEntry};
