//! Voice Context - Value Objects

use serde::{Deserialize, Serialize};

/// 音色条目
///
/// `value` 是稳定的小写标识，在整个目录（所有语言）中唯一；
/// `gender` 为自由文本，不做枚举约束。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceEntry {
    pub label: String,
    pub value: String,
    pub accent: String,
    pub gender: String,
}

impl VoiceEntry {
    pub fn new(
        label: impl Into<String>,
        value: impl Into<String>,
        accent: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            accent: accent.into(),
            gender: gender.into(),
        }
    }

    /// 带口音的显示标签，如 `Matthew (US)`
    ///
    /// accent 为空时同样格式化为 `Name ()`
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.label, self.accent)
    }
}

/// 语言条目：国旗 + 有序音色列表
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub flag: String,
    #[serde(default)]
    pub voices: Vec<VoiceEntry>,
}

impl LanguageEntry {
    pub fn new(flag: impl Into<String>, voices: Vec<VoiceEntry>) -> Self {
        Self {
            flag: flag.into(),
            voices,
        }
    }
}

/// 扁平化后的音色条目（派生数据，不存储）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlattenedVoiceEntry {
    /// `"<原始 label> (<accent>)"`
    pub label: String,
    pub value: String,
    pub accent: String,
    pub gender: String,
    /// 来源语言
    pub language: String,
}

impl FlattenedVoiceEntry {
    pub fn from_voice(language: &str, voice: &VoiceEntry) -> Self {
        Self {
            label: voice.display_label(),
            value: voice.value.clone(),
            accent: voice.accent.clone(),
            gender: voice.gender.clone(),
            language: language.to_string(),
        }
    }
}
