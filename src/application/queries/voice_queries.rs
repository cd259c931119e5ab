//! Voice Queries

/// 列出扁平化音色查询
#[derive(Debug, Clone)]
pub struct ListVoices;

/// 列出按语言分组的音色目录查询
#[derive(Debug, Clone)]
pub struct ListVoicesByLanguage;

/// 获取单个语言的音色查询
#[derive(Debug, Clone)]
pub struct GetLanguage {
    pub language: String,
}

/// 根据 value 获取音色查询
#[derive(Debug, Clone)]
pub struct GetVoice {
    pub value: String,
}
