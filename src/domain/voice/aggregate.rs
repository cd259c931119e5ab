//! Voice Context - Aggregate Root

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{FlattenedVoiceEntry, LanguageEntry, VoiceEntry};

/// 音色目录：语言名 -> LanguageEntry
///
/// 不变量:
/// - 语言按插入顺序迭代（序列化为 JSON 对象时键顺序不变）
/// - 重复插入同名语言时原地替换，位置不变
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceCatalog {
    languages: Vec<(String, LanguageEntry)>,
}

impl VoiceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入语言条目，返回被替换的旧条目
    pub fn insert(
        &mut self,
        language: impl Into<String>,
        entry: LanguageEntry,
    ) -> Option<LanguageEntry> {
        let language = language.into();
        match self.languages.iter().position(|(name, _)| *name == language) {
            Some(index) => Some(std::mem::replace(&mut self.languages[index].1, entry)),
            None => {
                self.languages.push((language, entry));
                None
            }
        }
    }

    pub fn with_language(mut self, language: impl Into<String>, entry: LanguageEntry) -> Self {
        self.insert(language, entry);
        self
    }

    pub fn get(&self, language: &str) -> Option<&LanguageEntry> {
        self.languages
            .iter()
            .find(|(name, _)| name == language)
            .map(|(_, entry)| entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageEntry)> {
        self.languages
            .iter()
            .map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn language_names(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// 所有语言的音色总数
    pub fn voice_count(&self) -> usize {
        self.languages
            .iter()
            .map(|(_, entry)| entry.voices.len())
            .sum()
    }

    /// 按 value 查找音色，返回 (语言, 音色)
    pub fn find_voice(&self, value: &str) -> Option<(&str, &VoiceEntry)> {
        self.iter().find_map(|(language, entry)| {
            entry
                .voices
                .iter()
                .find(|voice| voice.value == value)
                .map(|voice| (language, voice))
        })
    }

    pub fn contains_voice(&self, value: &str) -> bool {
        self.find_voice(value).is_some()
    }

    pub fn flatten(&self) -> Vec<FlattenedVoiceEntry> {
        flatten(self)
    }
}

/// 扁平化音色目录
///
/// 先按语言插入顺序，再按各语言 voices 的声明顺序输出，
/// label 改写为 `"{label} ({accent})"`。纯函数，空目录返回空列表。
pub fn flatten(catalog: &VoiceCatalog) -> Vec<FlattenedVoiceEntry> {
    catalog
        .iter()
        .flat_map(|(language, entry)| {
            entry
                .voices
                .iter()
                .map(move |voice| FlattenedVoiceEntry::from_voice(language, voice))
        })
        .collect()
}

impl Serialize for VoiceCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.languages.len()))?;
        for (language, entry) in &self.languages {
            map.serialize_entry(language, entry)?;
        }
        map.end()
    }
}

struct VoiceCatalogVisitor;

impl<'de> Visitor<'de> for VoiceCatalogVisitor {
    type Value = VoiceCatalog;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of language name to language entry")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut catalog = VoiceCatalog::new();
        while let Some((language, entry)) = access.next_entry::<String, LanguageEntry>()? {
            catalog.insert(language, entry);
        }
        Ok(catalog)
    }
}

impl<'de> Deserialize<'de> for VoiceCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(VoiceCatalogVisitor)
    }
}
