//! 内置演示数据
//!
//! - DEMO_PROFILES: 演示 Profile 列表
//! - VOICES_BY_LANGUAGE: 按语言分组的音色目录
//! - VOICES: 音色目录的扁平化结果（只计算一次）

use once_cell::sync::Lazy;

use crate::domain::profile::{InputSchema, Profile, ToolSpec};
use crate::domain::voice::{FlattenedVoiceEntry, LanguageEntry, VoiceCatalog, VoiceEntry};

const FRIEND_PROMPT: &str = "You are a friend. The user and you will engage in a spoken dialog exchanging the transcripts of a natural real-time conversation. Keep your responses short, generally two or three sentences for chatty scenarios.";

const SIMPLE_DESCRIPTION: &str =
    "Simple demo profile with basic system prompt and toolUse like getDateTime";

static DEMO_PROFILES: Lazy<Vec<Profile>> = Lazy::new(|| {
    vec![
        Profile::new(
            "Default - get current time",
            SIMPLE_DESCRIPTION,
            "matthew",
            FRIEND_PROMPT,
        )
        .with_tool(ToolSpec::new(
            "getDateTool",
            "get information about the date and time",
            InputSchema::new(r#"{"type":"object","properties":{},"required":[]}"#),
        )),
        Profile::new("MCP - get location", SIMPLE_DESCRIPTION, "matthew", FRIEND_PROMPT)
            .with_tool(ToolSpec::new(
                "getLocationTool",
                "Search for places, addresses.",
                InputSchema::new(
                    r#"{"type": "object", "properties": {"tool": {"type": "string", "description": "The function name to search the location service. One of: search_places"}, "query": {"type": "string", "description": "The search query to find relevant information"}}, "required": ["tool","query"]}"#,
                ),
            )),
        // required 中的 "tool" 未在 properties 中声明，保留原值，由校验器报告
        Profile::new(
            "Strands Agents - get weather",
            SIMPLE_DESCRIPTION,
            "matthew",
            FRIEND_PROMPT,
        )
        .with_tool(ToolSpec::new(
            "externalAgent",
            "Get weather information for specific locations.",
            InputSchema::new(
                r#"{"type":"object","properties":{"query":{"type":"string","description":"The search query to find relevant information"}},"required":["tool","query"]}"#,
            ),
        )),
    ]
});

static VOICES_BY_LANGUAGE: Lazy<VoiceCatalog> = Lazy::new(|| {
    VoiceCatalog::new()
        .with_language(
            "English",
            LanguageEntry::new(
                "🇺🇸🇬🇧",
                vec![
                    VoiceEntry::new("Matthew", "matthew", "US", "Male"),
                    VoiceEntry::new("Tiffany", "tiffany", "US", "Female"),
                    VoiceEntry::new("Amy", "amy", "GB", "Female"),
                ],
            ),
        )
        .with_language(
            "French",
            LanguageEntry::new(
                "🇫🇷",
                vec![
                    VoiceEntry::new("Ambre", "ambre", "FR", "Female"),
                    VoiceEntry::new("Florian", "florian", "FR", "Male"),
                ],
            ),
        )
        .with_language(
            "Italian",
            LanguageEntry::new(
                "🇮🇹",
                vec![
                    VoiceEntry::new("Beatrice", "beatrice", "IT", "Female"),
                    VoiceEntry::new("Lorenzo", "lorenzo", "IT", "Male"),
                ],
            ),
        )
        .with_language(
            "German",
            LanguageEntry::new(
                "🇩🇪",
                vec![
                    VoiceEntry::new("Greta", "greta", "DE", "Female"),
                    VoiceEntry::new("Lennart", "lennart", "DE", "Male"),
                ],
            ),
        )
        .with_language(
            "Spanish",
            LanguageEntry::new(
                "🇪🇸",
                vec![
                    VoiceEntry::new("Lupe", "lupe", "ES", "Female"),
                    VoiceEntry::new("Carlos", "carlos", "ES", "Male"),
                ],
            ),
        )
});

static VOICES: Lazy<Vec<FlattenedVoiceEntry>> = Lazy::new(|| VOICES_BY_LANGUAGE.flatten());

/// 演示 Profile 列表
pub fn demo_profiles() -> &'static [Profile] {
    &DEMO_PROFILES
}

/// 按语言分组的音色目录
pub fn voices_by_language() -> &'static VoiceCatalog {
    &VOICES_BY_LANGUAGE
}

/// 扁平化的音色列表
pub fn voices() -> &'static [FlattenedVoiceEntry] {
    &VOICES
}
