//! 目录完整性校验
//!
//! 检查 Profile 列表与音色目录之间的约束，只报告问题，不修改数据。

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use super::profile::Profile;
use super::voice::VoiceCatalog;

/// 单条校验问题
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogIssue {
    DuplicateProfileName {
        profile: String,
    },
    UnresolvedVoiceId {
        profile: String,
        voice_id: String,
    },
    EmptyToolConfig {
        profile: String,
    },
    DuplicateToolName {
        profile: String,
        tool: String,
    },
    InvalidInputSchema {
        profile: String,
        tool: String,
        reason: String,
    },
    RequiredNotDeclared {
        profile: String,
        tool: String,
        property: String,
    },
    DuplicateVoiceValue {
        value: String,
        language: String,
    },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateProfileName { profile } => {
                write!(f, "duplicate profile name: {profile}")
            }
            Self::UnresolvedVoiceId { profile, voice_id } => {
                write!(f, "profile {profile} references unknown voice {voice_id}")
            }
            Self::EmptyToolConfig { profile } => {
                write!(f, "profile {profile} declares no tools")
            }
            Self::DuplicateToolName { profile, tool } => {
                write!(f, "profile {profile} declares tool {tool} more than once")
            }
            Self::InvalidInputSchema {
                profile,
                tool,
                reason,
            } => write!(f, "profile {profile} tool {tool} has invalid inputSchema: {reason}"),
            Self::RequiredNotDeclared {
                profile,
                tool,
                property,
            } => write!(
                f,
                "profile {profile} tool {tool} requires undeclared property {property}"
            ),
            Self::DuplicateVoiceValue { value, language } => {
                write!(f, "voice value {value} repeated in {language}")
            }
        }
    }
}

/// 校验报告
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<CatalogIssue>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

/// 校验 Profile 列表与音色目录
pub fn validate_catalog(profiles: &[Profile], voices: &VoiceCatalog) -> ValidationReport {
    let mut issues = Vec::new();

    let mut seen_values = HashSet::new();
    for (language, entry) in voices.iter() {
        for voice in &entry.voices {
            if !seen_values.insert(voice.value.as_str()) {
                issues.push(CatalogIssue::DuplicateVoiceValue {
                    value: voice.value.clone(),
                    language: language.to_string(),
                });
            }
        }
    }

    let mut seen_names = HashSet::new();
    for profile in profiles {
        let name = profile.name();
        if !seen_names.insert(name) {
            issues.push(CatalogIssue::DuplicateProfileName {
                profile: name.to_string(),
            });
        }

        if !seen_values.contains(profile.voice_id()) {
            issues.push(CatalogIssue::UnresolvedVoiceId {
                profile: name.to_string(),
                voice_id: profile.voice_id().to_string(),
            });
        }

        if profile.tool_config().is_empty() {
            issues.push(CatalogIssue::EmptyToolConfig {
                profile: name.to_string(),
            });
        }

        let mut seen_tools = HashSet::new();
        for spec in profile.tool_config().specs() {
            if !seen_tools.insert(spec.name()) {
                issues.push(CatalogIssue::DuplicateToolName {
                    profile: name.to_string(),
                    tool: spec.name().to_string(),
                });
            }

            match spec.parse_schema() {
                Ok(schema) => {
                    if let Err(e) = schema.compile() {
                        issues.push(CatalogIssue::InvalidInputSchema {
                            profile: name.to_string(),
                            tool: spec.name().to_string(),
                            reason: e.to_string(),
                        });
                    }
                    for property in schema.undeclared_required() {
                        issues.push(CatalogIssue::RequiredNotDeclared {
                            profile: name.to_string(),
                            tool: spec.name().to_string(),
                            property: property.to_string(),
                        });
                    }
                }
                Err(e) => issues.push(CatalogIssue::InvalidInputSchema {
                    profile: name.to_string(),
                    tool: spec.name().to_string(),
                    reason: e.to_string(),
                }),
            }
        }
    }

    ValidationReport { issues }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::{InputSchema, ToolSpec};
    use crate::domain::voice::{LanguageEntry, VoiceEntry};

    const EMPTY_SCHEMA: &str = r#"{"type":"object","properties":{},"required":[]}"#;

    fn catalog() -> VoiceCatalog {
        VoiceCatalog::new().with_language(
            "English",
            LanguageEntry::new("🇺🇸", vec![VoiceEntry::new("Matthew", "matthew", "US", "Male")]),
        )
    }

    fn profile(name: &str, voice: &str, schema: &str) -> Profile {
        Profile::new(name, "demo", voice, "prompt")
            .with_tool(ToolSpec::new("tool", "desc", InputSchema::new(schema)))
    }

    #[test]
    fn test_clean_catalog() {
        let report = validate_catalog(&[profile("a", "matthew", EMPTY_SCHEMA)], &catalog());
        assert!(report.is_clean());
    }

    #[test]
    fn test_reports_unresolved_voice_and_duplicate_name() {
        let profiles = [
            profile("a", "matthew", EMPTY_SCHEMA),
            profile("a", "nobody", EMPTY_SCHEMA),
        ];
        let report = validate_catalog(&profiles, &catalog());
        assert_eq!(
            report.issues,
            vec![
                CatalogIssue::DuplicateProfileName {
                    profile: "a".to_string()
                },
                CatalogIssue::UnresolvedVoiceId {
                    profile: "a".to_string(),
                    voice_id: "nobody".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_reports_schema_problems() {
        let profiles = [
            profile("bad-json", "matthew", "{"),
            profile(
                "undeclared",
                "matthew",
                r#"{"type":"object","properties":{"query":{"type":"string"}},"required":["tool","query"]}"#,
            ),
        ];
        let report = validate_catalog(&profiles, &catalog());
        assert_eq!(report.len(), 2);
        assert!(matches!(
            report.issues[0],
            CatalogIssue::InvalidInputSchema { ref profile, .. } if profile == "bad-json"
        ));
        assert_eq!(
            report.issues[1],
            CatalogIssue::RequiredNotDeclared {
                profile: "undeclared".to_string(),
                tool: "tool".to_string(),
                property: "tool".to_string(),
            }
        );
    }

    #[test]
    fn test_reports_schema_that_does_not_compile() {
        let schema = r#"{"type":"objekt","properties":{},"required":[]}"#;
        let report = validate_catalog(&[profile("typo", "matthew", schema)], &catalog());
        assert_eq!(report.len(), 1);
        assert!(matches!(
            report.issues[0],
            CatalogIssue::InvalidInputSchema { ref profile, ref tool, .. }
                if profile == "typo" && tool == "tool"
        ));

        let parsed = ToolSpec::new("tool", "desc", InputSchema::new(schema))
            .parse_schema()
            .unwrap();
        assert!(matches!(
            parsed.validate_arguments(&serde_json::json!({})),
            Err(crate::domain::profile::ProfileError::SchemaParse { .. })
        ));
    }

    #[test]
    fn test_reports_empty_tools_and_duplicate_tools() {
        let empty = Profile::new("empty", "demo", "matthew", "prompt");
        let twice = profile("twice", "matthew", EMPTY_SCHEMA).with_tool(ToolSpec::new(
            "tool",
            "desc",
            InputSchema::new(EMPTY_SCHEMA),
        ));
        let report = validate_catalog(&[empty, twice], &catalog());
        assert_eq!(
            report.issues,
            vec![
                CatalogIssue::EmptyToolConfig {
                    profile: "empty".to_string()
                },
                CatalogIssue::DuplicateToolName {
                    profile: "twice".to_string(),
                    tool: "tool".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_reports_duplicate_voice_value() {
        let voices = catalog().with_language(
            "French",
            LanguageEntry::new("🇫🇷", vec![VoiceEntry::new("Matthieu", "matthew", "FR", "Male")]),
        );
        let report = validate_catalog(&[], &voices);
        assert_eq!(
            report.issues,
            vec![CatalogIssue::DuplicateVoiceValue {
                value: "matthew".to_string(),
                language: "French".to_string(),
            }]
        );
    }

    #[test]
    fn test_issue_serializes_with_kind_tag() {
        let issue = CatalogIssue::EmptyToolConfig {
            profile: "p".to_string(),
        };
        let value = serde_json::to_value(&issue).unwrap();
        assert_eq!(value["kind"], "empty_tool_config");
        assert_eq!(value["profile"], "p");
    }
}
