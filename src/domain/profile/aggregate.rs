//! Profile Context - Aggregate Root

use serde::{Deserialize, Serialize};

use super::ToolSpec;

/// toolConfig.tools 中的单个条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolEntry {
    pub tool_spec: ToolSpec,
}

/// 工具配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolConfig {
    #[serde(default)]
    pub tools: Vec<ToolEntry>,
}

impl ToolConfig {
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn specs(&self) -> impl Iterator<Item = &ToolSpec> {
        self.tools.iter().map(|entry| &entry.tool_spec)
    }
}

/// 演示 Profile 聚合根
///
/// voiceId 在声明时不校验，是否能在音色目录中解析由使用方负责。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    name: String,
    description: String,
    voice_id: String,
    system_prompt: String,
    #[serde(default)]
    tool_config: ToolConfig,
}

impl Profile {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        voice_id: impl Into<String>,
        system_prompt: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            voice_id: voice_id.into(),
            system_prompt: system_prompt.into(),
            tool_config: ToolConfig::default(),
        }
    }

    /// 追加一个工具声明
    pub fn with_tool(mut self, tool_spec: ToolSpec) -> Self {
        self.tool_config.tools.push(ToolEntry { tool_spec });
        self
    }

    /// 按名称查找工具
    pub fn find_tool(&self, name: &str) -> Option<&ToolSpec> {
        self.tool_config.specs().find(|spec| spec.name() == name)
    }

    // Getters
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn voice_id(&self) -> &str {
        &self.voice_id
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn tool_config(&self) -> &ToolConfig {
        &self.tool_config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::InputSchema;

    fn sample_profile() -> Profile {
        Profile::new("Demo", "demo profile", "matthew", "You are a friend.").with_tool(
            ToolSpec::new(
                "getDateTool",
                "get information about the date and time",
                InputSchema::new(r#"{"type":"object","properties":{},"required":[]}"#),
            ),
        )
    }

    #[test]
    fn test_profile_serializes_with_wire_keys() {
        let value = serde_json::to_value(sample_profile()).unwrap();
        assert_eq!(value["voiceId"], "matthew");
        assert_eq!(value["systemPrompt"], "You are a friend.");
        assert_eq!(
            value["toolConfig"]["tools"][0]["toolSpec"]["name"],
            "getDateTool"
        );
        assert!(value["toolConfig"]["tools"][0]["toolSpec"]["inputSchema"]["json"].is_string());
    }

    #[test]
    fn test_profile_deserializes_from_wire_shape() {
        let raw = r#"{
            "name": "Demo",
            "description": "demo profile",
            "voiceId": "amy",
            "systemPrompt": "Hi",
            "toolConfig": { "tools": [] }
        }"#;
        let profile: Profile = serde_json::from_str(raw).unwrap();
        assert_eq!(profile.voice_id(), "amy");
        assert!(profile.tool_config().is_empty());
    }

    #[test]
    fn test_find_tool() {
        let profile = sample_profile();
        assert!(profile.find_tool("getDateTool").is_some());
        assert!(profile.find_tool("missing").is_none());
    }
}
