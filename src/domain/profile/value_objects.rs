//! Profile Context - Value Objects

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ProfileError;

/// 工具参数的 JSON Schema
///
/// 按声明原样保存为字符串，序列化形态为 `{"json": "<schema>"}`，
/// 下游语音服务会把它当作 JSON Schema 解析。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSchema {
    json: String,
}

impl InputSchema {
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.json
    }
}

/// 工具声明
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolSpec {
    name: String,
    description: String,
    input_schema: InputSchema,
}

impl ToolSpec {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: InputSchema,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }

    /// 解析 inputSchema
    ///
    /// 字符串不是合法 JSON，或顶层不是对象时返回 `ProfileError::SchemaParse`
    pub fn parse_schema(&self) -> Result<ToolSchema, ProfileError> {
        ToolSchema::parse(&self.name, self.input_schema.as_str())
    }

    // Getters
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn input_schema(&self) -> &InputSchema {
        &self.input_schema
    }
}

/// Schema 中单个参数的声明
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaProperty {
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: Option<String>,
    pub description: Option<String>,
}

/// 解析后的工具参数 Schema
///
/// properties 按参数名排序
#[derive(Debug, Clone)]
pub struct ToolSchema {
    tool: String,
    raw: Value,
    schema_type: Option<String>,
    properties: Vec<SchemaProperty>,
    required: Vec<String>,
}

impl ToolSchema {
    pub fn parse(tool: &str, json: &str) -> Result<Self, ProfileError> {
        let raw: Value = serde_json::from_str(json)
            .map_err(|e| ProfileError::schema_parse(tool, e.to_string()))?;

        let object = raw
            .as_object()
            .ok_or_else(|| ProfileError::schema_parse(tool, "schema must be a JSON object"))?;

        let schema_type = object
            .get("type")
            .and_then(Value::as_str)
            .map(str::to_string);

        let properties = match object.get("properties") {
            None => Vec::new(),
            Some(Value::Object(props)) => props
                .iter()
                .map(|(name, decl)| SchemaProperty {
                    name: name.clone(),
                    property_type: decl.get("type").and_then(Value::as_str).map(str::to_string),
                    description: decl
                        .get("description")
                        .and_then(Value::as_str)
                        .map(str::to_string),
                })
                .collect(),
            Some(_) => {
                return Err(ProfileError::schema_parse(
                    tool,
                    "\"properties\" must be an object",
                ))
            }
        };

        let required = match object.get("required") {
            None => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_str().map(str::to_string).ok_or_else(|| {
                        ProfileError::schema_parse(tool, "\"required\" entries must be strings")
                    })
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => {
                return Err(ProfileError::schema_parse(
                    tool,
                    "\"required\" must be an array",
                ))
            }
        };

        Ok(Self {
            tool: tool.to_string(),
            raw,
            schema_type,
            properties,
            required,
        })
    }

    pub fn tool(&self) -> &str {
        &self.tool
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn schema_type(&self) -> Option<&str> {
        self.schema_type.as_deref()
    }

    pub fn properties(&self) -> &[SchemaProperty] {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&SchemaProperty> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn required(&self) -> &[String] {
        &self.required
    }

    /// required 中未在 properties 里声明的参数名
    pub fn undeclared_required(&self) -> Vec<&str> {
        self.required
            .iter()
            .filter(|name| self.property(name).is_none())
            .map(String::as_str)
            .collect()
    }

    /// 编译为 JSON Schema 校验器
    ///
    /// JSON 合法但不是合法 JSON Schema（如 `"type": "objekt"`）时返回 `SchemaParse`
    pub fn compile(&self) -> Result<jsonschema::Validator, ProfileError> {
        jsonschema::validator_for(&self.raw)
            .map_err(|e| ProfileError::schema_parse(&self.tool, e.to_string()))
    }

    /// 按 Schema 校验工具调用参数
    ///
    /// required 中的参数即使没有在 properties 中声明，也必须出现。
    pub fn validate_arguments(&self, arguments: &Value) -> Result<(), ProfileError> {
        let validator = self.compile()?;

        let issues: Vec<String> = validator
            .iter_errors(arguments)
            .map(|e| e.to_string())
            .collect();

        if !issues.is_empty() {
            tracing::debug!(tool = %self.tool, issues = issues.len(), "Tool arguments rejected");
            return Err(ProfileError::ToolArgumentValidation {
                tool: self.tool.clone(),
                issues,
            });
        }

        Ok(())
    }
}
