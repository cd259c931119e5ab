//! Tool Command Handlers

use serde::Serialize;
use std::sync::Arc;

use crate::application::commands::ValidateToolArguments;
use crate::application::error::ApplicationError;
use crate::application::ports::CatalogRepositoryPort;
use crate::domain::profile::ProfileError;

/// 参数校验通过的响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidateToolArgumentsResponse {
    pub profile: String,
    pub tool: String,
    pub valid: bool,
}

/// ValidateToolArguments Handler
///
/// 在把工具调用交给执行后端之前，按 Profile 声明的 inputSchema 校验参数
pub struct ValidateToolArgumentsHandler {
    catalog_repo: Arc<dyn CatalogRepositoryPort>,
}

impl ValidateToolArgumentsHandler {
    pub fn new(catalog_repo: Arc<dyn CatalogRepositoryPort>) -> Self {
        Self { catalog_repo }
    }

    pub async fn handle(
        &self,
        command: ValidateToolArguments,
    ) -> Result<ValidateToolArgumentsResponse, ApplicationError> {
        if command.tool_name.trim().is_empty() {
            return Err(ApplicationError::validation("Tool name is required"));
        }

        let profile = self
            .catalog_repo
            .find_profile_by_name(&command.profile_name)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Profile", command.profile_name.clone()))?;

        let spec = profile
            .find_tool(&command.tool_name)
            .ok_or_else(|| ProfileError::ToolNotFound(command.tool_name.clone()))?;

        let schema = spec.parse_schema()?;
        schema.validate_arguments(&command.arguments)?;

        tracing::debug!(
            profile = %command.profile_name,
            tool = %command.tool_name,
            "Tool arguments accepted"
        );

        Ok(ValidateToolArgumentsResponse {
            profile: command.profile_name,
            tool: command.tool_name,
            valid: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::catalog::BuiltinCatalogRepository;
    use serde_json::json;

    fn handler() -> ValidateToolArgumentsHandler {
        ValidateToolArgumentsHandler::new(Arc::new(BuiltinCatalogRepository::new()))
    }

    fn command(profile: &str, tool: &str, arguments: serde_json::Value) -> ValidateToolArguments {
        ValidateToolArguments {
            profile_name: profile.to_string(),
            tool_name: tool.to_string(),
            arguments,
        }
    }

    #[tokio::test]
    async fn test_accepts_valid_arguments() {
        let response = handler()
            .handle(command(
                "MCP - get location",
                "getLocationTool",
                json!({ "tool": "search_places", "query": "museums in Lyon" }),
            ))
            .await
            .unwrap();
        assert!(response.valid);
        assert_eq!(response.tool, "getLocationTool");
    }

    #[tokio::test]
    async fn test_date_tool_accepts_empty_object() {
        let response = handler()
            .handle(command("Default - get current time", "getDateTool", json!({})))
            .await
            .unwrap();
        assert!(response.valid);
    }

    #[tokio::test]
    async fn test_undeclared_required_property_still_demanded() {
        let err = handler()
            .handle(command(
                "Strands Agents - get weather",
                "externalAgent",
                json!({ "query": "weather in Seattle" }),
            ))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::ToolArgumentValidation { ref tool, .. } if tool == "externalAgent"
        ));
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let err = handler()
            .handle(command("MCP - get location", "getDateTool", json!({})))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::NotFound {
                resource_type: "Tool",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_empty_tool_name() {
        let err = handler()
            .handle(command("MCP - get location", "  ", json!({})))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_unknown_profile() {
        let err = handler()
            .handle(command("Nope", "getDateTool", json!({})))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::NotFound {
                resource_type: "Profile",
                ..
            }
        ));
    }
}
