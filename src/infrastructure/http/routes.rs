//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                     GET   健康检查
//! - /api/profile/list             GET   列出演示 Profile
//! - /api/profile/get              POST  获取 Profile 详情
//! - /api/profile/session_config   POST  解析会话初始化配置
//! - /api/tool/validate            POST  校验工具调用参数
//! - /api/voice/list               GET   扁平化音色列表
//! - /api/voice/languages          GET   按语言分组的音色目录
//! - /api/voice/language           POST  获取单个语言的音色
//! - /api/voice/get                POST  根据 value 获取音色
//! - /api/catalog/validate         GET   目录完整性报告

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/profile", profile_routes())
        .nest("/tool", tool_routes())
        .nest("/voice", voice_routes())
        .route("/catalog/validate", get(handlers::validate_catalog))
}

/// Profile 路由
fn profile_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/list", get(handlers::list_profiles))
        .route("/get", post(handlers::get_profile))
        .route("/session_config", post(handlers::session_config))
}

/// Tool 路由
fn tool_routes() -> Router<Arc<AppState>> {
    Router::new().route("/validate", post(handlers::validate_tool_arguments))
}

/// Voice 路由
fn voice_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/list", get(handlers::list_voices))
        .route("/languages", get(handlers::list_voices_by_language))
        .route("/language", post(handlers::get_language))
        .route("/get", post(handlers::get_voice))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::util::ServiceExt;

    use crate::infrastructure::catalog::BuiltinCatalogRepository;
    use crate::infrastructure::http::{AppState, HttpServer, ServerConfig};

    fn app() -> axum::Router {
        let state = AppState::new(Arc::new(BuiltinCatalogRepository::new()));
        HttpServer::new(ServerConfig::default(), state).build_router()
    }

    async fn send(request: Request<Body>) -> (StatusCode, String) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn get_json(uri: &str) -> Value {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_str(&body).unwrap()
    }

    async fn post_json(uri: &str, payload: Value) -> Value {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_str(&body).unwrap()
    }

    #[tokio::test]
    async fn test_ping() {
        let body = get_json("/api/ping").await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["catalog"], "builtin");
    }

    #[tokio::test]
    async fn test_list_profiles() {
        let body = get_json("/api/profile/list").await;
        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"][0]["name"], "Default - get current time");
        assert_eq!(
            body["data"][0]["toolConfig"]["tools"][0]["toolSpec"]["name"],
            "getDateTool"
        );
        assert_eq!(body["data"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_get_profile_not_found_uses_errno() {
        let body = post_json("/api/profile/get", json!({ "name": "missing" })).await;
        assert_eq!(body["errno"], 404);
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn test_session_config_with_voice_override() {
        let body = post_json(
            "/api/profile/session_config",
            json!({ "name": "MCP - get location", "voiceId": "ambre" }),
        )
        .await;
        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"]["voiceId"], "ambre");
        assert_eq!(
            body["data"]["toolConfig"]["tools"][0]["toolSpec"]["name"],
            "getLocationTool"
        );
    }

    #[tokio::test]
    async fn test_tool_validate_rejects_missing_argument() {
        let body = post_json(
            "/api/tool/validate",
            json!({
                "profile": "MCP - get location",
                "tool": "getLocationTool",
                "arguments": { "query": "bakeries" }
            }),
        )
        .await;
        assert_eq!(body["errno"], 422);
    }

    #[tokio::test]
    async fn test_tool_validate_accepts_arguments() {
        let body = post_json(
            "/api/tool/validate",
            json!({
                "profile": "Default - get current time",
                "tool": "getDateTool",
                "arguments": {}
            }),
        )
        .await;
        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"]["valid"], true);
    }

    #[tokio::test]
    async fn test_list_voices_flattened() {
        let body = get_json("/api/voice/list").await;
        let voices = body["data"].as_array().unwrap();
        assert_eq!(voices.len(), 11);
        assert_eq!(voices[0]["label"], "Matthew (US)");
        assert_eq!(voices[1]["label"], "Tiffany (US)");
        assert_eq!(voices[2]["label"], "Amy (GB)");
    }

    #[tokio::test]
    async fn test_languages_keep_declaration_order() {
        let request = Request::builder()
            .uri("/api/voice/languages")
            .body(Body::empty())
            .unwrap();
        let (_, body) = send(request).await;
        let positions: Vec<usize> = ["English", "French", "Italian", "German", "Spanish"]
            .iter()
            .map(|language| body.find(&format!("\"{language}\"")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_get_voice_and_language() {
        let voice = post_json("/api/voice/get", json!({ "value": "beatrice" })).await;
        assert_eq!(voice["data"]["label"], "Beatrice (IT)");
        assert_eq!(voice["data"]["language"], "Italian");

        let language = post_json("/api/voice/language", json!({ "language": "Spanish" })).await;
        assert_eq!(language["data"]["flag"], "🇪🇸");
        assert_eq!(language["data"]["voices"][1]["value"], "carlos");
    }

    #[tokio::test]
    async fn test_catalog_validate_report() {
        let body = get_json("/api/catalog/validate").await;
        let issues = body["data"]["issues"].as_array().unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0]["kind"], "required_not_declared");
        assert_eq!(issues[0]["property"], "tool");
    }
}
