//! Profile Queries

/// 列出所有 Profile 查询
#[derive(Debug, Clone)]
pub struct ListProfiles;

/// 获取 Profile 详情查询
#[derive(Debug, Clone)]
pub struct GetProfile {
    pub name: String,
}

/// 解析会话初始化配置查询
///
/// `voice_id` 为空时使用 Profile 自带的 voiceId
#[derive(Debug, Clone)]
pub struct ResolveSessionConfig {
    pub profile_name: String,
    pub voice_id: Option<String>,
}
