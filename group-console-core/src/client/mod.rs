//! Groups API HTTP 客户端

mod http;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::CoreResult;
use crate::traits::GroupStore;
use crate::types::{CreateGroupRequest, Group};

/// 群组集合资源路径
pub(crate) const GROUPS_PATH: &str = "/api/groups";

const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// API 连接配置
///
/// base URL 由调用方显式注入（入口处读取一次环境变量后传入），
/// 客户端内部不读取任何进程级全局状态。
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API 根地址，如 `http://localhost:5000`
    pub base_url: String,
    /// 连接超时（秒）
    pub connect_timeout_secs: u64,
    /// 请求超时（秒）
    pub request_timeout_secs: u64,
}

impl ApiConfig {
    /// 以默认超时创建配置
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Groups API HTTP 客户端
pub struct HttpGroupStore {
    pub(crate) client: Client,
    pub(crate) base_url: String,
}

impl HttpGroupStore {
    /// 创建客户端实例
    ///
    /// base URL 结尾的 `/` 会被去除，便于与资源路径拼接。
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: http::create_http_client(config),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl GroupStore for HttpGroupStore {
    async fn list_all(&self) -> CoreResult<Vec<Group>> {
        self.get(GROUPS_PATH).await
    }

    async fn create(&self, request: &CreateGroupRequest) -> CoreResult<Group> {
        self.post(GROUPS_PATH, request).await
    }
}
