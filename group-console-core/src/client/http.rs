//! Groups API HTTP 请求方法
//!
//! 统一处理请求发送、日志与错误映射：
//! - 超时 -> `CoreError::Timeout`
//! - 连接/传输失败 -> `CoreError::NetworkError`
//! - 非 2xx 状态码 -> `CoreError::ApiError`
//! - 响应体解析失败 -> `CoreError::ParseError`

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{CoreError, CoreResult};

use super::{ApiConfig, HttpGroupStore};

/// debug 日志中响应体的最大长度
const MAX_LOG_BODY_LEN: usize = 2048;

/// 创建 HTTP 客户端
pub(crate) fn create_http_client(config: &ApiConfig) -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .expect("Failed to create HTTP client")
}

impl HttpGroupStore {
    /// 执行 GET 请求
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> CoreResult<T> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {url}");

        let (status, body) = execute_request(self.client.get(&url), "GET", path).await?;
        check_status(status, body).and_then(|body| parse_json(&body))
    }

    /// 执行 POST 请求
    pub(crate) async fn post<T, B>(&self, path: &str, payload: &B) -> CoreResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + Sync,
    {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("POST {url}");

        let request = self.client.post(&url).json(payload);
        let (status, body) = execute_request(request, "POST", path).await?;
        check_status(status, body).and_then(|body| parse_json(&body))
    }
}

/// 发送请求并读取响应文本
async fn execute_request(
    request_builder: RequestBuilder,
    method: &str,
    path: &str,
) -> CoreResult<(u16, String)> {
    let response = request_builder.send().await.map_err(|e| {
        if e.is_timeout() {
            CoreError::Timeout(e.to_string())
        } else {
            CoreError::NetworkError(e.to_string())
        }
    })?;

    let status = response.status().as_u16();
    log::debug!("[{method} {path}] Response Status: {status}");

    let body = response
        .text()
        .await
        .map_err(|e| CoreError::NetworkError(format!("Failed to read response body: {e}")))?;

    log::debug!("[{method} {path}] Response Body: {}", truncate_for_log(&body));

    Ok((status, body))
}

/// 非 2xx 状态码映射为 `ApiError`
fn check_status(status: u16, body: String) -> CoreResult<String> {
    if (200..300).contains(&status) {
        return Ok(body);
    }

    let message = if body.trim().is_empty() {
        "Unknown error".to_string()
    } else {
        truncate_for_log(&body)
    };
    log::error!("API error: HTTP {status} - {message}");
    Err(CoreError::ApiError { status, message })
}

/// 解析 JSON 响应
fn parse_json<T: DeserializeOwned>(body: &str) -> CoreResult<T> {
    serde_json::from_str(body).map_err(|e| {
        log::error!("JSON parse failed: {e}");
        log::error!("Raw response: {}", truncate_for_log(body));
        CoreError::ParseError(e.to_string())
    })
}

/// 截断过长的响应体，避免日志刷屏
fn truncate_for_log(body: &str) -> String {
    if body.len() <= MAX_LOG_BODY_LEN {
        body.to_string()
    } else {
        let cut = body
            .char_indices()
            .take_while(|(i, _)| *i < MAX_LOG_BODY_LEN)
            .last()
            .map_or(0, |(i, c)| i + c.len_utf8());
        format!("{}... ({} bytes total)", &body[..cut], body.len())
    }
}
