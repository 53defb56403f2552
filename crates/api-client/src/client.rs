use std::time::Instant;

use log::info;

use crate::ApiError;

/// 网盘服务端的 HTTP 客户端
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> ApiClient {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &netdisk_common::ClientConfig) -> ApiClient {
        ApiClient::new(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 目录页地址，作为表单请求的 Referer（服务端由它定位当前目录）
    pub(crate) fn dir_referer(&self, dir: &str) -> String {
        self.url(dir)
    }

    /// 发出请求并记录地址、方法与耗时
    pub(crate) async fn send_logged(
        &self,
        method: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        let start = Instant::now();
        let response = request.send().await?;
        info!(
            "url: {}, method: {}, status: {}, cost: {}ms",
            response.url(),
            method,
            response.status(),
            start.elapsed().as_millis()
        );
        Ok(response)
    }
}

/// 跟随重定向后仍非 2xx 的应答视为服务端错误
pub(crate) async fn check_ok(response: reqwest::Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let text = response.text().await.unwrap_or_default();
    Err(ApiError::Server(format!("{}: {}", status, text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let client = ApiClient::new("http://127.0.0.1:8080/");
        assert_eq!(client.base_url(), "http://127.0.0.1:8080");
        assert_eq!(client.url("/delete"), "http://127.0.0.1:8080/delete");
        assert_eq!(client.url("delete"), "http://127.0.0.1:8080/delete");
        assert_eq!(
            client.dir_referer("/home/docs"),
            "http://127.0.0.1:8080/home/docs"
        );
    }
}
