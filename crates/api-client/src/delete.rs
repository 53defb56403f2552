use log::warn;

use crate::{ApiClient, ApiError, ApiResponse};

/// 删除流程的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// 一次成功
    Done,
    /// 服务端报错后经确认强制删除成功
    Forced,
    /// 服务端报错且用户未确认强制删除
    Rejected(String),
}

impl ApiClient {
    /// 提交一次删除请求，请求体为 JSON 路径数组；返回服务端报错信息（None 即成功）
    pub async fn delete_paths(
        &self,
        paths: &[String],
        force: bool,
    ) -> Result<Option<String>, ApiError> {
        let endpoint = if force { "/delete?force=true" } else { "/delete" };
        let request = self.http.post(self.url(endpoint)).json(paths);
        let response = self.send_logged("POST", request).await?;
        let reply: ApiResponse = response.json().await?;
        Ok(reply.error_message())
    }

    /// 删除选中路径；服务端报错时回调确认，确认后换强制删除端点重试一次。
    /// 传输错误原样上抛，不重试。
    pub async fn delete_with_escalation<F>(
        &self,
        paths: &[String],
        confirm_force: F,
    ) -> Result<DeleteOutcome, ApiError>
    where
        F: FnOnce(&str) -> bool,
    {
        let message = match self.delete_paths(paths, false).await? {
            None => return Ok(DeleteOutcome::Done),
            Some(message) => message,
        };
        warn!("delete rejected by server: {}", message);

        if !confirm_force(&message) {
            return Ok(DeleteOutcome::Rejected(message));
        }
        match self.delete_paths(paths, true).await? {
            None => Ok(DeleteOutcome::Forced),
            Some(err) => Err(ApiError::Server(err)),
        }
    }
}
