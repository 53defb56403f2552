use std::path::Path;

use crate::client::check_ok;
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// 移动/重命名：frompath 移到 name，目标目录由 Referer 指示
    pub async fn move_entry(&self, dir: &str, from: &str, to: &str) -> Result<(), ApiError> {
        let request = self
            .http
            .post(self.url("/move"))
            .header("Referer", self.dir_referer(dir))
            .form(&[("frompath", from), ("name", to)]);
        let response = self.send_logged("POST", request).await?;
        check_ok(response).await
    }

    /// 在当前目录新建文件夹
    pub async fn new_folder(&self, dir: &str, name: &str) -> Result<(), ApiError> {
        let request = self
            .http
            .post(self.url("/new"))
            .header("Referer", self.dir_referer(dir))
            .form(&[("name", name)]);
        let response = self.send_logged("POST", request).await?;
        check_ok(response).await
    }

    /// 打包选中路径，服务端返回 zip 附件，写入 dest
    pub async fn archive(
        &self,
        paths: &[String],
        name: &str,
        dest: &Path,
    ) -> Result<(), ApiError> {
        let path_list = serde_json::to_string(paths)?;
        let request = self
            .http
            .post(self.url("/archive"))
            .form(&[("name", name), ("pathlist", path_list.as_str())]);
        let response = self.send_logged("POST", request).await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ApiError::Server(format!("{}: {}", status, text)));
        }
        let bytes = response.bytes().await?;
        std::fs::write(dest, &bytes)?;
        Ok(())
    }
}
