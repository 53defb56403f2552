use std::path::{Path, PathBuf};

use log::error;

use crate::client::check_ok;
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// 下载单个文件到目标目录，文件名用列表里的展示名
    pub async fn download(
        &self,
        href: &str,
        name: &str,
        dest_dir: &Path,
    ) -> Result<PathBuf, ApiError> {
        let request = self.http.get(self.url(href));
        let response = self.send_logged("GET", request).await?;
        let response = response.error_for_status()?;
        let bytes = response.bytes().await?;

        let file_name = if name.is_empty() {
            fallback_name(href)
        } else {
            name.to_string()
        };
        let dest = dest_dir.join(file_name);
        std::fs::write(&dest, &bytes)?;
        Ok(dest)
    }

    /// 逐个下载 (名称, 地址) 列表，单个失败不中断其余
    pub async fn download_selected(
        &self,
        items: &[(String, String)],
        dest_dir: &Path,
    ) -> Vec<Result<PathBuf, ApiError>> {
        let mut results = Vec::with_capacity(items.len());
        for (name, href) in items {
            let result = self.download(href, name, dest_dir).await;
            if let Err(ref e) = result {
                error!("download failed, name: {}, err: {}", name, e);
            }
            results.push(result);
        }
        results
    }

    /// 上传文件到目录（multipart/form-data，字段名 files）
    pub async fn upload(&self, dir: &str, files: &[PathBuf]) -> Result<(), ApiError> {
        let boundary = "==netdisk-boundary==";
        let mut body = Vec::new();
        for file in files {
            let file_name = file
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| ApiError::InvalidPath(file.display().to_string()))?;
            let content = std::fs::read(file)?;

            body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
            body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"files\"; filename=\"{}\"\r\n",
                    file_name
                )
                .as_bytes(),
            );
            body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
            body.extend_from_slice(&content);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());

        let request = self
            .http
            .post(self.url("/upload"))
            .header("Referer", self.dir_referer(dir))
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(body);
        let response = self.send_logged("POST", request).await?;
        check_ok(response).await
    }
}

/// 展示名缺失时从 href 兜底取文件名：去查询串、取末段、反转义
fn fallback_name(href: &str) -> String {
    let path = href.split('?').next().unwrap_or(href);
    let last = path.rsplit('/').next().unwrap_or(path);
    urlencoding::decode(last)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| last.to_string())
}
