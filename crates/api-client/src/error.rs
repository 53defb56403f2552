use thiserror::Error;

/// 客户端错误：传输失败与服务端报错分开，上层提示方式不同
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("server error: {0}")]
    Server(String),
}
