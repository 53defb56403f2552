use serde::Deserialize;

/// 服务端统一应答：err 缺省或为 0 表示成功，非空字符串为错误信息
#[derive(Debug, Default, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub err: Option<serde_json::Value>,
}

impl ApiResponse {
    pub fn error_message(&self) -> Option<String> {
        match &self.err {
            Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}
