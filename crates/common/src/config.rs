use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::NetdiskError;

#[derive(Debug, Deserialize)]
struct NameIconEntry {
    name: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct ExtNameEntry {
    ext: String,
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct PreviewInfo {
    #[serde(default)]
    limit: i64,
    #[serde(default)]
    list: Vec<String>,
    /// 预览服务地址前缀，缺省则不生成预览链接
    #[serde(default)]
    host: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    nameicon: Vec<NameIconEntry>,
    #[serde(default)]
    extname: Vec<ExtNameEntry>,
    #[serde(default)]
    preview: PreviewInfo,
}

/// 文件类型展示配置：扩展名 -> 类型名，类型名 -> 图标，以及预览白名单
#[derive(Debug, Clone, Default)]
pub struct DisplayConfig {
    ext_name: HashMap<String, String>,
    name_icon: HashMap<String, String>,
    preview_limit: i64,
    preview_list: Vec<String>,
    preview_host: Option<String>,
}

impl DisplayConfig {
    pub fn load(path: &Path) -> Result<DisplayConfig, NetdiskError> {
        let text = std::fs::read_to_string(path)?;
        let file: ConfigFile = serde_json::from_str(&text)?;

        let mut config = DisplayConfig::default();
        for item in file.extname {
            config.ext_name.insert(item.ext.to_lowercase(), item.name);
        }
        for item in file.nameicon {
            config.name_icon.insert(item.name, item.icon);
        }
        config.preview_limit = file.preview.limit;
        config.preview_list = file.preview.list;
        config.preview_host = file.preview.host;
        Ok(config)
    }

    /// 扩展名（带点）对应的类型名，未配置时归为「文件」
    pub fn type_name(&self, ext: &str) -> String {
        self.ext_name
            .get(&ext.to_lowercase())
            .cloned()
            .unwrap_or_else(|| "文件".to_string())
    }

    /// 类型名对应的图标 class
    pub fn icon(&self, name: &str) -> String {
        self.name_icon
            .get(name)
            .cloned()
            .unwrap_or_else(|| "fa-file-o".to_string())
    }

    pub fn name_and_icon(&self, ext: &str, is_dir: bool) -> (String, String) {
        let name = if is_dir {
            "目录".to_string()
        } else {
            self.type_name(ext)
        };
        let icon = self.icon(&name);
        (name, icon)
    }

    pub fn enable_preview(&self, ext: &str, bsize: i64) -> bool {
        bsize < self.preview_limit && self.preview_list.iter().any(|e| e == &ext.to_lowercase())
    }

    pub fn preview_url(&self, ext: &str, bsize: i64, href: &str) -> Option<String> {
        if !self.enable_preview(ext, bsize) {
            return None;
        }
        self.preview_host
            .as_ref()
            .map(|host| format!("{}{}", host, href))
    }
}

/// 客户端连接配置
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: "http://127.0.0.1:8080".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "nameicon": [
            {"name": "目录", "icon": "fa-folder"},
            {"name": "文本文档", "icon": "fa-file-text-o"}
        ],
        "extname": [
            {"ext": ".txt", "name": "文本文档"},
            {"ext": ".doc", "name": "Word 文档"}
        ],
        "preview": {
            "limit": 1048576,
            "list": [".doc", ".ppt"],
            "host": "http://preview.example.com?furl=http://f.example.com"
        }
    }"#;

    fn load_sample() -> DisplayConfig {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        DisplayConfig::load(file.path()).unwrap()
    }

    #[test]
    fn test_type_name_lookup() {
        let config = load_sample();
        assert_eq!(config.type_name(".txt"), "文本文档");
        assert_eq!(config.type_name(".TXT"), "文本文档");
        assert_eq!(config.type_name(".xyz"), "文件");
    }

    #[test]
    fn test_name_and_icon() {
        let config = load_sample();
        assert_eq!(
            config.name_and_icon(".txt", false),
            ("文本文档".to_string(), "fa-file-text-o".to_string())
        );
        assert_eq!(config.name_and_icon(".txt", true).0, "目录");
        assert_eq!(config.name_and_icon(".xyz", false).1, "fa-file-o");
    }

    #[test]
    fn test_preview_url() {
        let config = load_sample();
        let url = config.preview_url(".doc", 1024, "/home/a.doc");
        assert_eq!(
            url.as_deref(),
            Some("http://preview.example.com?furl=http://f.example.com/home/a.doc")
        );
        assert!(config.preview_url(".doc", 2 * 1048576, "/home/a.doc").is_none());
        assert!(config.preview_url(".txt", 1024, "/home/a.txt").is_none());
    }

    #[test]
    fn test_default_config_is_empty() {
        let config = DisplayConfig::default();
        assert_eq!(config.type_name(".txt"), "文件");
        assert!(config.preview_url(".doc", 0, "/a").is_none());
    }
}
