use netdisk_common::{ByteSize, DisplayConfig};
use serde::{Deserialize, Serialize};

/// 列表中的一行（文件或目录），由宿主在加载列表时填充
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowItem {
    /// 类型名（如「目录」「文本文档」）
    pub type_name: String,
    pub icon: String,
    pub name: String,
    pub href: String,
    pub is_dir: bool,
    pub bsize: ByteSize,
    /// 展示用大小，目录为 "--"
    pub size: String,
    /// "YYYY-MM-DD HH:MM:SS"
    pub mod_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub selected: bool,
}

impl RowItem {
    /// 从目录项构造一行：目录的 href 带上当前查询串，文件带格式化大小
    pub fn build(
        config: &DisplayConfig,
        root_url: &str,
        name: &str,
        is_dir: bool,
        size: u64,
        mod_time: &str,
        query: &str,
    ) -> RowItem {
        let mut href = if root_url.ends_with('/') {
            format!("{}{}", root_url, name)
        } else {
            format!("{}/{}", root_url, name)
        };

        let bsize = ByteSize::from(size);
        let size_display = if is_dir {
            if !query.is_empty() {
                href.push('?');
                href.push_str(query);
            }
            "--".to_string()
        } else {
            bsize.format()
        };

        let ext = ext_of(name);
        let (type_name, icon) = config.name_and_icon(ext, is_dir);
        let preview_url = config.preview_url(ext, size as i64, &href);

        RowItem {
            type_name,
            icon,
            name: name.to_string(),
            href,
            is_dir,
            bsize,
            size: size_display,
            mod_time: mod_time.to_string(),
            preview_url,
            selected: false,
        }
    }
}

/// 文件名的扩展名（带点），无扩展名时返回空串
pub fn ext_of(name: &str) -> &str {
    match name.rfind('.') {
        Some(pos) => &name[pos..],
        None => "",
    }
}
