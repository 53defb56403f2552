use chrono::{DateTime, SecondsFormat, Utc};
use netdisk_domain::{sort_rows, summarize, RowItem, SelectionSummary, SortOrder, ToolbarState};
use serde::{Deserialize, Serialize};

/// 文件列表会话：行视图模型加过滤条件，取代浏览器里的 DOM 状态
#[derive(Debug, Default, Clone)]
pub struct PanelSession {
    current_dir: String,
    rows: Vec<RowItem>,
    filter: String,
}

/// 归档弹窗的预填内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchivePrefill {
    /// JSON 编码的选中路径列表
    pub path_list: String,
    /// 生成的压缩包文件名
    pub file_name: String,
}

impl PanelSession {
    pub fn new(current_dir: impl Into<String>, rows: Vec<RowItem>) -> PanelSession {
        PanelSession {
            current_dir: current_dir.into(),
            rows,
            filter: String::new(),
        }
    }

    pub fn current_dir(&self) -> &str {
        &self.current_dir
    }

    pub fn rows(&self) -> &[RowItem] {
        &self.rows
    }

    /// 单行勾选；下标越界时返回 false
    pub fn set_selected(&mut self, index: usize, selected: bool) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                row.selected = selected;
                true
            }
            None => false,
        }
    }

    /// 全选/全不选
    pub fn select_all(&mut self, selected: bool) {
        for row in &mut self.rows {
            row.selected = selected;
        }
    }

    pub fn summary(&self) -> SelectionSummary {
        summarize(&self.rows)
    }

    pub fn toolbar(&self) -> ToolbarState {
        ToolbarState::from_summary(&self.summary())
    }

    /// 按列对行排序（服务端排序的本地等价）
    pub fn sort(&mut self, column: &str, order: Option<SortOrder>) {
        sort_rows(&mut self.rows, column, order);
    }

    /// 文件名过滤条件，空串显示全部
    pub fn set_filter(&mut self, query: impl Into<String>) {
        self.filter = query.into();
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// 大小写不敏感的文件名子串匹配
    pub fn is_visible(&self, row: &RowItem) -> bool {
        if self.filter.is_empty() {
            return true;
        }
        row.name
            .to_lowercase()
            .contains(&self.filter.to_lowercase())
    }

    pub fn visible_rows(&self) -> Vec<&RowItem> {
        self.rows.iter().filter(|r| self.is_visible(r)).collect()
    }

    /// 选中行的路径（按行序），去掉 href 上的查询串
    pub fn selected_paths(&self) -> Vec<String> {
        self.rows
            .iter()
            .filter(|r| r.selected)
            .map(|r| strip_query(&r.href).to_string())
            .collect()
    }

    /// 选中的文件（不含目录）的 (名称, 地址) 列表，供逐个下载
    pub fn selected_downloads(&self) -> Vec<(String, String)> {
        self.rows
            .iter()
            .filter(|r| r.selected && !r.is_dir)
            .map(|r| (r.name.clone(), r.href.clone()))
            .collect()
    }

    /// 移动弹窗的默认来源：第一个选中路径
    pub fn move_prefill(&self) -> Option<String> {
        self.selected_paths().into_iter().next()
    }

    /// 重命名弹窗的默认值：当前目录路径的最后一段
    pub fn rename_prefill(&self) -> String {
        base_name(&self.current_dir).to_string()
    }

    /// 归档弹窗的默认值：路径列表 JSON 加生成的压缩包名
    pub fn archive_prefill(&self, now: DateTime<Utc>) -> ArchivePrefill {
        ArchivePrefill {
            path_list: serde_json::to_string(&self.selected_paths())
                .unwrap_or_else(|_| "[]".to_string()),
            file_name: archive_file_name(now),
        }
    }
}

/// 生成带时间戳的压缩包文件名，时间部分去掉冒号
pub fn archive_file_name(now: DateTime<Utc>) -> String {
    let stamp = now
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace(':', "");
    format!("files-{}.zip", stamp)
}

fn strip_query(href: &str) -> &str {
    match href.find('?') {
        Some(pos) => &href[..pos],
        None => href,
    }
}

/// 路径最后一段：优先按反斜杠切，其次按正斜杠
fn base_name(path: &str) -> &str {
    let start = match path.rfind('\\') {
        Some(pos) => pos + 1,
        None => path.rfind('/').map_or(0, |pos| pos + 1),
    };
    &path[start..]
}
