use serde::{Deserialize, Serialize};

use crate::SelectionSummary;

/// 工具栏四个按钮的可用状态，由选中汇总推导
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolbarState {
    pub download: bool,
    pub delete: bool,
    pub move_one: bool,
    pub archive: bool,
}

impl ToolbarState {
    /// 下载只对纯文件选择可用；移动要求恰好选中一项；删除/打包有选中即可
    pub fn from_summary(summary: &SelectionSummary) -> ToolbarState {
        let total = summary.total();
        ToolbarState {
            download: summary.folder_count == 0 && summary.file_count > 0,
            delete: total > 0,
            move_one: total == 1,
            archive: total > 0,
        }
    }
}
