use serde::{Deserialize, Serialize};

use crate::RowItem;

/// 选中状态汇总，按文件/目录分别计数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSummary {
    pub file_count: usize,
    pub folder_count: usize,
}

impl SelectionSummary {
    pub fn total(&self) -> usize {
        self.file_count + self.folder_count
    }
}

/// 遍历所有行，统计选中的文件与目录数量
pub fn summarize(rows: &[RowItem]) -> SelectionSummary {
    let mut summary = SelectionSummary::default();
    for row in rows.iter().filter(|r| r.selected) {
        if row.is_dir {
            summary.folder_count += 1;
        } else {
            summary.file_count += 1;
        }
    }
    summary
}
