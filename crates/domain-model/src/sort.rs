use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::RowItem;

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(s: &str) -> Option<SortOrder> {
        match s {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    pub fn toggle(self) -> SortOrder {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// 从 URL 解析出的排序状态（s=列名，o=方向）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    pub column: Option<String>,
    pub order: Option<SortOrder>,
}

impl SortState {
    /// 解析查询串中的 s/o 键值：重复键取第一个，非法值与未知键忽略
    pub fn parse(url: &str) -> SortState {
        let mut state = SortState::default();
        let query = match url.find('?') {
            Some(pos) => &url[pos + 1..],
            None => return state,
        };

        let mut seen_column = false;
        let mut seen_order = false;
        for item in query.split('&') {
            let parts: Vec<&str> = item.split('=').collect();
            if parts.len() != 2 {
                continue;
            }
            match parts[0] {
                "s" if !seen_column => {
                    seen_column = true;
                    if !parts[1].is_empty() {
                        state.column = Some(parts[1].to_string());
                    }
                }
                "o" if !seen_order => {
                    seen_order = true;
                    state.order = SortOrder::parse(parts[1]);
                }
                _ => {}
            }
        }
        state
    }
}

/// 列头的排序图标状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Neutral,
    Asc,
    Desc,
}

/// 某一列头当前应显示的排序图标
pub fn indicator(state: &SortState, column: &str) -> SortIndicator {
    match (&state.column, state.order) {
        (Some(c), Some(order)) if c == column => match order {
            SortOrder::Asc => SortIndicator::Asc,
            SortOrder::Desc => SortIndicator::Desc,
        },
        _ => SortIndicator::Neutral,
    }
}

/// 表头文案到排序键：去空白、取小写后的第一个词
pub fn column_key(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string()
}

/// 点击列头后的新地址：换排序列，方向取当前方向的反向，无当前方向则降序
pub fn build_sort_url(url: &str, column: &str) -> String {
    let state = SortState::parse(url);
    let order = state.order.map_or(SortOrder::Desc, SortOrder::toggle);
    let base = match url.find('?') {
        Some(pos) => &url[..pos],
        None => url,
    };
    format!("{}?s={}&o={}", base, column, order.as_str())
}

fn ordered(asc: bool, ord: Ordering) -> Ordering {
    if asc {
        ord
    } else {
        ord.reverse()
    }
}

/// 按列稳定排序；未知列或方向缺失时保持原序
pub fn sort_rows(rows: &mut [RowItem], column: &str, order: Option<SortOrder>) {
    let Some(order) = order else {
        return;
    };
    let asc = order == SortOrder::Asc;

    match column {
        "name" => rows.sort_by(|a, b| ordered(asc, a.name.cmp(&b.name))),
        "time" => rows.sort_by(|a, b| ordered(asc, a.mod_time.cmp(&b.mod_time))),
        "type" => rows.sort_by(|a, b| ordered(asc, a.type_name.cmp(&b.type_name))),
        "size" => rows.sort_by(|a, b| {
            let cmp = a
                .bsize
                .partial_cmp(&b.bsize)
                .unwrap_or(Ordering::Equal);
            ordered(asc, cmp)
        }),
        _ => {}
    }
}
