use serde::{Deserialize, Serialize};

/// 面包屑导航项
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Nav {
    pub name: String,
    pub href: String,
    pub active: bool,
}

/// 把路径逐段展开成面包屑；查询串原样带到每一级，最后一段为当前位置
pub fn parse_nav_list(navpath: &str, query: &str) -> Vec<Nav> {
    let names: Vec<&str> = navpath.split('/').filter(|n| !n.is_empty()).collect();
    let mut result = Vec::with_capacity(names.len());
    let mut href = String::new();
    for (i, name) in names.iter().enumerate() {
        href.push('/');
        href.push_str(name);
        let mut cur = href.clone();
        if !query.is_empty() {
            cur.push('?');
            cur.push_str(query);
        }
        result.push(Nav {
            name: (*name).to_string(),
            href: cur,
            active: i == names.len() - 1,
        });
    }
    result
}
