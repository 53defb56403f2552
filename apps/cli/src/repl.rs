use std::io::{self, BufRead, Write};
use std::path::Path;

use netdisk_common::DisplayConfig;
use netdisk_domain::{
    build_sort_url, column_key, indicator, parse_nav_list, RowItem, SortIndicator, SortState,
};
use netdisk_panel::{is_audio, AudioPlayer, PanelSession, PlayerAction};
use serde::Deserialize;

/// 列表文件里的一项，字段与服务端目录项对应
#[derive(Debug, Deserialize)]
struct ListingEntry {
    name: String,
    #[serde(default)]
    is_dir: bool,
    #[serde(default)]
    size: u64,
    #[serde(default)]
    mod_time: String,
}

#[derive(Debug, Deserialize)]
struct Listing {
    #[serde(default = "default_dir")]
    dir: String,
    list: Vec<ListingEntry>,
}

fn default_dir() -> String {
    "/home".to_string()
}

pub fn run(listing_path: &Path, config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(listing_path)?;
    let listing: Listing = serde_json::from_str(&text)?;
    let config = match config_path {
        Some(path) => DisplayConfig::load(path)?,
        None => DisplayConfig::default(),
    };

    let rows: Vec<RowItem> = listing
        .list
        .iter()
        .map(|e| RowItem::build(&config, &listing.dir, &e.name, e.is_dir, e.size, &e.mod_time, ""))
        .collect();
    let mut session = PanelSession::new(listing.dir.clone(), rows);
    let mut player = AudioPlayer::default();
    let mut url = listing.dir;

    println!("{} 行已载入，输入 help 查看命令", session.rows().len());
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim();
        let (cmd, rest) = match line.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        match cmd {
            "" => {}
            "quit" | "exit" => return Ok(()),
            "help" => print_help(),
            "list" | "ls" => print_rows(&session),
            "toggle" => match rest.parse::<usize>() {
                Ok(i) if i < session.rows().len() => {
                    let selected = session.rows()[i].selected;
                    session.set_selected(i, !selected);
                    print_buttons(&session);
                }
                _ => println!("usage: toggle <行号>"),
            },
            "all" => match rest {
                "on" => {
                    session.select_all(true);
                    print_buttons(&session);
                }
                "off" => {
                    session.select_all(false);
                    print_buttons(&session);
                }
                _ => println!("usage: all <on|off>"),
            },
            "filter" => {
                session.set_filter(rest);
                print_rows(&session);
            }
            "buttons" => print_buttons(&session),
            "paths" => {
                for path in session.selected_paths() {
                    println!("{}", path);
                }
            }
            "sort" => {
                if rest.is_empty() {
                    println!("usage: sort <列名或表头文案>");
                    continue;
                }
                let column = column_key(rest);
                url = build_sort_url(&url, &column);
                let state = SortState::parse(&url);
                session.sort(&column, state.order);
                println!("url: {}", url);
                for col in ["name", "size", "type", "time"] {
                    let mark = match indicator(&state, col) {
                        SortIndicator::Asc => "asc",
                        SortIndicator::Desc => "desc",
                        SortIndicator::Neutral => "--",
                    };
                    println!("  {}: {}", col, mark);
                }
                print_rows(&session);
            }
            "nav" => {
                let (path, query) = match url.split_once('?') {
                    Some((p, q)) => (p, q),
                    None => (url.as_str(), ""),
                };
                for item in parse_nav_list(path, query) {
                    let mark = if item.active { " *" } else { "" };
                    println!("{}{} -> {}", item.name, mark, item.href);
                }
            }
            "play" => match rest.parse::<usize>() {
                Ok(i) if i < session.rows().len() => {
                    let (name, href) = {
                        let row = &session.rows()[i];
                        (row.name.clone(), row.href.clone())
                    };
                    if !is_audio(&name) {
                        println!("{} 不是音频文件", name);
                    } else {
                        match player.toggle(&href) {
                            PlayerAction::Started => println!("playing {}", name),
                            PlayerAction::Stopped => println!("stopped"),
                        }
                    }
                }
                _ => println!("usage: play <行号>"),
            },
            "prefill" => {
                let archive = session.archive_prefill(chrono::Utc::now());
                println!("move: {}", session.move_prefill().unwrap_or_default());
                println!("rename: {}", session.rename_prefill());
                println!("archive name: {}", archive.file_name);
                println!("archive pathlist: {}", archive.path_list);
            }
            _ => println!("未知命令: {}，输入 help 查看命令", cmd),
        }
    }
}

fn print_rows(session: &PanelSession) {
    for (i, row) in session.rows().iter().enumerate() {
        if !session.is_visible(row) {
            continue;
        }
        let mark = if row.selected { "x" } else { " " };
        println!(
            "{:>3} [{}] {:<6} {:>10} {:>19} {}",
            i, mark, row.type_name, row.size, row.mod_time, row.name
        );
    }
    let summary = session.summary();
    println!(
        "file count: {}, folder count: {}",
        summary.file_count, summary.folder_count
    );
}

fn print_buttons(session: &PanelSession) {
    let toolbar = session.toolbar();
    let onoff = |enabled: bool| if enabled { "enabled" } else { "disabled" };
    println!(
        "download: {}, delete: {}, move: {}, archive: {}",
        onoff(toolbar.download),
        onoff(toolbar.delete),
        onoff(toolbar.move_one),
        onoff(toolbar.archive)
    );
}

fn print_help() {
    println!("list              显示当前可见的行");
    println!("toggle <行号>     勾选/取消勾选某一行");
    println!("all <on|off>      全选/全不选");
    println!("filter [文本]     按文件名过滤，空参数清除过滤");
    println!("buttons           显示工具栏按钮状态");
    println!("paths             显示选中路径（已去掉查询串）");
    println!("sort <列>         切换排序并显示新地址与列头状态");
    println!("nav               显示面包屑导航");
    println!("play <行号>       播放/停止音频行");
    println!("prefill           显示移动/重命名/归档弹窗的预填值");
    println!("quit              退出");
}
