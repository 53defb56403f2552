mod repl;

use std::io::{self, Write};
use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, Subcommand};
use netdisk_api::{ApiClient, DeleteOutcome};
use netdisk_common::ClientConfig;

#[derive(Parser)]
#[command(name = "netdisk", version, about = "网盘服务端的命令行客户端")]
struct Cli {
    /// 服务端地址，亦可用 NETDISK_SERVER 环境变量
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 删除路径，服务端报错时可确认强制删除
    Delete {
        paths: Vec<String>,
        /// 跳过删除前确认
        #[arg(long)]
        yes: bool,
    },
    /// 下载文件到本地目录
    Download {
        hrefs: Vec<String>,
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// 打包路径列表并保存 zip 附件
    Archive {
        paths: Vec<String>,
        /// 压缩包名，缺省按时间戳生成
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// 移动或重命名
    Move {
        from: String,
        to: String,
        #[arg(long, default_value = "/home")]
        dir: String,
    },
    /// 新建文件夹
    New {
        name: String,
        #[arg(long, default_value = "/home")]
        dir: String,
    },
    /// 上传本地文件
    Upload {
        files: Vec<PathBuf>,
        #[arg(long, default_value = "/home")]
        dir: String,
    },
    /// 交互式面板：读入 JSON 目录列表，演练选择/过滤/排序
    Panel {
        listing: PathBuf,
        /// 文件类型展示配置（JSON）
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let base_url = cli
        .server
        .or_else(|| std::env::var("NETDISK_SERVER").ok())
        .unwrap_or_else(|| ClientConfig::default().base_url);

    if let Err(e) = run(cli.command, base_url).await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run(command: Command, base_url: String) -> Result<(), Box<dyn std::error::Error>> {
    let client = ApiClient::new(base_url);
    match command {
        Command::Delete { paths, yes } => {
            if paths.is_empty() {
                eprintln!("nothing to delete");
                return Ok(());
            }
            if !yes && !confirm("确定要删除选中的文件吗？") {
                return Ok(());
            }
            let outcome = client
                .delete_with_escalation(&paths, |message| {
                    confirm(&format!("{}，是否强制删除？", message))
                })
                .await?;
            match outcome {
                DeleteOutcome::Done => println!("deleted {} path(s)", paths.len()),
                DeleteOutcome::Forced => println!("force deleted {} path(s)", paths.len()),
                DeleteOutcome::Rejected(message) => eprintln!("server rejected: {}", message),
            }
        }
        Command::Download { hrefs, out } => {
            let items: Vec<(String, String)> =
                hrefs.into_iter().map(|h| (String::new(), h)).collect();
            for result in client.download_selected(&items, &out).await {
                match result {
                    Ok(path) => println!("saved {}", path.display()),
                    Err(e) => eprintln!("failed: {}", e),
                }
            }
        }
        Command::Archive { paths, name, out } => {
            let name = name.unwrap_or_else(|| netdisk_panel::archive_file_name(Utc::now()));
            let dest = out.unwrap_or_else(|| PathBuf::from(&name));
            client.archive(&paths, &name, &dest).await?;
            println!("saved {}", dest.display());
        }
        Command::Move { from, to, dir } => {
            client.move_entry(&dir, &from, &to).await?;
            println!("moved {} -> {}", from, to);
        }
        Command::New { name, dir } => {
            client.new_folder(&dir, &name).await?;
            println!("created {}/{}", dir.trim_end_matches('/'), name);
        }
        Command::Upload { files, dir } => {
            client.upload(&dir, &files).await?;
            println!("uploaded {} file(s)", files.len());
        }
        Command::Panel { listing, config } => repl::run(&listing, config.as_deref())?,
    }
    Ok(())
}

fn confirm(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    let _ = io::stdout().flush();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim(), "y" | "Y" | "yes")
}
