use clap::Parser;
use std::path::PathBuf;

use crate::core::config_manager::ConfigOverrides;

#[derive(Parser, Debug)]
#[clap(author, version, about = "获取YouTube视频时长，无需Data API")]
pub struct Cli {
    /// 视频地址，例如 https://www.youtube.com/watch?v=dQw4w9WgXcQ
    pub url: String,

    /// 配置文件路径 (JSON)
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// 日志文件路径
    #[clap(long)]
    pub log_file: Option<PathBuf>,

    /// 日志级别
    #[clap(long)]
    pub log_level: Option<String>,

    /// 不打印结果行
    #[clap(long, short)]
    pub quiet: bool,

    /// 失败时直接返回错误，成功时只输出时长
    #[clap(long)]
    pub strict: bool,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            log_level: self.log_level.clone(),
            log_file: self.log_file.clone(),
            quiet: self.quiet,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
