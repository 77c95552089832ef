use std::process::ExitCode;

use anyhow::Context;
use yt_duration::cli;
use yt_duration::core::config_manager::ConfigManager;
use yt_duration::logging;
use yt_duration::{DurationController, DurationFetcher, ReportMode};

fn main() -> anyhow::Result<ExitCode> {
    // 解析命令行参数
    let cli = cli::parse_args();

    // 加载配置，命令行优先
    let mut config_manager = ConfigManager::new(cli.config.as_deref())
        .context("无法加载配置")?;
    config_manager.apply_overrides(cli.overrides());
    let level = config_manager.validate_config().context("配置无效")?;

    // 设置日志
    logging::setup_logging(level, config_manager.config().log_file.as_deref())
        .context("无法设置日志系统")?;
    config_manager.report_source();
    config_manager.print_config();

    let mode = if config_manager.config().report {
        ReportMode::Soft
    } else {
        ReportMode::Silent
    };
    let controller = DurationController::new(DurationFetcher::http(), mode);

    if cli.strict {
        let duration = controller
            .run_strict(&cli.url)
            .with_context(|| format!("无法获取视频时长: {}", cli.url))?;
        println!("{}", duration);
        return Ok(ExitCode::SUCCESS);
    }

    match controller.run(&cli.url) {
        Some(_) => Ok(ExitCode::SUCCESS),
        None => Ok(ExitCode::FAILURE),
    }
}
