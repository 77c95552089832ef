use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("无法读取配置文件: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("无法解析JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("无效的日志级别: {0}")]
    InvalidLogLevel(String),
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 日志级别 (error/warn/info/debug/trace/off)
    pub log_level: String,
    /// 日志文件路径
    pub log_file: Option<PathBuf>,
    /// 是否打印结果行
    pub report: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: None,
            report: true,
        }
    }
}

/// 命令行上给出的覆盖项
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
    pub quiet: bool,
}

/// 配置的来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// 未指定配置文件
    Defaults,
    /// 指定的文件不存在，使用默认值
    Missing(PathBuf),
    /// 从文件加载
    File(PathBuf),
}

/// 配置管理器
pub struct ConfigManager {
    config: AppConfig,
    source: ConfigSource,
}

impl ConfigManager {
    /// 创建配置管理器，配置文件不存在时使用默认值
    ///
    /// 这时日志系统还没初始化，来源记在 `source()` 里，由 `report_source` 输出。
    pub fn new(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let (config, source) = match config_file {
            Some(path) if path.exists() => {
                (Self::load_from_file(path)?, ConfigSource::File(path.to_path_buf()))
            }
            Some(path) => (AppConfig::default(), ConfigSource::Missing(path.to_path_buf())),
            None => (AppConfig::default(), ConfigSource::Defaults),
        };

        Ok(Self { config, source })
    }

    /// 从文件加载配置，缺失的字段取默认值
    pub fn load_from_file(path: &Path) -> Result<AppConfig, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&contents)?;

        Ok(config)
    }

    pub fn source(&self) -> &ConfigSource {
        &self.source
    }

    /// 输出配置来源，需在日志系统初始化之后调用
    pub fn report_source(&self) {
        match &self.source {
            ConfigSource::Defaults => debug!("未指定配置文件，使用默认配置"),
            ConfigSource::Missing(path) => {
                warn!("配置文件不存在, 将使用默认值: {}", path.display())
            }
            ConfigSource::File(path) => info!("从文件加载了配置: {}", path.display()),
        }
    }

    /// 应用命令行覆盖项
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(level) = overrides.log_level {
            self.config.log_level = level;
        }
        if let Some(log_file) = overrides.log_file {
            self.config.log_file = Some(log_file);
        }
        if overrides.quiet {
            self.config.report = false;
        }
    }

    /// 检查日志级别是否可识别
    pub fn validate_config(&self) -> Result<log::LevelFilter, ConfigError> {
        crate::logging::parse_level(&self.config.log_level)
            .ok_or_else(|| ConfigError::InvalidLogLevel(self.config.log_level.clone()))
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// 打印当前配置
    pub fn print_config(&self) {
        debug!("当前配置:");
        debug!("  log_level: {}", self.config.log_level);
        debug!(
            "  log_file: {}",
            self.config
                .log_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "-".to_string())
        );
        debug!("  report: {}", self.config.report);
    }
}
