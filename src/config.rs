//! 配置模块
//!
//! 支持从 JSON 文件加载系统配置

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

use crate::services::limit::{DEFAULT_PCT_TOLERANCE, DEFAULT_PRICE_TOLERANCE, DEFAULT_RECENT_DAYS};

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,
    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
    /// 工作线程数（0 表示使用 CPU 核心数）
    #[serde(default)]
    pub workers: usize,
}

/// API 配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API Key（为空则不启用认证）
    #[serde(default)]
    pub api_key: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// 日志级别: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// 涨跌停分析默认参数，请求未指定时使用
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// 价格容差（单位：元）
    #[serde(default = "default_price_tolerance")]
    pub price_tolerance: f64,
    /// 涨跌幅容差（单位：百分点）
    #[serde(default = "default_pct_tolerance")]
    pub pct_tolerance: f64,
    /// 返回的最近记录天数
    #[serde(default = "default_recent_days")]
    pub recent_days: usize,
}

/// 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

// 默认值函数
fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }
fn default_log_level() -> String { "info".to_string() }
fn default_price_tolerance() -> f64 { DEFAULT_PRICE_TOLERANCE }
fn default_pct_tolerance() -> f64 { DEFAULT_PCT_TOLERANCE }
fn default_recent_days() -> usize { DEFAULT_RECENT_DAYS }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: 0,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            price_tolerance: default_price_tolerance(),
            pct_tolerance: default_pct_tolerance(),
            recent_days: default_recent_days(),
        }
    }
}

impl AppConfig {
    /// 从 JSON 文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// 加载配置，优先从文件，失败则使用默认值；环境变量 API_KEY 覆盖文件配置
    ///
    /// 日志系统此时尚未初始化，加载过程的提示通过返回的消息列表交给调用方输出
    pub fn load() -> (Self, Vec<String>) {
        let config_paths = ["config.json", "config/config.json"];
        let mut notes = Vec::new();
        let mut loaded = None;

        for path in config_paths {
            if Path::new(path).exists() {
                match Self::from_file(path) {
                    Ok(config) => {
                        notes.push(format!("从 {} 加载配置成功", path));
                        loaded = Some(config);
                        break;
                    }
                    Err(e) => notes.push(format!("加载配置文件 {} 失败: {}", path, e)),
                }
            }
        }

        let mut config = loaded.unwrap_or_else(|| {
            notes.push("使用默认配置".to_string());
            Self::default()
        });

        if let Ok(key) = env::var("API_KEY") {
            config.api.api_key = key;
        }

        (config, notes)
    }

    /// 获取服务器绑定地址
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
