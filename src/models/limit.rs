//! 涨跌停分析数据模型
//!
//! 定义涨跌停分析相关的数据结构，包括：
//! - 限幅规则
//! - 每日涨跌停记录
//! - 连板/连跌停统计
//! - 开板风险信号
//! - 分析结果及接口请求体

use serde::{Deserialize, Serialize};
use std::fmt;

/// 板块类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardType {
    #[serde(rename = "主板")]
    Main,
    #[serde(rename = "创业板")]
    ChiNext,
    #[serde(rename = "科创板")]
    Star,
}

impl BoardType {
    pub fn label(&self) -> &'static str {
        match self {
            BoardType::Main => "主板",
            BoardType::ChiNext => "创业板",
            BoardType::Star => "科创板",
        }
    }
}

impl fmt::Display for BoardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 每日涨跌停状态（互斥）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LimitStatus {
    #[serde(rename = "涨停封板")]
    SealedUp,
    #[serde(rename = "跌停封板")]
    SealedDown,
    /// 炸板：触及涨停但未封住
    #[serde(rename = "炸板")]
    BrokenUp,
    #[serde(rename = "跌停开板")]
    OpenedDown,
    #[serde(rename = "触及涨停")]
    TouchedUp,
    #[serde(rename = "触及跌停")]
    TouchedDown,
    #[serde(rename = "非涨跌停")]
    Normal,
}

impl LimitStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LimitStatus::SealedUp => "涨停封板",
            LimitStatus::SealedDown => "跌停封板",
            LimitStatus::BrokenUp => "炸板",
            LimitStatus::OpenedDown => "跌停开板",
            LimitStatus::TouchedUp => "触及涨停",
            LimitStatus::TouchedDown => "触及跌停",
            LimitStatus::Normal => "非涨跌停",
        }
    }
}

impl fmt::Display for LimitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 开板风险等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "低")]
    Low,
    #[serde(rename = "中")]
    Medium,
    #[serde(rename = "高")]
    High,
}

impl RiskLevel {
    /// 按评分划分等级：>=75 高，>=60 中，其余为低
    pub fn from_score(score: u8) -> Self {
        if score >= 75 {
            RiskLevel::High
        } else if score >= 60 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "低",
            RiskLevel::Medium => "中",
            RiskLevel::High => "高",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 涨跌停方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitDirection {
    LimitUp,
    LimitDown,
    None,
}

/// 限幅规则
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitRule {
    /// 股票代码（保留调用方原始输入）
    pub code: String,
    /// 股票名称
    pub name: String,
    /// 板块
    pub board: BoardType,
    /// 是否ST股
    pub is_st: bool,
    /// 涨停幅度（如 0.10 表示 10%）
    pub limit_up_pct: f64,
    /// 跌停幅度
    pub limit_down_pct: f64,
}

/// 每日涨跌停记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLimitRecord {
    pub date: String,
    pub close: f64,
    pub high: f64,
    pub low: f64,
    pub prev_close: f64,
    pub pct_chg: Option<f64>,
    pub volume: Option<f64>,
    pub amount: Option<f64>,
    pub volume_ratio: Option<f64>,
    /// 涨停价
    pub limit_up_price: f64,
    /// 跌停价
    pub limit_down_price: f64,
    /// 收盘涨停
    pub is_limit_up: bool,
    /// 收盘跌停
    pub is_limit_down: bool,
    /// 盘中触及涨停
    pub touched_limit_up: bool,
    /// 盘中触及跌停
    pub touched_limit_down: bool,
    /// 炸板（触及涨停但未封住）
    pub broken_limit_up: bool,
    /// 跌停开板
    pub broken_limit_down: bool,
    pub status: LimitStatus,
}

/// 连板/连跌停统计
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LimitStreak {
    /// 当前连板天数
    pub up_days: u32,
    /// 当前连跌停天数
    pub down_days: u32,
    /// 最长连板
    pub max_up_streak: u32,
    /// 最长连跌停
    pub max_down_streak: u32,
    /// 涨停总天数
    pub limit_up_days: u32,
    /// 跌停总天数
    pub limit_down_days: u32,
    /// 炸板次数
    pub break_up_count: u32,
    /// 跌停开板次数
    pub break_down_count: u32,
    pub last_limit_up_date: Option<String>,
    pub last_limit_down_date: Option<String>,
    pub limit_up_dates: Vec<String>,
    pub limit_down_dates: Vec<String>,
}

/// 开板风险信号
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenBoardSignal {
    /// 开板风险评分（0-100）
    pub score: u8,
    pub level: RiskLevel,
    pub direction: LimitDirection,
    pub reasons: Vec<String>,
    pub volume_ratio: Option<f64>,
    pub turnover_rate: Option<f64>,
    /// 是否出现量能转折（缩量→放量）
    pub volume_turning_point: bool,
}

/// 涨跌停分析结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitAnalysisResult {
    pub rule: LimitRule,
    pub latest: Option<DailyLimitRecord>,
    pub streak: LimitStreak,
    pub open_board_signal: OpenBoardSignal,
    pub recent_records: Vec<DailyLimitRecord>,
}

/// 涨跌停分析请求体
///
/// `records` 保留原始 JSON 行，由服务层做宽松解析
#[derive(Debug, Clone, Deserialize)]
pub struct LimitAnalysisRequest {
    /// 股票代码
    pub code: String,
    /// 股票名称
    #[serde(default)]
    pub name: String,
    /// 日线记录（date/open/high/low/close/pct_chg/volume/amount/volume_ratio）
    #[serde(default)]
    pub records: Vec<serde_json::Value>,
    /// 当日换手率（百分比）
    pub turnover_rate: Option<f64>,
    /// 价格容差（元），缺省使用配置值
    pub price_tolerance: Option<f64>,
    /// 涨跌幅容差（百分点），缺省使用配置值
    pub pct_tolerance: Option<f64>,
    /// 返回的最近记录天数
    pub recent_days: Option<usize>,
}

/// 批量分析请求体
#[derive(Debug, Clone, Deserialize)]
pub struct LimitBatchRequest {
    pub items: Vec<LimitAnalysisRequest>,
}

/// 限幅规则查询参数
#[derive(Debug, Deserialize)]
pub struct LimitRuleQuery {
    /// 股票名称（用于识别ST）
    pub name: Option<String>,
}
