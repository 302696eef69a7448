//! 股票日线数据模型
//!
//! 定义涨跌停分析所消费的原始日线结构

use serde::{Deserialize, Serialize};

/// 原始日线数据
///
/// 由外部数据源提供，除日期外所有数值字段都可能缺失
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDailyBar {
    /// 日期（如 2024-01-02 或 20240102）
    pub date: String,
    /// 开盘价
    pub open: Option<f64>,
    /// 最高价
    pub high: Option<f64>,
    /// 最低价
    pub low: Option<f64>,
    /// 收盘价
    pub close: Option<f64>,
    /// 涨跌幅（百分比，如 9.98）
    pub pct_chg: Option<f64>,
    /// 成交量
    pub volume: Option<f64>,
    /// 成交额
    pub amount: Option<f64>,
    /// 量比
    pub volume_ratio: Option<f64>,
}

impl RawDailyBar {
    /// 仅含日期和收盘价的日线，其余字段缺省
    pub fn with_close(date: impl Into<String>, close: f64) -> Self {
        Self {
            date: date.into(),
            close: Some(close),
            ..Default::default()
        }
    }
}
