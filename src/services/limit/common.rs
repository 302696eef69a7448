//! 公共常量和辅助函数

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::models::RawDailyBar;

// ==================== 默认分析参数 ====================

/// 价格容差（单位：元）
pub const DEFAULT_PRICE_TOLERANCE: f64 = 0.01;
/// 涨跌幅容差（单位：百分点）
pub const DEFAULT_PCT_TOLERANCE: f64 = 0.2;
/// 返回的最近记录天数
pub const DEFAULT_RECENT_DAYS: usize = 5;

/// 抵消二进制浮点截断的偏移量
const ROUND_EPSILON: f64 = 1e-8;

/// 四舍五入到分（两位小数）
pub fn round_price(value: f64) -> f64 {
    ((value + ROUND_EPSILON) * 100.0).round() / 100.0
}

/// 宽松地将 JSON 值转换为浮点数
///
/// 支持数字和数字字符串；null、空串、非数字、NaN、无穷大均返回 None
pub fn safe_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                None
            } else {
                s.parse::<f64>().ok()
            }
        }
        _ => None,
    };
    parsed.filter(|f| f.is_finite())
}

/// 格式化日期为字符串
///
/// 字符串原样保留（去除首尾空白），数字日期（如 20240102）转为十进制字符串
pub fn format_date(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

static NULL: Value = Value::Null;

/// 按候选字段名依次取值，返回第一个非 null 的字段
fn field<'a>(item: &'a Value, keys: &[&str]) -> &'a Value {
    keys.iter()
        .map(|k| &item[*k])
        .find(|v| !v.is_null())
        .unwrap_or(&NULL)
}

/// 解析一行原始日线数据
///
/// 兼容常见数据源的字段别名：day / trade_date、change_percent、vol_ratio
pub fn parse_daily_bar(item: &Value) -> RawDailyBar {
    RawDailyBar {
        date: format_date(field(item, &["date", "day", "trade_date"])),
        open: safe_f64(&item["open"]),
        high: safe_f64(&item["high"]),
        low: safe_f64(&item["low"]),
        close: safe_f64(&item["close"]),
        pct_chg: safe_f64(field(item, &["pct_chg", "change_percent"])),
        volume: safe_f64(&item["volume"]),
        amount: safe_f64(&item["amount"]),
        volume_ratio: safe_f64(field(item, &["volume_ratio", "vol_ratio"])),
    }
}

/// 批量解析原始日线数据，非对象行被忽略
pub fn parse_daily_bars(items: &[Value]) -> Vec<RawDailyBar> {
    items
        .iter()
        .filter(|item| item.is_object())
        .map(parse_daily_bar)
        .collect()
}

fn code_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(?:(?:sh|sz|bj)\.?)?(\d+)(?:\.(?:sh|sz|bj))?$").unwrap()
    })
}

/// 去除交易所前后缀，如 sh688001 / 688001.SH -> 688001
pub fn normalize_code(code: &str) -> String {
    let code = code.trim();
    code_regex()
        .captures(code)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| code.to_string())
}
