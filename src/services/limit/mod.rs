//! 涨跌停分析引擎
//!
//! 纯函数实现，无 I/O、无共享可变状态，可被多个请求并发调用
//!
//! ## 处理流程
//! 1. 通过代码前缀 + 名称识别限幅规则
//! 2. 按日期升序排序日线
//! 3. 逐日判定涨停、跌停、触板、炸板
//! 4. 统计连板/连跌停与炸板次数
//! 5. 结合量比和换手率预估开板风险

mod classifier;
mod common;
mod open_board;
mod rule;
mod streak;

pub use classifier::{build_daily_record, classify_bars, Tolerance};
pub use common::{
    format_date, normalize_code, parse_daily_bar, parse_daily_bars, round_price, safe_f64,
    DEFAULT_PCT_TOLERANCE, DEFAULT_PRICE_TOLERANCE, DEFAULT_RECENT_DAYS,
};
pub use open_board::estimate_open_board_signal;
pub use rule::detect_limit_rule;
pub use streak::compute_streak;

use crate::models::{LimitAnalysisResult, RawDailyBar};

/// 分析参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisOptions {
    /// 价格容差（单位：元）
    pub price_tolerance: f64,
    /// 涨跌幅容差（单位：百分点）
    pub pct_tolerance: f64,
    /// 返回的最近记录天数
    pub recent_days: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            price_tolerance: DEFAULT_PRICE_TOLERANCE,
            pct_tolerance: DEFAULT_PCT_TOLERANCE,
            recent_days: DEFAULT_RECENT_DAYS,
        }
    }
}

impl AnalysisOptions {
    fn tolerance(&self) -> Tolerance {
        Tolerance {
            price: self.price_tolerance,
            pct: self.pct_tolerance,
        }
    }
}

/// 涨跌停分析入口
///
/// # 参数
/// - code: 股票代码
/// - name: 股票名称
/// - bars: 日线数据，顺序任意
/// - turnover_rate: 当日换手率（来自实时行情，可能为空）
/// - options: 容差及返回窗口
pub fn analyze_limits(
    code: &str,
    name: &str,
    bars: &[RawDailyBar],
    turnover_rate: Option<f64>,
    options: &AnalysisOptions,
) -> LimitAnalysisResult {
    let rule = detect_limit_rule(code, name);

    let mut sorted: Vec<&RawDailyBar> = bars.iter().collect();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));
    let sorted: Vec<RawDailyBar> = sorted.into_iter().cloned().collect();

    let records = classify_bars(&sorted, &rule, options.tolerance());

    let latest = records.last().cloned();
    let previous = records.len().checked_sub(2).and_then(|i| records.get(i));
    let streak = compute_streak(&records);
    let open_board_signal =
        estimate_open_board_signal(latest.as_ref(), previous, turnover_rate);

    let start = records.len().saturating_sub(options.recent_days);
    let recent_records = records[start..].to_vec();

    log::debug!(
        "{} 涨跌停分析完成: 输入 {} 行, 有效记录 {} 条, 连板 {}, 开板风险 {}",
        code,
        bars.len(),
        records.len(),
        streak.up_days,
        open_board_signal.score
    );

    LimitAnalysisResult {
        rule,
        latest,
        streak,
        open_board_signal,
        recent_records,
    }
}
