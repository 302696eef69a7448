//! 每日涨跌停判定
//!
//! 基于日线数据检测涨跌停、触板、炸板

use crate::models::{DailyLimitRecord, LimitRule, LimitStatus, RawDailyBar};

use super::common::round_price;

/// 判定容差
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// 价格容差（元）
    pub price: f64,
    /// 涨跌幅容差（百分点）
    pub pct: f64,
}

/// 构建每日涨跌停记录
///
/// 调用方需保证 `bar.close` 有值，缺失收盘价的行应在折叠时跳过
pub fn build_daily_record(
    bar: &RawDailyBar,
    prev_close: f64,
    rule: &LimitRule,
    tolerance: Tolerance,
) -> DailyLimitRecord {
    let close = bar.close.unwrap_or(0.0);
    let high = bar.high.unwrap_or(close);
    let low = bar.low.unwrap_or(close);

    let limit_up_price = round_price(prev_close * (1.0 + rule.limit_up_pct));
    let limit_down_price = round_price(prev_close * (1.0 - rule.limit_down_pct));

    // 价格或涨跌幅任一满足即视为封板，兼容不同精度的数据源
    let is_limit_up = close >= limit_up_price - tolerance.price
        || bar
            .pct_chg
            .is_some_and(|p| p >= rule.limit_up_pct * 100.0 - tolerance.pct);
    let is_limit_down = close <= limit_down_price + tolerance.price
        || bar
            .pct_chg
            .is_some_and(|p| p <= -rule.limit_down_pct * 100.0 + tolerance.pct);

    let touched_limit_up = high >= limit_up_price - tolerance.price;
    let touched_limit_down = low <= limit_down_price + tolerance.price;

    let broken_limit_up = touched_limit_up && !is_limit_up;
    let broken_limit_down = touched_limit_down && !is_limit_down;

    let status = if is_limit_up {
        LimitStatus::SealedUp
    } else if is_limit_down {
        LimitStatus::SealedDown
    } else if broken_limit_up {
        LimitStatus::BrokenUp
    } else if broken_limit_down {
        LimitStatus::OpenedDown
    } else if touched_limit_up {
        LimitStatus::TouchedUp
    } else if touched_limit_down {
        LimitStatus::TouchedDown
    } else {
        LimitStatus::Normal
    };

    DailyLimitRecord {
        date: bar.date.clone(),
        close,
        high,
        low,
        prev_close,
        pct_chg: bar.pct_chg,
        volume: bar.volume,
        amount: bar.amount,
        volume_ratio: bar.volume_ratio,
        limit_up_price,
        limit_down_price,
        is_limit_up,
        is_limit_down,
        touched_limit_up,
        touched_limit_down,
        broken_limit_up,
        broken_limit_down,
        status,
    }
}

/// 沿时间顺序折叠日线，逐日生成涨跌停记录
///
/// 第一行仅作为昨收基准；收盘价缺失的行被跳过并清空昨收，
/// 下一条有效行重新作为基准且不产生记录
pub fn classify_bars(
    bars: &[RawDailyBar],
    rule: &LimitRule,
    tolerance: Tolerance,
) -> Vec<DailyLimitRecord> {
    let mut records = Vec::with_capacity(bars.len().saturating_sub(1));
    let mut prev_close: Option<f64> = None;

    for bar in bars {
        let Some(close) = bar.close else {
            log::debug!("{} 日期 {:?} 收盘价缺失，跳过", rule.code, bar.date);
            prev_close = None;
            continue;
        };
        if let Some(prev) = prev_close {
            records.push(build_daily_record(bar, prev, rule, tolerance));
        }
        prev_close = Some(close);
    }

    records
}
