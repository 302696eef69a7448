//! 限幅规则识别
//!
//! 不依赖额外 API，通过代码前缀 + 名称判断限幅：
//! - 科创板 (688/689): ±20%
//! - 创业板 (300/301): ±20%
//! - 主板: ±10%
//! - ST股（名称含ST）: ±5%，优先于板块规则

use crate::models::{BoardType, LimitRule};

use super::common::normalize_code;

/// 板块前缀表，按顺序匹配，先匹配者生效
const BOARD_PREFIXES: &[(&[&str], BoardType, f64)] = &[
    (&["688", "689"], BoardType::Star, 0.20),
    (&["300", "301"], BoardType::ChiNext, 0.20),
];

const MAIN_BOARD_PCT: f64 = 0.10;
const ST_PCT: f64 = 0.05;

/// 检测限幅规则
pub fn detect_limit_rule(code: &str, name: &str) -> LimitRule {
    let normalized = normalize_code(code);
    let is_st = name.to_uppercase().contains("ST");

    let (board, mut limit_pct) = BOARD_PREFIXES
        .iter()
        .find(|(prefixes, _, _)| prefixes.iter().any(|p| normalized.starts_with(p)))
        .map(|(_, board, pct)| (*board, *pct))
        .unwrap_or((BoardType::Main, MAIN_BOARD_PCT));

    if is_st {
        limit_pct = ST_PCT;
    }

    LimitRule {
        code: code.to_string(),
        name: name.to_string(),
        board,
        is_st,
        limit_up_pct: limit_pct,
        limit_down_pct: limit_pct,
    }
}
