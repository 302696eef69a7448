//! 开板风险预估
//!
//! 评分逻辑（参考性信号，不构成交易建议）：
//! - 基础分 50 分
//! - 量能转折点（缩量→放量）：+10 分
//! - 炸板：不低于 80 分；触及涨停后回落：不低于 70 分
//! - 涨停封板放量（量比>=2）：+15 分；封板缩量（量比<=0.8）：-10 分
//! - 涨停换手率高（>=15%）：+15 分
//! - 跌停放量（量比>=2）：+10 分；跌停换手率高（>=10%）：+10 分

use crate::models::{DailyLimitRecord, LimitDirection, OpenBoardSignal, RiskLevel};

const BASE_SCORE: i32 = 50;

const SHRINK_VOLUME_RATIO: f64 = 0.8;
const EXPAND_VOLUME_RATIO: f64 = 1.5;
const HEAVY_VOLUME_RATIO: f64 = 2.0;

const UP_HIGH_TURNOVER: f64 = 15.0;
const DOWN_HIGH_TURNOVER: f64 = 10.0;

/// 预估开板风险
pub fn estimate_open_board_signal(
    latest: Option<&DailyLimitRecord>,
    previous: Option<&DailyLimitRecord>,
    turnover_rate: Option<f64>,
) -> OpenBoardSignal {
    let Some(latest) = latest else {
        return OpenBoardSignal {
            score: 0,
            level: RiskLevel::Low,
            direction: LimitDirection::None,
            reasons: vec!["数据不足".to_string()],
            volume_ratio: None,
            turnover_rate: None,
            volume_turning_point: false,
        };
    };

    let mut score = BASE_SCORE;
    let mut reasons: Vec<String> = Vec::new();

    let direction = if latest.is_limit_up || latest.touched_limit_up {
        LimitDirection::LimitUp
    } else if latest.is_limit_down || latest.touched_limit_down {
        LimitDirection::LimitDown
    } else {
        LimitDirection::None
    };

    let volume_turning_point = matches!(
        (previous.and_then(|p| p.volume_ratio), latest.volume_ratio),
        (Some(prev), Some(curr)) if prev <= SHRINK_VOLUME_RATIO && curr >= EXPAND_VOLUME_RATIO
    );
    if volume_turning_point {
        score += 10;
        reasons.push("量比出现缩量→放量转折".to_string());
    }

    if latest.broken_limit_up {
        score = score.max(80);
        reasons.push("盘中触板但未封住（炸板）".to_string());
    } else if latest.touched_limit_up && !latest.is_limit_up {
        score = score.max(70);
        reasons.push("触及涨停后回落，开板已发生".to_string());
    }

    if latest.is_limit_up {
        match latest.volume_ratio {
            Some(vr) if vr >= HEAVY_VOLUME_RATIO => {
                score += 15;
                reasons.push("封板放量，封单稳定性下降".to_string());
            }
            Some(vr) if vr <= SHRINK_VOLUME_RATIO => {
                score -= 10;
                reasons.push("封板缩量，封单相对稳定".to_string());
            }
            _ => {}
        }
        if turnover_rate.is_some_and(|t| t >= UP_HIGH_TURNOVER) {
            score += 15;
            reasons.push("换手率偏高，开板概率上升".to_string());
        }
    }

    if latest.is_limit_down {
        if latest.volume_ratio.is_some_and(|vr| vr >= HEAVY_VOLUME_RATIO) {
            score += 10;
            reasons.push("跌停放量，存在开板风险".to_string());
        }
        if turnover_rate.is_some_and(|t| t >= DOWN_HIGH_TURNOVER) {
            score += 10;
            reasons.push("跌停换手偏高，封单稳定性弱".to_string());
        }
    }

    let score = score.clamp(0, 100) as u8;

    OpenBoardSignal {
        score,
        level: RiskLevel::from_score(score),
        direction,
        reasons,
        volume_ratio: latest.volume_ratio,
        turnover_rate,
        volume_turning_point,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LimitStatus;

    fn sealed_up(volume_ratio: Option<f64>) -> DailyLimitRecord {
        DailyLimitRecord {
            date: "2024-01-03".to_string(),
            close: 11.0,
            high: 11.0,
            low: 10.2,
            prev_close: 10.0,
            pct_chg: Some(10.0),
            volume: Some(1_000_000.0),
            amount: None,
            volume_ratio,
            limit_up_price: 11.0,
            limit_down_price: 9.0,
            is_limit_up: true,
            is_limit_down: false,
            touched_limit_up: true,
            touched_limit_down: false,
            broken_limit_up: false,
            broken_limit_down: false,
            status: LimitStatus::SealedUp,
        }
    }

    fn sealed_down(volume_ratio: Option<f64>) -> DailyLimitRecord {
        DailyLimitRecord {
            close: 9.0,
            high: 9.5,
            low: 9.0,
            pct_chg: Some(-10.0),
            is_limit_up: false,
            is_limit_down: true,
            touched_limit_up: false,
            touched_limit_down: true,
            status: LimitStatus::SealedDown,
            ..sealed_up(volume_ratio)
        }
    }

    #[test]
    fn test_no_data() {
        let signal = estimate_open_board_signal(None, None, Some(20.0));
        assert_eq!(signal.score, 0);
        assert_eq!(signal.level, RiskLevel::Low);
        assert_eq!(signal.direction, LimitDirection::None);
        assert_eq!(signal.reasons, vec!["数据不足"]);
        assert!(!signal.volume_turning_point);
    }

    #[test]
    fn test_turning_point_heavy_volume_high_turnover() {
        let previous = sealed_up(Some(0.7));
        let latest = sealed_up(Some(2.5));
        let signal = estimate_open_board_signal(Some(&latest), Some(&previous), Some(18.0));

        assert!(signal.volume_turning_point);
        assert_eq!(signal.score, 90);
        assert_eq!(signal.level, RiskLevel::High);
        assert_eq!(signal.direction, LimitDirection::LimitUp);
        assert_eq!(signal.reasons.len(), 3);
        assert_eq!(signal.volume_ratio, Some(2.5));
        assert_eq!(signal.turnover_rate, Some(18.0));
    }

    #[test]
    fn test_sealed_with_light_volume() {
        let latest = sealed_up(Some(0.6));
        let signal = estimate_open_board_signal(Some(&latest), None, None);

        assert_eq!(signal.score, 40);
        assert_eq!(signal.level, RiskLevel::Low);
        assert_eq!(signal.reasons, vec!["封板缩量，封单相对稳定"]);
    }

    #[test]
    fn test_broken_board_floor() {
        let latest = DailyLimitRecord {
            close: 10.3,
            is_limit_up: false,
            broken_limit_up: true,
            status: LimitStatus::BrokenUp,
            ..sealed_up(Some(1.0))
        };
        let signal = estimate_open_board_signal(Some(&latest), None, Some(30.0));

        assert_eq!(signal.score, 80);
        assert_eq!(signal.level, RiskLevel::High);
        assert_eq!(signal.direction, LimitDirection::LimitUp);
        assert_eq!(signal.reasons.len(), 1);
    }

    #[test]
    fn test_sealed_down_adjustments() {
        let latest = sealed_down(Some(2.2));
        let signal = estimate_open_board_signal(Some(&latest), None, Some(12.0));

        assert_eq!(signal.score, 70);
        assert_eq!(signal.level, RiskLevel::Medium);
        assert_eq!(signal.direction, LimitDirection::LimitDown);
        assert_eq!(signal.reasons.len(), 2);
    }

    #[test]
    fn test_score_clamped() {
        let previous = sealed_up(Some(0.5));
        let latest = DailyLimitRecord {
            is_limit_down: true,
            ..sealed_up(Some(3.0))
        };
        // 人为构造双向封板记录，验证上限截断
        let signal = estimate_open_board_signal(Some(&latest), Some(&previous), Some(40.0));
        assert_eq!(signal.score, 100);
        assert_eq!(signal.level, RiskLevel::High);
    }

    #[test]
    fn test_turning_point_inclusive_bounds() {
        let previous = sealed_up(Some(0.8));
        let latest = sealed_up(Some(1.5));
        let signal = estimate_open_board_signal(Some(&latest), Some(&previous), None);

        // 1.5 既非放量封板也非缩量封板，只计转折加分
        assert!(signal.volume_turning_point);
        assert_eq!(signal.score, 60);
        assert_eq!(signal.level, RiskLevel::Medium);

        let previous = sealed_up(Some(0.81));
        let signal = estimate_open_board_signal(Some(&latest), Some(&previous), None);
        assert!(!signal.volume_turning_point);
        assert_eq!(signal.score, 50);

        let previous = sealed_up(Some(0.8));
        let latest = sealed_up(Some(1.49));
        let signal = estimate_open_board_signal(Some(&latest), Some(&previous), None);
        assert!(!signal.volume_turning_point);
        assert_eq!(signal.score, 50);
    }

    #[test]
    fn test_volume_ratio_bounds_on_limit_up() {
        let heavy = estimate_open_board_signal(Some(&sealed_up(Some(2.0))), None, None);
        assert_eq!(heavy.score, 65);
        assert_eq!(heavy.reasons, vec!["封板放量，封单稳定性下降"]);

        let light = estimate_open_board_signal(Some(&sealed_up(Some(0.8))), None, None);
        assert_eq!(light.score, 40);
        assert_eq!(light.reasons, vec!["封板缩量，封单相对稳定"]);

        let neutral = estimate_open_board_signal(Some(&sealed_up(Some(1.99))), None, None);
        assert_eq!(neutral.score, 50);
        assert!(neutral.reasons.is_empty());

        let neutral = estimate_open_board_signal(Some(&sealed_up(Some(0.81))), None, None);
        assert_eq!(neutral.score, 50);
    }

    #[test]
    fn test_volume_ratio_bound_on_limit_down() {
        let heavy = estimate_open_board_signal(Some(&sealed_down(Some(2.0))), None, None);
        assert_eq!(heavy.score, 60);
        assert_eq!(heavy.level, RiskLevel::Medium);
        assert_eq!(heavy.reasons, vec!["跌停放量，存在开板风险"]);

        let below = estimate_open_board_signal(Some(&sealed_down(Some(1.99))), None, None);
        assert_eq!(below.score, 50);
    }

    #[test]
    fn test_turnover_bounds() {
        let up = sealed_up(Some(1.0));
        let at = estimate_open_board_signal(Some(&up), None, Some(15.0));
        assert_eq!(at.score, 65);
        assert_eq!(at.reasons, vec!["换手率偏高，开板概率上升"]);
        assert_eq!(estimate_open_board_signal(Some(&up), None, Some(14.99)).score, 50);

        let down = sealed_down(Some(1.0));
        let at = estimate_open_board_signal(Some(&down), None, Some(10.0));
        assert_eq!(at.score, 60);
        assert_eq!(at.reasons, vec!["跌停换手偏高，封单稳定性弱"]);
        assert_eq!(estimate_open_board_signal(Some(&down), None, Some(9.99)).score, 50);
    }

    #[test]
    fn test_normal_day_keeps_base_score() {
        let latest = DailyLimitRecord {
            close: 10.1,
            is_limit_up: false,
            touched_limit_up: false,
            status: LimitStatus::Normal,
            ..sealed_up(None)
        };
        let signal = estimate_open_board_signal(Some(&latest), None, None);
        assert_eq!(signal.score, 50);
        assert_eq!(signal.direction, LimitDirection::None);
        assert!(signal.reasons.is_empty());
    }
}
