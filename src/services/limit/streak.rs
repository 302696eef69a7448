//! 连板/连跌停统计

use crate::models::{DailyLimitRecord, LimitStreak};

/// 计算连板/连跌停统计
///
/// 空序列返回全零结果
pub fn compute_streak(records: &[DailyLimitRecord]) -> LimitStreak {
    let mut streak = LimitStreak::default();
    let mut running_up = 0u32;
    let mut running_down = 0u32;

    for r in records {
        if r.is_limit_up {
            running_up += 1;
            streak.max_up_streak = streak.max_up_streak.max(running_up);
            streak.limit_up_dates.push(r.date.clone());
        } else {
            running_up = 0;
        }

        if r.is_limit_down {
            running_down += 1;
            streak.max_down_streak = streak.max_down_streak.max(running_down);
            streak.limit_down_dates.push(r.date.clone());
        } else {
            running_down = 0;
        }

        if r.broken_limit_up {
            streak.break_up_count += 1;
        }
        if r.broken_limit_down {
            streak.break_down_count += 1;
        }
    }

    // 当前连板从最近一天往前数
    streak.up_days = trailing_count(records, |r| r.is_limit_up);
    streak.down_days = trailing_count(records, |r| r.is_limit_down);

    streak.limit_up_days = streak.limit_up_dates.len() as u32;
    streak.limit_down_days = streak.limit_down_dates.len() as u32;
    streak.last_limit_up_date = streak.limit_up_dates.last().cloned();
    streak.last_limit_down_date = streak.limit_down_dates.last().cloned();

    streak
}

fn trailing_count<F>(records: &[DailyLimitRecord], pred: F) -> u32
where
    F: Fn(&DailyLimitRecord) -> bool,
{
    records.iter().rev().take_while(|r| pred(r)).count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LimitStatus;

    fn record(date: &str, up: bool, down: bool, broken_up: bool, broken_down: bool) -> DailyLimitRecord {
        DailyLimitRecord {
            date: date.to_string(),
            close: 10.0,
            high: 10.0,
            low: 10.0,
            prev_close: 10.0,
            pct_chg: None,
            volume: None,
            amount: None,
            volume_ratio: None,
            limit_up_price: 11.0,
            limit_down_price: 9.0,
            is_limit_up: up,
            is_limit_down: down,
            touched_limit_up: up || broken_up,
            touched_limit_down: down || broken_down,
            broken_limit_up: broken_up,
            broken_limit_down: broken_down,
            status: LimitStatus::Normal,
        }
    }

    fn up(date: &str) -> DailyLimitRecord {
        record(date, true, false, false, false)
    }

    fn down(date: &str) -> DailyLimitRecord {
        record(date, false, true, false, false)
    }

    fn flat(date: &str) -> DailyLimitRecord {
        record(date, false, false, false, false)
    }

    #[test]
    fn test_empty_sequence() {
        let streak = compute_streak(&[]);
        assert_eq!(streak, LimitStreak::default());
        assert_eq!(streak.up_days, 0);
        assert!(streak.limit_up_dates.is_empty());
        assert!(streak.last_limit_down_date.is_none());
    }

    #[test]
    fn test_current_and_max_up_streak() {
        let records = vec![
            up("d1"),
            up("d2"),
            up("d3"),
            flat("d4"),
            up("d5"),
            up("d6"),
        ];
        let streak = compute_streak(&records);

        assert_eq!(streak.up_days, 2);
        assert_eq!(streak.max_up_streak, 3);
        assert_eq!(streak.limit_up_days, 5);
        assert_eq!(streak.last_limit_up_date.as_deref(), Some("d6"));
        assert_eq!(streak.limit_up_dates, vec!["d1", "d2", "d3", "d5", "d6"]);
        assert_eq!(streak.down_days, 0);
        assert!(streak.up_days <= streak.max_up_streak);
    }

    #[test]
    fn test_streak_broken_by_last_day() {
        let records = vec![down("d1"), down("d2"), flat("d3")];
        let streak = compute_streak(&records);

        assert_eq!(streak.down_days, 0);
        assert_eq!(streak.max_down_streak, 2);
        assert_eq!(streak.limit_down_days, 2);
        assert_eq!(streak.last_limit_down_date.as_deref(), Some("d2"));
        assert!(streak.last_limit_up_date.is_none());
    }

    #[test]
    fn test_break_counts() {
        let records = vec![
            record("d1", false, false, true, false),
            up("d2"),
            record("d3", false, false, true, false),
            record("d4", false, false, false, true),
        ];
        let streak = compute_streak(&records);

        assert_eq!(streak.break_up_count, 2);
        assert_eq!(streak.break_down_count, 1);
        assert_eq!(streak.max_up_streak, 1);
        assert_eq!(streak.up_days, 0);
    }

    #[test]
    fn test_current_never_exceeds_max() {
        let patterns: Vec<Vec<DailyLimitRecord>> = vec![
            vec![up("a")],
            vec![down("a"), down("b"), down("c")],
            vec![up("a"), down("b"), up("c"), up("d")],
            vec![flat("a"), up("b"), up("c"), flat("d"), down("e")],
        ];
        for records in &patterns {
            let s = compute_streak(records);
            assert!(s.up_days <= s.max_up_streak);
            assert!(s.down_days <= s.max_down_streak);
        }
    }
}
