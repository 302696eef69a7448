//! 涨跌停分析服务
//!
//! 将接口请求转换为分析参数，调用分析引擎

use anyhow::{anyhow, Result};

use crate::config::AnalysisConfig;
use crate::models::{LimitAnalysisRequest, LimitAnalysisResult, LimitRule};
use crate::services::limit::{analyze_limits, detect_limit_rule, parse_daily_bars, AnalysisOptions};

/// 合并请求参数与配置默认值
fn resolve_options(req: &LimitAnalysisRequest, defaults: &AnalysisConfig) -> Result<AnalysisOptions> {
    let options = AnalysisOptions {
        price_tolerance: req.price_tolerance.unwrap_or(defaults.price_tolerance),
        pct_tolerance: req.pct_tolerance.unwrap_or(defaults.pct_tolerance),
        recent_days: req.recent_days.unwrap_or(defaults.recent_days),
    };

    if !options.price_tolerance.is_finite() || options.price_tolerance < 0.0 {
        return Err(anyhow!("价格容差必须为非负数: {}", options.price_tolerance));
    }
    if !options.pct_tolerance.is_finite() || options.pct_tolerance < 0.0 {
        return Err(anyhow!("涨跌幅容差必须为非负数: {}", options.pct_tolerance));
    }

    Ok(options)
}

/// 分析单只股票
///
/// 代码或名称为空时按主板规则分析，仅容差参数非法时返回错误
pub fn analyze(req: &LimitAnalysisRequest, defaults: &AnalysisConfig) -> Result<LimitAnalysisResult> {
    let options = resolve_options(req, defaults)?;
    let bars = parse_daily_bars(&req.records);
    let turnover_rate = req.turnover_rate.filter(|t| t.is_finite());

    Ok(analyze_limits(&req.code, &req.name, &bars, turnover_rate, &options))
}

/// 批量分析，任一条目参数非法则整体失败
pub fn analyze_batch(
    items: &[LimitAnalysisRequest],
    defaults: &AnalysisConfig,
) -> Result<Vec<LimitAnalysisResult>> {
    items
        .iter()
        .enumerate()
        .map(|(i, req)| analyze(req, defaults).map_err(|e| anyhow!("第 {} 条 ({}): {}", i + 1, req.code, e)))
        .collect()
}

/// 查询限幅规则
pub fn get_limit_rule(code: &str, name: Option<&str>) -> LimitRule {
    detect_limit_rule(code, name.unwrap_or(""))
}
