//! 涨跌停分析接口处理器
//!
//! ## API 列表
//! - GET  /limits/rule/{code}?name= - 查询限幅规则
//! - POST /limits/analyze - 单只股票涨跌停分析
//! - POST /limits/analyze/batch - 批量涨跌停分析

use actix_web::{error::InternalError, web, HttpResponse, Result};

use crate::config::AnalysisConfig;
use crate::models::{
    ApiResponse, LimitAnalysisRequest, LimitAnalysisResult, LimitBatchRequest, LimitRuleQuery,
};
use crate::services::limit_service;

/// 查询限幅规则
///
/// GET /api/v1/limits/rule/{code}?name=ST某某
pub async fn get_limit_rule(
    path: web::Path<String>,
    query: web::Query<LimitRuleQuery>,
) -> Result<HttpResponse> {
    let code = path.into_inner();
    let rule = limit_service::get_limit_rule(&code, query.name.as_deref());
    Ok(HttpResponse::Ok().json(ApiResponse::success(rule)))
}

/// 单只股票涨跌停分析
///
/// POST /api/v1/limits/analyze
pub async fn analyze_limits(
    body: web::Json<LimitAnalysisRequest>,
    defaults: web::Data<AnalysisConfig>,
) -> Result<HttpResponse> {
    match limit_service::analyze(&body, &defaults) {
        Ok(result) => Ok(HttpResponse::Ok().json(ApiResponse::success(result))),
        Err(e) => {
            log::warn!("涨跌停分析请求被拒绝: {}", e);
            let response = ApiResponse::<LimitAnalysisResult>::error(e.to_string());
            Ok(HttpResponse::BadRequest().json(response))
        }
    }
}

/// 批量涨跌停分析
///
/// POST /api/v1/limits/analyze/batch
pub async fn analyze_limits_batch(
    body: web::Json<LimitBatchRequest>,
    defaults: web::Data<AnalysisConfig>,
) -> Result<HttpResponse> {
    match limit_service::analyze_batch(&body.items, &defaults) {
        Ok(results) => {
            let message = format!("共分析 {} 只股票", results.len());
            Ok(HttpResponse::Ok().json(ApiResponse::with_message(results, message)))
        }
        Err(e) => {
            log::warn!("批量涨跌停分析请求被拒绝: {}", e);
            let response = ApiResponse::<Vec<LimitAnalysisResult>>::error(e.to_string());
            Ok(HttpResponse::BadRequest().json(response))
        }
    }
}

/// 请求体解析失败时返回统一格式的 400 响应
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("请求体解析失败: {}", err);
        let response = ApiResponse::<()>::error(format!("请求体格式错误: {}", err));
        InternalError::from_response(err, HttpResponse::BadRequest().json(response)).into()
    })
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/limits")
            .app_data(json_config())
            .route("/rule/{code}", web::get().to(get_limit_rule))
            .route("/analyze", web::post().to(analyze_limits))
            .route("/analyze/batch", web::post().to(analyze_limits_batch)),
    );
}
