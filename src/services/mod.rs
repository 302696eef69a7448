//! 业务逻辑服务模块
//!
//! 封装涨跌停分析逻辑

pub mod limit;          // 涨跌停分析引擎
pub mod limit_service;  // 接口请求适配
