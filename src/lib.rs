//! 涨跌停分析后端
//!
//! 基于日线数据识别涨跌停、触板、炸板，统计连板并预估开板风险

pub mod config;     // 配置加载
pub mod handlers;   // HTTP 请求处理器
pub mod middleware; // 中间件
pub mod models;     // 数据模型定义
pub mod services;   // 业务逻辑服务
