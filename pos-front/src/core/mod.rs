//! 核心模块 - 配置
//!
//! - [`Config`] - 前台配置

pub mod config;

pub use config::Config;
