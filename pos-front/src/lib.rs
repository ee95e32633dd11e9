//! POS 前台 - restaurant front-of-house core
//!
//! # 模块结构
//!
//! ```text
//! pos-front/src/
//! ├── core/          # 配置
//! ├── utils/         # 错误、日志
//! ├── cart/          # 点单购物车 (OrderCart)
//! ├── catalog/       # 菜单浏览、加载
//! ├── order_money/   # 金额计算
//! ├── floor.rs       # 桌台总览
//! ├── roster.rs      # 员工排班
//! ├── dashboard.rs   # 经理看板
//! ├── session.rs     # 会话 UI 状态
//! ├── notify.rs      # 下单通知
//! └── seed.rs        # 内置演示数据
//! ```

pub mod cart;
pub mod catalog;
pub mod core;
pub mod dashboard;
pub mod floor;
pub mod notify;
pub mod order_money;
pub mod roster;
pub mod seed;
pub mod session;
pub mod utils;

// Re-export 公共类型
pub use cart::OrderCart;
pub use crate::core::Config;
pub use dashboard::DashboardSummary;
pub use floor::TableFilter;
pub use notify::{LogNotifier, NotificationSink, Toast, ToastQueue};
pub use session::{OrderDraft, SessionError, UiSession};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

use shared::models::CatalogItem;

/// Load `.env` (if present) and initialise logging from the environment
pub fn setup_environment() -> AppResult<Config> {
    match dotenv::dotenv() {
        Ok(_) => {}
        Err(e) if e.not_found() => {}
        Err(e) => return Err(AppError::Environment(e.to_string())),
    }

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    Ok(config)
}

/// Catalog from `CATALOG_PATH`, or the built-in menu when unset
pub fn load_menu(config: &Config) -> AppResult<Vec<CatalogItem>> {
    match &config.catalog_path {
        Some(path) => Ok(catalog::load_catalog(path)?),
        None => {
            tracing::info!("No catalog configured, using built-in menu");
            Ok(seed::menu_items())
        }
    }
}
