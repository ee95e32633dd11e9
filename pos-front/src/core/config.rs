use std::path::PathBuf;

/// 前台配置 - front-of-house settings
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (unset) | 日志目录，设置后按天滚动写入文件 |
/// | CATALOG_PATH | (unset) | 菜单 JSON 文件，未设置时使用内置菜单 |
/// | CURRENCY_SYMBOL | $ | 金额显示前缀 |
///
/// # 示例
///
/// ```ignore
/// CATALOG_PATH=./menu.json LOG_LEVEL=debug cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 运行环境: development | production
    pub environment: String,
    /// tracing max level
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
    /// Catalog file; the seed menu is used when unset
    pub catalog_path: Option<PathBuf>,
    pub currency_symbol: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().map(PathBuf::from),
            catalog_path: std::env::var("CATALOG_PATH").ok().map(PathBuf::from),
            currency_symbol: std::env::var("CURRENCY_SYMBOL").unwrap_or_else(|_| "$".into()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(catalog_path: Option<PathBuf>, currency_symbol: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.catalog_path = catalog_path;
        config.currency_symbol = currency_symbol.into();
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
