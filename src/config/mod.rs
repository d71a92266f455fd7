// ==========================================
// 废弃井场修复计划 - 配置层
// ==========================================
// 职责: 计划规则参数管理,支持 key-value 覆写
// ==========================================

pub mod config_manager;
pub mod program_rules;

// 重导出核心配置管理器
pub use config_manager::{config_keys, ConfigError, ConfigManager, ConfigResult};
pub use program_rules::ProgramRules;
