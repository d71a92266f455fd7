// ==========================================
// 废弃井场修复计划 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 存储: key-value (默认值 + JSON 文件覆写)
// ==========================================

use crate::config::program_rules::ProgramRules;
use rust_decimal::Decimal;
use serde_json::json;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

// ==========================================
// 配置键
// ==========================================
pub mod config_keys {
    pub const MAX_SHARED_COST: &str = "max_shared_cost";
    pub const SHARED_COST_RATIO: &str = "shared_cost_ratio";
    pub const INTERIM_MAX_RATIO: &str = "interim_max_ratio";
    pub const FINAL_MAX_RATIO: &str = "final_max_ratio";
    pub const CONTRIBUTION_RATIO: &str = "contribution_ratio";
    pub const INTERIM_REPORT_DAYS: &str = "interim_report_days";
    pub const DEFAULT_PAGE_SIZE: &str = "default_page_size";

    pub const ALL: [&str; 7] = [
        MAX_SHARED_COST,
        SHARED_COST_RATIO,
        INTERIM_MAX_RATIO,
        FINAL_MAX_RATIO,
        CONTRIBUTION_RATIO,
        INTERIM_REPORT_DAYS,
        DEFAULT_PAGE_SIZE,
    ];
}

// ==========================================
// 配置错误
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {message}")]
    FileReadError { path: String, message: String },

    #[error("配置文件格式错误 ({path}): {message}")]
    FileFormatError { path: String, message: String },

    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    ValueError {
        key: String,
        value: String,
        message: String,
    },

    #[error("配置序列化失败: {0}")]
    SerializationError(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    values: HashMap<String, String>,
}

impl ConfigManager {
    /// 创建仅含默认值的 ConfigManager
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 key-value 覆写创建
    pub fn from_kv(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// 从 JSON 文件加载覆写
    ///
    /// 文件格式: `{ "max_shared_cost": "100000", "interim_report_days": 30 }`
    /// 值可以是字符串或数字
    pub fn load_from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::FileReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let parsed: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&raw)
            .map_err(|e| ConfigError::FileFormatError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        let mut values = HashMap::new();
        for (key, value) in parsed {
            let text = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                other => {
                    return Err(ConfigError::ValueError {
                        key,
                        value: other.to_string(),
                        message: "仅支持字符串或数字".to_string(),
                    })
                }
            };
            values.insert(key, text);
        }

        tracing::info!(path = %path.display(), keys = values.len(), "配置文件已加载");
        Ok(Self { values })
    }

    /// 默认配置文件路径: `<config_dir>/dsrp/config.json`
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dsrp").join("config.json"))
    }

    /// 从默认路径加载；文件不存在时使用默认值
    pub fn load_default() -> ConfigResult<Self> {
        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load_from_file(path),
            _ => Ok(Self::new()),
        }
    }

    /// 覆写单个配置
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    /// 读取覆写值（不含默认值）
    pub fn get_config_value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.trim())
    }

    fn parse_or<T: FromStr>(&self, key: &str, default: T) -> ConfigResult<T>
    where
        T::Err: std::fmt::Display,
    {
        match self.get_config_value(key) {
            None | Some("") => Ok(default),
            Some(raw) => raw.parse::<T>().map_err(|e| ConfigError::ValueError {
                key: key.to_string(),
                value: raw.to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn non_negative_decimal(&self, key: &str, default: Decimal) -> ConfigResult<Decimal> {
        let value = self.parse_or(key, default)?;
        if value.is_sign_negative() {
            return Err(ConfigError::ValueError {
                key: key.to_string(),
                value: value.to_string(),
                message: "不允许负数".to_string(),
            });
        }
        Ok(value)
    }

    /// 获取生效的计划规则
    pub fn get_program_rules(&self) -> ConfigResult<ProgramRules> {
        let defaults = ProgramRules::default();

        for key in self.values.keys() {
            if !config_keys::ALL.contains(&key.as_str()) {
                tracing::warn!(key = %key, "未知配置键，已忽略");
            }
        }

        let default_page_size = self.parse_or(
            config_keys::DEFAULT_PAGE_SIZE,
            defaults.default_page_size,
        )?;
        if default_page_size == 0 {
            return Err(ConfigError::ValueError {
                key: config_keys::DEFAULT_PAGE_SIZE.to_string(),
                value: "0".to_string(),
                message: "每页条数必须大于 0".to_string(),
            });
        }

        Ok(ProgramRules {
            max_shared_cost: self
                .non_negative_decimal(config_keys::MAX_SHARED_COST, defaults.max_shared_cost)?,
            shared_cost_ratio: self
                .non_negative_decimal(config_keys::SHARED_COST_RATIO, defaults.shared_cost_ratio)?,
            interim_max_ratio: self
                .non_negative_decimal(config_keys::INTERIM_MAX_RATIO, defaults.interim_max_ratio)?,
            final_max_ratio: self
                .non_negative_decimal(config_keys::FINAL_MAX_RATIO, defaults.final_max_ratio)?,
            contribution_ratio: self.non_negative_decimal(
                config_keys::CONTRIBUTION_RATIO,
                defaults.contribution_ratio,
            )?,
            interim_report_days: self
                .parse_or(config_keys::INTERIM_REPORT_DAYS, defaults.interim_report_days)?,
            default_page_size,
        })
    }

    /// 获取生效配置的快照（JSON格式）
    ///
    /// # 用途
    /// - 随核算结果记录当时使用的规则
    pub fn get_config_snapshot(&self) -> ConfigResult<String> {
        let rules = self.get_program_rules()?;

        let snapshot: BTreeMap<&str, String> = BTreeMap::from([
            (config_keys::MAX_SHARED_COST, rules.max_shared_cost.to_string()),
            (config_keys::SHARED_COST_RATIO, rules.shared_cost_ratio.to_string()),
            (config_keys::INTERIM_MAX_RATIO, rules.interim_max_ratio.to_string()),
            (config_keys::FINAL_MAX_RATIO, rules.final_max_ratio.to_string()),
            (config_keys::CONTRIBUTION_RATIO, rules.contribution_ratio.to_string()),
            (config_keys::INTERIM_REPORT_DAYS, rules.interim_report_days.to_string()),
            (config_keys::DEFAULT_PAGE_SIZE, rules.default_page_size.to_string()),
        ]);

        serde_json::to_string(&json!(snapshot))
            .map_err(|e| ConfigError::SerializationError(e.to_string()))
    }
}
