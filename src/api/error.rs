// ==========================================
// 废弃井场修复计划 - API层错误类型
// ==========================================
// 职责: 汇总各层错误，转换为调用方可读的错误消息
// ==========================================

use crate::config::ConfigError;
use crate::domain::error::DomainError;
use crate::importer::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 调用方契约错误
    // ==========================================
    #[error("无效参数: {0}")]
    InvalidArgument(String),

    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ==========================================
    // 外部依赖错误
    // ==========================================
    #[error("外部参考数据不可用: {0}")]
    ReferenceDataUnavailable(String),

    // ==========================================
    // 配置与导入错误
    // ==========================================
    #[error("配置错误: {0}")]
    ConfigError(String),

    #[error("数据导入失败: {0}")]
    ImportError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从各层错误转换
// ==========================================
impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidArgument { .. } => ApiError::InvalidArgument(err.to_string()),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        ApiError::ImportError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
