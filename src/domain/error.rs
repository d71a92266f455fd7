// ==========================================
// 废弃井场修复计划 - 领域层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 范围: 仅调用方契约错误（非法枚举参数等）
//       数据缺失/格式异常在领域与引擎内部降级处理，不上抛
// ==========================================

use thiserror::Error;

/// 领域层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("无效参数 {field}={value}: {reason}")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },
}

/// Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
