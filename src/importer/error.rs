// ==========================================
// 废弃井场修复计划 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 范围: 仅当输入文本无法解析为 JSON 时报错
//       结构缺失/字段异常一律降级为默认值
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("JSON 解析失败 ({source_name}): {message}")]
    JsonParseError {
        source_name: String,
        message: String,
    },
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;

impl ImportError {
    pub fn json(source_name: &str, err: serde_json::Error) -> Self {
        ImportError::JsonParseError {
            source_name: source_name.to_string(),
            message: err.to_string(),
        }
    }
}
