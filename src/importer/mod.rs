// ==========================================
// 废弃井场修复计划 - 导入层
// ==========================================
// 职责: API 响应 (serde_json::Value) → 领域对象
// 红线: 边界处完成规范化，引擎层只接收强类型数据
// ==========================================

pub mod application_parser;
pub mod error;
pub mod json_fields;
pub mod reference_parser;
pub mod review_parser;

// 重导出核心类型
pub use application_parser::ApplicationParser;
pub use error::{ImportError, ImportResult};
pub use reference_parser::ReferenceParser;
pub use review_parser::parse_review;
