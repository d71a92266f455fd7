// ==========================================
// 废弃井场修复计划 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供宿主应用调用
// ==========================================

pub mod contracted_work_api;
pub mod error;
pub mod payment_api;
pub mod reference_source;

// 重导出核心类型
pub use contracted_work_api::ContractedWorkApi;
pub use error::{ApiError, ApiResult};
pub use payment_api::{PaymentApi, PaymentFormState};
pub use reference_source::{InMemoryReferenceSource, ReferenceDataSource};
