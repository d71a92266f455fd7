// ==========================================
// 废弃井场修复计划 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、金额规则
// 红线: 不含解析逻辑,不含引擎逻辑
// ==========================================

pub mod application;
pub mod contracted_work;
pub mod error;
pub mod money;
pub mod payment;
pub mod reference;
pub mod types;

// 重导出核心类型
pub use application::{
    Application, ContractedWorkItem, CostEntry, ReviewOverlay, WellSite, WellSiteReview,
};
pub use contracted_work::{AggregatedWorkRow, ApprovedContractedWork, ContractedWorkPayment};
pub use error::{DomainError, DomainResult};
pub use payment::PaymentContributionResult;
pub use reference::{ExternalLiabilityRecord, ExternalWellRecord, WellReferenceData};
pub use types::{ContractedWorkStatus, LiabilityCategory, PaymentStatus, PaymentType};
