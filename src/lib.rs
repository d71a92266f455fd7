// ==========================================
// 废弃井场修复计划 - 核心库
// ==========================================
// 职责: 合同工程聚合 / 付款出资核算 / 付款门控
// 系统定位: 申请门户与管理端共用的计算核心 (不含 UI 与持久化)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - API 响应规范化
pub mod importer;

// 引擎层 - 业务规则
pub mod engine;

// 配置层 - 计划规则参数
pub mod config;

// API 层 - 业务接口
pub mod api;

// 临时访问会话
pub mod session;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{ContractedWorkStatus, LiabilityCategory, PaymentStatus, PaymentType};

// 领域实体
pub use domain::{
    AggregatedWorkRow, Application, ApprovedContractedWork, ContractedWorkPayment,
    PaymentContributionResult, WellReferenceData, WellSite,
};

// 引擎
pub use engine::{
    ApprovedWorkQueryEngine, ContractedWorkTotals, ContributionCalculator, PaymentGate,
    WellSiteWorkAggregator,
};

// 配置
pub use config::{ConfigManager, ProgramRules};

// API
pub use api::{ContractedWorkApi, PaymentApi};

// 会话
pub use session::{SessionCountdown, TemporarySession};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "废弃井场修复计划";
