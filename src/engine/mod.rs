// ==========================================
// 废弃井场修复计划 - 引擎层
// ==========================================
// 职责: 实现计划业务规则 (聚合 / 核算 / 门控 / 查询)
// 红线: 引擎为纯计算，不做 I/O，不保留跨调用状态
// ==========================================

pub mod aggregator;
pub mod approved_work_query;
pub mod contribution;
pub mod payment_gate;
pub mod totals;
pub mod work_id;

// 重导出核心引擎
pub use aggregator::WellSiteWorkAggregator;
pub use approved_work_query::{
    ApprovedWorkQuery, ApprovedWorkQueryEngine, PagedRecords, SortDirection, SortField,
};
pub use contribution::{ContributionCalculator, ContributionPreview};
pub use payment_gate::{InterimReportDeadline, PaymentGate};
pub use totals::{ContractedWorkTotals, WellTotals};
pub use work_id::{compare_work_ids, sort_by_work_id, work_id_sequence};
