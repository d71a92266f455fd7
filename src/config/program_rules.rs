use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 资助计划规则参数
///
/// 比例均以小数表示 (0.60 = 60%)。默认值即计划的固定规则。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramRules {
    /// 单个工程项可分摊费用上限
    pub max_shared_cost: Decimal,

    /// 可分摊比例（估算费用 × 比例）
    pub shared_cost_ratio: Decimal,

    /// 中期付款上限比例（可分摊费用 × 比例）
    pub interim_max_ratio: Decimal,

    /// 最终付款上限比例（可分摊费用 × 比例，另加中期未领取余额）
    pub final_max_ratio: Decimal,

    /// 出资比例（实际费用 × 比例）
    pub contribution_ratio: Decimal,

    /// 中期付款提交后，中期进度报告的提交期限（天）
    pub interim_report_days: i64,

    /// 管理端列表默认每页条数
    pub default_page_size: usize,
}

impl Default for ProgramRules {
    fn default() -> Self {
        Self {
            max_shared_cost: Decimal::from(100_000),
            shared_cost_ratio: Decimal::new(5, 1),
            interim_max_ratio: Decimal::new(60, 2),
            final_max_ratio: Decimal::new(30, 2),
            contribution_ratio: Decimal::new(50, 2),
            interim_report_days: 30,
            default_page_size: 25,
        }
    }
}
