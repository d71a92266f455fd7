// ==========================================
// 废弃井场修复计划 - 付款核算结果
// ==========================================

use crate::domain::types::PaymentType;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ==========================================
// PaymentContributionResult - 财政出资核算结果
// ==========================================
// 两个金额均非负，且已舍入到分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentContributionResult {
    pub payment_type: PaymentType,
    /// 本阶段允许的最大出资额
    pub max_amount: Decimal,
    /// 按实际费用估算的出资额 (不超过 max_amount)
    pub estimated_financial_contribution: Decimal,
}
