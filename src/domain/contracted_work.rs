// ==========================================
// 废弃井场修复计划 - 合同工程输出模型
// ==========================================
// 职责: 聚合行 (管理端审核表) + 已批准工程付款记录
// 生命周期: 每次计算重新生成，不缓存、不持久化
// ==========================================

use crate::domain::types::{ContractedWorkStatus, PaymentStatus};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ==========================================
// AggregatedWorkRow - 井场合同工程聚合行
// ==========================================
// 粒度: (申请, 井场, 工程类型) 一行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedWorkRow {
    // ===== 标识 =====
    pub key: String, // "<application_guid>.<well_authorization_number>.<work_type>"
    pub well_index: usize,
    pub application_guid: String,
    pub work_id: Option<String>,
    pub well_authorization_number: Option<String>,
    pub contracted_work_type: String,
    pub contracted_work_type_description: String,

    // ===== 申请数据 =====
    pub priority_criteria: usize,
    pub completion_date: Option<String>,

    // ===== 费用 =====
    pub est_cost: Decimal,        // 估算费用
    pub shared_cost: Decimal,     // 可分摊费用 (已封顶)
    pub est_shared_cost: Decimal, // 计入分摊合计的费用 (仅 APPROVED)

    // ===== 外部参考 =====
    #[serde(rename = "LMR")]
    pub lmr: Option<Decimal>,
    #[serde(rename = "OGC_status")]
    pub ogc_status: Option<String>,
    pub location: Option<String>,

    // ===== 审核 =====
    pub contracted_work_status_code: ContractedWorkStatus,
    pub review_json: Option<serde_json::Value>,
}

// ==========================================
// ContractedWorkPayment - 合同工程付款信息
// ==========================================
// 中期 / 最终两个阶段各自的状态、实际费用与已付金额
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContractedWorkPayment {
    // ===== 中期 =====
    #[serde(default)]
    pub interim_payment_status_code: PaymentStatus,
    #[serde(default)]
    pub interim_actual_cost: Option<Decimal>,
    #[serde(default)]
    pub interim_paid_amount: Option<Decimal>,
    #[serde(default)]
    pub interim_payment_submission_date: Option<NaiveDate>,
    #[serde(default)]
    pub interim_report_submitted: bool,

    // ===== 最终 =====
    #[serde(default)]
    pub final_payment_status_code: PaymentStatus,
    #[serde(default)]
    pub final_actual_cost: Option<Decimal>,
}

// ==========================================
// ApprovedContractedWork - 已批准合同工程
// ==========================================
// 付款核算与管理端付款列表的输入记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovedContractedWork {
    pub application_id: i64,
    pub application_guid: String,
    pub work_id: String,
    pub well_authorization_number: String,
    pub contracted_work_type: String,
    pub estimated_shared_cost: Decimal,
    #[serde(default)]
    pub contracted_work_payment: Option<ContractedWorkPayment>,
}

impl ApprovedContractedWork {
    /// 中期付款状态（无付款信息时视为 INFORMATION_REQUIRED）
    pub fn interim_payment_status(&self) -> PaymentStatus {
        self.contracted_work_payment
            .as_ref()
            .map(|p| p.interim_payment_status_code.clone())
            .unwrap_or_default()
    }

    /// 最终付款状态（无付款信息时视为 INFORMATION_REQUIRED）
    pub fn final_payment_status(&self) -> PaymentStatus {
        self.contracted_work_payment
            .as_ref()
            .map(|p| p.final_payment_status_code.clone())
            .unwrap_or_default()
    }
}
