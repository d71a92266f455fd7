// ==========================================
// 废弃井场修复计划 - 付款阶段门控
// ==========================================
// 状态流转: INFORMATION_REQUIRED → 提交 → 审核中 → APPROVED
// 门控规则:
// - 中期: 状态不是 INFORMATION_REQUIRED 后只读
// - 最终: 中期仍为 INFORMATION_REQUIRED，或最终状态不是 INFORMATION_REQUIRED 时只读
// 中期付款提交后，须在规定天数内提交中期进度报告
// ==========================================

use crate::config::ProgramRules;
use crate::domain::contracted_work::ContractedWorkPayment;
use crate::domain::types::{PaymentStatus, PaymentType};
use crate::i18n;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// 中期进度报告期限
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterimReportDeadline {
    /// 中期付款尚未提交
    NotStarted,
    /// 报告已提交
    Submitted,
    /// 等待提交（days_left 为负表示已逾期）
    Due { deadline: NaiveDate, days_left: i64 },
}

// ==========================================
// PaymentGate - 付款阶段门控
// ==========================================
pub struct PaymentGate {
    interim_report_days: i64,
}

impl PaymentGate {
    pub fn new() -> Self {
        Self::with_rules(&ProgramRules::default())
    }

    pub fn with_rules(rules: &ProgramRules) -> Self {
        Self {
            interim_report_days: rules.interim_report_days,
        }
    }

    fn statuses(payment: Option<&ContractedWorkPayment>) -> (PaymentStatus, PaymentStatus) {
        payment
            .map(|p| {
                (
                    p.interim_payment_status_code.clone(),
                    p.final_payment_status_code.clone(),
                )
            })
            .unwrap_or_default()
    }

    /// 付款表单是否只读
    pub fn is_view_only(&self, payment_type: PaymentType, payment: Option<&ContractedWorkPayment>) -> bool {
        let (interim, final_status) = Self::statuses(payment);
        match payment_type {
            PaymentType::Interim => !interim.is_information_required(),
            PaymentType::Final => {
                interim.is_information_required() || !final_status.is_information_required()
            }
        }
    }

    /// 最终付款是否需要先完成中期付款
    pub fn final_requires_interim(&self, payment: Option<&ContractedWorkPayment>) -> bool {
        Self::statuses(payment).0.is_information_required()
    }

    /// 最终付款门控提示（无需提示时返回 None）
    pub fn final_gate_notice(&self, payment: Option<&ContractedWorkPayment>) -> Option<String> {
        self.final_requires_interim(payment)
            .then(|| i18n::t("payment.final_requires_interim"))
    }

    /// 计算中期进度报告期限
    ///
    /// # 参数
    /// - `payment`: 付款信息
    /// - `today`: 当前日期
    pub fn interim_report_deadline(
        &self,
        payment: Option<&ContractedWorkPayment>,
        today: NaiveDate,
    ) -> InterimReportDeadline {
        let Some(payment) = payment else {
            return InterimReportDeadline::NotStarted;
        };
        let Some(submitted_on) = payment.interim_payment_submission_date else {
            return InterimReportDeadline::NotStarted;
        };
        if payment.interim_report_submitted {
            return InterimReportDeadline::Submitted;
        }

        let elapsed = (today - submitted_on).num_days();
        InterimReportDeadline::Due {
            deadline: submitted_on + Duration::days(self.interim_report_days),
            days_left: self.interim_report_days - elapsed,
        }
    }

    /// 中期进度报告期限提示
    pub fn interim_report_notice(&self, deadline: &InterimReportDeadline) -> Option<String> {
        match deadline {
            InterimReportDeadline::Due { deadline, days_left } if *days_left >= 0 => {
                Some(i18n::t_with_args(
                    "payment.interim_report_due",
                    &[
                        ("deadline", &deadline.format("%Y-%m-%d").to_string()),
                        ("days", &days_left.to_string()),
                    ],
                ))
            }
            InterimReportDeadline::Due { days_left, .. } => Some(i18n::t_with_args(
                "payment.interim_report_overdue",
                &[("days", &(-days_left).to_string())],
            )),
            _ => None,
        }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for PaymentGate {
    fn default() -> Self {
        Self::new()
    }
}
