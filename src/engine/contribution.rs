// ==========================================
// 废弃井场修复计划 - 财政出资核算引擎
// ==========================================
// 职责: 计算付款阶段的最大出资额与估算出资额
// 输入: 付款阶段 + 已批准合同工程 (可分摊费用, 付款信息) + 实际费用覆写
// 输出: PaymentContributionResult
// ==========================================
// 规则:
// - 中期上限 = round(可分摊费用 × 60%, 2)
// - 最终上限 = round(可分摊费用 × 30%, 2) + 中期未领取余额
// - 估算出资 = min(round(实际费用 × 50%, 2), 上限)
// - 结果均非负；实际费用为负数或非数字时按 0 处理
// ==========================================

use crate::config::ProgramRules;
use crate::domain::contracted_work::{ApprovedContractedWork, ContractedWorkPayment};
use crate::domain::error::DomainResult;
use crate::domain::money::{
    apply_ratio, non_negative, parse_amount_input, saturating_add, saturating_sub,
};
use crate::domain::payment::PaymentContributionResult;
use crate::domain::types::{PaymentStatus, PaymentType};
use rust_decimal::Decimal;
use tracing::instrument;

// ==========================================
// ContributionCalculator - 财政出资核算引擎
// ==========================================
pub struct ContributionCalculator {
    rules: ProgramRules,
}

impl ContributionCalculator {
    /// 使用默认计划规则创建
    pub fn new() -> Self {
        Self::with_rules(ProgramRules::default())
    }

    pub fn with_rules(rules: ProgramRules) -> Self {
        Self { rules }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算本阶段的出资额
    ///
    /// # 参数
    /// - `payment_type`: 付款阶段
    /// - `work`: 已批准合同工程
    /// - `actual_cost_override`: 表单中输入的实际费用；None 时取已保存的 `<阶段>_actual_cost`
    #[instrument(skip(self, work), fields(work_id = %work.work_id))]
    pub fn calculate(
        &self,
        payment_type: PaymentType,
        work: &ApprovedContractedWork,
        actual_cost_override: Option<Decimal>,
    ) -> PaymentContributionResult {
        let payment = work.contracted_work_payment.as_ref();
        let shared_cost = non_negative(work.estimated_shared_cost);

        let max_amount = non_negative(match payment_type {
            PaymentType::Interim => self.interim_max_amount(shared_cost),
            PaymentType::Final => {
                saturating_add(
                    apply_ratio(shared_cost, self.rules.final_max_ratio),
                    self.unclaimed_interim_remainder(shared_cost, payment),
                )
            }
        });

        let cost_basis = actual_cost_override
            .or_else(|| payment.and_then(|p| Self::persisted_actual_cost(payment_type, p)))
            .map(non_negative)
            .unwrap_or(Decimal::ZERO);

        let estimated = non_negative(
            apply_ratio(cost_basis, self.rules.contribution_ratio).min(max_amount),
        );

        tracing::debug!(
            payment_type = %payment_type,
            max_amount = %max_amount,
            estimated = %estimated,
            "出资核算完成"
        );

        PaymentContributionResult {
            payment_type,
            max_amount,
            estimated_financial_contribution: estimated,
        }
    }

    /// 按字符串付款阶段计算
    ///
    /// # 错误
    /// - 付款阶段不是 interim / final 时返回 InvalidArgument
    pub fn calculate_for(
        &self,
        payment_type: &str,
        work: &ApprovedContractedWork,
        actual_cost_override: Option<Decimal>,
    ) -> DomainResult<PaymentContributionResult> {
        let payment_type = payment_type.parse::<PaymentType>()?;
        Ok(self.calculate(payment_type, work, actual_cost_override))
    }

    /// 按表单原始输入计算
    ///
    /// 空输入回退到已保存的实际费用；非数字输入按 0 处理。
    pub fn calculate_from_input(
        &self,
        payment_type: PaymentType,
        work: &ApprovedContractedWork,
        raw_actual_cost: Option<&str>,
    ) -> PaymentContributionResult {
        let override_cost = match raw_actual_cost.map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_amount_input(raw).unwrap_or(Decimal::ZERO)),
        };
        self.calculate(payment_type, work, override_cost)
    }

    // ==========================================
    // 上限计算
    // ==========================================

    /// 中期上限 = round(可分摊费用 × 中期比例, 2)
    pub fn interim_max_amount(&self, shared_cost: Decimal) -> Decimal {
        apply_ratio(shared_cost, self.rules.interim_max_ratio)
    }

    /// 中期未领取余额
    ///
    /// 仅当中期付款已批准且已记录实付金额时计算，否则为 0
    fn unclaimed_interim_remainder(
        &self,
        shared_cost: Decimal,
        payment: Option<&ContractedWorkPayment>,
    ) -> Decimal {
        let Some(payment) = payment else {
            return Decimal::ZERO;
        };
        if payment.interim_payment_status_code != PaymentStatus::Approved {
            return Decimal::ZERO;
        }
        match payment.interim_paid_amount {
            Some(paid) => non_negative(saturating_sub(self.interim_max_amount(shared_cost), paid)),
            None => Decimal::ZERO,
        }
    }

    fn persisted_actual_cost(
        payment_type: PaymentType,
        payment: &ContractedWorkPayment,
    ) -> Option<Decimal> {
        match payment_type {
            PaymentType::Interim => payment.interim_actual_cost,
            PaymentType::Final => payment.final_actual_cost,
        }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for ContributionCalculator {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// ContributionPreview - 表单实时核算
// ==========================================
// 每次实际费用输入变化时重新计算；
// 输入暂时无效（清空、非数字）时保留上一次结果
#[derive(Debug, Clone)]
pub struct ContributionPreview {
    payment_type: PaymentType,
    current: PaymentContributionResult,
}

impl ContributionPreview {
    /// 以已保存的数据初始化预览
    pub fn new(
        calculator: &ContributionCalculator,
        payment_type: PaymentType,
        work: &ApprovedContractedWork,
    ) -> Self {
        Self {
            payment_type,
            current: calculator.calculate(payment_type, work, None),
        }
    }

    /// 输入变化
    pub fn on_input(
        &mut self,
        calculator: &ContributionCalculator,
        work: &ApprovedContractedWork,
        raw_actual_cost: &str,
    ) -> PaymentContributionResult {
        if let Some(cost) = parse_amount_input(raw_actual_cost) {
            self.current = calculator.calculate(self.payment_type, work, Some(cost));
        }
        self.current
    }

    pub fn current(&self) -> PaymentContributionResult {
        self.current
    }
}
