// ==========================================
// 废弃井场修复计划 - 付款 API
// ==========================================
// 职责: 付款表单与管理端付款列表
// - 出资核算 (中期 / 最终)
// - 表单只读门控与提示
// - 已批准合同工程列表查询
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::{ConfigManager, ProgramRules};
use crate::domain::contracted_work::ApprovedContractedWork;
use crate::domain::payment::PaymentContributionResult;
use crate::domain::types::PaymentType;
use crate::engine::{
    ApprovedWorkQuery, ApprovedWorkQueryEngine, ContributionCalculator, ContributionPreview,
    InterimReportDeadline, PagedRecords, PaymentGate,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 付款表单状态
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentFormState {
    pub payment_type: PaymentType,
    pub view_only: bool,
    /// 表单顶部提示（最终付款门控 / 中期报告期限）
    pub notices: Vec<String>,
    pub interim_report_deadline: InterimReportDeadline,
    pub contribution: PaymentContributionResult,
}

// ==========================================
// PaymentApi - 付款 API
// ==========================================
pub struct PaymentApi {
    rules: ProgramRules,
    calculator: ContributionCalculator,
    gate: PaymentGate,
    query_engine: ApprovedWorkQueryEngine,
}

impl PaymentApi {
    pub fn new(rules: ProgramRules) -> Self {
        Self {
            calculator: ContributionCalculator::with_rules(rules.clone()),
            gate: PaymentGate::with_rules(&rules),
            query_engine: ApprovedWorkQueryEngine::new(),
            rules,
        }
    }

    /// 由配置管理器创建
    ///
    /// # 错误
    /// - 配置值无效时返回 ConfigError
    pub fn from_config(config: &ConfigManager) -> ApiResult<Self> {
        Ok(Self::new(config.get_program_rules()?))
    }

    pub fn calculator(&self) -> &ContributionCalculator {
        &self.calculator
    }

    // ==========================================
    // 出资核算
    // ==========================================

    /// 计算出资额
    ///
    /// # 参数
    /// - `payment_type`: "interim" 或 "final"
    /// - `work`: 已批准合同工程
    /// - `actual_cost_override`: 表单中输入的实际费用
    ///
    /// # 错误
    /// - 付款阶段无效时返回 InvalidArgument
    pub fn calculate_contribution(
        &self,
        payment_type: &str,
        work: &ApprovedContractedWork,
        actual_cost_override: Option<Decimal>,
    ) -> ApiResult<PaymentContributionResult> {
        Ok(self
            .calculator
            .calculate_for(payment_type, work, actual_cost_override)?)
    }

    /// 创建表单实时核算
    pub fn start_preview(
        &self,
        payment_type: &str,
        work: &ApprovedContractedWork,
    ) -> ApiResult<ContributionPreview> {
        let payment_type = parse_payment_type(payment_type)?;
        Ok(ContributionPreview::new(&self.calculator, payment_type, work))
    }

    // ==========================================
    // 表单状态
    // ==========================================

    /// 组装付款表单状态
    ///
    /// # 参数
    /// - `today`: 当前日期（用于中期报告期限）
    pub fn payment_form_state(
        &self,
        payment_type: &str,
        work: &ApprovedContractedWork,
        today: NaiveDate,
    ) -> ApiResult<PaymentFormState> {
        let payment_type = parse_payment_type(payment_type)?;
        let payment = work.contracted_work_payment.as_ref();

        let deadline = self.gate.interim_report_deadline(payment, today);
        let mut notices = Vec::new();
        if payment_type == PaymentType::Final {
            notices.extend(self.gate.final_gate_notice(payment));
        }
        notices.extend(self.gate.interim_report_notice(&deadline));

        Ok(PaymentFormState {
            payment_type,
            view_only: self.gate.is_view_only(payment_type, payment),
            notices,
            interim_report_deadline: deadline,
            contribution: self.calculator.calculate(payment_type, work, None),
        })
    }

    // ==========================================
    // 管理端列表
    // ==========================================

    /// 默认查询参数
    pub fn default_query(&self) -> ApprovedWorkQuery {
        ApprovedWorkQuery::new(&self.rules)
    }

    /// 已批准合同工程列表（过滤 / 排序 / 分页）
    ///
    /// # 错误
    /// - 每页条数为 0 时返回 InvalidInput
    pub fn list_approved_contracted_work(
        &self,
        records: &[ApprovedContractedWork],
        query: &ApprovedWorkQuery,
    ) -> ApiResult<PagedRecords<ApprovedContractedWork>> {
        if query.per_page == 0 {
            return Err(ApiError::InvalidInput("per_page 必须大于 0".to_string()));
        }
        Ok(self.query_engine.run(records, query))
    }
}

impl Default for PaymentApi {
    fn default() -> Self {
        Self::new(ProgramRules::default())
    }
}

fn parse_payment_type(raw: &str) -> ApiResult<PaymentType> {
    Ok(raw.parse::<PaymentType>()?)
}
