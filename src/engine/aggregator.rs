// ==========================================
// 废弃井场修复计划 - 井场合同工程聚合引擎
// ==========================================
// 职责: 申请 × 井场 × 工程类型 → 聚合行
// 输入: 申请列表 + OGC 外部参考数据
// 输出: 按工程编号排序的聚合行
// ==========================================
// 红线: 纯函数，不报错；缺失数据降级为 None / 0 / 默认状态
// ==========================================

use crate::config::ProgramRules;
use crate::domain::application::{Application, ContractedWorkItem, WellSite};
use crate::domain::contracted_work::AggregatedWorkRow;
use crate::domain::money::apply_ratio;
use crate::domain::reference::WellReferenceData;
use crate::domain::types::{work_type_description, ContractedWorkStatus};
use crate::engine::work_id::sort_by_work_id;
use rust_decimal::Decimal;
use tracing::instrument;


// ==========================================
// WellSiteWorkAggregator - 井场合同工程聚合引擎
// ==========================================
pub struct WellSiteWorkAggregator {
    rules: ProgramRules,
}

impl WellSiteWorkAggregator {
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

    /// 聚合所有申请的井场合同工程
    ///
    /// 遍历顺序: 申请 → 井场 → 工程类型（均保持输入顺序），
    /// 完成后按工程编号序号稳定排序。
    ///
    /// # 参数
    /// - `applications`: 申请列表
    /// - `reference`: OGC 井记录与负债记录
    ///
    /// # 返回
    /// 聚合行列表；空输入返回空列表
    #[instrument(skip(self, applications, reference), fields(applications = applications.len()))]
    pub fn aggregate(
        &self,
        applications: &[Application],
        reference: &WellReferenceData,
    ) -> Vec<AggregatedWorkRow> {
        let mut rows = Vec::new();

        for application in applications {
            if !application.has_well_sites() {
                tracing::debug!(guid = %application.guid, "申请无井场数据，已跳过");
                continue;
            }

            for (index, site) in application.well_sites.iter().enumerate() {
                if site.contracted_work.is_empty() {
                    continue;
                }
                for work in &site.contracted_work {
                    rows.push(self.build_row(application, index, site, work, reference));
                }
            }
        }

        sort_by_work_id(&mut rows, |row| row.work_id.as_deref());

        tracing::debug!(rows = rows.len(), "井场合同工程聚合完成");
        rows
    }

    /// 可分摊费用 = min(round(估算费用 × 分摊比例, 2), 上限)
    pub fn shared_cost(&self, estimated_cost: Decimal) -> Decimal {
        apply_ratio(estimated_cost, self.rules.shared_cost_ratio).min(self.rules.max_shared_cost)
    }

    /// 计入分摊合计的费用: 仅 APPROVED 计入，其余为 0
    pub fn estimated_shared_cost(&self, shared_cost: Decimal, status: &ContractedWorkStatus) -> Decimal {
        if status.is_approved() {
            shared_cost
        } else {
            Decimal::ZERO
        }
    }

    // ==========================================
    // 行构建
    // ==========================================

    fn build_row(
        &self,
        application: &Application,
        index: usize,
        site: &WellSite,
        work: &ContractedWorkItem,
        reference: &WellReferenceData,
    ) -> AggregatedWorkRow {
        let wan = site.well_authorization_number.as_deref();
        let work_type = work.work_type.as_str();

        let estimated_cost = work.estimated_cost();
        let shared_cost = self.shared_cost(estimated_cost);

        let status = application
            .review
            .as_ref()
            .and_then(|review| review.status_for(index, wan, work_type))
            .cloned()
            .unwrap_or_default();

        let well = reference.well(wan);
        let lmr = reference
            .liability(wan)
            .and_then(|liability| liability.lmr_for_work_type(work_type));

        AggregatedWorkRow {
            key: format!("{}.{}.{}", application.guid, wan.unwrap_or("null"), work_type),
            well_index: index,
            application_guid: application.guid.clone(),
            work_id: work.work_id.clone(),
            well_authorization_number: site.well_authorization_number.clone(),
            contracted_work_type: work.work_type.clone(),
            contracted_work_type_description: work_type_description(work_type),
            priority_criteria: site.priority_criteria(),
            completion_date: work.planned_end_date.clone(),
            est_cost: estimated_cost,
            shared_cost,
            est_shared_cost: self.estimated_shared_cost(shared_cost, &status),
            lmr,
            ogc_status: well.and_then(|w| w.current_status.clone()),
            location: well.and_then(|w| w.surface_location.clone()),
            contracted_work_status_code: status,
            review_json: application.review.as_ref().and_then(|r| r.raw.clone()),
        }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for WellSiteWorkAggregator {
    fn default() -> Self {
        Self::new()
    }
}
