// ==========================================
// 废弃井场修复计划 - 合同工程 API
// ==========================================
// 职责: 管理端审核表数据
// - 原始 JSON → 领域对象 → 聚合行
// - 通过 ReferenceDataSource 并发获取井记录与负债记录
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::api::reference_source::ReferenceDataSource;
use crate::config::ProgramRules;
use crate::domain::application::Application;
use crate::domain::contracted_work::AggregatedWorkRow;
use crate::domain::reference::WellReferenceData;
use crate::engine::{ContractedWorkTotals, WellSiteWorkAggregator};
use crate::importer::{ApplicationParser, ReferenceParser};
use serde_json::Value;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::instrument;

// ==========================================
// ContractedWorkApi - 合同工程 API
// ==========================================
pub struct ContractedWorkApi {
    aggregator: WellSiteWorkAggregator,
    reference_source: Arc<dyn ReferenceDataSource>,
}

impl ContractedWorkApi {
    pub fn new(reference_source: Arc<dyn ReferenceDataSource>, rules: ProgramRules) -> Self {
        Self {
            aggregator: WellSiteWorkAggregator::with_rules(rules),
            reference_source,
        }
    }

    /// 由原始 JSON 直接聚合（参考数据已在调用方手中）
    ///
    /// 任何结构异常都降级处理，不返回错误
    pub fn aggregate_json(
        &self,
        applications: &Value,
        wells: &Value,
        liabilities: &Value,
    ) -> Vec<AggregatedWorkRow> {
        let applications = ApplicationParser::parse_applications(applications);
        let reference = ReferenceParser::parse_reference(wells, liabilities);
        self.aggregator.aggregate(&applications, &reference)
    }

    /// 获取参考数据后聚合
    ///
    /// # 错误
    /// - 参考数据源失败时返回 ReferenceDataUnavailable
    #[instrument(skip(self, applications), fields(applications = applications.len()))]
    pub async fn list_well_sites_contracted_work(
        &self,
        applications: &[Application],
    ) -> ApiResult<Vec<AggregatedWorkRow>> {
        let reference = self.fetch_reference(applications).await?;
        Ok(self.aggregator.aggregate(applications, &reference))
    }

    /// 申请的费用合计
    pub fn contracted_work_totals(&self, application: &Application) -> ContractedWorkTotals {
        ContractedWorkTotals::for_application(application)
    }

    async fn fetch_reference(&self, applications: &[Application]) -> ApiResult<WellReferenceData> {
        let numbers: Vec<String> = applications
            .iter()
            .flat_map(|app| app.well_sites.iter())
            .filter_map(|site| site.well_authorization_number.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        if numbers.is_empty() {
            return Ok(WellReferenceData::default());
        }

        let (wells, liabilities) = futures::try_join!(
            self.reference_source.fetch_wells(&numbers),
            self.reference_source.fetch_liabilities(&numbers),
        )
        .map_err(|e| {
            tracing::warn!(error = %e, "外部参考数据获取失败");
            ApiError::ReferenceDataUnavailable(e.to_string())
        })?;

        tracing::debug!(
            requested = numbers.len(),
            wells = wells.len(),
            liabilities = liabilities.len(),
            "外部参考数据已获取"
        );

        Ok(WellReferenceData::new(wells, liabilities))
    }
}
