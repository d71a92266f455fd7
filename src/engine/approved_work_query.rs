// ==========================================
// 废弃井场修复计划 - 已批准合同工程查询
// ==========================================
// 职责: 管理端付款列表的过滤 / 排序 / 分页
// 输入: 已批准合同工程记录 + 查询参数
// 输出: 分页结果
// ==========================================

use crate::config::ProgramRules;
use crate::domain::contracted_work::ApprovedContractedWork;
use crate::domain::types::PaymentStatus;
use crate::engine::work_id::compare_work_ids;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::instrument;

/// 排序字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    ApplicationId,
    WorkId,
    WellAuthorizationNumber,
    ContractedWorkType,
    InterimPaymentStatusCode,
    FinalPaymentStatusCode,
}

impl SortField {
    /// 从查询参数解析（未知字段返回 None，即不排序）
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "application_id" => Some(SortField::ApplicationId),
            "work_id" => Some(SortField::WorkId),
            "well_authorization_number" => Some(SortField::WellAuthorizationNumber),
            "contracted_work_type" => Some(SortField::ContractedWorkType),
            "interim_payment_status_code" => Some(SortField::InterimPaymentStatusCode),
            "final_payment_status_code" => Some(SortField::FinalPaymentStatusCode),
            _ => None,
        }
    }
}

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

/// 查询参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovedWorkQuery {
    pub application_id: Option<i64>,
    pub work_id: Option<String>,
    pub well_authorization_number: Option<String>,
    pub contracted_work_type: Vec<String>,
    pub interim_payment_status_code: Vec<String>,
    pub final_payment_status_code: Vec<String>,
    pub sort_field: Option<SortField>,
    pub sort_dir: SortDirection,
    /// 页码（从 1 开始）
    pub page: usize,
    pub per_page: usize,
}

impl ApprovedWorkQuery {
    /// 默认查询: 按 application_id 升序，第 1 页
    pub fn new(rules: &ProgramRules) -> Self {
        Self {
            application_id: None,
            work_id: None,
            well_authorization_number: None,
            contracted_work_type: Vec::new(),
            interim_payment_status_code: Vec::new(),
            final_payment_status_code: Vec::new(),
            sort_field: Some(SortField::ApplicationId),
            sort_dir: SortDirection::Asc,
            page: 1,
            per_page: rules.default_page_size,
        }
    }

    fn matches(&self, work: &ApprovedContractedWork) -> bool {
        if self.application_id.is_some_and(|id| id != work.application_id) {
            return false;
        }
        if self.work_id.as_deref().is_some_and(|id| id != work.work_id) {
            return false;
        }
        if self
            .well_authorization_number
            .as_deref()
            .is_some_and(|wan| wan != work.well_authorization_number)
        {
            return false;
        }
        if !self.contracted_work_type.is_empty()
            && !self.contracted_work_type.contains(&work.contracted_work_type)
        {
            return false;
        }
        if !status_in(&self.interim_payment_status_code, &work.interim_payment_status()) {
            return false;
        }
        if !status_in(&self.final_payment_status_code, &work.final_payment_status()) {
            return false;
        }
        true
    }
}

fn status_in(filter: &[String], status: &PaymentStatus) -> bool {
    filter.is_empty() || filter.iter().any(|code| code == status.as_code())
}

/// 分页结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedRecords<T> {
    pub records: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
    pub items_per_page: usize,
    pub total: usize,
}

// ==========================================
// ApprovedWorkQueryEngine - 列表查询引擎
// ==========================================
pub struct ApprovedWorkQueryEngine;

impl ApprovedWorkQueryEngine {
    pub fn new() -> Self {
        Self
    }

    /// 执行查询: 过滤 → 排序 → 分页
    #[instrument(skip(self, records, query), fields(count = records.len()))]
    pub fn run(
        &self,
        records: &[ApprovedContractedWork],
        query: &ApprovedWorkQuery,
    ) -> PagedRecords<ApprovedContractedWork> {
        let mut filtered: Vec<ApprovedContractedWork> = records
            .iter()
            .filter(|work| query.matches(work))
            .cloned()
            .collect();

        if let Some(field) = query.sort_field {
            filtered.sort_by(|a, b| {
                let ord = Self::compare(field, a, b);
                match query.sort_dir {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            });
        }

        Self::paginate(filtered, query.page, query.per_page)
    }

    fn compare(field: SortField, a: &ApprovedContractedWork, b: &ApprovedContractedWork) -> Ordering {
        match field {
            SortField::ApplicationId => a.application_id.cmp(&b.application_id),
            SortField::WorkId => compare_work_ids(Some(&a.work_id), Some(&b.work_id))
                .then_with(|| a.work_id.cmp(&b.work_id)),
            SortField::WellAuthorizationNumber => {
                a.well_authorization_number.cmp(&b.well_authorization_number)
            }
            SortField::ContractedWorkType => a.contracted_work_type.cmp(&b.contracted_work_type),
            SortField::InterimPaymentStatusCode => a
                .interim_payment_status()
                .as_code()
                .cmp(b.interim_payment_status().as_code()),
            SortField::FinalPaymentStatusCode => a
                .final_payment_status()
                .as_code()
                .cmp(b.final_payment_status().as_code()),
        }
    }

    /// 分页（页码从 1 开始；超出范围返回空页）
    pub fn paginate<T>(records: Vec<T>, page: usize, per_page: usize) -> PagedRecords<T> {
        let per_page = per_page.max(1);
        let page = page.max(1);
        let total = records.len();
        let total_pages = total.div_ceil(per_page);

        let records: Vec<T> = records
            .into_iter()
            .skip((page - 1).saturating_mul(per_page))
            .take(per_page)
            .collect();

        PagedRecords {
            records,
            current_page: page,
            total_pages,
            items_per_page: per_page,
            total,
        }
    }
}

impl Default for ApprovedWorkQueryEngine {
    fn default() -> Self {
        Self::new()
    }
}
