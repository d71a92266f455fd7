// ==========================================
// 废弃井场修复计划 - 申请领域模型
// ==========================================
// 依据: DSRP 申请表结构 (application.json.well_sites)
// ==========================================
// 职责: 申请 / 井场 / 合同工程项 / 审核覆盖层
// 红线: 仅承载已规范化的数据，解析与容错在 importer 层完成
// ==========================================

use crate::domain::money::saturating_sum;
use crate::domain::types::ContractedWorkStatus;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// CostEntry - 费用明细行
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEntry {
    pub name: String,    // 费用行名称 (如 amount_0)
    pub amount: Decimal, // 估算金额
}

// ==========================================
// ContractedWorkItem - 合同工程项
// ==========================================
// 不变量: estimated_cost = 所有费用明细之和
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractedWorkItem {
    pub work_type: String,                // 工程类型键 (保留原始键，未知类型不丢弃)
    pub cost_entries: Vec<CostEntry>,     // 费用明细 (仅数值项)
    pub planned_end_date: Option<String>, // 计划完工日期
    pub work_id: Option<String>,          // 工程编号 (持久化后分配，如 "1234.5")
}

impl ContractedWorkItem {
    pub fn new(work_type: impl Into<String>) -> Self {
        Self {
            work_type: work_type.into(),
            cost_entries: Vec::new(),
            planned_end_date: None,
            work_id: None,
        }
    }

    /// 估算费用合计（溢出时饱和）
    pub fn estimated_cost(&self) -> Decimal {
        saturating_sum(self.cost_entries.iter().map(|entry| entry.amount))
    }
}

// ==========================================
// WellSite - 井场
// ==========================================
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WellSite {
    pub well_authorization_number: Option<String>, // 井许可编号 (关联 OGC 外部数据)
    pub site_conditions: Vec<String>,              // 已勾选的场地条件
    pub contracted_work: Vec<ContractedWorkItem>,  // 合同工程 (保持申请表中的顺序)
}

impl WellSite {
    /// 优先级条件数 = 已勾选场地条件数
    pub fn priority_criteria(&self) -> usize {
        self.site_conditions.len()
    }

    /// 井场估算费用合计
    pub fn estimated_cost(&self) -> Decimal {
        saturating_sum(self.contracted_work.iter().map(|w| w.estimated_cost()))
    }
}

// ==========================================
// WellSiteReview - 单个井场的审核结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WellSiteReview {
    /// 工程类型键 → 审核状态
    pub contracted_work_status: HashMap<String, ContractedWorkStatus>,
}

impl WellSiteReview {
    pub fn status_for(&self, work_type: &str) -> Option<&ContractedWorkStatus> {
        self.contracted_work_status.get(work_type)
    }
}

// ==========================================
// ReviewOverlay - 审核覆盖层
// ==========================================
// 查找顺序: 井场下标优先，井许可编号兜底
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReviewOverlay {
    pub by_index: HashMap<usize, WellSiteReview>,
    pub by_well_authorization_number: HashMap<String, WellSiteReview>,
    /// 原始 review_json (随聚合行透传给调用方)
    pub raw: Option<serde_json::Value>,
}

impl ReviewOverlay {
    /// 查找某井场某工程类型的审核状态
    ///
    /// # 参数
    /// - `index`: 井场在申请中的下标
    /// - `well_authorization_number`: 井许可编号（可选）
    /// - `work_type`: 工程类型键
    ///
    /// # 返回
    /// - Some(status): 覆盖层中存在该状态
    /// - None: 下标与编号均未命中
    pub fn status_for(
        &self,
        index: usize,
        well_authorization_number: Option<&str>,
        work_type: &str,
    ) -> Option<&ContractedWorkStatus> {
        self.by_index
            .get(&index)
            .and_then(|review| review.status_for(work_type))
            .or_else(|| {
                well_authorization_number
                    .and_then(|wan| self.by_well_authorization_number.get(wan))
                    .and_then(|review| review.status_for(work_type))
            })
    }
}

// ==========================================
// Application - 申请
// ==========================================
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Application {
    pub guid: String,                   // 申请 GUID
    pub application_id: Option<i64>,    // 申请编号 (后端自增)
    pub well_sites: Vec<WellSite>,      // 井场列表 (顺序决定行号)
    pub review: Option<ReviewOverlay>,  // 审核覆盖层
}

impl Application {
    /// 申请是否有可聚合的结构化数据
    pub fn has_well_sites(&self) -> bool {
        !self.well_sites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review_with(work_type: &str, status: &str) -> WellSiteReview {
        let mut review = WellSiteReview::default();
        review
            .contracted_work_status
            .insert(work_type.to_string(), ContractedWorkStatus::from(status));
        review
    }

    #[test]
    fn test_estimated_cost_sums_entries() {
        let mut item = ContractedWorkItem::new("abandonment");
        item.cost_entries.push(CostEntry {
            name: "amount_0".to_string(),
            amount: Decimal::from(1000),
        });
        item.cost_entries.push(CostEntry {
            name: "amount_1".to_string(),
            amount: Decimal::from(500),
        });
        assert_eq!(item.estimated_cost(), Decimal::from(1500));
        assert_eq!(ContractedWorkItem::new("reclamation").estimated_cost(), Decimal::ZERO);
    }

    #[test]
    fn test_review_overlay_index_first_then_well_number() {
        let mut overlay = ReviewOverlay::default();
        overlay.by_index.insert(0, review_with("abandonment", "APPROVED"));
        overlay
            .by_well_authorization_number
            .insert("12345".to_string(), review_with("abandonment", "PENDING"));
        overlay
            .by_well_authorization_number
            .insert("67890".to_string(), review_with("remediation", "APPROVED"));

        // 下标命中
        assert_eq!(
            overlay.status_for(0, Some("12345"), "abandonment"),
            Some(&ContractedWorkStatus::Approved)
        );
        // 下标未命中 → 编号兜底
        assert_eq!(
            overlay.status_for(1, Some("67890"), "remediation"),
            Some(&ContractedWorkStatus::Approved)
        );
        // 下标命中但无该工程类型 → 编号兜底
        assert_eq!(
            overlay.status_for(0, Some("67890"), "remediation"),
            Some(&ContractedWorkStatus::Approved)
        );
        assert_eq!(overlay.status_for(3, None, "abandonment"), None);
    }
}
