// ==========================================
// 废弃井场修复计划 - 合同工程费用合计
// ==========================================
// 职责: 申请表第二部分的分项合计 / 井场合计 / 总计
// ==========================================

use crate::domain::application::Application;
use crate::domain::money::saturating_sum;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 单个井场的费用合计
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellTotals {
    pub well_index: usize,
    /// (工程类型键, 分项合计)，保持申请表顺序
    pub sections: Vec<(String, Decimal)>,
    pub well_total: Decimal,
}

/// 申请的费用合计
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractedWorkTotals {
    pub grand_total: Decimal,
    /// 仅包含有合同工程的井场
    pub well_totals: Vec<WellTotals>,
}

impl ContractedWorkTotals {
    /// 计算申请的费用合计
    pub fn for_application(application: &Application) -> Self {
        let well_totals: Vec<WellTotals> = application
            .well_sites
            .iter()
            .enumerate()
            .filter(|(_, site)| !site.contracted_work.is_empty())
            .map(|(well_index, site)| {
                let sections: Vec<(String, Decimal)> = site
                    .contracted_work
                    .iter()
                    .map(|work| (work.work_type.clone(), work.estimated_cost()))
                    .collect();
                let well_total = site.estimated_cost();
                WellTotals {
                    well_index,
                    sections,
                    well_total,
                }
            })
            .collect();

        let grand_total = saturating_sum(well_totals.iter().map(|w| w.well_total));

        Self {
            grand_total,
            well_totals,
        }
    }

    pub fn well(&self, well_index: usize) -> Option<&WellTotals> {
        self.well_totals.iter().find(|w| w.well_index == well_index)
    }
}
