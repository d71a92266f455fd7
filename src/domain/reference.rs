// ==========================================
// 废弃井场修复计划 - 外部参考数据模型
// ==========================================
// 来源: OGC (油气监管机构) 井记录与负债记录
// 主键: well_authorization_number
// ==========================================

use crate::domain::types::LiabilityCategory;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// ExternalWellRecord - OGC 井记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExternalWellRecord {
    pub well_authorization_number: String,
    pub current_status: Option<String>,   // 当前井状态
    pub surface_location: Option<String>, // 地表位置
}

// ==========================================
// ExternalLiabilityRecord - OGC 负债记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExternalLiabilityRecord {
    pub well_authorization_number: String,
    pub abandonment_liability: Option<Decimal>,
    pub assessment_liability: Option<Decimal>,
    pub reclamation_liability: Option<Decimal>,
    pub remediation_liability: Option<Decimal>,
}

impl ExternalLiabilityRecord {
    /// 按负债类别取值
    pub fn amount_for(&self, category: LiabilityCategory) -> Option<Decimal> {
        match category {
            LiabilityCategory::Abandonment => self.abandonment_liability,
            LiabilityCategory::Assessment => self.assessment_liability,
            LiabilityCategory::Reclamation => self.reclamation_liability,
            LiabilityCategory::Remediation => self.remediation_liability,
        }
    }

    /// 按工程类型键取 LMR 指标（未归类的类型返回 None）
    pub fn lmr_for_work_type(&self, work_type: &str) -> Option<Decimal> {
        LiabilityCategory::classify(work_type).and_then(|category| self.amount_for(category))
    }
}

// ==========================================
// WellReferenceData - 外部参考数据集合
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct WellReferenceData {
    pub wells: HashMap<String, ExternalWellRecord>,
    pub liabilities: HashMap<String, ExternalLiabilityRecord>,
}

impl WellReferenceData {
    pub fn new(
        wells: impl IntoIterator<Item = ExternalWellRecord>,
        liabilities: impl IntoIterator<Item = ExternalLiabilityRecord>,
    ) -> Self {
        Self {
            wells: wells
                .into_iter()
                .map(|w| (w.well_authorization_number.clone(), w))
                .collect(),
            liabilities: liabilities
                .into_iter()
                .map(|l| (l.well_authorization_number.clone(), l))
                .collect(),
        }
    }

    pub fn well(&self, well_authorization_number: Option<&str>) -> Option<&ExternalWellRecord> {
        well_authorization_number.and_then(|wan| self.wells.get(wan))
    }

    pub fn liability(
        &self,
        well_authorization_number: Option<&str>,
    ) -> Option<&ExternalLiabilityRecord> {
        well_authorization_number.and_then(|wan| self.liabilities.get(wan))
    }
}
