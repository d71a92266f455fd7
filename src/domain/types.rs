// ==========================================
// 废弃井场修复计划 - 领域类型定义
// ==========================================
// 依据: DSRP 资助计划规则 - 合同工程类型 / 审核状态 / 付款阶段
// ==========================================

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 工程类型键 → 展示名称
///
/// 按单词首字母大写拼接: `preliminary_site_investigation` → `Preliminary Site Investigation`。
/// 未知键同样按此规则处理。
pub fn work_type_description(work_type: &str) -> String {
    work_type
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ==========================================
// 负债类别 (Liability Category)
// ==========================================
// 用于从外部负债记录中选取 LMR 指标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiabilityCategory {
    Abandonment, // abandonment_liability
    Assessment,  // assessment_liability
    Reclamation, // reclamation_liability
    Remediation, // remediation_liability
}

impl LiabilityCategory {
    /// 按工程类型键归类
    ///
    /// 规则（顺序执行，命中即返回）:
    /// 1) 前缀 "abandonment" → Abandonment
    /// 2) 后缀 "investigation" → Assessment
    /// 3) 前缀 "reclamation" → Reclamation
    /// 4) 前缀 "remediation" → Remediation
    /// 5) 其他 → None
    pub fn classify(work_type: &str) -> Option<Self> {
        if work_type.starts_with("abandonment") {
            Some(LiabilityCategory::Abandonment)
        } else if work_type.ends_with("investigation") {
            Some(LiabilityCategory::Assessment)
        } else if work_type.starts_with("reclamation") {
            Some(LiabilityCategory::Reclamation)
        } else if work_type.starts_with("remediation") {
            Some(LiabilityCategory::Remediation)
        } else {
            None
        }
    }
}

// ==========================================
// 合同工程审核状态 (Contracted Work Status)
// ==========================================
// 审核人员在 review_json 中填写; 未填写时视为 NOT_STARTED
// 序列化格式: SCREAMING_SNAKE_CASE 原样字符串
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContractedWorkStatus {
    NotStarted,    // 未开始
    Approved,      // 已批准
    Other(String), // 其他审核状态 (如 PENDING / REJECTED)
}

impl ContractedWorkStatus {
    pub fn as_code(&self) -> &str {
        match self {
            ContractedWorkStatus::NotStarted => "NOT_STARTED",
            ContractedWorkStatus::Approved => "APPROVED",
            ContractedWorkStatus::Other(code) => code.as_str(),
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, ContractedWorkStatus::Approved)
    }
}

impl Default for ContractedWorkStatus {
    fn default() -> Self {
        ContractedWorkStatus::NotStarted
    }
}

impl From<String> for ContractedWorkStatus {
    fn from(code: String) -> Self {
        match code.as_str() {
            "NOT_STARTED" => ContractedWorkStatus::NotStarted,
            "APPROVED" => ContractedWorkStatus::Approved,
            _ => ContractedWorkStatus::Other(code),
        }
    }
}

impl From<&str> for ContractedWorkStatus {
    fn from(code: &str) -> Self {
        ContractedWorkStatus::from(code.to_string())
    }
}

impl From<ContractedWorkStatus> for String {
    fn from(status: ContractedWorkStatus) -> Self {
        status.as_code().to_string()
    }
}

impl fmt::Display for ContractedWorkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

// ==========================================
// 付款阶段 (Payment Type)
// ==========================================
// 两个顺序阶段: 中期 → 最终
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    Interim, // 中期付款
    Final,   // 最终付款
}

impl PaymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Interim => "interim",
            PaymentType::Final => "final",
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaymentType {
    type Err = DomainError;

    /// 仅接受 "interim" / "final"，其他值属于调用方错误
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "interim" => Ok(PaymentType::Interim),
            "final" => Ok(PaymentType::Final),
            other => Err(DomainError::InvalidArgument {
                field: "payment_type".to_string(),
                value: other.to_string(),
                reason: "只支持 interim / final 两个付款阶段".to_string(),
            }),
        }
    }
}

// ==========================================
// 付款状态 (Payment Status)
// ==========================================
// 状态流转: INFORMATION_REQUIRED → READY_FOR_REVIEW → APPROVED
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentStatus {
    InformationRequired, // 待提交信息
    ReadyForReview,      // 已提交待审核
    Approved,            // 已批准
    Other(String),       // 其他状态
}

impl PaymentStatus {
    pub fn as_code(&self) -> &str {
        match self {
            PaymentStatus::InformationRequired => "INFORMATION_REQUIRED",
            PaymentStatus::ReadyForReview => "READY_FOR_REVIEW",
            PaymentStatus::Approved => "APPROVED",
            PaymentStatus::Other(code) => code.as_str(),
        }
    }

    pub fn is_information_required(&self) -> bool {
        matches!(self, PaymentStatus::InformationRequired)
    }
}

impl Default for PaymentStatus {
    fn default() -> Self {
        PaymentStatus::InformationRequired
    }
}

impl From<String> for PaymentStatus {
    fn from(code: String) -> Self {
        match code.as_str() {
            "INFORMATION_REQUIRED" => PaymentStatus::InformationRequired,
            "READY_FOR_REVIEW" => PaymentStatus::ReadyForReview,
            "APPROVED" => PaymentStatus::Approved,
            _ => PaymentStatus::Other(code),
        }
    }
}

impl From<&str> for PaymentStatus {
    fn from(code: &str) -> Self {
        PaymentStatus::from(code.to_string())
    }
}

impl From<PaymentStatus> for String {
    fn from(status: PaymentStatus) -> Self {
        status.as_code().to_string()
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_code())
    }
}
