// ==========================================
// 废弃井场修复计划 - 外部参考数据解析器
// ==========================================
// 输入: OGC 井记录 / 负债记录（数组或按编号键控的对象）
// 主键字段别名: well_auth_number / well_authorization_number
// ==========================================

use crate::domain::reference::{ExternalLiabilityRecord, ExternalWellRecord, WellReferenceData};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::json_fields::{get_decimal, get_string};
use serde_json::{Map, Value};

const WELL_KEY_ALIASES: [&str; 2] = ["well_auth_number", "well_authorization_number"];

/// 外部参考数据解析器（无状态）
pub struct ReferenceParser;

impl ReferenceParser {
    /// 解析井记录与负债记录 JSON 文本
    pub fn parse_reference_json(wells: &str, liabilities: &str) -> ImportResult<WellReferenceData> {
        let wells: Value = serde_json::from_str(wells).map_err(|e| ImportError::json("wells", e))?;
        let liabilities: Value = serde_json::from_str(liabilities)
            .map_err(|e| ImportError::json("liabilities", e))?;
        Ok(Self::parse_reference(&wells, &liabilities))
    }

    pub fn parse_reference(wells: &Value, liabilities: &Value) -> WellReferenceData {
        WellReferenceData::new(Self::parse_wells(wells), Self::parse_liabilities(liabilities))
    }

    /// 解析井记录
    pub fn parse_wells(value: &Value) -> Vec<ExternalWellRecord> {
        Self::keyed_records(value)
            .into_iter()
            .map(|(wan, record)| ExternalWellRecord {
                well_authorization_number: wan,
                current_status: get_string(record, &["current_status"]),
                surface_location: get_string(record, &["surface_location"]),
            })
            .collect()
    }

    /// 解析负债记录
    pub fn parse_liabilities(value: &Value) -> Vec<ExternalLiabilityRecord> {
        Self::keyed_records(value)
            .into_iter()
            .map(|(wan, record)| ExternalLiabilityRecord {
                well_authorization_number: wan,
                abandonment_liability: get_decimal(record, "abandonment_liability"),
                assessment_liability: get_decimal(record, "assessment_liability"),
                reclamation_liability: get_decimal(record, "reclamation_liability"),
                remediation_liability: get_decimal(record, "remediation_liability"),
            })
            .collect()
    }

    /// 提取 (井许可编号, 记录) 对
    ///
    /// - 数组: 编号取自记录字段，缺失编号的记录被丢弃
    /// - 对象: 编号优先取记录字段，否则取外层键
    fn keyed_records(value: &Value) -> Vec<(String, &Map<String, Value>)> {
        match value {
            Value::Array(items) => items
                .iter()
                .filter_map(Value::as_object)
                .filter_map(|record| {
                    let wan = get_string(record, &WELL_KEY_ALIASES);
                    if wan.is_none() {
                        tracing::debug!("参考记录缺少井许可编号，已跳过");
                    }
                    wan.map(|wan| (wan, record))
                })
                .collect(),
            Value::Object(by_key) => by_key
                .iter()
                .filter_map(|(key, record)| {
                    record.as_object().map(|record| {
                        let wan = get_string(record, &WELL_KEY_ALIASES).unwrap_or_else(|| key.clone());
                        (wan, record)
                    })
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}
