// ==========================================
// 废弃井场修复计划 - 申请数据解析器
// ==========================================
// 输入: 后端 API 返回的申请记录 { guid, id, json: { well_sites }, review_json }
// 输出: 规范化的 Application 领域对象
// ==========================================
// 容错: 缺失/异常结构降级为空值，不报错
//       井场下标保持不变（空井场以默认值占位）
// ==========================================

use crate::domain::application::{Application, ContractedWorkItem, CostEntry, WellSite};
use crate::domain::money::decimal_from_json_number;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::json_fields::{get_i64, get_object, get_string, is_empty_value, is_truthy};
use crate::importer::review_parser::parse_review;
use serde_json::{Map, Value};

/// 工程项中的元数据键，不计入费用
const WORK_ID_KEY: &str = "work_id";
const PLANNED_END_DATE_KEY: &str = "planned_end_date";

/// 申请数据解析器（无状态）
pub struct ApplicationParser;

impl ApplicationParser {
    /// 解析申请列表 JSON 文本
    ///
    /// # 错误
    /// - 文本不是合法 JSON 时返回 ImportError
    pub fn parse_applications_json(text: &str) -> ImportResult<Vec<Application>> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| ImportError::json("applications", e))?;
        Ok(Self::parse_applications(&value))
    }

    /// 解析申请列表
    ///
    /// 非数组输入返回空列表
    pub fn parse_applications(value: &Value) -> Vec<Application> {
        match value {
            Value::Array(items) => items.iter().filter_map(Self::parse_application).collect(),
            _ => {
                tracing::debug!("申请列表不是数组，按空列表处理");
                Vec::new()
            }
        }
    }

    /// 解析单个申请
    ///
    /// # 返回
    /// - None: 输入为空或不是对象
    /// - Some(app): 井场数据缺失时 well_sites 为空（由引擎跳过）
    pub fn parse_application(value: &Value) -> Option<Application> {
        let obj = value.as_object().filter(|o| !o.is_empty())?;

        let guid = get_string(obj, &["guid", "application_guid"]).unwrap_or_default();
        let application_id = get_i64(obj, "id").or_else(|| get_i64(obj, "application_id"));

        let well_sites: Vec<WellSite> = get_object(obj, "json")
            .and_then(|json| json.get("well_sites"))
            .and_then(Value::as_array)
            .map(|sites| sites.iter().map(Self::parse_well_site).collect())
            .unwrap_or_default();

        let review = obj
            .get("review_json")
            .and_then(|raw| parse_review(raw, &well_sites));

        Some(Application {
            guid,
            application_id,
            well_sites,
            review,
        })
    }

    /// 解析井场（空井场返回默认值以保持下标）
    pub fn parse_well_site(value: &Value) -> WellSite {
        let obj = match value.as_object() {
            Some(obj) if !obj.is_empty() => obj,
            _ => return WellSite::default(),
        };

        let well_authorization_number = get_object(obj, "details")
            .and_then(|details| get_string(details, &["well_authorization_number"]));

        let site_conditions = get_object(obj, "site_conditions")
            .map(|conditions| {
                conditions
                    .iter()
                    .filter(|(_, flag)| is_truthy(flag))
                    .map(|(name, _)| name.clone())
                    .collect()
            })
            .unwrap_or_default();

        let contracted_work = get_object(obj, "contracted_work")
            .map(Self::parse_contracted_work)
            .unwrap_or_default();

        WellSite {
            well_authorization_number,
            site_conditions,
            contracted_work,
        }
    }

    /// 解析合同工程（保持键的插入顺序）
    fn parse_contracted_work(work: &Map<String, Value>) -> Vec<ContractedWorkItem> {
        work.iter()
            .filter_map(|(work_type, item)| match item.as_object() {
                Some(fields) => Some(Self::parse_work_item(work_type, fields)),
                None => {
                    tracing::debug!(work_type = %work_type, "合同工程项不是对象，已跳过");
                    None
                }
            })
            .collect()
    }

    /// 解析合同工程项
    ///
    /// 费用过滤规则: 只有 JSON 数字计入费用；字符串（即使形如数字）、
    /// 布尔、null、嵌套结构一律排除。
    fn parse_work_item(work_type: &str, fields: &Map<String, Value>) -> ContractedWorkItem {
        let mut item = ContractedWorkItem::new(work_type);

        for (name, value) in fields {
            match name.as_str() {
                WORK_ID_KEY => item.work_id = get_string(fields, &[WORK_ID_KEY]),
                PLANNED_END_DATE_KEY => {
                    item.planned_end_date = match value {
                        Value::String(s) if !is_empty_value(value) => Some(s.clone()),
                        _ => None,
                    }
                }
                _ => {
                    if let Value::Number(n) = value {
                        if let Some(amount) = decimal_from_json_number(n) {
                            item.cost_entries.push(CostEntry {
                                name: name.clone(),
                                amount,
                            });
                        }
                    }
                }
            }
        }

        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    #[test]
    fn test_non_numeric_cost_values_excluded() {
        let value = json!({
            "guid": "app-1",
            "json": {"well_sites": [{
                "details": {"well_authorization_number": "12345"},
                "contracted_work": {
                    "abandonment": {
                        "amount_0": 1000,
                        "amount_1": "500",
                        "amount_2": null,
                        "amount_3": true,
                        "amount_4": 250.5,
                        "work_id": "7.3",
                        "planned_end_date": "2020-09-30"
                    }
                }
            }]}
        });

        let app = ApplicationParser::parse_application(&value).unwrap();
        let item = &app.well_sites[0].contracted_work[0];
        assert_eq!(item.work_type, "abandonment");
        assert_eq!(item.cost_entries.len(), 2);
        assert_eq!(item.estimated_cost(), Decimal::new(12505, 1));
        assert_eq!(item.work_id.as_deref(), Some("7.3"));
        assert_eq!(item.planned_end_date.as_deref(), Some("2020-09-30"));
    }

    #[test]
    fn test_contracted_work_order_preserved() {
        let value = json!({
            "guid": "app-1",
            "json": {"well_sites": [{
                "contracted_work": {
                    "reclamation": {"amount_0": 1},
                    "abandonment": {"amount_0": 2},
                    "remediation": {"amount_0": 3}
                }
            }]}
        });

        let app = ApplicationParser::parse_application(&value).unwrap();
        let order: Vec<&str> = app.well_sites[0]
            .contracted_work
            .iter()
            .map(|w| w.work_type.as_str())
            .collect();
        assert_eq!(order, vec!["reclamation", "abandonment", "remediation"]);
    }

    #[test]
    fn test_empty_well_site_keeps_index() {
        let value = json!({
            "guid": "app-1",
            "json": {"well_sites": [{}, {"details": {"well_authorization_number": 222}}]}
        });

        let app = ApplicationParser::parse_application(&value).unwrap();
        assert_eq!(app.well_sites.len(), 2);
        assert_eq!(app.well_sites[0], WellSite::default());
        assert_eq!(app.well_sites[1].well_authorization_number.as_deref(), Some("222"));
    }

    #[test]
    fn test_site_conditions_count_truthy_only() {
        let site = ApplicationParser::parse_well_site(&json!({
            "site_conditions": {
                "is_site_condition_1": true,
                "is_site_condition_2": false,
                "is_site_condition_3": "yes"
            }
        }));
        assert_eq!(site.priority_criteria(), 2);
    }

    #[test]
    fn test_malformed_inputs_degrade() {
        assert!(ApplicationParser::parse_applications(&json!(null)).is_empty());
        assert!(ApplicationParser::parse_applications(&json!({"guid": "x"})).is_empty());
        assert!(ApplicationParser::parse_application(&json!({})).is_none());

        let app = ApplicationParser::parse_application(&json!({"guid": "x", "json": {}})).unwrap();
        assert!(!app.has_well_sites());

        assert!(ApplicationParser::parse_applications_json("not json").is_err());
    }
}
