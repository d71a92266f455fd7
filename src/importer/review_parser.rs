// ==========================================
// 废弃井场修复计划 - 审核覆盖层解析器
// ==========================================
// 输入: application.review_json
// 支持三种形态:
// 1) 嵌套: well_sites[下标][井许可编号].contracted_work.<类型>.contracted_work_status_code
// 2) 平铺: well_sites[下标].contracted_work.<类型>.contracted_work_status_code
// 3) 按编号: well_sites{井许可编号}.contracted_work.<类型>.contracted_work_status_code
// ==========================================

use crate::domain::application::{ReviewOverlay, WellSite, WellSiteReview};
use crate::domain::types::ContractedWorkStatus;
use crate::importer::json_fields::{get_object, get_string};
use serde_json::{Map, Value};

const CONTRACTED_WORK_KEY: &str = "contracted_work";
const STATUS_CODE_KEY: &str = "contracted_work_status_code";

/// 解析审核覆盖层
///
/// # 参数
/// - `raw`: review_json 原始值
/// - `well_sites`: 已解析的井场（用于嵌套形态按下标匹配井许可编号）
///
/// # 返回
/// - None: review_json 不是对象
pub fn parse_review(raw: &Value, well_sites: &[WellSite]) -> Option<ReviewOverlay> {
    let obj = raw.as_object()?;

    let mut overlay = ReviewOverlay {
        raw: Some(raw.clone()),
        ..ReviewOverlay::default()
    };

    match obj.get("well_sites") {
        Some(Value::Array(items)) => {
            for (index, item) in items.iter().enumerate() {
                let Some(entry) = item.as_object() else {
                    continue;
                };

                if entry.contains_key(CONTRACTED_WORK_KEY) {
                    overlay.by_index.insert(index, parse_site_review(entry));
                    continue;
                }

                let site_wan = well_sites
                    .get(index)
                    .and_then(|site| site.well_authorization_number.as_deref());

                for (wan, nested) in entry {
                    let Some(nested) = nested.as_object() else {
                        continue;
                    };
                    let review = parse_site_review(nested);
                    if Some(wan.as_str()) == site_wan {
                        overlay.by_index.insert(index, review.clone());
                    }
                    overlay.by_well_authorization_number.insert(wan.clone(), review);
                }
            }
        }
        Some(Value::Object(by_wan)) => {
            for (wan, nested) in by_wan {
                if let Some(nested) = nested.as_object() {
                    overlay
                        .by_well_authorization_number
                        .insert(wan.clone(), parse_site_review(nested));
                }
            }
        }
        _ => {}
    }

    Some(overlay)
}

/// 解析单个井场的审核状态
fn parse_site_review(entry: &Map<String, Value>) -> WellSiteReview {
    let mut review = WellSiteReview::default();

    if let Some(work) = get_object(entry, CONTRACTED_WORK_KEY) {
        for (work_type, fields) in work {
            let status = fields
                .as_object()
                .and_then(|f| get_string(f, &[STATUS_CODE_KEY]));
            if let Some(code) = status {
                review
                    .contracted_work_status
                    .insert(work_type.clone(), ContractedWorkStatus::from(code));
            }
        }
    }

    review
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn site(wan: &str) -> WellSite {
        WellSite {
            well_authorization_number: Some(wan.to_string()),
            ..WellSite::default()
        }
    }

    #[test]
    fn test_nested_shape_registers_index_and_number() {
        let raw = json!({"well_sites": [{
            "12345": {"contracted_work": {"abandonment": {"contracted_work_status_code": "APPROVED"}}}
        }]});

        let overlay = parse_review(&raw, &[site("12345")]).unwrap();
        assert_eq!(
            overlay.status_for(0, Some("12345"), "abandonment"),
            Some(&ContractedWorkStatus::Approved)
        );
        assert!(overlay.by_well_authorization_number.contains_key("12345"));
        assert!(overlay.raw.is_some());
    }

    #[test]
    fn test_flat_shape_by_index() {
        let raw = json!({"well_sites": [
            {"contracted_work": {"remediation": {"contracted_work_status_code": "PENDING"}}}
        ]});

        let overlay = parse_review(&raw, &[]).unwrap();
        assert_eq!(
            overlay.status_for(0, None, "remediation"),
            Some(&ContractedWorkStatus::Other("PENDING".to_string()))
        );
    }

    #[test]
    fn test_keyed_by_number_shape() {
        let raw = json!({"well_sites": {
            "67890": {"contracted_work": {"reclamation": {"contracted_work_status_code": "APPROVED"}}}
        }});

        let overlay = parse_review(&raw, &[]).unwrap();
        assert!(overlay.by_index.is_empty());
        assert_eq!(
            overlay.status_for(4, Some("67890"), "reclamation"),
            Some(&ContractedWorkStatus::Approved)
        );
    }

    #[test]
    fn test_non_object_review_ignored() {
        assert!(parse_review(&json!("approved"), &[]).is_none());
        assert!(parse_review(&json!(null), &[]).is_none());
    }
}
