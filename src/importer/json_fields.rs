// ==========================================
// 废弃井场修复计划 - JSON 字段读取工具
// ==========================================
// 职责: 从 serde_json::Value 宽松读取字段（支持别名）
// 策略: 读取失败返回 None，不抛出错误
// ==========================================

use crate::domain::money::decimal_from_json_number;
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use std::str::FromStr;

/// 读取字符串字段，支持多个可能的键名（别名）
///
/// 数字值转为字符串（如井许可编号以数字形式出现时）；空白字符串视为缺失。
///
/// # 示例
/// ```
/// use dsrp_core::importer::json_fields::get_string;
/// use serde_json::json;
///
/// let record = json!({"well_auth_number": 12345});
/// let wan = get_string(record.as_object().unwrap(), &["well_authorization_number", "well_auth_number"]);
/// assert_eq!(wan.as_deref(), Some("12345"));
/// ```
pub fn get_string(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    for key in keys {
        match obj.get(*key) {
            Some(Value::String(s)) => {
                let trimmed = s.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
            Some(Value::Number(n)) => return Some(n.to_string()),
            _ => {}
        }
    }
    None
}

/// 读取金额字段
///
/// 外部参考数据的金额可能以数字或数字字符串出现，两者都接受。
pub fn get_decimal(obj: &Map<String, Value>, key: &str) -> Option<Decimal> {
    match obj.get(key)? {
        Value::Number(n) => decimal_from_json_number(n),
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    }
}

/// 读取整数字段（数字或数字字符串）
pub fn get_i64(obj: &Map<String, Value>, key: &str) -> Option<i64> {
    match obj.get(key)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// 读取嵌套对象
pub fn get_object<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    obj.get(key).and_then(Value::as_object)
}

/// 值是否为空（null / 空对象 / 空数组 / 空字符串）
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// 值的真值判定
///
/// false / 0 / 空字符串 / null 为假，其余（包括空对象、空数组）为真。
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_string_aliases() {
        let value = json!({"well_auth_number": " 555 ", "empty": "  "});
        let obj = value.as_object().unwrap();
        assert_eq!(
            get_string(obj, &["well_authorization_number", "well_auth_number"]).as_deref(),
            Some("555")
        );
        assert_eq!(get_string(obj, &["empty"]), None);
        assert_eq!(get_string(obj, &["missing"]), None);
    }

    #[test]
    fn test_get_decimal_accepts_numeric_strings() {
        let value = json!({"a": 12.5, "b": "300.25", "c": "n/a", "d": true});
        let obj = value.as_object().unwrap();
        assert_eq!(get_decimal(obj, "a"), Some(Decimal::new(125, 1)));
        assert_eq!(get_decimal(obj, "b"), Some(Decimal::new(30025, 2)));
        assert_eq!(get_decimal(obj, "c"), None);
        assert_eq!(get_decimal(obj, "d"), None);
    }

    #[test]
    fn test_truthiness() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!("yes")));
        assert!(is_truthy(&json!({})));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(null)));
    }
}
