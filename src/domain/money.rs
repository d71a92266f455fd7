// ==========================================
// 废弃井场修复计划 - 金额工具
// ==========================================
// 金额统一使用 rust_decimal::Decimal (定点小数)
// 舍入规则: 保留 2 位小数，半数远离零 (与 toFixed(2) 的展示结果一致)
// ==========================================

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// 舍入到分
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// 负数截断为 0
pub fn non_negative(amount: Decimal) -> Decimal {
    amount.max(Decimal::ZERO)
}

/// 溢出时的饱和值（按结果符号取 Decimal::MAX / Decimal::MIN）
fn saturate(negative: bool) -> Decimal {
    if negative {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}

/// 饱和加法
pub fn saturating_add(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b)
        .unwrap_or_else(|| saturate(b.is_sign_negative()))
}

/// 饱和减法
pub fn saturating_sub(a: Decimal, b: Decimal) -> Decimal {
    a.checked_sub(b)
        .unwrap_or_else(|| saturate(b.is_sign_positive()))
}

/// 饱和求和（空序列为 0）
pub fn saturating_sum(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts.into_iter().fold(Decimal::ZERO, saturating_add)
}

/// 按比例计算并舍入到分
///
/// `ratio` 以小数表示 (如 0.60 表示 60%)；溢出时饱和
pub fn apply_ratio(amount: Decimal, ratio: Decimal) -> Decimal {
    let product = amount
        .checked_mul(ratio)
        .unwrap_or_else(|| saturate(amount.is_sign_negative() != ratio.is_sign_negative()));
    round_cents(product)
}

/// 解析 JSON 数字为 Decimal
///
/// 依次尝试: 普通十进制文本 → 科学计数法 → f64 近似。
/// 超出 Decimal 范围的数值饱和为 Decimal::MAX / Decimal::MIN。
pub fn decimal_from_json_number(number: &serde_json::Number) -> Option<Decimal> {
    if let Some(i) = number.as_i64() {
        return Some(Decimal::from(i));
    }
    if let Some(u) = number.as_u64() {
        return Some(Decimal::from(u));
    }

    let text = number.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
        .or_else(|| number.as_f64().map(decimal_from_f64))
}

fn decimal_from_f64(value: f64) -> Decimal {
    match Decimal::try_from(value) {
        Ok(decimal) => decimal,
        Err(_) if value.abs() < 1.0 => Decimal::ZERO,
        Err(_) => {
            tracing::warn!(value, "数值超出金额范围，按上限处理");
            saturate(value.is_sign_negative())
        }
    }
}

/// 解析用户输入的金额文本
///
/// 支持货币掩码格式: `$1,234.50`、` 1234 `
///
/// # 返回
/// - Some(Decimal): 可解析的金额（可能为负数，由调用方决定是否截断）
/// - None: 空输入或非数字
pub fn parse_amount_input(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',' && !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    Decimal::from_str(&cleaned).ok()
}
