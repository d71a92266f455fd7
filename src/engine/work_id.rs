// ==========================================
// 废弃井场修复计划 - 工程编号排序
// ==========================================
// 工程编号格式: "<申请编号>.<序号>"，按序号数值升序
// 无法解析序号的行排在最后，彼此保持原有顺序
// ==========================================

use std::cmp::Ordering;

/// 取工程编号的数值序号
///
/// # 示例
/// ```
/// use dsrp_core::engine::work_id::work_id_sequence;
///
/// assert_eq!(work_id_sequence("APP1.10"), Some(10));
/// assert_eq!(work_id_sequence("APP1"), None);
/// assert_eq!(work_id_sequence("APP1.x"), None);
/// ```
pub fn work_id_sequence(work_id: &str) -> Option<u64> {
    work_id.split('.').nth(1)?.trim().parse().ok()
}

/// 比较两个可选工程编号
///
/// Ordering::Less 表示 a 排在 b 前
pub fn compare_work_ids(a: Option<&str>, b: Option<&str>) -> Ordering {
    let seq_a = a.and_then(work_id_sequence);
    let seq_b = b.and_then(work_id_sequence);

    match (seq_a, seq_b) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// 按工程编号稳定排序
pub fn sort_by_work_id<T, F>(items: &mut [T], work_id: F)
where
    F: Fn(&T) -> Option<&str>,
{
    items.sort_by(|a, b| compare_work_ids(work_id(a), work_id(b)));
}
