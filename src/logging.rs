// ==========================================
// 日志系统初始化
// ==========================================
// 宿主应用可能已安装自己的 subscriber，
// 因此这里统一使用 try_init，重复初始化返回 false
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// RUST_LOG 未设置时的默认过滤器
const DEFAULT_FILTER: &str = "info";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// 初始化文本格式日志
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器（默认: info）
///   例如: RUST_LOG=dsrp_core::engine=debug
///
/// # 示例
/// ```no_run
/// dsrp_core::logging::init();
/// ```
pub fn init() -> bool {
    fmt()
        .with_env_filter(env_filter(DEFAULT_FILTER))
        .with_target(true)
        .with_line_number(true)
        .try_init()
        .is_ok()
}

/// 初始化 JSON 格式日志（供日志采集系统使用）
pub fn init_json() -> bool {
    fmt()
        .json()
        .with_env_filter(env_filter(DEFAULT_FILTER))
        .with_current_span(true)
        .try_init()
        .is_ok()
}

/// 测试环境: debug 级别，输出交给测试框架捕获
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(env_filter("debug"))
        .with_test_writer()
        .try_init();
}
