// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库，语言包位于 locales/
// 用途: 会话倒计时与付款表单提示
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 支持的语言（第一个为默认语言）
pub const SUPPORTED_LOCALES: [&str; 2] = ["zh-CN", "en"];

pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 切换语言
///
/// # 参数
/// - locale: 语言代码（"zh-CN" 或 "en"）
///
/// # 返回
/// - false: 不支持的语言，当前语言保持不变
pub fn set_locale(locale: &str) -> bool {
    if !SUPPORTED_LOCALES.contains(&locale) {
        tracing::warn!(locale, "不支持的语言，已忽略");
        return false;
    }
    rust_i18n::set_locale(locale);
    true
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use dsrp_core::i18n::t;
/// let msg = t("session.expired");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息，替换 `%{name}` 占位符
///
/// # 示例
/// ```no_run
/// use dsrp_core::i18n::t_with_args;
/// let msg = t_with_args("payment.interim_report_overdue", &[("days", "3")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    args.iter()
        .fold(t(key), |text, (name, value)| text.replace(&format!("%{{{}}}", name), value))
}

/// 测试共用的语言锁（locale 为进程级全局状态）
#[cfg(test)]
pub(crate) static LOCALE_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionCountdown;

    #[test]
    fn test_unsupported_locale_ignored() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        assert!(set_locale("en"));
        assert!(!set_locale("fr"));
        assert_eq!(current_locale(), "en");

        assert!(set_locale("zh-CN"));
        assert_eq!(current_locale(), "zh-CN");
    }

    #[test]
    fn test_session_countdown_label() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        set_locale("en");

        let label = SessionCountdown::Active {
            hours: 0,
            minutes: 5,
            seconds: 3,
        }
        .label();
        assert_eq!(label, "Session expires in: 0h 05m 03s");
        assert_eq!(SessionCountdown::Expired.label(), "Session expired");

        set_locale("zh-CN");
        assert_eq!(SessionCountdown::Expired.label(), "会话已过期");
    }

    #[test]
    fn test_translate_with_args() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        set_locale("en");
        let msg = t_with_args("payment.interim_report_overdue", &[("days", "4")]);
        assert_eq!(msg, "Interim Progress Report is 4 days overdue");

        // 未提供的占位符原样保留
        let msg = t_with_args("payment.interim_report_due", &[("days", "9")]);
        assert_eq!(msg, "Interim Progress Report due by %{deadline} (9 days left)");

        set_locale("zh-CN");
    }
}
