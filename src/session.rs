// ==========================================
// 废弃井场修复计划 - 临时会话上下文
// ==========================================
// 申请人通过一次性口令 (OTP) 获得限时会话
// 会话字段以显式上下文对象传递，不依赖全局存储
// ==========================================

use crate::i18n;
use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// TemporarySession - 临时会话
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporarySession {
    pub application_guid: Uuid,
    pub issued_time_utc: DateTime<Utc>,
    pub otp: String,
    pub timeout_seconds: i64,
}

/// 会话倒计时
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCountdown {
    Active { hours: i64, minutes: i64, seconds: i64 },
    Expired,
}

impl SessionCountdown {
    /// 展示文本（随当前语言）
    pub fn label(&self) -> String {
        match self {
            SessionCountdown::Active {
                hours,
                minutes,
                seconds,
            } => i18n::t_with_args(
                "session.expires_in",
                &[
                    ("hours", &hours.to_string()),
                    ("minutes", &format!("{:02}", minutes)),
                    ("seconds", &format!("{:02}", seconds)),
                ],
            ),
            SessionCountdown::Expired => i18n::t("session.expired"),
        }
    }
}

impl TemporarySession {
    /// 由原始会话字段构建
    ///
    /// 四个字段必须全部存在且格式有效，否则视为会话未开始
    ///
    /// # 参数
    /// - `application_guid`: 申请 GUID
    /// - `issued_time_utc`: 签发时间 (RFC 3339 或 `YYYY-MM-DDTHH:MM:SS`，按 UTC 解释)
    /// - `otp`: 一次性口令
    /// - `timeout_seconds`: 有效时长（秒）
    pub fn from_fields(
        application_guid: Option<&str>,
        issued_time_utc: Option<&str>,
        otp: Option<&str>,
        timeout_seconds: Option<&str>,
    ) -> Option<Self> {
        let application_guid = Uuid::parse_str(application_guid?.trim()).ok()?;
        let issued_time_utc = parse_issued_time(issued_time_utc?.trim())?;
        let otp = otp.map(str::trim).filter(|s| !s.is_empty())?.to_string();
        let timeout_seconds: i64 = timeout_seconds?.trim().parse().ok()?;

        if timeout_seconds <= 0 {
            tracing::debug!(timeout_seconds, "会话有效时长无效");
            return None;
        }

        Some(Self {
            application_guid,
            issued_time_utc,
            otp,
            timeout_seconds,
        })
    }

    /// 过期时间
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.issued_time_utc + Duration::seconds(self.timeout_seconds)
    }

    /// 剩余时间（已过期为 0）
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        (self.expires_at() - now).max(Duration::zero())
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.remaining(now) <= Duration::zero()
    }

    /// 倒计时（不足一秒的部分舍去）
    pub fn countdown(&self, now: DateTime<Utc>) -> SessionCountdown {
        let total_seconds = self.remaining(now).num_seconds();
        if total_seconds <= 0 {
            return SessionCountdown::Expired;
        }
        SessionCountdown::Active {
            hours: total_seconds / 3600,
            minutes: (total_seconds % 3600) / 60,
            seconds: total_seconds % 60,
        }
    }
}

fn parse_issued_time(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}
