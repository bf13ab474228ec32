//! UI string lookup.
//!
//! The dashboard ships English and Korean strings. Lookup is by stable key;
//! a key missing from the active locale falls back to English, and an
//! unknown key renders as itself so a typo is visible instead of fatal.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Ko,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ko];

    /// Native-language label for the locale selector.
    pub fn label(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ko => "한국어",
        }
    }
}

/// Translation handle. Owned by the application state; panels call
/// [`I18n::t`] with literal keys.
#[derive(Debug, Clone, Copy)]
pub struct I18n {
    locale: Locale,
}

impl I18n {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Looks up `key` in the active locale, then English, then returns the
    /// key itself.
    pub fn t(&self, key: &'static str) -> &'static str {
        let table = match self.locale {
            Locale::En => &EN,
            Locale::Ko => &KO,
        };
        table
            .get(key)
            .or_else(|| EN.get(key))
            .copied()
            .unwrap_or(key)
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(Locale::En)
    }
}

static EN: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("app.title", "LogAi Dashboard"),
        ("nav.overview", "Overview"),
        ("nav.logs", "Logs"),
        ("nav.anomalies", "Anomalies"),
        ("nav.chat", "Chat"),
        ("nav.settings", "Settings"),
        ("header.refresh", "Refresh"),
        ("header.open_snapshot", "Open Snapshot"),
        ("header.demo_feed", "Demo Feed"),
        ("header.filter", "Service:"),
        ("overview.recent_errors", "Errors (1h)"),
        ("overview.recent_anomalies", "Anomalies (1h)"),
        ("overview.system_status", "System"),
        ("overview.trend", "Anomaly trend, last 24h"),
        ("overview.empty", "No data loaded. Open a snapshot or start the demo feed."),
        ("logs.empty", "No log entries match the current filter."),
        ("logs.col_time", "Time"),
        ("logs.col_level", "Level"),
        ("logs.col_service", "Service"),
        ("logs.col_message", "Message"),
        ("anomalies.empty", "No anomalies detected."),
        ("anomalies.score", "score"),
        ("anomalies.status", "Status:"),
        ("chat.empty", "Ask a question about your logs to start the conversation."),
        ("chat.placeholder", "e.g. why did api-server errors spike?"),
        ("chat.send", "Send"),
        ("settings.llm_provider", "LLM provider"),
        ("settings.embedding_provider", "Embedding provider"),
        ("settings.anomaly_threshold", "Anomaly threshold"),
        ("settings.notifications", "Notifications"),
        ("settings.auto_refresh", "Auto refresh"),
        ("settings.refresh_interval", "Refresh interval (s)"),
        ("settings.log_policy", "Log retention"),
        ("settings.language", "Language"),
        ("settings.theme", "Theme"),
        ("settings.theme_dark", "Dark"),
        ("settings.theme_light", "Light"),
        ("status.loading", "Loading..."),
        ("status.no_source", "no data source"),
        ("status.updated", "updated"),
    ])
});

static KO: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("app.title", "LogAi 대시보드"),
        ("nav.overview", "개요"),
        ("nav.logs", "로그"),
        ("nav.anomalies", "이상 탐지"),
        ("nav.chat", "채팅"),
        ("nav.settings", "설정"),
        ("header.refresh", "새로고침"),
        ("header.open_snapshot", "스냅샷 열기"),
        ("header.demo_feed", "데모 피드"),
        ("header.filter", "서비스:"),
        ("overview.recent_errors", "에러 (1시간)"),
        ("overview.recent_anomalies", "이상 (1시간)"),
        ("overview.system_status", "시스템"),
        ("overview.trend", "최근 24시간 이상 탐지 트렌드"),
        ("overview.empty", "데이터가 없습니다. 스냅샷을 열거나 데모 피드를 시작하세요."),
        ("logs.empty", "필터와 일치하는 로그가 없습니다."),
        ("logs.col_time", "시간"),
        ("logs.col_level", "레벨"),
        ("logs.col_service", "서비스"),
        ("logs.col_message", "메시지"),
        ("anomalies.empty", "탐지된 이상이 없습니다."),
        ("anomalies.score", "점수"),
        ("anomalies.status", "상태:"),
        ("chat.empty", "로그에 대해 질문하면 대화가 시작됩니다."),
        ("chat.placeholder", "예: api-server 에러가 급증한 이유는?"),
        ("chat.send", "전송"),
        ("settings.llm_provider", "LLM 공급자"),
        ("settings.embedding_provider", "임베딩 공급자"),
        ("settings.anomaly_threshold", "이상 점수 임계값"),
        ("settings.notifications", "알림"),
        ("settings.auto_refresh", "자동 새로고침"),
        ("settings.refresh_interval", "새로고침 주기 (초)"),
        ("settings.log_policy", "로그 보관 정책"),
        ("settings.language", "언어"),
        ("settings.theme", "테마"),
        ("settings.theme_dark", "다크"),
        ("settings.theme_light", "라이트"),
        ("status.loading", "로딩 중..."),
        ("status.no_source", "데이터 소스 없음"),
        ("status.updated", "업데이트"),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_in_active_locale() {
        let i18n = I18n::new(Locale::Ko);
        assert_eq!(i18n.t("nav.logs"), "로그");
    }

    #[test]
    fn test_unknown_key_returns_key() {
        let i18n = I18n::default();
        assert_eq!(i18n.t("nav.does_not_exist"), "nav.does_not_exist");
    }

    #[test]
    fn test_locale_switch() {
        let mut i18n = I18n::default();
        assert_eq!(i18n.t("header.refresh"), "Refresh");
        i18n.set_locale(Locale::Ko);
        assert_eq!(i18n.t("header.refresh"), "새로고침");
    }

    #[test]
    fn test_korean_table_covers_english_keys() {
        for key in EN.keys() {
            assert!(KO.contains_key(key), "missing Korean string for {key}");
        }
    }
}
