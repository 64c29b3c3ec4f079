//! Drip notice message templating.
//!
//! A single template string with an optional `[date]` placeholder is
//! resolved from settings once, when the filter is constructed, and reused
//! for every quiz processed in that request.

use crate::host::SettingsProvider;

/// Settings key holding the quiz drip message template.
pub const QUIZ_MESSAGE_SETTING: &str = "drip_quiz_message";

/// Built-in template used when no message is configured.
pub const DEFAULT_QUIZ_MESSAGE: &str = "This quiz will become available on [date].";

/// Placeholder substituted with the formatted release date.
pub const DATE_TOKEN: &str = "[date]";

/// Resolved drip message template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    format: String,
}

impl MessageTemplate {
    /// Wrap an already-resolved template string.
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }

    /// Resolve the quiz message template from settings, falling back to
    /// [`DEFAULT_QUIZ_MESSAGE`] when nothing is configured.
    pub fn resolve(settings: &dyn SettingsProvider) -> Self {
        let configured = settings
            .get_setting(QUIZ_MESSAGE_SETTING)
            .filter(|s| !s.is_empty());
        Self::new(configured.unwrap_or_else(|| DEFAULT_QUIZ_MESSAGE.to_string()))
    }

    /// The raw template string.
    pub fn as_str(&self) -> &str {
        &self.format
    }

    /// Render for an absolute drip.
    ///
    /// Substitutes the first `[date]` occurrence; when the author left the
    /// token out, appends the date after the template instead so the release
    /// date is never lost.
    pub fn render_absolute(&self, formatted_date: &str) -> String {
        if self.format.contains(DATE_TOKEN) {
            self.format.replacen(DATE_TOKEN, formatted_date, 1)
        } else {
            format!("{} {}", self.format, formatted_date)
        }
    }

    /// Render for a dynamic drip.
    ///
    /// Substitutes every `[date]` occurrence, with no appended fallback for
    /// token-less templates. The asymmetry with [`render_absolute`] is
    /// long-standing upstream behavior, kept for compatibility.
    ///
    /// [`render_absolute`]: MessageTemplate::render_absolute
    pub fn render_dynamic(&self, formatted_date: &str) -> String {
        self.format.replace(DATE_TOKEN, formatted_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    struct MapSettings(HashMap<String, String>);

    impl SettingsProvider for MapSettings {
        fn get_setting(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }
    }

    #[test]
    fn resolve_falls_back_to_default() {
        let settings = MapSettings(HashMap::new());
        assert_eq!(
            MessageTemplate::resolve(&settings).as_str(),
            DEFAULT_QUIZ_MESSAGE
        );
    }

    #[test]
    fn resolve_treats_empty_setting_as_unset() {
        let mut map = HashMap::new();
        map.insert(QUIZ_MESSAGE_SETTING.to_string(), String::new());
        assert_eq!(
            MessageTemplate::resolve(&MapSettings(map)).as_str(),
            DEFAULT_QUIZ_MESSAGE
        );
    }

    #[test]
    fn resolve_prefers_configured_message() {
        let mut map = HashMap::new();
        map.insert(
            QUIZ_MESSAGE_SETTING.to_string(),
            "Come back on [date]!".to_string(),
        );
        assert_eq!(
            MessageTemplate::resolve(&MapSettings(map)).as_str(),
            "Come back on [date]!"
        );
    }

    #[test]
    fn absolute_substitutes_token() {
        let template = MessageTemplate::new("Available on [date].");
        assert_eq!(
            template.render_absolute("March 1, 2024"),
            "Available on March 1, 2024."
        );
    }

    #[test]
    fn absolute_substitutes_first_occurrence_only() {
        let template = MessageTemplate::new("[date] or [date]");
        assert_eq!(
            template.render_absolute("soon"),
            "soon or [date]"
        );
    }

    #[test]
    fn absolute_appends_date_when_token_missing() {
        let template = MessageTemplate::new("Come back later");
        assert_eq!(
            template.render_absolute("March 1, 2024"),
            "Come back later March 1, 2024"
        );
    }

    #[test]
    fn dynamic_substitutes_without_fallback() {
        let template = MessageTemplate::new("Unlocks [date].");
        assert_eq!(template.render_dynamic("March 1, 2024"), "Unlocks March 1, 2024.");

        // Token-less template passes through untouched.
        let bare = MessageTemplate::new("Come back later");
        assert_eq!(bare.render_dynamic("March 1, 2024"), "Come back later");
    }

    proptest! {
        // The formatted date always appears in the absolute rendering, with
        // or without a token in the template.
        #[test]
        fn absolute_rendering_always_contains_date(
            template in "[a-zA-Z .]{0,40}",
            date in "[A-Za-z0-9, ]{1,20}",
        ) {
            let rendered = MessageTemplate::new(template).render_absolute(&date);
            prop_assert!(rendered.contains(&date));
        }

        #[test]
        fn dynamic_rendering_removes_all_tokens(
            prefix in "[a-z ]{0,10}",
            date in "[A-Za-z0-9, ]{1,20}",
        ) {
            let template = format!("{prefix}[date] and [date]");
            let rendered = MessageTemplate::new(template).render_dynamic(&date);
            prop_assert!(!rendered.contains(DATE_TOKEN));
        }
    }
}
