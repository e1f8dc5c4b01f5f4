//! Static site configuration.
//!
//! Values are fixed at compile time. The lookup endpoint can be swapped at
//! build time with `IP_WEB_LOOKUP_URL` (e.g. to point a staging build at a mock).

use crate::i18n::Locale;

const DEFAULT_LOOKUP_URL: &str = "https://ipinfo.io/json";

pub struct Config {
    /// Endpoint returning `{ ip, country, city, ... }` as JSON
    pub lookup_url: &'static str,
    /// How long the "copied" indicator stays up after a successful copy, in
    /// milliseconds (the unit browser timers take)
    pub copy_reset_delay_ms: u32,
    /// Locale used when the browser language is unknown
    pub default_locale: Locale,
    pub attribution: Link,
}

pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

pub static CONFIG: Config = Config {
    lookup_url: match option_env!("IP_WEB_LOOKUP_URL") {
        Some(url) => url,
        None => DEFAULT_LOOKUP_URL,
    },
    copy_reset_delay_ms: 2000,
    default_locale: Locale::Ko,
    attribution: Link {
        label: "ipinfo.io",
        href: "https://ipinfo.io",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_indicator_resets_after_two_seconds() {
        assert_eq!(CONFIG.copy_reset_delay_ms, 2000);
    }

    #[test]
    fn lookup_url_is_absolute() {
        assert!(CONFIG.lookup_url.starts_with("http://") || CONFIG.lookup_url.starts_with("https://"));
    }
}
