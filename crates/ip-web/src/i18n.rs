//! Localized UI strings (Korean and English)

use leptos::prelude::*;

use crate::config::CONFIG;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    Ko,
    En,
}

/// Every string the widget renders, for one locale
#[derive(Debug)]
pub struct Messages {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub loading: &'static str,
    pub copy_ip: &'static str,
    pub copied: &'static str,
    pub data_by: &'static str,
    pub lookup_failed: &'static str,
    pub unknown_error: &'static str,
    pub not_found: &'static str,
}

const KO: Messages = Messages {
    title: "Your Public IP & Location",
    subtitle: "당신의 현재 IP 주소와 위치 정보입니다.",
    loading: "불러오는 중...",
    copy_ip: "IP 주소 복사",
    copied: "복사됨",
    data_by: "IP 데이터 제공: ",
    lookup_failed: "IP 및 지역 정보를 가져오는 데 실패했습니다.",
    unknown_error: "알 수 없는 오류가 발생했습니다.",
    not_found: "404 - 페이지를 찾을 수 없습니다",
};

const EN: Messages = Messages {
    title: "Your Public IP & Location",
    subtitle: "Your current IP address and location.",
    loading: "Loading...",
    copy_ip: "Copy IP address",
    copied: "Copied",
    data_by: "IP data by ",
    lookup_failed: "Failed to retrieve IP and location information.",
    unknown_error: "An unknown error occurred.",
    not_found: "404 - Page not found",
};

impl Locale {
    /// Map a BCP 47 tag such as `ko-KR` or `en-US`. Only the primary subtag matters.
    pub fn from_language_tag(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or_default().trim();
        if primary.eq_ignore_ascii_case("ko") {
            Locale::Ko
        } else {
            Locale::En
        }
    }

    /// Locale of the current browser, or the configured default outside one
    pub fn detect() -> Self {
        #[cfg(feature = "csr")]
        {
            if let Some(tag) = web_sys::window().and_then(|w| w.navigator().language()) {
                return Self::from_language_tag(&tag);
            }
        }
        CONFIG.default_locale
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::Ko => &KO,
            Locale::En => &EN,
        }
    }
}

/// Messages provided by `App`, falling back to detection when rendered standalone
pub fn use_messages() -> &'static Messages {
    use_context::<&'static Messages>().unwrap_or_else(|| Locale::detect().messages())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn korean_tags() {
        assert_eq!(Locale::from_language_tag("ko"), Locale::Ko);
        assert_eq!(Locale::from_language_tag("ko-KR"), Locale::Ko);
        assert_eq!(Locale::from_language_tag("KO_kr"), Locale::Ko);
    }

    #[test]
    fn everything_else_is_english() {
        assert_eq!(Locale::from_language_tag("en-US"), Locale::En);
        assert_eq!(Locale::from_language_tag("ja"), Locale::En);
        assert_eq!(Locale::from_language_tag("kok"), Locale::En); // Konkani, not Korean
        assert_eq!(Locale::from_language_tag(""), Locale::En);
    }

    #[test]
    fn failure_messages_differ_per_kind() {
        for locale in [Locale::Ko, Locale::En] {
            let m = locale.messages();
            assert_ne!(m.lookup_failed, m.unknown_error);
        }
        assert_eq!(
            Locale::En.messages().lookup_failed,
            "Failed to retrieve IP and location information."
        );
        assert_eq!(Locale::En.messages().unknown_error, "An unknown error occurred.");
    }

    #[test]
    fn native_detection_uses_default() {
        #[cfg(not(feature = "csr"))]
        assert_eq!(Locale::detect(), CONFIG.default_locale);
    }
}
