//! Target platforms and the fixed idiom table.
//!
//! Asset catalog templates tag every icon entry with an `idiom` (the device
//! family the entry is for). A requested [`Platform`] accepts a fixed set of
//! idioms:
//!
//! | Platform | Accepted idioms | Universal tag |
//! |----------|-----------------|---------------|
//! | `iphone` | `iphone`, `ios-marketing` | `ios` |
//! | `ipad` | `ipad`, `ios-marketing` | `ios` |
//! | `ios` | `iphone`, `ipad`, `ios-marketing` | `ios` |
//! | `watch` | `watch`, `watch-marketing` | `watchos` |
//! | `car` | `car` | none |
//! | `mac` | `mac` | none |
//!
//! Entries with the `universal` idiom carry a `platform` tag instead
//! (`ios`, `watchos`, `carplay`, `macos`), which is matched through [`Platform::accepts_tag`].
//!
//! Platform lists come from the command line as comma-separated strings.
//! Unknown names are ignored rather than rejected: `"ios,tv,mac"` parses to
//! `[Ios, Mac]`.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Idiom used by single-size entries that apply to a whole platform.
pub const UNIVERSAL_IDIOM: &str = "universal";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Iphone,
    Ipad,
    Ios,
    Watch,
    Car,
    Mac,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::Iphone,
        Platform::Ipad,
        Platform::Ios,
        Platform::Watch,
        Platform::Car,
        Platform::Mac,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Iphone => "iphone",
            Platform::Ipad => "ipad",
            Platform::Ios => "ios",
            Platform::Watch => "watch",
            Platform::Car => "car",
            Platform::Mac => "mac",
        }
    }

    /// Template idioms this platform accepts.
    pub fn idioms(self) -> &'static [&'static str] {
        match self {
            Platform::Iphone => &["iphone", "ios-marketing"],
            Platform::Ipad => &["ipad", "ios-marketing"],
            Platform::Ios => &["iphone", "ipad", "ios-marketing"],
            Platform::Watch => &["watch", "watch-marketing"],
            Platform::Car => &["car"],
            Platform::Mac => &["mac"],
        }
    }

    /// The `platform` tag of the single 1024px universal icon, for platforms
    /// whose asset catalogs accept one.
    pub fn universal_tag(self) -> Option<&'static str> {
        match self {
            Platform::Iphone | Platform::Ipad | Platform::Ios => Some("ios"),
            Platform::Watch => Some("watchos"),
            Platform::Car | Platform::Mac => None,
        }
    }

    /// Whether an entry's `platform` tag (as written in templates) belongs to
    /// this platform.
    pub fn accepts_tag(self, tag: &str) -> bool {
        let family = match self {
            Platform::Iphone | Platform::Ipad | Platform::Ios => "ios",
            Platform::Watch => "watchos",
            Platform::Car => "carplay",
            Platform::Mac => "macos",
        };
        tag.eq_ignore_ascii_case(family)
    }

    /// Whether a template entry with this `idiom` / `platform` pair belongs
    /// to this platform.
    pub fn accepts(self, idiom: &str, platform_tag: Option<&str>) -> bool {
        if idiom == UNIVERSAL_IDIOM {
            return platform_tag.is_some_and(|tag| self.accepts_tag(tag));
        }
        self.idioms().contains(&idiom)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown platform '{0}'")]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownPlatform(name.to_string()))
    }
}

/// Parse a comma-separated platform list, dropping unknown names and
/// duplicates while keeping first-seen order.
pub fn parse_platform_list(list: &str) -> Vec<Platform> {
    parse_platforms(list.split(','))
}

/// Parse platform names, dropping unknown names and duplicates.
pub fn parse_platforms<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<Platform> {
    let mut platforms = Vec::new();
    for platform in names.into_iter().filter_map(|n| n.parse::<Platform>().ok()) {
        if !platforms.contains(&platform) {
            platforms.push(platform);
        }
    }
    platforms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_names() {
        assert_eq!("ios".parse::<Platform>(), Ok(Platform::Ios));
        assert_eq!(" Mac ".parse::<Platform>(), Ok(Platform::Mac));
        assert_eq!("WATCH".parse::<Platform>(), Ok(Platform::Watch));
    }

    #[test]
    fn parse_unknown_name_errors() {
        assert_eq!(
            "tv".parse::<Platform>(),
            Err(UnknownPlatform("tv".to_string()))
        );
    }

    #[test]
    fn unknown_platform_message_names_input() {
        let err = "tv".parse::<Platform>().unwrap_err();
        assert_eq!(err.to_string(), "unknown platform 'tv'");
    }

    #[test]
    fn list_ignores_unknown_and_blank() {
        assert_eq!(
            parse_platform_list("ios,tv,,mac"),
            vec![Platform::Ios, Platform::Mac]
        );
    }

    #[test]
    fn list_collapses_duplicates_in_order() {
        assert_eq!(
            parse_platform_list("mac,ios,mac,ios"),
            vec![Platform::Mac, Platform::Ios]
        );
    }

    #[test]
    fn list_of_nothing_known_is_empty() {
        assert!(parse_platform_list("tv,android").is_empty());
    }

    #[test]
    fn ios_accepts_phone_tablet_and_marketing() {
        assert!(Platform::Ios.accepts("iphone", None));
        assert!(Platform::Ios.accepts("ipad", None));
        assert!(Platform::Ios.accepts("ios-marketing", None));
        assert!(!Platform::Ios.accepts("mac", None));
        assert!(!Platform::Ios.accepts("watch", None));
    }

    #[test]
    fn iphone_rejects_ipad_idiom() {
        assert!(Platform::Iphone.accepts("iphone", None));
        assert!(!Platform::Iphone.accepts("ipad", None));
    }

    #[test]
    fn mac_accepts_only_mac() {
        assert!(Platform::Mac.accepts("mac", None));
        assert!(!Platform::Mac.accepts("iphone", None));
    }

    #[test]
    fn universal_idiom_matches_through_platform_tag() {
        assert!(Platform::Ipad.accepts("universal", Some("ios")));
        assert!(Platform::Watch.accepts("universal", Some("watchos")));
        assert!(Platform::Mac.accepts("universal", Some("macos")));
        assert!(!Platform::Mac.accepts("universal", Some("ios")));
        assert!(!Platform::Ios.accepts("universal", None));
    }

    #[test]
    fn car_matches_carplay_tag_only() {
        assert!(Platform::Car.accepts_tag("carplay"));
        assert!(Platform::Car.accepts("universal", Some("CarPlay")));
        assert!(!Platform::Car.accepts_tag("ios"));
        assert!(!Platform::Ios.accepts_tag("carplay"));
        assert_eq!(Platform::Car.universal_tag(), None);
    }

    #[test]
    fn universal_tags() {
        assert_eq!(Platform::Iphone.universal_tag(), Some("ios"));
        assert_eq!(Platform::Ios.universal_tag(), Some("ios"));
        assert_eq!(Platform::Watch.universal_tag(), Some("watchos"));
        assert_eq!(Platform::Mac.universal_tag(), None);
        assert_eq!(Platform::Car.universal_tag(), None);
    }
}
