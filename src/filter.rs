//! Platform filter for icon templates.
//!
//! Keeps the template entries that belong to at least one requested platform
//! (see the idiom table in [`platform`](crate::platform)). Entries without an
//! `idiom`, or whose idiom no requested platform accepts, are dropped without
//! error.
//!
//! ## Universal icons
//!
//! With `prefers_universal`, platforms that accept a single 1024px icon get
//! exactly that: their idiom-specific entries are dropped and one entry
//!
//! ```json
//! { "idiom" : "universal", "platform" : "ios", "size" : "1024x1024" }
//! ```
//!
//! is synthesized per distinct universal tag. `iphone,ipad` requests one `ios`
//! icon, not two. Synthesized entries come first, in request order. Platforms
//! without a universal form (`mac`, `car`) keep their regular entries.

use crate::imaging::calculations::UNIVERSAL_ICON_SIZE;
use crate::platform::{Platform, UNIVERSAL_IDIOM};
use crate::template::TemplateEntry;

/// Build the synthesized universal entry for `platform_tag`.
pub fn universal_entry(platform_tag: &str) -> TemplateEntry {
    TemplateEntry {
        idiom: Some(UNIVERSAL_IDIOM.to_string()),
        platform: Some(platform_tag.to_string()),
        size: Some(format!("{0}x{0}", UNIVERSAL_ICON_SIZE)),
        ..Default::default()
    }
}

/// Distinct universal tags among `platforms`, in request order.
fn universal_tags(platforms: &[Platform]) -> Vec<&'static str> {
    let mut tags = Vec::new();
    for tag in platforms.iter().filter_map(|p| p.universal_tag()) {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

/// Select the icon entries for `platforms`.
pub fn filter_icon_entries(
    entries: &[TemplateEntry],
    platforms: &[Platform],
    prefers_universal: bool,
) -> Vec<TemplateEntry> {
    let (universal, regular): (Vec<Platform>, Vec<Platform>) = if prefers_universal {
        platforms
            .iter()
            .partition(|p| p.universal_tag().is_some())
    } else {
        (Vec::new(), platforms.to_vec())
    };

    let mut filtered: Vec<TemplateEntry> = universal_tags(&universal)
        .into_iter()
        .map(universal_entry)
        .collect();

    filtered.extend(
        entries
            .iter()
            .filter(|entry| {
                entry.idiom().is_some_and(|idiom| {
                    regular.iter().any(|p| p.accepts(idiom, entry.platform()))
                })
            })
            .cloned(),
    );
    filtered
}
