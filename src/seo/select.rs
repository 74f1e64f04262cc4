//! Choosing which scope's tags a page emits.

use super::og::TagSet;
use crate::debug;

/// Pick exactly one tag set; scopes are never blended.
///
/// 1. Navigation present, item absent: navigation.
/// 2. Both present and `prefer_item` off: navigation.
/// 3. Item present (navigation absent, or `prefer_item` on): item.
/// 4. Neither present: site.
///
/// `prefer_item` is the plugin's `hierarchy` switch.
pub fn select(
    item: Option<TagSet>,
    navigation: Option<TagSet>,
    site: Option<TagSet>,
    prefer_item: bool,
) -> Option<TagSet> {
    let (winner, tags) = match (item, navigation) {
        (None, Some(nav)) => ("navigation", Some(nav)),
        (Some(_), Some(nav)) if !prefer_item => ("navigation", Some(nav)),
        (Some(item), _) => ("item", Some(item)),
        (None, None) => ("site", site),
    };
    debug!("select"; "using {} tags", winner);
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::og::OgKey;

    fn tags(title: &str) -> Option<TagSet> {
        let mut tags = TagSet::new();
        tags.set(OgKey::Title, Some(title));
        Some(tags)
    }

    fn title(tags: Option<TagSet>) -> Option<String> {
        tags?.get(OgKey::Title).map(String::from)
    }

    #[test]
    fn item_only() {
        for prefer_item in [false, true] {
            let chosen = select(tags("item"), None, tags("site"), prefer_item);
            assert_eq!(title(chosen).as_deref(), Some("item"));
        }
    }

    #[test]
    fn navigation_only() {
        for prefer_item in [false, true] {
            let chosen = select(None, tags("nav"), tags("site"), prefer_item);
            assert_eq!(title(chosen).as_deref(), Some("nav"));
        }
    }

    #[test]
    fn both_present_navigation_by_default() {
        let chosen = select(tags("item"), tags("nav"), tags("site"), false);
        assert_eq!(title(chosen).as_deref(), Some("nav"));
    }

    #[test]
    fn both_present_item_with_hierarchy() {
        let chosen = select(tags("item"), tags("nav"), tags("site"), true);
        assert_eq!(title(chosen).as_deref(), Some("item"));
    }

    #[test]
    fn neither_falls_back_to_site() {
        let chosen = select(None, None, tags("site"), false);
        assert_eq!(title(chosen).as_deref(), Some("site"));
        assert_eq!(select(None, None, None, true), None);
    }

    #[test]
    fn site_never_used_when_a_scope_exists() {
        let chosen = select(tags("item"), None, None, false);
        assert_eq!(title(chosen).as_deref(), Some("item"));
    }
}
