//! Open Graph / Twitter Card tags for a rendered page.
//!
//! # Pipeline
//!
//! ```text
//! PageContext ─┬─ resolve(Item) ───────┐
//!              ├─ resolve(Navigation) ─┼─ select ─ merge ─ head fragments
//!              └─ resolve(Site) ───────┘
//! ```
//!
//! Every stage is a pure function of its inputs; nothing is kept between
//! renders.

pub mod enable;
pub mod excerpt;
pub mod image;
pub mod merge;
pub mod og;
pub mod resolve;
pub mod select;

pub use image::{ContentFs, LocalFs};
pub use merge::HeadDocument;
pub use og::{OgKey, TagSet};
pub use resolve::{Scope, resolve};
pub use select::select;

use crate::config::{PluginSectionConfig, SiteConfig, SiteSectionConfig};
use crate::debug;
use crate::page::{Client, PageInput};
use url::Url;

/// Everything the resolver reads for one render.
pub struct PageContext<'a> {
    pub page: &'a PageInput,
    pub site: &'a SiteSectionConfig,
    pub plugin: &'a PluginSectionConfig,
    /// Base for absolute image URLs; `None` disables images.
    pub base_url: Option<Url>,
    pub fs: &'a dyn ContentFs,
}

impl<'a> PageContext<'a> {
    pub fn new(
        page: &'a PageInput,
        site: &'a SiteSectionConfig,
        plugin: &'a PluginSectionConfig,
        fs: &'a dyn ContentFs,
    ) -> Self {
        let base_url = site.base_url().or_else(|| request_origin(page));
        Self {
            page,
            site,
            plugin,
            base_url,
            fs,
        }
    }

    pub fn from_config(page: &'a PageInput, config: &'a SiteConfig, fs: &'a dyn ContentFs) -> Self {
        Self::new(page, &config.site, &config.plugin, fs)
    }

    /// Validate an image reference against this page's base URL.
    pub fn image(&self, raw: &str) -> Option<String> {
        let Some(base) = &self.base_url else {
            debug!("image"; "no base URL, ignoring `{}`", raw);
            return None;
        };
        image::resolve_image_path(raw, base, self.fs)
    }
}

/// Site root derived from the request URL, used when `site.url` is unset.
fn request_origin(page: &PageInput) -> Option<Url> {
    let url = Url::parse(page.request_url()?).ok()?;
    url.join("/").ok()
}

/// Resolve all scopes and pick the tags this page should carry.
pub fn page_tags(ctx: &PageContext<'_>) -> Option<TagSet> {
    let item = resolve(Scope::Item, ctx);
    let navigation = resolve(Scope::Navigation, ctx);
    let site = resolve(Scope::Site, ctx);
    select(item, navigation, site, ctx.plugin.hierarchy)
}

/// Run the whole pass and return the merged head.
///
/// Only front-end pages get tags; other clients, or a page where no scope
/// produced tags, keep their head as is.
pub fn render_head(ctx: &PageContext<'_>, mut head: HeadDocument) -> HeadDocument {
    if ctx.page.client != Client::Site {
        debug!("render"; "skipping {:?} client", ctx.page.client);
        return head;
    }

    if let Some(tags) = page_tags(ctx) {
        head.merge(&tags, ctx.plugin.remove_other_tags);
    }
    head
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    /// In-memory content filesystem listing the files that exist.
    #[derive(Default)]
    pub struct MemFs(HashSet<&'static str>);

    impl MemFs {
        pub fn with(files: &[&'static str]) -> Self {
            Self(files.iter().copied().collect())
        }
    }

    impl ContentFs for MemFs {
        fn exists(&self, rel: &str) -> bool {
            self.0.contains(rel)
        }
    }

    /// Owned inputs for building a `PageContext`.
    pub struct Fixture {
        pub page: PageInput,
        pub site: SiteSectionConfig,
        pub plugin: PluginSectionConfig,
    }

    impl Fixture {
        /// An `https://example.com/` site with every switch off.
        pub fn new() -> Self {
            Self {
                page: PageInput::default(),
                site: SiteSectionConfig {
                    name: "Example Site".into(),
                    description: "Site description".into(),
                    url: Some("https://example.com/".into()),
                    ..Default::default()
                },
                plugin: PluginSectionConfig::default(),
            }
        }

        pub fn context<'a>(&'a self, fs: &'a dyn ContentFs) -> PageContext<'a> {
            PageContext::new(&self.page, &self.site, &self.plugin, fs)
        }
    }

    fn page(value: serde_json::Value) -> PageInput {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn base_url_falls_back_to_request_origin() {
        let mut fx = Fixture::new();
        fx.site.url = None;
        fx.page = page(json!({"url": "http://example.org/blog/post?x=1"}));
        let fs = MemFs::default();
        let ctx = fx.context(&fs);
        assert_eq!(ctx.base_url.as_ref().map(Url::as_str), Some("http://example.org/"));
    }

    #[test]
    fn no_base_url_means_no_images() {
        let mut fx = Fixture::new();
        fx.site.url = None;
        let fs = MemFs::with(&["images/a.jpg"]);
        assert_eq!(fx.context(&fs).image("images/a.jpg"), None);
    }

    #[test]
    fn navigation_only_page_end_to_end() {
        let mut fx = Fixture::new();
        fx.plugin.meta_open_graph = true;
        fx.plugin.use_article_content = false;
        fx.plugin.tw_site_name = "@example".into();
        fx.page = page(json!({
            "view": "article",
            "id": 4,
            "item": {"title": "Post", "attribs": {"metaOpenGraph": "0"}},
            "navigation": {"title": "Section", "params": {"metaOpenGraph": 1}}
        }));
        let fs = MemFs::default();
        let head = render_head(&fx.context(&fs), HeadDocument::default()).into_fragments();

        let titles: Vec<_> = head.iter().filter(|t| t.contains("og:title")).collect();
        assert_eq!(titles, [r#"<meta property="og:title" content="Section" />"#]);
        assert!(head.iter().all(|t| !t.contains("twitter:")));
        assert!(head.iter().all(|t| !t.contains(r#""og:image""#)));
    }

    #[test]
    fn hierarchy_prefers_item() {
        let mut fx = Fixture::new();
        fx.plugin.meta_open_graph = true;
        fx.plugin.hierarchy = true;
        fx.page = page(json!({
            "view": "article",
            "id": 4,
            "item": {"title": "Post"},
            "navigation": {"title": "Section", "params": {"metaOpenGraph": 1}}
        }));
        let fs = MemFs::default();
        let tags = page_tags(&fx.context(&fs)).unwrap();
        assert_eq!(tags.get(OgKey::Title), Some("Post"));

        fx.plugin.hierarchy = false;
        let tags = page_tags(&fx.context(&fs)).unwrap();
        assert_eq!(tags.get(OgKey::Title), Some("Section"));
    }

    #[test]
    fn site_tags_when_no_scope_applies() {
        let mut fx = Fixture::new();
        fx.plugin.meta_open_graph = true;
        fx.plugin.use_article_content = false;
        fx.page = page(json!({"view": "category", "url": "https://example.com/c"}));
        let fs = MemFs::default();
        let head = render_head(&fx.context(&fs), HeadDocument::default()).into_fragments();
        assert_eq!(
            head,
            [
                r#"<meta property="og:title" content="Example Site" />"#,
                r#"<meta property="og:description" content="Site description" />"#,
                r#"<meta property="og:type" content="website" />"#,
                r#"<meta property="og:sitename" content="Example Site" />"#,
                r#"<meta property="og:url" content="https://example.com/c" />"#,
            ]
        );
    }

    #[test]
    fn nothing_enabled_leaves_head_alone() {
        let fx = Fixture::new();
        let fs = MemFs::default();
        let original = HeadDocument::new(vec!["<title>x</title>".into()]);
        assert_eq!(render_head(&fx.context(&fs), original.clone()), original);
    }

    #[test]
    fn admin_client_untouched() {
        let mut fx = Fixture::new();
        fx.plugin.meta_open_graph = true;
        fx.page = page(json!({"client": "administrator"}));
        let fs = MemFs::default();
        let head = render_head(&fx.context(&fs), HeadDocument::default());
        assert!(head.fragments().is_empty());
    }

    #[test]
    fn remove_other_tags_replaces_prior() {
        let mut fx = Fixture::new();
        fx.plugin.meta_open_graph = true;
        fx.plugin.remove_other_tags = true;
        let fs = MemFs::default();
        let head = HeadDocument::new(vec![
            "<title>x</title>".into(),
            r#"<meta property="og:title" content="Stale" />"#.into(),
        ]);

        let once = render_head(&fx.context(&fs), head);
        let twice = render_head(&fx.context(&fs), once.clone());
        assert_eq!(once, twice);
        assert!(once.fragments().iter().all(|t| !t.contains("Stale")));
        assert_eq!(once.fragments()[0], "<title>x</title>");
    }
}
