//! Per-scope tag resolution.
//!
//! Each scope (item, navigation entry, site) independently turns its
//! settings and content into at most one [`TagSet`]. A disabled scope yields
//! `None`, never an empty set, so the selector can tell "nothing to say"
//! apart from "say nothing".

use super::PageContext;
use super::enable::{Enablement, ItemTier};
use super::excerpt::excerpt;
use super::image::resolve_article_image;
use super::og::{OgKey, TagSet};
use crate::debug;
use crate::page::{ItemImages, Params, RawParams, ScopeParams};
use std::fmt;

/// Fixed card type for Twitter previews.
pub const TWITTER_CARD: &str = "summary_large_image";

/// Candidate source of a page's tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Item,
    Navigation,
    Site,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Item => "item",
            Self::Navigation => "navigation",
            Self::Site => "site",
        })
    }
}

/// Resolve the tags of one scope; `None` when the scope is disabled or its
/// data is missing.
pub fn resolve(scope: Scope, ctx: &PageContext<'_>) -> Option<TagSet> {
    let tags = match scope {
        Scope::Item => resolve_item(ctx),
        Scope::Navigation => resolve_navigation(ctx),
        Scope::Site => resolve_site(ctx),
    };
    match &tags {
        Some(tags) => debug!("resolve"; "{} scope: {} tags", scope, tags.len()),
        None => debug!("resolve"; "{} scope: absent", scope),
    }
    tags
}

/// Unescaped field values of one scope.
#[derive(Debug, Default)]
struct Fields {
    title: Option<String>,
    description: Option<String>,
    /// Already validated and absolute.
    image: Option<String>,
    og_type: Option<String>,
    sitename: Option<String>,
}

/// Decode a parameter blob, treating a malformed one as empty.
fn parse_params(raw: &RawParams, what: &str) -> Params {
    raw.parse().unwrap_or_else(|err| {
        debug!("resolve"; "ignoring {} parameters: {}", what, err);
        Params::default()
    })
}

fn owned(value: Option<&str>) -> Option<String> {
    value.map(String::from)
}

// ============================================================================
// Scopes
// ============================================================================

fn resolve_item(ctx: &PageContext<'_>) -> Option<TagSet> {
    let item = ctx.page.current_item()?;
    let plugin = ctx.plugin;
    let params = ScopeParams::from_params(&parse_params(&item.attribs, "item"));

    let enablement = Enablement::item(
        &params,
        plugin.use_article_content,
        plugin.meta_open_graph,
        plugin.meta_twitter_card,
    );
    let tier = enablement.item_tier(&params)?;

    let content_title = item.title();
    let content_description = || {
        owned(item.metadesc()).or_else(|| excerpt(&item.body()))
    };
    let article_image = || {
        let images = ItemImages::from_params(&parse_params(&item.images, "image"));
        let base = ctx.base_url.as_ref()?;
        resolve_article_image(&images, &item.body(), base, ctx.fs)
    };

    let fields = match tier {
        ItemTier::Explicit => Fields {
            title: params.og_title.clone().or_else(|| owned(content_title)),
            description: params
                .og_description
                .clone()
                .or_else(content_description),
            image: match params.og_image.as_deref() {
                Some(raw) => ctx.image(raw),
                None => article_image(),
            },
            ..Default::default()
        },
        ItemTier::Delegated => Fields {
            title: owned(content_title),
            description: content_description(),
            image: article_image(),
            ..Default::default()
        },
        ItemTier::Mixed => Fields {
            title: params
                .og_title
                .clone()
                .or_else(|| owned(plugin.title()))
                .or_else(|| owned(content_title)),
            description: params
                .og_description
                .clone()
                .or_else(content_description)
                .or_else(|| owned(plugin.description())),
            image: match params.og_image.as_deref().or(plugin.image()) {
                Some(raw) => ctx.image(raw),
                None => article_image(),
            },
            ..Default::default()
        },
    };

    let fields = Fields {
        og_type: params.og_type.clone().or_else(|| owned(plugin.og_type())),
        sitename: params
            .og_sitename
            .clone()
            .or_else(|| owned(plugin.sitename()))
            .or_else(|| owned(ctx.site.name())),
        ..fields
    };

    Some(build(fields, enablement, ctx))
}

fn resolve_navigation(ctx: &PageContext<'_>) -> Option<TagSet> {
    let nav = ctx.page.navigation.as_ref()?;
    let plugin = ctx.plugin;
    let raw = parse_params(&nav.params, "navigation");
    let params = ScopeParams::from_params(&raw);

    let enablement = Enablement::own(params.meta_open_graph, params.meta_twitter_card);
    if !enablement.is_enabled() {
        return None;
    }

    let fields = Fields {
        title: params.og_title.clone().or_else(|| owned(nav.title())),
        description: params
            .og_description
            .clone()
            .or_else(|| raw.text("menu-meta_description"))
            .or_else(|| owned(plugin.description())),
        image: params.og_image.as_deref().and_then(|raw| ctx.image(raw)),
        og_type: params.og_type.clone().or_else(|| owned(plugin.og_type())),
        sitename: params
            .og_sitename
            .clone()
            .or_else(|| owned(plugin.sitename()))
            .or_else(|| owned(ctx.site.name())),
    };

    Some(build(fields, enablement, ctx))
}

fn resolve_site(ctx: &PageContext<'_>) -> Option<TagSet> {
    let plugin = ctx.plugin;
    let site = ctx.site;

    let enablement = Enablement::own(
        Some(plugin.meta_open_graph),
        Some(plugin.meta_twitter_card),
    );
    if !enablement.is_enabled() {
        return None;
    }

    let fields = Fields {
        title: owned(plugin.title().or(site.name())),
        description: owned(plugin.description().or(site.description())),
        image: plugin.image().and_then(|raw| ctx.image(raw)),
        og_type: owned(plugin.og_type()),
        sitename: owned(plugin.sitename().or(site.name())),
    };

    Some(build(fields, enablement, ctx))
}

// ============================================================================
// Assembly
// ============================================================================

/// Turn resolved fields into tags, then add the Twitter/Facebook extensions
/// for whichever families are on.
fn build(fields: Fields, enablement: Enablement, ctx: &PageContext<'_>) -> TagSet {
    let mut tags = TagSet::new();

    // Alt text only accompanies an image that survived validation.
    let alt = fields.image.as_ref().and(fields.title.as_deref());

    tags.set(OgKey::Title, fields.title.as_deref());
    tags.set(OgKey::Description, fields.description.as_deref());
    tags.set(OgKey::Image, fields.image.as_deref());
    tags.set(OgKey::ImageAlt, alt);
    tags.set(OgKey::Type, fields.og_type.as_deref());
    tags.set(OgKey::SiteName, fields.sitename.as_deref());
    tags.set(OgKey::Url, ctx.page.request_url());

    if enablement.twitter_card() {
        tags.set(OgKey::TwitterCard, Some(TWITTER_CARD));
        tags.set(OgKey::TwitterImageAlt, alt);
        tags.set(OgKey::TwitterSite, ctx.plugin.twitter_site());
    }

    if enablement.open_graph() {
        tags.set(OgKey::FbAppId, ctx.plugin.fb_app_id());
    }

    tags
}
