//! `check` command: report the effective configuration.

use crate::config::SiteConfig;
use crate::log;
use anyhow::Result;

/// Summarize a config that already passed validation during load.
pub fn run_check(config: &SiteConfig) -> Result<()> {
    log!("check"; "{} is valid", config.config_path.display());

    for line in summary(config) {
        log!("check"; "{}", line);
    }
    Ok(())
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

fn summary(config: &SiteConfig) -> Vec<String> {
    let plugin = &config.plugin;
    let site = &config.site;
    vec![
        format!("site url: {}", site.base_url().map_or("(from request)".into(), String::from)),
        format!("image root: {}", site.root.display()),
        format!(
            "site defaults: open graph {}, twitter card {}",
            on_off(plugin.meta_open_graph),
            on_off(plugin.meta_twitter_card)
        ),
        format!(
            "items inherit defaults: {}, prefer item over navigation: {}, replace existing tags: {}",
            on_off(plugin.use_article_content),
            on_off(plugin.hierarchy),
            on_off(plugin.remove_other_tags)
        ),
    ]
}
