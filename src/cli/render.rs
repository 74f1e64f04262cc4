//! `render` command: resolve tags for one page and print the result.

use super::args::{OutputFormat, RenderArgs};
use crate::config::SiteConfig;
use crate::page::{Client, PageInput};
use crate::seo::{self, HeadDocument, LocalFs, PageContext, TagSet};
use crate::{debug, log};
use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

pub fn run_render(args: &RenderArgs, config: &SiteConfig) -> Result<()> {
    let page = read_page(&args.context)?;
    let head = match &args.head {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read head from {}", path.display()))?;
            HeadDocument::from_lines(&text)
        }
        None => HeadDocument::default(),
    };

    let content_fs = LocalFs::new(&config.site.root);
    let ctx = PageContext::from_config(&page, config, &content_fs);
    debug!("render"; "base url: {:?}", ctx.base_url.as_ref().map(|url| url.as_str()));

    let output = match args.format {
        OutputFormat::Html => render_html(&ctx, head),
        OutputFormat::Json => render_json(&ctx, args.pretty)?,
    };

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{output}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            log!("render"; "wrote {}", path.display());
        }
        None => println!("{output}"),
    }
    Ok(())
}

/// Read the page context from a file, or stdin for `-`.
fn read_page(path: &Path) -> Result<PageInput> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read page context from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read page context {}", path.display()))?
    };
    serde_json::from_str(&text).context("invalid page context")
}

fn render_html(ctx: &PageContext<'_>, head: HeadDocument) -> String {
    seo::render_head(ctx, head).into_fragments().join("\n")
}

fn render_json(ctx: &PageContext<'_>, pretty: bool) -> Result<String> {
    let tags = if ctx.page.client == Client::Site {
        seo::page_tags(ctx).unwrap_or_default()
    } else {
        TagSet::default()
    };
    let json = if pretty {
        serde_json::to_string_pretty(&tags)?
    } else {
        serde_json::to_string(&tags)?
    };
    Ok(json)
}
