use super::AppContext;
use crate::output::Output;
use color_eyre::Result;
use serde_json::json;
use watchdeck_core::normalize_title;
use watchdeck_models::ContentType;

pub fn run_poster(ctx: &AppContext, title: &str, content_type: ContentType, output: &Output) -> Result<()> {
    let normalized = normalize_title(title);
    let matched = ctx.posters.lookup(title);
    let url = ctx.posters.resolve(title, content_type);

    if !output.is_human() {
        output.json(&json!({
            "title": title,
            "normalized": normalized,
            "type": content_type,
            "matched": matched.is_some(),
            "url": url,
        }));
        return Ok(());
    }

    output.info(format!("Normalized: {}", normalized));
    match matched {
        Some(_) => output.success(format!("Poster: {}", url)),
        None => output.warn(format!("No poster found, using {} fallback: {}", content_type, url)),
    }
    Ok(())
}
