use super::{item_json, resolve_id, short_id, AppContext};
use crate::output::Output;
use color_eyre::Result;
use comfy_table::{Attribute, Cell, Color, Table};
use owo_colors::OwoColorize;
use serde_json::json;
use watchdeck_core::{apply, TagFilter, ViewQuery};
use watchdeck_models::{ContentItem, ContentType};

pub fn run_list(
    ctx: &AppContext,
    content_type: Option<ContentType>,
    tag: Option<TagFilter>,
    search: Option<String>,
    output: &Output,
) -> Result<()> {
    let store = ctx.open_store();
    let query = ViewQuery {
        content_type,
        search,
        tag,
    };
    let items = apply(store.items(), &query);
    tracing::debug!("List query {:?} matched {} of {} items", query, items.len(), store.len());

    if !output.is_human() {
        let payload: Vec<serde_json::Value> = items.iter().map(item_json).collect();
        output.json(&json!({ "items": payload, "total": store.len() }));
        return Ok(());
    }

    if items.is_empty() {
        if store.is_empty() {
            output.info("No content yet. Add some with 'watchdeck add'.");
        } else {
            output.info("No items match.");
        }
        return Ok(());
    }

    println!("{}", items_table(&items));
    output.info(format!("{} of {} item(s)", items.len(), store.len()).bright_black().to_string());
    Ok(())
}

pub fn run_show(ctx: &AppContext, id: &str, output: &Output) -> Result<()> {
    let store = ctx.open_store();
    let Some(item) = resolve_id(store.items(), id)?.and_then(|id| store.get(id)) else {
        output.warn(format!("No item matches '{}'", id));
        return Ok(());
    };

    if !output.is_human() {
        output.json(&item_json(&item));
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new(&item.title).fg(Color::Cyan).add_attribute(Attribute::Bold)
    ]);
    table.add_row(vec![Cell::new("Id"), Cell::new(item.id)]);
    table.add_row(vec![Cell::new("Type"), Cell::new(item.content_type.display_name())]);
    table.add_row(vec![Cell::new("Platform"), Cell::new(item.platform.display_name())]);
    table.add_row(vec![Cell::new("Genres"), Cell::new(genres_cell(&item))]);
    table.add_row(vec![Cell::new("Released"), Cell::new(item.release_date.format("%B %-d, %Y"))]);
    table.add_row(vec![Cell::new("Watched"), Cell::new(watched_cell(&item))]);
    table.add_row(vec![Cell::new("Rating"), Cell::new(rating_cell(&item))]);
    table.add_row(vec![Cell::new("Poster"), Cell::new(&item.image)]);
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    println!("{}", table);
    Ok(())
}

fn items_table(items: &[ContentItem]) -> Table {
    let mut table = Table::new();
    table.set_header(
        ["#", "Id", "Title", "Type", "Platform", "Year", "Genres", "Watched", "Rating"]
            .into_iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold)),
    );
    for (index, item) in items.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(short_id(&item.id)).fg(Color::DarkGrey),
            Cell::new(&item.title),
            Cell::new(item.content_type.display_name()),
            Cell::new(item.platform.display_name()),
            Cell::new(item.release_year()),
            Cell::new(genres_cell(item)),
            Cell::new(watched_cell(item)),
            Cell::new(rating_cell(item)),
        ]);
    }
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}

fn genres_cell(item: &ContentItem) -> String {
    if item.genre.is_empty() {
        "-".to_string()
    } else {
        item.genre.join(", ")
    }
}

fn watched_cell(item: &ContentItem) -> String {
    if item.watched {
        "✓ Watched".green().to_string()
    } else {
        "Watch Later".bright_black().to_string()
    }
}

fn rating_cell(item: &ContentItem) -> String {
    match item.rating {
        Some(rating) => rating.stars().yellow().to_string(),
        None => "-".to_string(),
    }
}
