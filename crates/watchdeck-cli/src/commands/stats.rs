use super::AppContext;
use crate::output::Output;
use color_eyre::Result;
use comfy_table::{Attribute, Cell, Color, Table};
use owo_colors::OwoColorize;
use serde_json::json;
use watchdeck_core::{average_rating, platform_distribution, type_breakdown, watch_progress};

const BAR_WIDTH: usize = 20;

pub fn run_stats(ctx: &AppContext, output: &Output) -> Result<()> {
    let store = ctx.open_store();
    let items = store.items();

    let progress = watch_progress(items);
    let platforms = platform_distribution(items);
    let types = type_breakdown(items);
    let average = average_rating(items);

    if !output.is_human() {
        output.json(&json!({
            "total": items.len(),
            "watchProgress": progress,
            "platformDistribution": platforms,
            "types": types,
            "averageRating": average,
        }));
        return Ok(());
    }

    if !progress.has_data() {
        output.info("No content yet");
        output.info("Add some content to see your analytics".bright_black().to_string());
        return Ok(());
    }

    let mut progress_table = Table::new();
    progress_table.set_header(vec![
        Cell::new("Watch Progress").fg(Color::Cyan).add_attribute(Attribute::Bold),
    ]);
    progress_table.add_row(vec![Cell::new("Watched"), Cell::new(progress.watched)]);
    progress_table.add_row(vec![Cell::new("Unwatched"), Cell::new(progress.unwatched)]);
    progress_table.add_row(vec![
        Cell::new("Progress"),
        Cell::new(bar(progress.watched * 100 / progress.total())),
    ]);
    progress_table.add_row(vec![
        Cell::new("Average Rating"),
        Cell::new(average.map(|a| format!("{:.1} / 5", a)).unwrap_or_else(|| "-".to_string())),
    ]);
    progress_table.load_preset(comfy_table::presets::UTF8_FULL);
    progress_table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    println!("{}", progress_table);
    println!();

    let mut platform_table = Table::new();
    platform_table.set_header(vec![
        Cell::new("Platform Distribution").fg(Color::Cyan).add_attribute(Attribute::Bold),
    ]);
    for share in &platforms {
        platform_table.add_row(vec![
            Cell::new(share.platform.display_name()),
            Cell::new(bar(share.percentage as usize)),
            Cell::new(format!("{}%", share.percentage)),
        ]);
    }
    platform_table.load_preset(comfy_table::presets::UTF8_FULL);
    platform_table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    println!("{}", platform_table);
    println!();

    let mut type_table = Table::new();
    type_table.set_header(vec![
        Cell::new("Library").fg(Color::Cyan).add_attribute(Attribute::Bold),
    ]);
    type_table.add_row(vec![Cell::new("Movies"), Cell::new(types.movies)]);
    type_table.add_row(vec![Cell::new("Series"), Cell::new(types.series)]);
    type_table.add_row(vec![Cell::new("Documentaries"), Cell::new(types.documentaries)]);
    type_table.load_preset(comfy_table::presets::UTF8_FULL);
    type_table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    println!("{}", type_table);

    Ok(())
}

/// Text progress bar for a 0-100 percentage
fn bar(percent: usize) -> String {
    let filled = (percent.min(100) * BAR_WIDTH + 50) / 100;
    format!(
        "{}{}",
        "█".repeat(filled).blue(),
        "░".repeat(BAR_WIDTH - filled).bright_black()
    )
}
