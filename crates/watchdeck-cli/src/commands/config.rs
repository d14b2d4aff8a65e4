use super::AppContext;
use crate::output::Output;
use color_eyre::Result;
use comfy_table::{Attribute, Cell, Color, Table};
use serde_json::json;
use watchdeck_config::Config;

pub fn run_config(ctx: &AppContext, cmd: crate::ConfigCommands, output: &Output) -> Result<()> {
    match cmd {
        crate::ConfigCommands::Show => show_config(ctx, output),
        crate::ConfigCommands::Init { force } => init_config(ctx, force, output),
    }
}

fn show_config(ctx: &AppContext, output: &Output) -> Result<()> {
    let config_file = ctx.paths.config_file();
    let snapshot_file = ctx.config.snapshot_path(&ctx.paths);
    let config = &ctx.config;

    if !output.is_human() {
        output.json(&json!({
            "configFile": config_file.display().to_string(),
            "configFileExists": config_file.exists(),
            "snapshotFile": snapshot_file.display().to_string(),
            "namespace": config.storage.namespace,
            "posterEntries": ctx.posters.len(),
            "includeBuiltinPosters": config.posters.include_builtin,
            "logLevel": config.logging.level,
            "logFile": config.logging.file.as_ref().map(|p| p.display().to_string()),
        }));
        return Ok(());
    }

    if !config_file.exists() {
        output.warn(format!("Configuration file not found at: {} (using defaults)", config_file.display()));
        output.info("Run 'watchdeck config init' to create one.");
        println!();
    }

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Configuration").fg(Color::Cyan).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Config File"), Cell::new(config_file.display())]);
    table.add_row(vec![Cell::new("Snapshot File"), Cell::new(snapshot_file.display())]);
    table.add_row(vec![Cell::new("Namespace"), Cell::new(&config.storage.namespace)]);
    table.add_row(vec![
        Cell::new("Poster Entries"),
        Cell::new(format!(
            "{} ({} configured, built-in {})",
            ctx.posters.len(),
            config.posters.entries.len(),
            if config.posters.include_builtin { "included" } else { "excluded" }
        )),
    ]);
    table.add_row(vec![Cell::new("Log Level"), Cell::new(&config.logging.level)]);
    table.add_row(vec![
        Cell::new("Log File"),
        Cell::new(
            config
                .logging
                .file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "stderr".to_string()),
        ),
    ]);
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    println!("{}", table);
    Ok(())
}

fn init_config(ctx: &AppContext, force: bool, output: &Output) -> Result<()> {
    let config_file = ctx.paths.config_file();
    if config_file.exists() && !force {
        output.warn(format!(
            "Configuration already exists at {} (use --force to overwrite)",
            config_file.display()
        ));
        return Ok(());
    }

    ctx.paths
        .ensure_directories()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to create directories: {}", e))?;
    Config::default()
        .save_to_file(&config_file)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to write {}: {}", config_file.display(), e))?;

    output.success(format!("Wrote default configuration to {}", config_file.display()));
    Ok(())
}
