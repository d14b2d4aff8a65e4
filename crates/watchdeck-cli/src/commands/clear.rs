use super::prompts;
use super::AppContext;
use crate::output::Output;
use color_eyre::Result;
use serde_json::json;
use std::io::IsTerminal;

pub fn run_clear(ctx: &AppContext, yes: bool, output: &Output) -> Result<()> {
    let mut store = ctx.open_store();

    if store.is_empty() {
        output.info("Catalog is already empty");
        return Ok(());
    }

    if !yes {
        if !std::io::stdin().is_terminal() {
            output.warn("Refusing to clear without confirmation. Re-run with --yes.");
            return Ok(());
        }
        let prompt = format!("Remove all {} item(s) from {}?", store.len(), store.location());
        if !prompts::prompt_yes_no(&prompt, Some(false))? {
            output.info("Nothing removed");
            return Ok(());
        }
    }

    let removed = store.clear()?;
    output.success(format!("Removed {} item(s)", removed));
    output.json(&json!({ "removed": removed }));
    Ok(())
}
