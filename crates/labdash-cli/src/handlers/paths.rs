//! Paths command handler.
//!
//! Displays the resolved install layout for diagnosing packaging problems.

use anyhow::Result;

use labdash_core::InstallLayout;

/// Render the layout as `key = value` lines or pretty JSON.
pub fn render(layout: &InstallLayout, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(layout)?)
    } else {
        Ok(layout.to_string())
    }
}

/// Execute the paths command.
pub fn execute(layout: &InstallLayout, json: bool) -> Result<()> {
    println!("{}", render(layout, json)?);
    Ok(())
}
