//! CLI command handler for restoring a full export
//!
//! Reads a JSON or YAML export, shows what it contains and, with
//! `--replace`, swaps it in for the current data.

use std::path::Path;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{import_from_json, import_from_yaml, FullExport};
use crate::services::ExpenseStore;
use crate::storage::KeyValueStore;

/// Handle the import command
pub fn handle_import_command<S: KeyValueStore>(
    store: &mut ExpenseStore<S>,
    file: &Path,
    replace: bool,
) -> ExpenseResult<()> {
    let content = std::fs::read_to_string(file).map_err(|e| {
        ExpenseError::Validation(format!("Failed to read {}: {}", file.display(), e))
    })?;
    let export = parse_export(file, &content)?;

    println!("Import Preview for '{}'", file.display());
    println!("{}", "=".repeat(40));
    println!("  Exported at:  {}", export.exported_at.format("%Y-%m-%d %H:%M UTC"));
    println!("  Expenses:     {}", export.metadata.expense_count);
    println!("  Categories:   {}", export.metadata.category_count);
    println!("  Total spent:  {}", export.metadata.total_spent);
    println!("  Budget:       {}", export.budget);

    if !replace {
        println!("\nNothing changed. Run again with --replace to overwrite the current data.");
        return Ok(());
    }

    store.restore(export.into_snapshot())?;
    println!("\nData restored from {}", file.display());
    Ok(())
}

fn parse_export(file: &Path, content: &str) -> ExpenseResult<FullExport> {
    let is_yaml = file
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
        .unwrap_or(false);

    if is_yaml {
        import_from_yaml(content)
    } else {
        import_from_json(content)
    }
}
