//! YAML Export functionality
//!
//! Human-readable variant of the full JSON export.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::FullExport;
use crate::services::StoreSnapshot;

/// Export the snapshot to YAML with a comment header
pub fn export_full_yaml<W: Write>(snapshot: StoreSnapshot, writer: &mut W) -> ExpenseResult<()> {
    let export = FullExport::from_snapshot(snapshot);
    let io_err = |e: std::io::Error| ExpenseError::Export(e.to_string());

    writeln!(writer, "# Expense tracker export").map_err(io_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(io_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(io_err)?;
    writeln!(writer).map_err(io_err)?;

    serde_yaml::to_writer(&mut *writer, &export).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

/// Parse and validate a YAML export
pub fn import_from_yaml(yaml: &str) -> ExpenseResult<FullExport> {
    let export: FullExport =
        serde_yaml::from_str(yaml).map_err(|e| ExpenseError::Validation(e.to_string()))?;
    export.validate().map_err(ExpenseError::Validation)?;
    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, NewCategory};
    use crate::services::ExpenseStore;
    use crate::storage::MemoryStore;

    #[test]
    fn test_yaml_export_round_trip() {
        let mut store = ExpenseStore::open(MemoryStore::new());
        store
            .add_category(NewCategory::new("Pets", "#ec4899").with_budget(Money::from_units(80)))
            .unwrap();
        store.set_budget(Money::from_cents(123_45)).unwrap();

        let mut buffer = Vec::new();
        export_full_yaml(store.snapshot(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("# Expense tracker export"));
        let imported = import_from_yaml(&text).unwrap();
        assert_eq!(imported.into_snapshot(), store.snapshot());
    }

    #[test]
    fn test_invalid_yaml_is_validation_error() {
        assert!(import_from_yaml("budget: [").unwrap_err().is_validation());
    }
}
