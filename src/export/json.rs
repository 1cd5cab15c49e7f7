//! JSON Export functionality
//!
//! Exports the full store snapshot to JSON with schema versioning.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Expense, Money};
use crate::services::StoreSnapshot;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full data export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub budget: Money,
    pub categories: Vec<Category>,
    pub expenses: Vec<Expense>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,
    pub category_count: usize,
    pub total_spent: Money,
    pub earliest_expense: Option<NaiveDate>,
    pub latest_expense: Option<NaiveDate>,
}

impl FullExport {
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        let metadata = ExportMetadata {
            expense_count: snapshot.expenses.len(),
            category_count: snapshot.categories.len(),
            total_spent: snapshot.expenses.iter().map(|e| e.amount).sum(),
            earliest_expense: snapshot.expenses.iter().map(|e| e.date).min(),
            latest_expense: snapshot.expenses.iter().map(|e| e.date).max(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            budget: snapshot.budget,
            categories: snapshot.categories,
            expenses: snapshot.expenses,
            metadata,
        }
    }

    /// Check that the export can be read by this version
    pub fn validate(&self) -> Result<(), String> {
        let major = self.schema_version.split('.').next().unwrap_or("");
        let supported = EXPORT_SCHEMA_VERSION.split('.').next().unwrap_or("");
        if major != supported {
            return Err(format!(
                "Unsupported schema version {} (expected {}.x)",
                self.schema_version, supported
            ));
        }
        if self.metadata.expense_count != self.expenses.len() {
            return Err(format!(
                "Metadata lists {} expenses but export contains {}",
                self.metadata.expense_count,
                self.expenses.len()
            ));
        }
        if self.metadata.category_count != self.categories.len() {
            return Err(format!(
                "Metadata lists {} categories but export contains {}",
                self.metadata.category_count,
                self.categories.len()
            ));
        }

        let mut seen = HashSet::new();
        if let Some(dup) = self.categories.iter().find(|c| !seen.insert(&c.id)) {
            return Err(format!("Duplicate category id: {}", dup.id));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = self.expenses.iter().find(|e| !seen.insert(&e.id)) {
            return Err(format!("Duplicate expense id: {}", dup.id));
        }
        Ok(())
    }

    pub fn into_snapshot(self) -> StoreSnapshot {
        StoreSnapshot {
            budget: self.budget,
            categories: self.categories,
            expenses: self.expenses,
        }
    }
}

/// Export the snapshot as pretty-printed JSON
pub fn export_full_json<W: Write>(snapshot: StoreSnapshot, writer: &mut W) -> ExpenseResult<()> {
    let export = FullExport::from_snapshot(snapshot);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;
    Ok(())
}

/// Parse and validate a JSON export
pub fn import_from_json(json: &str) -> ExpenseResult<FullExport> {
    let export: FullExport =
        serde_json::from_str(json).map_err(|e| ExpenseError::Validation(e.to_string()))?;
    export.validate().map_err(ExpenseError::Validation)?;
    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewExpense;
    use crate::services::ExpenseStore;
    use crate::storage::MemoryStore;

    fn sample_snapshot() -> StoreSnapshot {
        let mut store = ExpenseStore::open(MemoryStore::new());
        for (units, day) in [(12, 3), (30, 1)] {
            store
                .add_expense(NewExpense::new(
                    Money::from_units(units),
                    "Shopping",
                    NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
                ))
                .unwrap();
        }
        store.snapshot()
    }

    #[test]
    fn test_metadata() {
        let export = FullExport::from_snapshot(sample_snapshot());

        assert_eq!(export.metadata.expense_count, 2);
        assert_eq!(export.metadata.category_count, 7);
        assert_eq!(export.metadata.total_spent, Money::from_units(42));
        assert_eq!(
            export.metadata.earliest_expense,
            NaiveDate::from_ymd_opt(2025, 6, 1)
        );
        assert!(export.validate().is_ok());
    }

    #[test]
    fn test_export_and_reimport() {
        let snapshot = sample_snapshot();
        let mut buffer = Vec::new();
        export_full_json(snapshot.clone(), &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let imported = import_from_json(&text).unwrap();
        assert_eq!(imported.into_snapshot(), snapshot);
    }

    #[test]
    fn test_rejects_future_schema() {
        let mut export = FullExport::from_snapshot(sample_snapshot());
        export.schema_version = "2.0.0".into();
        let text = serde_json::to_string(&export).unwrap();

        let err = import_from_json(&text).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut export = FullExport::from_snapshot(sample_snapshot());
        export.expenses[1].id = export.expenses[0].id.clone();
        let err = import_from_json(&serde_json::to_string(&export).unwrap()).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Duplicate expense id"));

        let mut export = FullExport::from_snapshot(sample_snapshot());
        export.categories[1].id = export.categories[0].id.clone();
        let err = import_from_json(&serde_json::to_string(&export).unwrap()).unwrap_err();
        assert!(err.to_string().contains("Duplicate category id"));
    }

    #[test]
    fn test_rejects_category_count_mismatch() {
        let mut export = FullExport::from_snapshot(sample_snapshot());
        export.categories.pop();
        let err = import_from_json(&serde_json::to_string(&export).unwrap()).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("categories"));
    }
}
