//! Category CLI commands
//!
//! Implements CLI commands for category management.

use clap::Subcommand;

use super::parse_amount;
use crate::config::Settings;
use crate::display::category::{format_category_details, format_category_list};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{CategoryUpdate, NewCategory, DEFAULT_COLOR};
use crate::services::ExpenseStore;
use crate::storage::KeyValueStore;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Create a new category
    Add {
        /// Category name
        name: String,
        /// Display color (#rrggbb)
        #[arg(long, default_value = DEFAULT_COLOR)]
        color: String,
        /// Optional per-category budget
        #[arg(long)]
        budget: Option<String>,
    },

    /// Show category details
    Show {
        /// Category name or ID
        category: String,
    },

    /// Edit a category
    Edit {
        /// Category name or ID
        category: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New display color (#rrggbb)
        #[arg(long)]
        color: Option<String>,
        /// New per-category budget
        #[arg(long)]
        budget: Option<String>,
        /// Clear the per-category budget
        #[arg(long, conflicts_with = "budget")]
        clear_budget: bool,
    },

    /// Delete a category
    ///
    /// Expenses recorded under it keep their category name.
    Delete {
        /// Category name or ID
        category: String,
    },
}

/// Handle a category command
pub fn handle_category_command<S: KeyValueStore>(
    store: &mut ExpenseStore<S>,
    settings: &Settings,
    cmd: CategoryCommands,
) -> ExpenseResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        CategoryCommands::List => {
            print!(
                "{}",
                format_category_list(store.categories(), store.expenses(), symbol)
            );
        }

        CategoryCommands::Add {
            name,
            color,
            budget,
        } => {
            let mut input = NewCategory::new(name.trim(), color.trim().to_lowercase());
            if let Some(budget) = budget {
                input = input.with_budget(parse_amount(&budget)?);
            }
            input
                .validate()
                .map_err(|e| ExpenseError::Validation(e.to_string()))?;

            let category = store.add_category(input)?;
            println!("Category added: {} ({})", category.name, category.id.short());
        }

        CategoryCommands::Show { category } => {
            let cat = store
                .find_category(&category)
                .ok_or_else(|| ExpenseError::category_not_found(&category))?;
            print!("{}", format_category_details(cat, symbol));
        }

        CategoryCommands::Edit {
            category,
            name,
            color,
            budget,
            clear_budget,
        } => {
            let id = store
                .find_category(&category)
                .map(|c| c.id.clone())
                .ok_or_else(|| ExpenseError::category_not_found(&category))?;

            let budget = if clear_budget {
                Some(None)
            } else {
                budget.as_deref().map(parse_amount).transpose()?.map(Some)
            };
            let update = CategoryUpdate {
                name: name.map(|n| n.trim().to_string()),
                color: color.map(|c| c.trim().to_lowercase()),
                budget,
            };

            if update.is_empty() {
                println!("No changes specified. Use --name, --color, --budget, or --clear-budget.");
                return Ok(());
            }
            update
                .validate()
                .map_err(|e| ExpenseError::Validation(e.to_string()))?;

            let updated = store
                .update_category(&id, &update)?
                .ok_or_else(|| ExpenseError::category_not_found(&category))?;
            println!("Category updated: {}", updated.name);
        }

        CategoryCommands::Delete { category } => {
            let cat = store
                .find_category(&category)
                .cloned()
                .ok_or_else(|| ExpenseError::category_not_found(&category))?;

            store.delete_category(&cat.id)?;
            println!("Category deleted: {}", cat.name);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::MemoryStore;

    fn store() -> ExpenseStore<MemoryStore> {
        ExpenseStore::open(MemoryStore::new())
    }

    #[test]
    fn test_add_category() {
        let mut store = store();
        handle_category_command(
            &mut store,
            &Settings::default(),
            CategoryCommands::Add {
                name: " Pets ".into(),
                color: "#EC4899".into(),
                budget: Some("75".into()),
            },
        )
        .unwrap();

        let added = store.categories().last().unwrap();
        assert_eq!(added.name, "Pets");
        assert_eq!(added.color, "#ec4899");
        assert_eq!(added.budget, Some(Money::from_units(75)));
        assert_eq!(store.categories().len(), 8);
    }

    #[test]
    fn test_add_rejects_bad_color() {
        let mut store = store();
        let result = handle_category_command(
            &mut store,
            &Settings::default(),
            CategoryCommands::Add {
                name: "Pets".into(),
                color: "pink".into(),
                budget: None,
            },
        );
        assert!(result.unwrap_err().is_validation());
        assert_eq!(store.categories().len(), 7);
    }

    #[test]
    fn test_edit_by_name_and_clear_budget() {
        let mut store = store();
        let settings = Settings::default();
        handle_category_command(
            &mut store,
            &settings,
            CategoryCommands::Edit {
                category: "shopping".into(),
                name: Some("Retail".into()),
                color: None,
                budget: Some("300".into()),
                clear_budget: false,
            },
        )
        .unwrap();
        let retail = store.find_category("Retail").unwrap();
        assert_eq!(retail.id.as_str(), "3");
        assert_eq!(retail.budget, Some(Money::from_units(300)));

        handle_category_command(
            &mut store,
            &settings,
            CategoryCommands::Edit {
                category: "3".into(),
                name: None,
                color: None,
                budget: None,
                clear_budget: true,
            },
        )
        .unwrap();
        assert_eq!(store.find_category("3").unwrap().budget, None);
    }

    #[test]
    fn test_delete_unknown_category() {
        let mut store = store();
        let result = handle_category_command(
            &mut store,
            &Settings::default(),
            CategoryCommands::Delete {
                category: "Travel".into(),
            },
        );
        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_delete_by_name() {
        let mut store = store();
        handle_category_command(
            &mut store,
            &Settings::default(),
            CategoryCommands::Delete {
                category: "Other".into(),
            },
        )
        .unwrap();
        assert!(store.find_category("Other").is_none());
    }
}
