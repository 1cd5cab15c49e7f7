//! Category model
//!
//! Categories label expenses for grouping and give them a display color.
//! The optional per-category budget is stored but no calculation reads it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::money::Money;

/// Maximum length of a category name
pub const MAX_NAME_LEN: usize = 50;

/// An expense category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Display name, matched against `Expense::category`
    pub name: String,

    /// Display color token (e.g. `#3b82f6`)
    pub color: String,

    /// Optional per-category budget
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<Money>,
}

impl Category {
    /// Create a category with a fresh id
    pub fn new(input: NewCategory) -> Self {
        Self::with_id(CategoryId::new(), input)
    }

    pub fn with_id(id: CategoryId, input: NewCategory) -> Self {
        Self {
            id,
            name: input.name,
            color: input.color,
            budget: input.budget,
        }
    }

    /// Case-insensitive name match
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }

    /// The seven categories every new store starts with
    pub fn defaults() -> Vec<Category> {
        DEFAULT_CATEGORIES
            .iter()
            .map(|(id, name, color)| Category {
                id: CategoryId::from_string(*id),
                name: (*name).to_string(),
                color: (*color).to_string(),
                budget: None,
            })
            .collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

const DEFAULT_CATEGORIES: [(&str, &str, &str); 7] = [
    ("1", "Food & Dining", "#ef4444"),
    ("2", "Transportation", "#f97316"),
    ("3", "Shopping", "#eab308"),
    ("4", "Entertainment", "#22c55e"),
    ("5", "Bills & Utilities", "#3b82f6"),
    ("6", "Healthcare", "#8b5cf6"),
    ("7", "Other", "#6b7280"),
];

/// Color given to categories created without one
pub const DEFAULT_COLOR: &str = "#6b7280";

/// User input for a new category
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
    pub color: String,
    pub budget: Option<Money>,
}

impl NewCategory {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            budget: None,
        }
    }

    pub fn with_budget(mut self, budget: Money) -> Self {
        self.budget = Some(budget);
        self
    }

    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        validate_name(&self.name)?;
        validate_color(&self.color)?;
        if let Some(budget) = self.budget {
            validate_budget(budget)?;
        }
        Ok(())
    }
}

/// A partial set of fields to merge into an existing category
///
/// `budget: Some(None)` clears the per-category budget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub color: Option<String>,
    pub budget: Option<Option<Money>>,
}

impl CategoryUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.color.is_none() && self.budget.is_none()
    }

    pub fn apply_to(&self, category: &mut Category) {
        if let Some(name) = &self.name {
            category.name = name.clone();
        }
        if let Some(color) = &self.color {
            category.color = color.clone();
        }
        if let Some(budget) = self.budget {
            category.budget = budget;
        }
    }

    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(color) = &self.color {
            validate_color(color)?;
        }
        if let Some(Some(budget)) = self.budget {
            validate_budget(budget)?;
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), CategoryValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CategoryValidationError::EmptyName);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(CategoryValidationError::NameTooLong(name.chars().count()));
    }
    Ok(())
}

fn validate_color(color: &str) -> Result<(), CategoryValidationError> {
    let valid = color
        .strip_prefix('#')
        .map(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
        .unwrap_or(false);
    if valid {
        Ok(())
    } else {
        Err(CategoryValidationError::InvalidColor(color.to_string()))
    }
}

fn validate_budget(budget: Money) -> Result<(), CategoryValidationError> {
    if budget.is_negative() {
        Err(CategoryValidationError::NegativeBudget)
    } else {
        Ok(())
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    InvalidColor(String),
    NegativeBudget,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max {})", len, MAX_NAME_LEN)
            }
            Self::InvalidColor(color) => {
                write!(f, "Invalid color '{}', expected #rrggbb", color)
            }
            Self::NegativeBudget => write!(f, "Category budget cannot be negative"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
