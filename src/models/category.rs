//! Expense category model
//!
//! Every expense belongs to exactly one category. Categories carry a display
//! color used by the report chart and the breakdown table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// Color given to categories created without one
pub const DEFAULT_CATEGORY_COLOR: &str = "#3498db";

/// An expense category (e.g., "Groceries", "Utilities")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name, unique ignoring case
    pub name: String,

    /// Display color as `#rrggbb`
    #[serde(default = "default_color")]
    pub color: String,

    /// When the category was created
    pub created_at: DateTime<Utc>,

    /// When the category was last modified
    pub updated_at: DateTime<Utc>,
}

fn default_color() -> String {
    DEFAULT_CATEGORY_COLOR.to_string()
}

impl Category {
    /// Create a new category with the default color
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_color(name, DEFAULT_CATEGORY_COLOR)
    }

    /// Create a new category with a specific color
    pub fn with_color(name: impl Into<String>, color: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: CategoryId::new(),
            name: name.into(),
            color: color.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Rename the category
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.updated_at = Utc::now();
    }

    /// Change the display color
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
        self.updated_at = Utc::now();
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        if !is_hex_color(&self.color) {
            return Err(CategoryValidationError::InvalidColor(self.color.clone()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Check for a `#rrggbb` color string
pub fn is_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Starter categories created on first run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultCategory {
    Housing,
    Utilities,
    Groceries,
    Transport,
    Health,
    Entertainment,
}

impl DefaultCategory {
    /// Get all default categories in order
    pub fn all() -> &'static [Self] {
        &[
            Self::Housing,
            Self::Utilities,
            Self::Groceries,
            Self::Transport,
            Self::Health,
            Self::Entertainment,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Housing => "Housing",
            Self::Utilities => "Utilities",
            Self::Groceries => "Groceries",
            Self::Transport => "Transport",
            Self::Health => "Health",
            Self::Entertainment => "Entertainment",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Housing => "#2c3e50",
            Self::Utilities => "#3498db",
            Self::Groceries => "#27ae60",
            Self::Transport => "#f39c12",
            Self::Health => "#e74c3c",
            Self::Entertainment => "#9b59b6",
        }
    }

    /// Create a Category from this default
    pub fn to_category(&self) -> Category {
        Category::with_color(self.name(), self.color())
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    InvalidColor(String),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
            Self::InvalidColor(color) => {
                write!(f, "Invalid color '{}' (expected #rrggbb)", color)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}
