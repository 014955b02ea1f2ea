//! Category service
//!
//! Provides business logic for category management. A category that still
//! has expenses filed under it cannot be deleted.

use tracing::info;

use crate::audit::EntityType;
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Category, CategoryId, DEFAULT_CATEGORY_COLOR};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new category; `color` defaults to `#3498db`
    pub fn create(&self, name: &str, color: Option<&str>) -> PocketbookResult<Category> {
        let name = name.trim();
        let color = color.map(str::trim).unwrap_or(DEFAULT_CATEGORY_COLOR);

        let category = Category::with_color(name, color);
        category
            .validate()
            .map_err(|e| PocketbookError::Validation(e.to_string()))?;

        if self.storage.categories.get_by_name(name)?.is_some() {
            return Err(PocketbookError::Duplicate {
                entity_type: "Category",
                identifier: name.to_string(),
            });
        }

        self.storage.categories.upsert(category.clone())?;
        self.storage.categories.save()?;

        self.storage.log_create(
            EntityType::Category,
            category.id.to_string(),
            Some(category.name.clone()),
            &category,
        )?;
        info!(category = %category.name, color = %category.color, "category created");

        Ok(category)
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> PocketbookResult<Option<Category>> {
        self.storage.categories.get(id)
    }

    /// Find a category by name (case-insensitive) or ID
    pub fn find(&self, identifier: &str) -> PocketbookResult<Option<Category>> {
        if let Some(category) = self.storage.categories.get_by_name(identifier)? {
            return Ok(Some(category));
        }

        Ok(self
            .storage
            .categories
            .get_all()?
            .into_iter()
            .find(|c| c.id.matches(identifier)))
    }

    /// Find a category or fail with `NotFound`
    pub fn require(&self, identifier: &str) -> PocketbookResult<Category> {
        self.find(identifier)?
            .ok_or_else(|| PocketbookError::category_not_found(identifier))
    }

    /// List all categories sorted by name
    pub fn list(&self) -> PocketbookResult<Vec<Category>> {
        self.storage.categories.get_all()
    }

    /// List all categories with the number of expenses filed under each
    pub fn list_with_usage(&self) -> PocketbookResult<Vec<(Category, usize)>> {
        self.list()?
            .into_iter()
            .map(|c| {
                let count = self.storage.expenses.count_for_category(c.id)?;
                Ok((c, count))
            })
            .collect()
    }

    /// Rename a category and/or change its color
    pub fn update(
        &self,
        id: CategoryId,
        name: Option<&str>,
        color: Option<&str>,
    ) -> PocketbookResult<Category> {
        let existing = self
            .storage
            .categories
            .get(id)?
            .ok_or_else(|| PocketbookError::category_not_found(id.to_string()))?;

        let mut updated = existing.clone();

        if let Some(new_name) = name {
            let new_name = new_name.trim();
            if let Some(other) = self.storage.categories.get_by_name(new_name)? {
                if other.id != id {
                    return Err(PocketbookError::Duplicate {
                        entity_type: "Category",
                        identifier: new_name.to_string(),
                    });
                }
            }
            updated.rename(new_name);
        }

        if let Some(new_color) = color {
            updated.set_color(new_color.trim());
        }

        updated
            .validate()
            .map_err(|e| PocketbookError::Validation(e.to_string()))?;

        self.storage.categories.upsert(updated.clone())?;
        self.storage.categories.save()?;

        self.storage.log_update(
            EntityType::Category,
            updated.id.to_string(),
            Some(updated.name.clone()),
            &existing,
            &updated,
        )?;
        info!(category = %updated.name, "category updated");

        Ok(updated)
    }

    /// Delete a category that no expense refers to
    pub fn delete(&self, id: CategoryId) -> PocketbookResult<Category> {
        let category = self
            .storage
            .categories
            .get(id)?
            .ok_or_else(|| PocketbookError::category_not_found(id.to_string()))?;

        let in_use = self.storage.expenses.count_for_category(id)?;
        if in_use > 0 {
            return Err(PocketbookError::Validation(format!(
                "Category '{}' is used by {} expense(s); delete those expenses first",
                category.name, in_use
            )));
        }

        self.storage.categories.delete(id)?;
        self.storage.categories.save()?;

        self.storage.log_delete(
            EntityType::Category,
            category.id.to_string(),
            Some(category.name.clone()),
            &category,
        )?;
        info!(category = %category.name, "category deleted");

        Ok(category)
    }
}
