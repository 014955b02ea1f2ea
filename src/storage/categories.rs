//! Category repository for JSON storage
//!
//! Manages loading and saving categories to categories.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PocketbookError;
use crate::models::{Category, CategoryId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable category data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CategoryData {
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Repository for category persistence
pub struct CategoryRepository {
    path: PathBuf,
    categories: RwLock<HashMap<CategoryId, Category>>,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            categories: RwLock::new(HashMap::new()),
        }
    }

    /// Load categories from disk
    pub fn load(&self) -> Result<(), PocketbookError> {
        let file_data: CategoryData = read_json(&self.path)?;

        let mut categories = self
            .categories
            .write()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        categories.clear();
        for category in file_data.categories {
            categories.insert(category.id, category);
        }

        Ok(())
    }

    /// Save categories to disk
    pub fn save(&self) -> Result<(), PocketbookError> {
        let categories = self.get_all()?;
        write_json_atomic(&self.path, &CategoryData { categories })
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> Result<Option<Category>, PocketbookError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(categories.get(&id).cloned())
    }

    /// Get all categories, sorted by name
    pub fn get_all(&self) -> Result<Vec<Category>, PocketbookError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = categories.values().cloned().collect();
        list.sort_by_key(|c| c.name.to_lowercase());
        Ok(list)
    }

    /// Get a category by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Category>, PocketbookError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let name_lower = name.trim().to_lowercase();
        Ok(categories
            .values()
            .find(|c| c.name.to_lowercase() == name_lower)
            .cloned())
    }

    /// Insert or update a category
    pub fn upsert(&self, category: Category) -> Result<(), PocketbookError> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        categories.insert(category.id, category);
        Ok(())
    }

    /// Delete a category
    pub fn delete(&self, id: CategoryId) -> Result<bool, PocketbookError> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(categories.remove(&id).is_some())
    }

    /// Count categories
    pub fn count(&self) -> Result<usize, PocketbookError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(categories.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, CategoryRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("categories.json");
        let repo = CategoryRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_category_operations() {
        let (_temp_dir, repo) = create_test_repo();

        let category = Category::with_color("Groceries", "#27ae60");
        let id = category.id;

        repo.upsert(category).unwrap();
        assert_eq!(repo.count().unwrap(), 1);

        let retrieved = repo.get(id).unwrap().unwrap();
        assert_eq!(retrieved.color, "#27ae60");

        assert!(repo.delete(id).unwrap());
        assert!(!repo.delete(id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();

        let category = Category::new("Rent");
        let id = category.id;
        repo.upsert(category).unwrap();
        repo.save().unwrap();

        let repo2 = CategoryRepository::new(temp_dir.path().join("categories.json"));
        repo2.load().unwrap();

        assert_eq!(repo2.count().unwrap(), 1);
        assert_eq!(repo2.get(id).unwrap().unwrap().name, "Rent");
    }

    #[test]
    fn test_get_by_name_ignores_case() {
        let (_temp_dir, repo) = create_test_repo();
        repo.upsert(Category::new("Monthly Rent")).unwrap();

        assert!(repo.get_by_name("MONTHLY RENT").unwrap().is_some());
        assert!(repo.get_by_name(" monthly rent ").unwrap().is_some());
        assert!(repo.get_by_name("Rent").unwrap().is_none());
    }

    #[test]
    fn test_get_all_sorted_by_name() {
        let (_temp_dir, repo) = create_test_repo();
        repo.upsert(Category::new("transport")).unwrap();
        repo.upsert(Category::new("Groceries")).unwrap();
        repo.upsert(Category::new("Health")).unwrap();

        let names: Vec<_> = repo.get_all().unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Groceries", "Health", "transport"]);
    }
}
