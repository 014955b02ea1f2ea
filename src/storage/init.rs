//! Storage initialization
//!
//! Handles first-run setup and the starter category set

use crate::config::paths::PocketbookPaths;
use crate::error::PocketbookError;
use crate::models::DefaultCategory;

use super::categories::CategoryData;
use super::file_io::write_json_atomic;

/// Initialize storage for a fresh installation
///
/// Creates the directory layout and, when no category file exists yet, the
/// starter categories. Existing data is never overwritten.
///
/// Returns whether the starter categories were written.
pub fn initialize_storage(paths: &PocketbookPaths) -> Result<bool, PocketbookError> {
    paths.ensure_directories()?;

    if paths.categories_file().exists() {
        return Ok(false);
    }

    create_default_categories(paths)?;
    Ok(true)
}

fn create_default_categories(paths: &PocketbookPaths) -> Result<(), PocketbookError> {
    let categories = DefaultCategory::all()
        .iter()
        .map(DefaultCategory::to_category)
        .collect();

    write_json_atomic(paths.categories_file(), &CategoryData { categories })
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &PocketbookPaths) -> bool {
    !paths.categories_file().exists()
}
