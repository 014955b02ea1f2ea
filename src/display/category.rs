//! Category display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Category;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Color")]
    color: String,
    #[tabled(rename = "Expenses")]
    expenses: usize,
    #[tabled(rename = "ID")]
    id: String,
}

/// Format categories as a table, each with the number of expenses filed under it
pub fn format_category_table(categories: &[(Category, usize)]) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'pocketbook init' to create the starter categories."
            .to_string();
    }

    let rows = categories.iter().map(|(category, count)| CategoryRow {
        name: category.name.clone(),
        color: category.color.clone(),
        expenses: *count,
        id: category.id.to_string(),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format category details
pub fn format_category_details(category: &Category) -> String {
    let mut output = String::new();

    output.push_str(&format!("Category: {}\n", category.name));
    output.push_str(&format!("  ID:      {}\n", category.id));
    output.push_str(&format!("  Color:   {}\n", category.color));
    output.push_str(&format!(
        "  Created: {}\n",
        category.created_at.format("%Y-%m-%d")
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table() {
        assert!(format_category_table(&[]).starts_with("No categories found."));
    }

    #[test]
    fn test_table_lists_categories() {
        let groceries = Category::with_color("Groceries", "#27ae60");
        let id = groceries.id.to_string();
        let output = format_category_table(&[(groceries, 3), (Category::new("Health"), 0)]);

        assert!(output.contains("Groceries"));
        assert!(output.contains("#27ae60"));
        assert!(output.contains("#3498db"));
        assert!(output.contains(&id));
    }

    #[test]
    fn test_details() {
        let category = Category::new("Transport");
        let output = format_category_details(&category);
        assert!(output.contains("Category: Transport"));
        assert!(output.contains("Color:   #3498db"));
    }
}
