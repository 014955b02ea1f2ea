//! Category CLI commands
//!
//! Implements CLI commands for expense category management.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_category_details, format_category_table};
use crate::error::PocketbookResult;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Create a new category
    Add {
        /// Category name
        name: String,
        /// Display color as #RRGGBB
        #[arg(short, long)]
        color: Option<String>,
    },

    /// List all categories with their expense counts
    List,

    /// Show category details
    Show {
        /// Category name or ID
        category: String,
    },

    /// Rename a category or change its color
    Edit {
        /// Category name or ID
        category: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New color as #RRGGBB
        #[arg(short, long)]
        color: Option<String>,
    },

    /// Delete a category no expense refers to
    Delete {
        /// Category name or ID
        category: String,
    },
}

/// Handle a category command
pub fn handle_category_command(
    storage: &Storage,
    settings: &Settings,
    cmd: CategoryCommands,
) -> PocketbookResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::Add { name, color } => {
            let color = color.unwrap_or_else(|| settings.default_category_color.clone());
            let category = service.create(&name, Some(&color))?;
            println!("Created category: {}", category.name);
            println!("  Color: {}", category.color);
            println!("  ID: {}", category.id);
        }

        CategoryCommands::List => {
            let categories = service.list_with_usage()?;
            println!("{}", format_category_table(&categories));
        }

        CategoryCommands::Show { category } => {
            let category = service.require(&category)?;
            print!("{}", format_category_details(&category));
        }

        CategoryCommands::Edit {
            category,
            name,
            color,
        } => {
            let category = service.require(&category)?;

            if name.is_none() && color.is_none() {
                println!("Nothing to change. Use --name or --color.");
                return Ok(());
            }

            let updated = service.update(category.id, name.as_deref(), color.as_deref())?;
            println!("Updated category: {}", updated.name);
            println!("  Color: {}", updated.color);
        }

        CategoryCommands::Delete { category } => {
            let category = service.require(&category)?;
            let deleted = service.delete(category.id)?;
            println!("Deleted category: {}", deleted.name);
        }
    }

    Ok(())
}
