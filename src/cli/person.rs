//! Person CLI commands
//!
//! Implements CLI commands for the profile: name, birth date and photo.

use std::path::PathBuf;

use chrono::Local;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_person_details;
use crate::error::PocketbookResult;
use crate::services::PersonService;
use crate::storage::Storage;

use super::parse_date;

/// Person subcommands
#[derive(Subcommand)]
pub enum PersonCommands {
    /// Create or update the profile
    Set {
        /// First name
        first_name: String,
        /// Last name
        last_name: String,
        /// Birth date (YYYY-MM-DD)
        #[arg(short, long)]
        birth_date: String,
    },

    /// Show the profile
    Show,

    /// Attach a photo (png, jpg, jpeg or gif)
    Photo {
        /// Path to the image file
        path: PathBuf,
    },
}

/// Handle a person command
pub fn handle_person_command(
    storage: &Storage,
    settings: &Settings,
    cmd: PersonCommands,
) -> PocketbookResult<()> {
    let service = PersonService::new(storage);

    match cmd {
        PersonCommands::Set {
            first_name,
            last_name,
            birth_date,
        } => {
            let birth_date = parse_date(&birth_date)?;
            let person = service.save_profile(&first_name, &last_name, birth_date)?;
            println!("Saved profile: {}", person.full_name());
            println!("  ID: {}", person.id);
        }

        PersonCommands::Show => match service.get()? {
            Some(person) => print!(
                "{}",
                format_person_details(&person, Local::now().date_naive(), &settings.date_format)
            ),
            None => {
                println!("No profile saved yet.");
                println!("Run 'pocketbook person set <FIRST> <LAST> --birth-date YYYY-MM-DD'.");
            }
        },

        PersonCommands::Photo { path } => {
            let person = service.set_photo(&path)?;
            if let Some(photo) = &person.photo {
                println!("Photo saved: {}", photo);
            }
        }
    }

    Ok(())
}
