//! Person service
//!
//! Manages the single person profile and its photo.

use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::audit::EntityType;
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Person, PersonId};
use crate::storage::Storage;

/// Image extensions accepted for profile photos
pub const ALLOWED_PHOTO_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// Largest accepted profile photo, in bytes
pub const MAX_PHOTO_BYTES: u64 = 16 * 1024 * 1024;

/// Service for the person profile
pub struct PersonService<'a> {
    storage: &'a Storage,
}

impl<'a> PersonService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create the profile, or update it if one already exists
    pub fn save_profile(
        &self,
        first_name: &str,
        last_name: &str,
        birth_date: NaiveDate,
    ) -> PocketbookResult<Person> {
        let first_name = first_name.trim();
        let last_name = last_name.trim();
        let today = Local::now().date_naive();

        if let Some(existing) = self.storage.people.get_primary()? {
            let mut updated = existing.clone();
            updated.update_details(first_name, last_name, birth_date);
            updated
                .validate(today)
                .map_err(|e| PocketbookError::Validation(e.to_string()))?;

            self.storage.people.upsert(updated.clone())?;
            self.storage.people.save()?;

            self.storage.log_update(
                EntityType::Person,
                updated.id.to_string(),
                Some(updated.full_name()),
                &existing,
                &updated,
            )?;
            info!(person = %updated.id, "profile updated");

            return Ok(updated);
        }

        let person = Person::new(first_name, last_name, birth_date);
        person
            .validate(today)
            .map_err(|e| PocketbookError::Validation(e.to_string()))?;

        self.storage.people.upsert(person.clone())?;
        self.storage.people.save()?;

        self.storage.log_create(
            EntityType::Person,
            person.id.to_string(),
            Some(person.full_name()),
            &person,
        )?;
        info!(person = %person.id, "profile created");

        Ok(person)
    }

    /// The profile, if one has been saved
    pub fn get(&self) -> PocketbookResult<Option<Person>> {
        self.storage.people.get_primary()
    }

    /// The profile, or `NotFound` when none has been saved
    pub fn require(&self) -> PocketbookResult<Person> {
        self.get()?.ok_or_else(|| {
            PocketbookError::person_not_found("no profile saved; run 'pocketbook person set'")
        })
    }

    /// A person by ID
    pub fn get_by_id(&self, id: PersonId) -> PocketbookResult<Person> {
        self.storage
            .people
            .get(id)?
            .ok_or_else(|| PocketbookError::person_not_found(id.to_string()))
    }

    /// Copy an image into the photo directory and attach it to the profile
    ///
    /// The stored file name is the sanitized source name behind a
    /// `YYYYmmdd_HHMMSS_` timestamp.
    pub fn set_photo(&self, source: &Path) -> PocketbookResult<Person> {
        let existing = self.require()?;

        let extension = photo_extension(source)?;
        let metadata = fs::metadata(source).map_err(|e| {
            PocketbookError::Validation(format!("Cannot read photo {}: {}", source.display(), e))
        })?;
        if !metadata.is_file() {
            return Err(PocketbookError::Validation(format!(
                "{} is not a file",
                source.display()
            )));
        }
        if metadata.len() > MAX_PHOTO_BYTES {
            return Err(PocketbookError::Validation(format!(
                "Photo is {} bytes; the limit is {} bytes",
                metadata.len(),
                MAX_PHOTO_BYTES
            )));
        }

        let original = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file_name = format!(
            "{}{}",
            Local::now().format("%Y%m%d_%H%M%S_"),
            sanitize_file_name(&original, &extension)
        );

        let photos_dir = self.storage.paths().photos_dir();
        fs::create_dir_all(&photos_dir)?;
        fs::copy(source, photos_dir.join(&file_name))
            .map_err(|e| PocketbookError::Io(format!("Failed to copy photo: {}", e)))?;
        debug!(file = %file_name, "photo stored");

        let mut updated = existing.clone();
        updated.set_photo(file_name);
        self.storage.people.upsert(updated.clone())?;
        self.storage.people.save()?;

        self.storage.log_update(
            EntityType::Person,
            updated.id.to_string(),
            Some(updated.full_name()),
            &existing,
            &updated,
        )?;
        info!(person = %updated.id, "profile photo updated");

        Ok(updated)
    }
}

fn photo_extension(path: &Path) -> PocketbookResult<String> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if ALLOWED_PHOTO_EXTENSIONS.contains(&extension.as_str()) {
        Ok(extension)
    } else {
        Err(PocketbookError::Validation(format!(
            "Unsupported photo type '{}' (allowed: {})",
            extension,
            ALLOWED_PHOTO_EXTENSIONS.join(", ")
        )))
    }
}

/// Reduce a file name to ASCII letters, digits, `.`, `-` and `_`
///
/// Whitespace becomes `_`; leading dots and underscores are dropped. Falls
/// back to `photo.<extension>` when nothing usable remains.
pub fn sanitize_file_name(name: &str, extension: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter_map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                Some(c)
            } else if c.is_whitespace() {
                Some('_')
            } else {
                None
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches(['.', '_']);

    let has_extension = cleaned
        .rsplit_once('.')
        .map(|(stem, ext)| !stem.is_empty() && ext.eq_ignore_ascii_case(extension))
        .unwrap_or(false);

    if has_extension {
        cleaned.to_string()
    } else {
        format!("photo.{}", extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{create_person, create_test_storage};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_save_profile_creates_then_updates() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PersonService::new(&storage);

        let created = service.save_profile("Ana", "Petrovic", date(1990, 5, 17)).unwrap();
        let updated = service
            .save_profile(" Ana ", "Jovanovic", date(1990, 5, 18))
            .unwrap();

        assert_eq!(created.id, updated.id);
        assert_eq!(updated.first_name, "Ana");
        assert_eq!(updated.last_name, "Jovanovic");
        assert_eq!(storage.people.count().unwrap(), 1);

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[1]
            .diff_summary
            .as_deref()
            .unwrap()
            .contains("last_name"));
    }

    #[test]
    fn test_save_profile_validation() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PersonService::new(&storage);

        let err = service.save_profile("", "Petrovic", date(1990, 1, 1)).unwrap_err();
        assert!(err.is_validation());

        let err = service.save_profile("Ana", "Petrovic", date(2999, 1, 1)).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(storage.people.count().unwrap(), 0);
    }

    #[test]
    fn test_require_without_profile() {
        let (_temp_dir, storage) = create_test_storage();
        let err = PersonService::new(&storage).require().unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_set_photo() {
        let (temp_dir, storage) = create_test_storage();
        create_person(&storage);

        let source = temp_dir.path().join("My Photo.PNG");
        fs::write(&source, b"\x89PNG fake").unwrap();

        let person = PersonService::new(&storage).set_photo(&source).unwrap();
        let photo = person.photo.unwrap();
        assert!(photo.ends_with("_My_Photo.PNG"));
        assert!(storage.paths().photos_dir().join(&photo).exists());
    }

    #[test]
    fn test_set_photo_rejects_extension() {
        let (temp_dir, storage) = create_test_storage();
        create_person(&storage);

        let source = temp_dir.path().join("notes.txt");
        fs::write(&source, "hello").unwrap();

        let err = PersonService::new(&storage).set_photo(&source).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_set_photo_rejects_oversized_file() {
        let (temp_dir, storage) = create_test_storage();
        create_person(&storage);

        let source = temp_dir.path().join("huge.jpg");
        let file = fs::File::create(&source).unwrap();
        file.set_len(MAX_PHOTO_BYTES + 1).unwrap();

        let err = PersonService::new(&storage).set_photo(&source).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("my photo.png", "png"), "my_photo.png");
        assert_eq!(sanitize_file_name("../../etc/x.gif", "gif"), "etcx.gif");
        assert_eq!(sanitize_file_name("čćž.jpg", "jpg"), "photo.jpg");
        assert_eq!(sanitize_file_name(".hidden.jpeg", "jpeg"), "hidden.jpeg");
    }
}
