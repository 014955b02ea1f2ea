//! Person repository for JSON storage
//!
//! Manages loading and saving the person profile to person.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PocketbookError;
use crate::models::{Person, PersonId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable person data structure
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
struct PersonData {
    #[serde(default)]
    people: Vec<Person>,
}

/// Repository for person persistence
pub struct PersonRepository {
    path: PathBuf,
    data: RwLock<HashMap<PersonId, Person>>,
}

impl PersonRepository {
    /// Create a new person repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load people from disk
    pub fn load(&self) -> Result<(), PocketbookError> {
        let file_data: PersonData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for person in file_data.people {
            data.insert(person.id, person);
        }

        Ok(())
    }

    /// Save people to disk
    pub fn save(&self) -> Result<(), PocketbookError> {
        let people = self.get_all()?;
        write_json_atomic(&self.path, &PersonData { people })
    }

    /// Get a person by ID
    pub fn get(&self, id: PersonId) -> Result<Option<Person>, PocketbookError> {
        let data = self
            .data
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// The profile this installation tracks (the earliest created one)
    pub fn get_primary(&self) -> Result<Option<Person>, PocketbookError> {
        Ok(self.get_all()?.into_iter().next())
    }

    /// Get all people, oldest first
    pub fn get_all(&self) -> Result<Vec<Person>, PocketbookError> {
        let data = self
            .data
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = data.values().cloned().collect();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(list)
    }

    /// Insert or update a person
    pub fn upsert(&self, person: Person) -> Result<(), PocketbookError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(person.id, person);
        Ok(())
    }

    /// Count people
    pub fn count(&self) -> Result<usize, PocketbookError> {
        let data = self
            .data
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn ana() -> Person {
        Person::new("Ana", "Petrovic", NaiveDate::from_ymd_opt(1990, 5, 17).unwrap())
    }

    #[test]
    fn test_empty_load() {
        let temp_dir = TempDir::new().unwrap();
        let repo = PersonRepository::new(temp_dir.path().join("person.json"));
        repo.load().unwrap();

        assert_eq!(repo.count().unwrap(), 0);
        assert!(repo.get_primary().unwrap().is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("person.json");

        let person = ana();
        let id = person.id;

        let repo = PersonRepository::new(path.clone());
        repo.upsert(person).unwrap();
        repo.save().unwrap();

        let repo2 = PersonRepository::new(path);
        repo2.load().unwrap();
        let loaded = repo2.get(id).unwrap().unwrap();
        assert_eq!(loaded.full_name(), "Ana Petrovic");
        assert_eq!(repo2.get_primary().unwrap().unwrap().id, id);
    }
}
