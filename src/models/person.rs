//! Person profile model
//!
//! An installation tracks exactly one person; all income and expenses are
//! owned by them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::PersonId;

/// The person whose budget is tracked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,

    /// File name of the profile photo inside the photos directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Person {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: PersonId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date,
            photo: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Replace the name and birth date, keeping identity and photo
    pub fn update_details(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: NaiveDate,
    ) {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self.birth_date = birth_date;
        self.updated_at = Utc::now();
    }

    pub fn set_photo(&mut self, file_name: impl Into<String>) {
        self.photo = Some(file_name.into());
        self.updated_at = Utc::now();
    }

    /// Validate against today's date
    pub fn validate(&self, today: NaiveDate) -> Result<(), PersonValidationError> {
        if self.first_name.trim().is_empty() {
            return Err(PersonValidationError::EmptyFirstName);
        }
        if self.last_name.trim().is_empty() {
            return Err(PersonValidationError::EmptyLastName);
        }
        if self.first_name.len() > 100 || self.last_name.len() > 100 {
            return Err(PersonValidationError::NameTooLong);
        }
        if self.birth_date > today {
            return Err(PersonValidationError::BirthDateInFuture(self.birth_date));
        }
        Ok(())
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// Validation errors for the person profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonValidationError {
    EmptyFirstName,
    EmptyLastName,
    NameTooLong,
    BirthDateInFuture(NaiveDate),
}

impl fmt::Display for PersonValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFirstName => write!(f, "First name cannot be empty"),
            Self::EmptyLastName => write!(f, "Last name cannot be empty"),
            Self::NameTooLong => write!(f, "Names are limited to 100 characters"),
            Self::BirthDateInFuture(date) => {
                write!(f, "Birth date {} is in the future", date)
            }
        }
    }
}

impl std::error::Error for PersonValidationError {}
