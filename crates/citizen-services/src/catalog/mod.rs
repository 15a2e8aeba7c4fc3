//! In-memory mock datasets backing the repository traits.
//!
//! [`InMemoryCatalog`] is the default data source for the service and for tests.
//! Scheme lists can be swapped for a JSON export and citizen rosters can be read
//! from CSV for batch evaluation.

mod roster;
mod seed;

pub use roster::RosterImporter;

use std::io::Read;
use std::path::Path;

use crate::eligibility::domain::{CitizenDocument, Scheme, SchemeId, SchemeStatus, User, UserId};
use crate::eligibility::repository::{RepositoryError, SchemeRepository, UserRepository};

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "failed to read catalog source: {}", err),
            CatalogError::Json(err) => write!(f, "invalid scheme catalog JSON: {}", err),
            CatalogError::Csv(err) => write!(f, "invalid citizen roster CSV: {}", err),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(err) => Some(err),
            CatalogError::Json(err) => Some(err),
            CatalogError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Immutable snapshot of citizens, schemes, and documents.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    users: Vec<User>,
    schemes: Vec<Scheme>,
    documents: Vec<CitizenDocument>,
}

impl InMemoryCatalog {
    pub fn new(users: Vec<User>, schemes: Vec<Scheme>, documents: Vec<CitizenDocument>) -> Self {
        Self {
            users,
            schemes,
            documents,
        }
    }

    /// Built-in mock dataset.
    pub fn seeded() -> Self {
        Self::new(seed::users(), seed::schemes(), seed::documents())
    }

    /// Replaces the scheme list with a JSON array read from `path`.
    pub fn with_schemes_from_path<P: AsRef<Path>>(self, path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        self.with_schemes_from_reader(file)
    }

    pub fn with_schemes_from_reader<R: Read>(mut self, reader: R) -> Result<Self, CatalogError> {
        self.schemes = serde_json::from_reader(reader)?;
        Ok(self)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn schemes(&self) -> &[Scheme] {
        &self.schemes
    }
}

impl UserRepository for InMemoryCatalog {
    fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.iter().find(|user| &user.id == id).cloned())
    }

    fn find_by_phone(&self, phone: &str) -> Result<Option<User>, RepositoryError> {
        let phone = phone.trim();
        if phone.is_empty() {
            return Ok(None);
        }
        Ok(self.users.iter().find(|user| user.phone == phone).cloned())
    }

    fn documents_for(&self, id: &UserId) -> Result<Vec<CitizenDocument>, RepositoryError> {
        Ok(self
            .documents
            .iter()
            .filter(|document| &document.owner == id)
            .cloned()
            .collect())
    }
}

impl SchemeRepository for InMemoryCatalog {
    fn active(&self) -> Result<Vec<Scheme>, RepositoryError> {
        Ok(self
            .schemes
            .iter()
            .filter(|scheme| scheme.status == SchemeStatus::Active)
            .cloned()
            .collect())
    }

    fn by_id(&self, id: &SchemeId) -> Result<Option<Scheme>, RepositoryError> {
        Ok(self.schemes.iter().find(|scheme| &scheme.id == id).cloned())
    }

    fn by_category(&self, category: &str) -> Result<Vec<Scheme>, RepositoryError> {
        let category = category.trim();
        Ok(self
            .schemes
            .iter()
            .filter(|scheme| {
                scheme.status == SchemeStatus::Active
                    && scheme.category.eq_ignore_ascii_case(category)
            })
            .cloned()
            .collect())
    }
}
