use super::domain::{CitizenDocument, Scheme, SchemeId, User, UserId};

/// Read access to registered citizens and the documents held on file for them.
pub trait UserRepository: Send + Sync {
    fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;
    fn find_by_phone(&self, phone: &str) -> Result<Option<User>, RepositoryError>;
    fn documents_for(&self, id: &UserId) -> Result<Vec<CitizenDocument>, RepositoryError>;
}

/// Read access to the published scheme catalog.
pub trait SchemeRepository: Send + Sync {
    /// Schemes open to citizens, in catalog order.
    fn active(&self) -> Result<Vec<Scheme>, RepositoryError>;
    /// Looks a scheme up regardless of its status.
    fn by_id(&self, id: &SchemeId) -> Result<Option<Scheme>, RepositoryError>;
    /// Active schemes in the given category.
    fn by_category(&self, category: &str) -> Result<Vec<Scheme>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
