//! Dream repository trait.

use super::model::Dream;
use crate::error::Result;
use uuid::Uuid;

/// Persistence for dream records.
///
/// Every write stores the whole record; a failed write must leave the
/// previously stored record intact.
#[async_trait::async_trait]
pub trait DreamRepository: Send + Sync {
    /// Finds a dream by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Dream))`: Dream found
    /// - `Ok(None)`: No dream with that id
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Dream>>;

    /// Inserts or replaces a dream.
    async fn save(&self, dream: &Dream) -> Result<()>;

    /// Deletes a dream. Deleting an unknown id is not an error.
    async fn delete(&self, id: &Uuid) -> Result<()>;

    /// Lists every stored dream, in no particular order.
    async fn list_all(&self) -> Result<Vec<Dream>>;
}
