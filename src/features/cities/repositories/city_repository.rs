use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::cities::models::City;

/// Merge step run by [`CityRepository::modify`] against the stored record
pub type CityMerge = Box<dyn FnOnce(City) -> City + Send>;

/// Persistence of city records keyed by id
#[async_trait]
pub trait CityRepository: Send + Sync {
    async fn get(&self, id: &str) -> Result<Option<City>>;

    /// Every stored record; callers must not rely on the order
    async fn list_all(&self) -> Result<Vec<City>>;

    /// Insert, or overwrite the whole record when the id already exists
    async fn save(&self, city: City) -> Result<City>;

    /// Remove the record if present; a missing id is not an error
    async fn delete_by_id(&self, id: &str) -> Result<()>;

    /// Read the record, apply `merge`, and write the result as one atomic step.
    ///
    /// Returns `None` without writing when no record with `id` exists.
    async fn modify(&self, id: &str, merge: CityMerge) -> Result<Option<City>>;
}
