use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::error::Result;
use crate::features::cities::models::City;
use crate::features::cities::repositories::{CityMerge, CityRepository};

/// In-process city store used by tests
#[derive(Default)]
pub struct InMemoryCityRepository {
    cities: RwLock<HashMap<String, City>>,
    calls: AtomicUsize,
}

impl InMemoryCityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of repository operations performed so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl CityRepository for InMemoryCityRepository {
    async fn get(&self, id: &str) -> Result<Option<City>> {
        self.record_call();
        Ok(self.cities.read().await.get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<City>> {
        self.record_call();
        Ok(self.cities.read().await.values().cloned().collect())
    }

    async fn save(&self, city: City) -> Result<City> {
        self.record_call();
        self.cities
            .write()
            .await
            .insert(city.id.clone(), city.clone());
        Ok(city)
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        self.record_call();
        self.cities.write().await.remove(id);
        Ok(())
    }

    async fn modify(&self, id: &str, merge: CityMerge) -> Result<Option<City>> {
        self.record_call();
        let mut cities = self.cities.write().await;
        let Some(current) = cities.get(id).cloned() else {
            return Ok(None);
        };

        let merged = merge(current);
        cities.insert(merged.id.clone(), merged.clone());
        Ok(Some(merged))
    }
}
