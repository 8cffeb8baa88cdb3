mod city_repository;
#[cfg(test)]
mod memory_city_repository;
mod pg_city_repository;

pub use city_repository::{CityMerge, CityRepository};
#[cfg(test)]
pub use memory_city_repository::InMemoryCityRepository;
pub use pg_city_repository::PgCityRepository;
