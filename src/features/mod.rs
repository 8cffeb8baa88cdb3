pub mod cities;
pub mod index;
