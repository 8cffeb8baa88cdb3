//! City records with hypermedia self-links.
//!
//! ## Endpoints
//!
//! Paths are relative to the configured base path (`/cities` by default).
//!
//! | Method | Endpoint | Success | Failure |
//! |--------|----------|---------|---------|
//! | GET | `/cities` | 200 collection | - |
//! | GET | `/cities/{id}` | 200 resource | 404 |
//! | POST | `/cities` | 201 resource + `Location` | 400 |
//! | PUT | `/cities/{id}` | 200 resource | 400, 404 |
//! | DELETE | `/cities/{id}` | 204 | - |
//!
//! `PUT` is a partial update: fields left out of the body keep their stored
//! values.

pub mod dtos;
pub mod handlers;
pub mod links;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use links::ResourceLinks;
pub use repositories::PgCityRepository;
pub use services::CityService;
