//! API root document pointing clients at the cities collection.

pub mod dto;
pub mod handler;
pub mod routes;
