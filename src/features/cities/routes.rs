use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::cities::handlers;
use crate::features::cities::links::ResourceLinks;
use crate::features::cities::services::CityService;

/// Shared state for the city handlers
#[derive(Clone)]
pub struct CitiesState {
    pub service: Arc<CityService>,
    pub links: Arc<ResourceLinks>,
}

/// Create routes for the cities feature, mounted at `links.cities_path()`
pub fn routes(service: Arc<CityService>, links: Arc<ResourceLinks>) -> Router {
    let collection = links.cities_path().to_string();
    let item = format!("{}/{{id}}", collection);

    Router::new()
        .route(
            &collection,
            get(handlers::list_cities).post(handlers::create_city),
        )
        .route(
            &item,
            get(handlers::get_city)
                .put(handlers::update_city)
                .delete(handlers::delete_city),
        )
        .with_state(CitiesState { service, links })
}
