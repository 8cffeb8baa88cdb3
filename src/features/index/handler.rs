use std::sync::Arc;

use axum::{extract::State, Json};

use crate::features::cities::ResourceLinks;
use crate::features::index::dto::IndexDto;
use crate::shared::types::{Link, REL_SELF};

/// Relation name of the cities collection link
pub const REL_CITIES: &str = "cities";

/// API root
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Links to the API's collections", body = IndexDto)
    ),
    tag = "index"
)]
pub async fn index(State(links): State<Arc<ResourceLinks>>) -> Json<IndexDto> {
    Json(IndexDto {
        message: "Cities API".to_string(),
        links: vec![
            Link::new(REL_SELF, links.root()),
            Link::new(REL_CITIES, links.cities()),
        ],
    })
}
