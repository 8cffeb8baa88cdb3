use utoipa::{Modify, OpenApi};

use crate::features::cities::{dtos as cities_dtos, handlers as cities_handlers};
use crate::features::index::{dto as index_dto, handler as index_handler};
use crate::shared::types::Link;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Index
        index_handler::index,
        // Cities
        cities_handlers::list_cities,
        cities_handlers::get_city,
        cities_handlers::create_city,
        cities_handlers::update_city,
        cities_handlers::delete_city,
    ),
    components(
        schemas(
            Link,
            index_dto::IndexDto,
            cities_dtos::CoordinateDto,
            cities_dtos::CreateCityDto,
            cities_dtos::UpdateCityDto,
            cities_dtos::CityResource,
            cities_dtos::CityCollectionResource,
        )
    ),
    tags(
        (name = "index", description = "API entry point"),
        (name = "cities", description = "City records and their links")
    )
)]
pub struct ApiDoc;

/// Overrides the generated document info with configured values
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

/// Collection path the handlers are annotated with
pub const DOCUMENTED_CITIES_PATH: &str = "/cities";

/// Moves the documented city paths under the configured mount point
pub struct CitiesBasePathModifier {
    pub cities_path: String,
}

impl Modify for CitiesBasePathModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if self.cities_path == DOCUMENTED_CITIES_PATH {
            return;
        }

        let paths = std::mem::take(&mut openapi.paths.paths);
        openapi.paths.paths = paths
            .into_iter()
            .map(|(path, item)| {
                let mounted = match path.strip_prefix(DOCUMENTED_CITIES_PATH) {
                    Some(rest) if rest.is_empty() || rest.starts_with('/') => {
                        format!("{}{}", self.cities_path, rest)
                    }
                    _ => path,
                };
                (mounted, item)
            })
            .collect();
    }
}
