use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::cities::dtos::{
    CityCollectionResource, CityResource, CreateCityDto, UpdateCityDto,
};
use crate::features::cities::models::City;
use crate::features::cities::routes::CitiesState;
use crate::shared::types::Link;

fn city_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("City '{}' not found", id))
}

fn single_resource(state: &CitiesState, city: City) -> CityResource {
    let self_link = Link::self_link(state.links.city(&city.id));
    CityResource::from(city).with_link(self_link)
}

/// List all cities
#[utoipa::path(
    get,
    path = "/cities",
    responses(
        (status = 200, description = "All cities", body = CityCollectionResource),
        (status = 500, description = "Storage unavailable")
    ),
    tag = "cities"
)]
pub async fn list_cities(State(state): State<CitiesState>) -> Result<Json<CityCollectionResource>> {
    let cities = state.service.retrieve_all().await?;

    Ok(Json(CityCollectionResource {
        content: cities.into_iter().map(CityResource::from).collect(),
        links: vec![Link::self_link(state.links.cities())],
    }))
}

/// Get a city by id
#[utoipa::path(
    get,
    path = "/cities/{id}",
    params(
        ("id" = String, Path, description = "City id")
    ),
    responses(
        (status = 200, description = "City found", body = CityResource),
        (status = 404, description = "City not found")
    ),
    tag = "cities"
)]
pub async fn get_city(
    State(state): State<CitiesState>,
    Path(id): Path<String>,
) -> Result<Json<CityResource>> {
    let city = state
        .service
        .retrieve(&id)
        .await?
        .ok_or_else(|| city_not_found(&id))?;

    Ok(Json(single_resource(&state, city)))
}

/// Create a city
///
/// The caller chooses the id. Posting an id that already exists replaces
/// the stored city.
#[utoipa::path(
    post,
    path = "/cities",
    request_body = CreateCityDto,
    responses(
        (status = 201, description = "City created", body = CityResource,
            headers(("Location" = String, description = "URI of the new city"))),
        (status = 400, description = "Validation error")
    ),
    tag = "cities"
)]
pub async fn create_city(
    State(state): State<CitiesState>,
    AppJson(dto): AppJson<CreateCityDto>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<CityResource>)> {
    let city = state.service.create(dto).await?;
    let resource = single_resource(&state, city);
    let location = state.links.city(&resource.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(resource),
    ))
}

/// Update a city
///
/// Only the fields present in the body are changed.
#[utoipa::path(
    put,
    path = "/cities/{id}",
    params(
        ("id" = String, Path, description = "City id")
    ),
    request_body = UpdateCityDto,
    responses(
        (status = 200, description = "City updated", body = CityResource),
        (status = 400, description = "Validation error"),
        (status = 404, description = "City not found")
    ),
    tag = "cities"
)]
pub async fn update_city(
    State(state): State<CitiesState>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<UpdateCityDto>,
) -> Result<Json<CityResource>> {
    let city = state
        .service
        .update(&id, dto)
        .await?
        .ok_or_else(|| city_not_found(&id))?;

    Ok(Json(single_resource(&state, city)))
}

/// Delete a city
///
/// Succeeds whether or not the city existed.
#[utoipa::path(
    delete,
    path = "/cities/{id}",
    params(
        ("id" = String, Path, description = "City id")
    ),
    responses(
        (status = 204, description = "City deleted")
    ),
    tag = "cities"
)]
pub async fn delete_city(
    State(state): State<CitiesState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
