use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::cities::models::{City, CityPatch, Coordinate};
use crate::shared::types::Link;

/// Transport form of a coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CoordinateDto {
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub longitude: f64,

    #[validate(range(
        min = -90.0,
        max = 90.0,
        message = "Latitude must be between -90 and 90"
    ))]
    pub latitude: f64,
}

impl From<CoordinateDto> for Coordinate {
    fn from(dto: CoordinateDto) -> Self {
        Coordinate::new(dto.longitude, dto.latitude)
    }
}

impl From<Coordinate> for CoordinateDto {
    fn from(coordinate: Coordinate) -> Self {
        Self {
            longitude: coordinate.longitude,
            latitude: coordinate.latitude,
        }
    }
}

/// Request DTO for creating a city
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCityDto {
    /// Caller-chosen identifier, also the last segment of the resource URI
    #[validate(length(min = 1, max = 255, message = "Id must be 1-255 characters"))]
    pub id: String,

    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[serde(default, alias = "desc")]
    pub description: Option<String>,

    #[serde(alias = "loc")]
    #[validate(nested)]
    pub location: CoordinateDto,
}

/// Request DTO for updating a city.
///
/// Omitted (or null) fields keep their stored value. An empty `description`
/// is a value and replaces the stored one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCityDto {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,

    #[serde(default, alias = "desc")]
    pub description: Option<String>,

    #[serde(default, alias = "loc")]
    #[validate(nested)]
    pub location: Option<CoordinateDto>,
}

impl From<UpdateCityDto> for CityPatch {
    fn from(dto: UpdateCityDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            location: dto.location.map(Coordinate::from),
        }
    }
}

/// City as returned by the API, with short field names and links
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CityResource {
    pub id: String,
    pub name: String,
    #[serde(rename = "desc")]
    pub description: Option<String>,
    #[serde(rename = "loc")]
    pub location: CoordinateDto,
    pub links: Vec<Link>,
}

impl CityResource {
    pub fn with_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }
}

impl From<City> for CityResource {
    fn from(city: City) -> Self {
        Self {
            id: city.id,
            name: city.name,
            description: city.description,
            location: city.location.into(),
            links: Vec::new(),
        }
    }
}

/// Collection of cities with a link back to the collection itself
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CityCollectionResource {
    pub content: Vec<CityResource>,
    pub links: Vec<Link>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_create() -> CreateCityDto {
        CreateCityDto {
            id: "city".to_string(),
            name: "cityname".to_string(),
            description: None,
            location: CoordinateDto {
                longitude: 1.0,
                latitude: -1.0,
            },
        }
    }

    #[test]
    fn test_create_dto_validation() {
        assert!(valid_create().validate().is_ok());

        let mut empty_id = valid_create();
        empty_id.id = String::new();
        assert!(empty_id.validate().is_err());

        let mut empty_name = valid_create();
        empty_name.name = String::new();
        assert!(empty_name.validate().is_err());

        let mut bad_location = valid_create();
        bad_location.location.latitude = 91.0;
        assert!(bad_location.validate().is_err());
    }

    #[test]
    fn test_update_dto_validation() {
        assert!(UpdateCityDto::default().validate().is_ok());

        let empty_name = UpdateCityDto {
            name: Some(String::new()),
            ..UpdateCityDto::default()
        };
        assert!(empty_name.validate().is_err());

        let bad_location = UpdateCityDto {
            location: Some(CoordinateDto {
                longitude: 200.0,
                latitude: 0.0,
            }),
            ..UpdateCityDto::default()
        };
        assert!(bad_location.validate().is_err());
    }

    #[test]
    fn test_update_dto_distinguishes_missing_from_empty_description() {
        let missing: UpdateCityDto = serde_json::from_value(json!({})).unwrap();
        assert_eq!(missing.description, None);

        let empty: UpdateCityDto = serde_json::from_value(json!({ "description": "" })).unwrap();
        assert_eq!(empty.description.as_deref(), Some(""));
    }

    #[test]
    fn test_create_dto_accepts_short_aliases() {
        let dto: CreateCityDto = serde_json::from_value(json!({
            "id": "city",
            "name": "cityname",
            "desc": "description",
            "loc": { "longitude": 1.0, "latitude": -1.0 }
        }))
        .unwrap();

        assert_eq!(dto.description.as_deref(), Some("description"));
        assert_eq!(
            dto.location,
            CoordinateDto {
                longitude: 1.0,
                latitude: -1.0
            }
        );
    }

    #[test]
    fn test_resource_uses_short_field_names() {
        let city = City::new(
            "city".to_string(),
            "cityname".to_string(),
            Some("description".to_string()),
            Coordinate::new(1.0, -1.0),
            crate::features::cities::models::timestamp_now(),
        );

        let value = serde_json::to_value(
            CityResource::from(city).with_link(Link::self_link("http://localhost/cities/city")),
        )
        .unwrap();

        assert_eq!(value["id"], "city");
        assert_eq!(value["name"], "cityname");
        assert_eq!(value["desc"], "description");
        assert_eq!(value["loc"], json!({ "longitude": 1.0, "latitude": -1.0 }));
        assert_eq!(
            value["links"],
            json!([{ "rel": "self", "href": "http://localhost/cities/city" }])
        );
        assert!(value.get("description").is_none());
        assert!(value.get("location").is_none());
    }
}
