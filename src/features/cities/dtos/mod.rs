mod city_dto;

pub use city_dto::{
    CityCollectionResource, CityResource, CoordinateDto, CreateCityDto, UpdateCityDto,
};
