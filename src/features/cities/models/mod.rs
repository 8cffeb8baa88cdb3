mod city;
mod coordinate;

pub use city::{timestamp_now, City, CityPatch, CityRow};
pub use coordinate::{coordinate_from_columns, coordinate_to_columns, Coordinate};
