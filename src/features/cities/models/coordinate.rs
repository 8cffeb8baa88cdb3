use rust_decimal::Decimal;

use crate::core::error::{AppError, Result};

pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;
pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;

/// Longitude/latitude pair embedded in a city record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinate {
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Finite, inside the WGS84 bounds, and storable as an exact decimal
    pub fn is_well_formed(&self) -> bool {
        (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&self.longitude)
            && (MIN_LATITUDE..=MAX_LATITUDE).contains(&self.latitude)
            && exact_decimal(self.longitude).is_some()
            && exact_decimal(self.latitude).is_some()
    }
}

// =============================================================================
// STORAGE CONVERSION
// =============================================================================
//
// Coordinates live in NUMERIC columns. The f64 goes through its shortest
// round-trip text form, so the stored decimal is exactly the value the client
// sent and parsing it back yields the same f64. Values needing more than 28
// fractional digits have no exact decimal and are refused. Negative zero is
// stored as zero.

/// Convert a coordinate into its (longitude, latitude) column values
pub fn coordinate_to_columns(coordinate: &Coordinate) -> Result<(Decimal, Decimal)> {
    Ok((
        f64_to_decimal(coordinate.longitude)?,
        f64_to_decimal(coordinate.latitude)?,
    ))
}

/// Rebuild a coordinate from its stored (longitude, latitude) column values
pub fn coordinate_from_columns(longitude: Decimal, latitude: Decimal) -> Result<Coordinate> {
    Ok(Coordinate::new(
        decimal_to_f64(longitude)?,
        decimal_to_f64(latitude)?,
    ))
}

/// Decimal holding exactly `value`, `None` when the conversion would round
fn exact_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    let decimal = Decimal::from_str_exact(&value.to_string()).ok()?;
    let restored = decimal.to_string().parse::<f64>().ok()?;
    (restored == value).then_some(decimal)
}

fn f64_to_decimal(value: f64) -> Result<Decimal> {
    exact_decimal(value).ok_or_else(|| {
        AppError::Validation(format!(
            "Coordinate value {} cannot be stored exactly",
            value
        ))
    })
}

fn decimal_to_f64(value: Decimal) -> Result<f64> {
    value
        .to_string()
        .parse::<f64>()
        .map_err(|e| AppError::Internal(format!("Stored coordinate {} is invalid: {}", value, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_well_formed_bounds() {
        assert!(Coordinate::new(1.0, -1.0).is_well_formed());
        assert!(Coordinate::new(-180.0, 90.0).is_well_formed());
        assert!(Coordinate::new(180.0, -90.0).is_well_formed());
        assert!(Coordinate::new(0.0, 0.0).is_well_formed());

        assert!(!Coordinate::new(180.5, 0.0).is_well_formed());
        assert!(!Coordinate::new(0.0, -90.1).is_well_formed());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_well_formed());
        assert!(!Coordinate::new(0.0, f64::INFINITY).is_well_formed());
    }

    #[test]
    fn test_columns_are_exact_decimals() {
        let (longitude, latitude) =
            coordinate_to_columns(&Coordinate::new(13.404954, 52.520008)).unwrap();

        assert_eq!(longitude, Decimal::from_str("13.404954").unwrap());
        assert_eq!(latitude, Decimal::from_str("52.520008").unwrap());
    }

    #[test]
    fn test_columns_preserve_float_values() {
        let samples = [
            Coordinate::new(1.0, -1.0),
            Coordinate::new(-1.0, -1.0),
            Coordinate::new(0.1, 0.2),
            Coordinate::new(-122.41941550000001, 37.7749295),
            Coordinate::new(151.2092955, -33.8688197),
            Coordinate::new(-180.0, 90.0),
        ];

        for coordinate in samples {
            let (longitude, latitude) = coordinate_to_columns(&coordinate).unwrap();
            let restored = coordinate_from_columns(longitude, latitude).unwrap();
            assert_eq!(restored, coordinate);
        }
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        let result = coordinate_to_columns(&Coordinate::new(f64::NAN, 0.0));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_values_beyond_decimal_scale_are_not_well_formed() {
        let tiny = Coordinate::new(1.2345678901234567e-20, 0.0);
        assert!(!tiny.is_well_formed());
        assert!(matches!(
            coordinate_to_columns(&tiny),
            Err(AppError::Validation(_))
        ));

        let subnormal = Coordinate::new(0.0, 5e-324);
        assert!(!subnormal.is_well_formed());
        assert!(matches!(
            coordinate_to_columns(&subnormal),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_edge_values_survive_storage() {
        let samples = [
            Coordinate::new(0.30000000000000004, 89.99999999999999),
            Coordinate::new(179.99999999999997, 1e-20),
            Coordinate::new(-0.0, 0.0),
        ];

        for coordinate in samples {
            assert!(coordinate.is_well_formed());
            let (longitude, latitude) = coordinate_to_columns(&coordinate).unwrap();
            assert_eq!(coordinate_from_columns(longitude, latitude).unwrap(), coordinate);
        }
    }
}
