use chrono::{DateTime, Duration, SubsecRound, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

use crate::core::error::AppError;
use crate::features::cities::models::{coordinate_from_columns, Coordinate};

/// Domain model for a city record
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub location: Coordinate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields of an update; `None` keeps the stored value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CityPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<Coordinate>,
}

/// Current time at the precision the database keeps (microseconds)
pub fn timestamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

impl City {
    /// New record with both timestamps set to `now`
    pub fn new(
        id: String,
        name: String,
        description: Option<String>,
        location: Coordinate,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            location,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply `patch` field by field and refresh `updated_at`.
    ///
    /// `id` and `created_at` are carried over untouched. The new `updated_at`
    /// is strictly later than the previous one even when the clock has not
    /// advanced since the last write.
    pub fn merged_with(self, patch: CityPatch, now: DateTime<Utc>) -> Self {
        let updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        };

        Self {
            name: patch.name.unwrap_or(self.name),
            description: patch.description.or(self.description),
            location: patch.location.unwrap_or(self.location),
            updated_at,
            id: self.id,
            created_at: self.created_at,
        }
    }
}

/// Row shape of the `cities` table
#[derive(Debug, Clone, FromRow)]
pub struct CityRow {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub longitude: Decimal,
    pub latitude: Decimal,
    pub updated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<CityRow> for City {
    type Error = AppError;

    fn try_from(row: CityRow) -> Result<Self, Self::Error> {
        Ok(Self {
            location: coordinate_from_columns(row.longitude, row.latitude)?,
            id: row.id,
            name: row.name,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn stored_city() -> City {
        let created = DateTime::parse_from_rfc3339("2024-03-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        City {
            id: "city".to_string(),
            name: "cityname".to_string(),
            description: Some("description".to_string()),
            location: Coordinate::new(1.0, -1.0),
            created_at: created,
            updated_at: created + Duration::days(1),
        }
    }

    #[test]
    fn test_new_sets_both_timestamps() {
        let now = timestamp_now();
        let city = City::new(
            "berlin".to_string(),
            "Berlin".to_string(),
            None,
            Coordinate::new(13.4, 52.5),
            now,
        );

        assert_eq!(city.created_at, now);
        assert_eq!(city.updated_at, now);
    }

    #[test]
    fn test_timestamp_now_has_microsecond_precision() {
        assert_eq!(timestamp_now().timestamp_subsec_nanos() % 1_000, 0);
    }

    #[test]
    fn test_merge_replaces_supplied_fields() {
        let existing = stored_city();
        let now = timestamp_now();

        let merged = existing.clone().merged_with(
            CityPatch {
                name: Some("new name".to_string()),
                description: Some("new description".to_string()),
                location: Some(Coordinate::new(-1.0, -1.0)),
            },
            now,
        );

        assert_eq!(merged.id, existing.id);
        assert_eq!(merged.name, "new name");
        assert_eq!(merged.description.as_deref(), Some("new description"));
        assert_eq!(merged.location, Coordinate::new(-1.0, -1.0));
        assert_eq!(merged.created_at, existing.created_at);
        assert_eq!(merged.updated_at, now);
    }

    #[test]
    fn test_merge_keeps_absent_fields() {
        let existing = stored_city();
        let now = timestamp_now();

        let merged = existing.clone().merged_with(CityPatch::default(), now);

        assert_eq!(merged.name, existing.name);
        assert_eq!(merged.description, existing.description);
        assert_eq!(merged.location, existing.location);
        assert_eq!(merged.created_at, existing.created_at);
        assert!(merged.updated_at > existing.updated_at);
    }

    #[test]
    fn test_merge_honors_empty_description() {
        let merged = stored_city().merged_with(
            CityPatch {
                description: Some(String::new()),
                ..CityPatch::default()
            },
            timestamp_now(),
        );

        assert_eq!(merged.description.as_deref(), Some(""));
    }

    #[test]
    fn test_merge_moves_updated_at_forward_when_clock_lags() {
        let existing = stored_city();
        let stale_clock = existing.updated_at - Duration::hours(1);

        let merged = existing.clone().merged_with(CityPatch::default(), stale_clock);

        assert_eq!(
            merged.updated_at,
            existing.updated_at + Duration::microseconds(1)
        );
        assert!(merged.updated_at >= merged.created_at);
    }

    #[test]
    fn test_row_conversion() {
        let row = CityRow {
            id: "city".to_string(),
            name: "cityname".to_string(),
            description: None,
            longitude: Decimal::from_str("1").unwrap(),
            latitude: Decimal::from_str("-1.0").unwrap(),
            updated_at: timestamp_now(),
            created_at: timestamp_now(),
        };

        let city = City::try_from(row).unwrap();

        assert_eq!(city.location, Coordinate::new(1.0, -1.0));
        assert_eq!(city.description, None);
    }
}
