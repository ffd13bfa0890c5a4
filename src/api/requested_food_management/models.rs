use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::payload::{optional_timestamp, Field, FieldKind, Schema};
use crate::repository::diesel_repository;
use crate::schema::requested_food;

#[derive(Queryable, Serialize, Debug, PartialEq)]
pub struct RequestedFood {
    pub id: i32,
    pub consumer_id: i32,
    pub category_type: i32,
    pub vegetarian_status: bool,
    pub quantity: i32,
    pub active: bool,
    pub time: DateTime<Utc>,
}

/// Request body. `time` falls back to the moment the request is handled.
#[derive(Deserialize, Debug)]
pub struct RequestedFoodIn {
    pub consumer_id: i32,
    pub category_type: i32,
    pub vegetarian_status: bool,
    pub quantity: i32,
    pub active: bool,
    #[serde(default, deserialize_with = "optional_timestamp")]
    pub time: Option<DateTime<Utc>>,
}

impl Schema for RequestedFoodIn {
    const ENTITY: &'static str = "Requested food";
    const FIELDS: &'static [Field] = &[
        Field::required("consumer_id", FieldKind::Integer),
        Field::required("category_type", FieldKind::Integer),
        Field::required("vegetarian_status", FieldKind::Boolean),
        Field::required("quantity", FieldKind::NonNegativeInteger),
        Field::required("active", FieldKind::Boolean),
        Field::optional("time", FieldKind::Timestamp),
    ];
}

impl RequestedFoodIn {
    pub(crate) fn stamped(self, now: DateTime<Utc>) -> NewRequestedFood {
        NewRequestedFood {
            consumer_id: self.consumer_id,
            category_type: self.category_type,
            vegetarian_status: self.vegetarian_status,
            quantity: self.quantity,
            active: self.active,
            time: self.time.unwrap_or(now),
        }
    }
}

#[derive(Insertable, AsChangeset, Debug)]
#[diesel(table_name = requested_food)]
pub struct NewRequestedFood {
    pub consumer_id: i32,
    pub category_type: i32,
    pub vegetarian_status: bool,
    pub quantity: i32,
    pub active: bool,
    pub time: DateTime<Utc>,
}

diesel_repository!(
    RequestedFoods,
    requested_food,
    RequestedFood,
    NewRequestedFood,
    "Requested food"
);

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn body(time: Option<DateTime<Utc>>) -> RequestedFoodIn {
        RequestedFoodIn {
            consumer_id: 1,
            category_type: 2,
            vegetarian_status: true,
            quantity: 5,
            active: true,
            time,
        }
    }

    #[test]
    fn missing_time_defaults_to_now() {
        let now = Utc::now();
        assert_eq!(body(None).stamped(now).time, now);
    }

    #[test]
    fn given_time_is_kept() {
        let given = Utc.with_ymd_and_hms(2023, 6, 20, 12, 0, 0).unwrap();
        let new = body(Some(given)).stamped(Utc::now());
        assert_eq!(new.time, given);
        assert_eq!(new.quantity, 5);
    }

    #[test]
    fn zone_less_time_is_read_as_utc() {
        let body: RequestedFoodIn = serde_json::from_value(serde_json::json!({
            "consumer_id": 1,
            "category_type": 2,
            "vegetarian_status": true,
            "quantity": 5,
            "active": true,
            "time": "2023-06-20T12:00:00",
        }))
        .unwrap();

        let expected = Utc.with_ymd_and_hms(2023, 6, 20, 12, 0, 0).unwrap();
        assert_eq!(body.stamped(Utc::now()).time, expected);
    }
}
