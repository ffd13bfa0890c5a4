use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::payload::{optional_timestamp, Field, FieldKind, Schema};
use crate::repository::diesel_repository;
use crate::schema::surplus_food;

#[derive(Queryable, Serialize, Debug, PartialEq)]
pub struct SurplusFood {
    pub id: i32,
    pub supplier_id: i32,
    pub category_type: i32,
    pub vegetarian_status: bool,
    pub quantity: i32,
    pub active: bool,
    pub expiry: DateTime<Utc>,
    pub description: String,
}

/// Request body. A missing `expiry` becomes the time the request is handled,
/// i.e. the offer is already due.
#[derive(Deserialize, Debug)]
pub struct SurplusFoodIn {
    pub supplier_id: i32,
    pub category_type: i32,
    pub vegetarian_status: bool,
    pub quantity: i32,
    pub active: bool,
    #[serde(default, deserialize_with = "optional_timestamp")]
    pub expiry: Option<DateTime<Utc>>,
    pub description: String,
}

impl Schema for SurplusFoodIn {
    const ENTITY: &'static str = "Surplus food";
    const FIELDS: &'static [Field] = &[
        Field::required("supplier_id", FieldKind::Integer),
        Field::required("category_type", FieldKind::Integer),
        Field::required("vegetarian_status", FieldKind::Boolean),
        Field::required("quantity", FieldKind::NonNegativeInteger),
        Field::required("active", FieldKind::Boolean),
        Field::optional("expiry", FieldKind::Timestamp),
        Field::required("description", FieldKind::String),
    ];
}

impl SurplusFoodIn {
    pub(crate) fn stamped(self, now: DateTime<Utc>) -> NewSurplusFood {
        NewSurplusFood {
            supplier_id: self.supplier_id,
            category_type: self.category_type,
            vegetarian_status: self.vegetarian_status,
            quantity: self.quantity,
            active: self.active,
            expiry: self.expiry.unwrap_or(now),
            description: self.description,
        }
    }
}

#[derive(Insertable, AsChangeset, Debug)]
#[diesel(table_name = surplus_food)]
pub struct NewSurplusFood {
    pub supplier_id: i32,
    pub category_type: i32,
    pub vegetarian_status: bool,
    pub quantity: i32,
    pub active: bool,
    pub expiry: DateTime<Utc>,
    pub description: String,
}

diesel_repository!(
    SurplusFoods,
    surplus_food,
    SurplusFood,
    NewSurplusFood,
    "Surplus food"
);
