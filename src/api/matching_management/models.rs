use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::payload::{Field, FieldKind, Schema};
use crate::repository::diesel_repository;
use crate::schema::matching;

/// A manually recorded pairing of a request with a surplus offer. Nothing
/// checks that either side is still `active`, and the same pair may be
/// recorded more than once.
#[derive(Queryable, Serialize, Debug, PartialEq)]
pub struct Matching {
    pub id: i32,
    pub requested_food_id: i32,
    pub supplier_food_id: i32,
    pub status: String,
}

#[derive(Insertable, AsChangeset, Deserialize, Debug)]
#[diesel(table_name = matching)]
pub struct NewMatching {
    pub requested_food_id: i32,
    pub supplier_food_id: i32,
    pub status: String,
}

impl Schema for NewMatching {
    const ENTITY: &'static str = "Matching";
    const FIELDS: &'static [Field] = &[
        Field::required("requested_food_id", FieldKind::Integer),
        Field::required("supplier_food_id", FieldKind::Integer),
        Field::required("status", FieldKind::String),
    ];
}

diesel_repository!(Matchings, matching, Matching, NewMatching, "Matching");
