use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::payload::{Field, FieldKind, Schema};
use crate::repository::diesel_repository;
use crate::schema::suppliers;

#[derive(Queryable, Serialize, Debug, PartialEq)]
pub struct Supplier {
    pub id: i32,
    pub user_id: i32,
    #[serde(rename = "type")]
    pub kind: String,
    /// Hide the supplier's identity from consumers.
    pub masked: bool,
    pub license: String,
}

#[derive(Insertable, AsChangeset, Deserialize, Debug)]
#[diesel(table_name = suppliers)]
pub struct NewSupplier {
    pub user_id: i32,
    #[serde(rename = "type")]
    pub kind: String,
    pub masked: bool,
    pub license: String,
}

impl Schema for NewSupplier {
    const ENTITY: &'static str = "Supplier";
    const FIELDS: &'static [Field] = &[
        Field::required("user_id", FieldKind::Integer),
        Field::required("type", FieldKind::String),
        Field::required("masked", FieldKind::Boolean),
        Field::required("license", FieldKind::String),
    ];
}

diesel_repository!(Suppliers, suppliers, Supplier, NewSupplier, "Supplier");
