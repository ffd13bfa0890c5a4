use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::payload::{Field, FieldKind, Schema};
use crate::repository::diesel_repository;
use crate::schema::category_types;

#[derive(Queryable, Serialize, Debug, PartialEq)]
pub struct CategoryType {
    pub id: i32,
    pub category: String,
}

#[derive(Insertable, AsChangeset, Deserialize, Debug)]
#[diesel(table_name = category_types)]
pub struct NewCategoryType {
    pub category: String,
}

impl Schema for NewCategoryType {
    const ENTITY: &'static str = "Category type";
    const FIELDS: &'static [Field] = &[Field::required("category", FieldKind::String)];
}

diesel_repository!(
    CategoryTypes,
    category_types,
    CategoryType,
    NewCategoryType,
    "Category type"
);
