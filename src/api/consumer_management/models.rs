use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::payload::{Field, FieldKind, Schema};
use crate::repository::diesel_repository;
use crate::schema::consumers;

#[derive(Queryable, Serialize, Debug, PartialEq)]
pub struct Consumer {
    pub id: i32,
    pub user_id: i32,
    #[serde(rename = "type")]
    pub kind: String,
    pub license: String,
}

#[derive(Insertable, AsChangeset, Deserialize, Debug)]
#[diesel(table_name = consumers)]
pub struct NewConsumer {
    pub user_id: i32,
    #[serde(rename = "type")]
    pub kind: String,
    pub license: String,
}

impl Schema for NewConsumer {
    const ENTITY: &'static str = "Consumer";
    const FIELDS: &'static [Field] = &[
        Field::required("user_id", FieldKind::Integer),
        Field::required("type", FieldKind::String),
        Field::required("license", FieldKind::String),
    ];
}

diesel_repository!(Consumers, consumers, Consumer, NewConsumer, "Consumer");
