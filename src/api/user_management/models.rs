use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::payload::{Field, FieldKind, Schema};
use crate::repository::diesel_repository;
use crate::schema::users;

#[derive(Queryable, Serialize, Debug, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub address: String,
    pub zip: String,
}

#[derive(Insertable, AsChangeset, Deserialize, Debug)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub username: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub address: String,
    pub zip: String,
}

impl Schema for NewUser {
    const ENTITY: &'static str = "User";
    const FIELDS: &'static [Field] = &[
        Field::required("username", FieldKind::String),
        Field::required("phone", FieldKind::String),
        Field::required("email", FieldKind::String),
        Field::required("password", FieldKind::String),
        Field::required("address", FieldKind::String),
        Field::required("zip", FieldKind::String),
    ];
}

diesel_repository!(Users, users, User, NewUser, "User");
