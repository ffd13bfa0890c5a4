use std::fmt;
use std::str::FromStr;

use diesel::prelude::*;
use diesel::PgConnection;
use rocket::request::FromParam;

use crate::error::StoreError;
use crate::repository::StoreResult;
use crate::schema;

/// The only tables `clear_table` may touch. Caller input is matched against
/// this list and never reaches SQL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableName {
    Users,
    Consumers,
    Suppliers,
    CategoryTypes,
    RequestedFood,
    SurplusFood,
    Matching,
}

impl TableName {
    pub const ALL: [TableName; 7] = [
        TableName::Users,
        TableName::Consumers,
        TableName::Suppliers,
        TableName::CategoryTypes,
        TableName::RequestedFood,
        TableName::SurplusFood,
        TableName::Matching,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TableName::Users => "users",
            TableName::Consumers => "consumers",
            TableName::Suppliers => "suppliers",
            TableName::CategoryTypes => "category_types",
            TableName::RequestedFood => "requested_food",
            TableName::SurplusFood => "surplus_food",
            TableName::Matching => "matching",
        }
    }

    /// Deletes every row. Child tables lose their rows through the cascade.
    pub(crate) fn clear(self, c: &mut PgConnection) -> StoreResult<usize> {
        let deleted = match self {
            TableName::Users => diesel::delete(schema::users::table).execute(c),
            TableName::Consumers => diesel::delete(schema::consumers::table).execute(c),
            TableName::Suppliers => diesel::delete(schema::suppliers::table).execute(c),
            TableName::CategoryTypes => diesel::delete(schema::category_types::table).execute(c),
            TableName::RequestedFood => diesel::delete(schema::requested_food::table).execute(c),
            TableName::SurplusFood => diesel::delete(schema::surplus_food::table).execute(c),
            TableName::Matching => diesel::delete(schema::matching::table).execute(c),
        };

        deleted.map_err(|err| StoreError::from_diesel("Table", err))
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTable(pub String);

impl fmt::Display for UnknownTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let allowed = TableName::ALL.map(TableName::as_str).join(", ");
        write!(f, "unknown table '{}', expected one of: {}", self.0, allowed)
    }
}

impl FromStr for TableName {
    type Err = UnknownTable;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TableName::ALL
            .into_iter()
            .find(|table| table.as_str() == s)
            .ok_or_else(|| UnknownTable(s.to_string()))
    }
}

impl<'a> FromParam<'a> for TableName {
    type Error = UnknownTable;

    fn from_param(param: &'a str) -> Result<Self, Self::Error> {
        param.parse()
    }
}
