//! Destructive administration. Both endpoints are irreversible and answer
//! 403 unless `ALLOW_DESTRUCTIVE_ADMIN` is set.

pub(crate) mod admin;
pub(crate) mod clear_table;
pub(crate) mod delete_tables;
pub(crate) mod models;

use rocket::Route;

pub(crate) fn routes() -> Vec<Route> {
    routes![clear_table::clear_table, delete_tables::delete_tables]
}
