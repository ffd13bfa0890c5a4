pub(crate) mod models;

use rocket::serde::json::Json;
use rocket::Route;

use crate::api::{self, Message};
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::payload::Payload;

use models::{NewSupplier, Supplier, Suppliers};

#[post("/", data = "<supplier>")]
pub(crate) async fn create_supplier(
    supplier: Payload<NewSupplier>,
    conn: DbConn,
) -> Result<Json<Supplier>, ErrorResponse> {
    api::create::<Suppliers>(conn, supplier.into_inner()).await
}

#[get("/<id>")]
pub(crate) async fn get_supplier(id: i32, conn: DbConn) -> Result<Json<Supplier>, ErrorResponse> {
    api::get::<Suppliers>(conn, id).await
}

#[get("/")]
pub(crate) async fn get_suppliers(conn: DbConn) -> Result<Json<Vec<Supplier>>, ErrorResponse> {
    api::list::<Suppliers>(conn).await
}

#[put("/<id>", data = "<supplier>")]
pub(crate) async fn update_supplier(
    id: i32,
    supplier: Payload<NewSupplier>,
    conn: DbConn,
) -> Result<Json<Supplier>, ErrorResponse> {
    api::update::<Suppliers>(conn, id, supplier.into_inner()).await
}

#[delete("/<id>")]
pub(crate) async fn delete_supplier(
    id: i32,
    conn: DbConn,
) -> Result<Json<Message>, ErrorResponse> {
    api::delete::<Suppliers>(conn, id).await
}

pub(crate) fn routes() -> Vec<Route> {
    routes![
        create_supplier,
        get_supplier,
        get_suppliers,
        update_supplier,
        delete_supplier
    ]
}
