pub(crate) mod models;

use rocket::serde::json::Json;
use rocket::Route;

use crate::api::{self, Message};
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::payload::Payload;

use models::{CategoryType, CategoryTypes, NewCategoryType};

#[post("/", data = "<category>")]
pub(crate) async fn create_category_type(
    category: Payload<NewCategoryType>,
    conn: DbConn,
) -> Result<Json<CategoryType>, ErrorResponse> {
    api::create::<CategoryTypes>(conn, category.into_inner()).await
}

#[get("/<id>")]
pub(crate) async fn get_category_type(
    id: i32,
    conn: DbConn,
) -> Result<Json<CategoryType>, ErrorResponse> {
    api::get::<CategoryTypes>(conn, id).await
}

#[get("/")]
pub(crate) async fn get_category_types(
    conn: DbConn,
) -> Result<Json<Vec<CategoryType>>, ErrorResponse> {
    api::list::<CategoryTypes>(conn).await
}

#[put("/<id>", data = "<category>")]
pub(crate) async fn update_category_type(
    id: i32,
    category: Payload<NewCategoryType>,
    conn: DbConn,
) -> Result<Json<CategoryType>, ErrorResponse> {
    api::update::<CategoryTypes>(conn, id, category.into_inner()).await
}

#[delete("/<id>")]
pub(crate) async fn delete_category_type(
    id: i32,
    conn: DbConn,
) -> Result<Json<Message>, ErrorResponse> {
    api::delete::<CategoryTypes>(conn, id).await
}

pub(crate) fn routes() -> Vec<Route> {
    routes![
        create_category_type,
        get_category_type,
        get_category_types,
        update_category_type,
        delete_category_type
    ]
}
