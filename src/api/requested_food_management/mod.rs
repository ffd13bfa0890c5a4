pub(crate) mod models;

use chrono::Utc;
use rocket::serde::json::Json;
use rocket::Route;

use crate::api::{self, Message};
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::payload::Payload;

use models::{RequestedFood, RequestedFoodIn, RequestedFoods};

#[post("/", data = "<food>")]
pub(crate) async fn create_requested_food(
    food: Payload<RequestedFoodIn>,
    conn: DbConn,
) -> Result<Json<RequestedFood>, ErrorResponse> {
    let new_food = food.into_inner().stamped(Utc::now());
    api::create::<RequestedFoods>(conn, new_food).await
}

#[get("/<id>")]
pub(crate) async fn get_requested_food(
    id: i32,
    conn: DbConn,
) -> Result<Json<RequestedFood>, ErrorResponse> {
    api::get::<RequestedFoods>(conn, id).await
}

#[get("/")]
pub(crate) async fn get_all_requested_food(
    conn: DbConn,
) -> Result<Json<Vec<RequestedFood>>, ErrorResponse> {
    api::list::<RequestedFoods>(conn).await
}

#[put("/<id>", data = "<food>")]
pub(crate) async fn update_requested_food(
    id: i32,
    food: Payload<RequestedFoodIn>,
    conn: DbConn,
) -> Result<Json<RequestedFood>, ErrorResponse> {
    let new_food = food.into_inner().stamped(Utc::now());
    api::update::<RequestedFoods>(conn, id, new_food).await
}

#[delete("/<id>")]
pub(crate) async fn delete_requested_food(
    id: i32,
    conn: DbConn,
) -> Result<Json<Message>, ErrorResponse> {
    api::delete::<RequestedFoods>(conn, id).await
}

pub(crate) fn routes() -> Vec<Route> {
    routes![
        create_requested_food,
        get_requested_food,
        get_all_requested_food,
        update_requested_food,
        delete_requested_food
    ]
}
